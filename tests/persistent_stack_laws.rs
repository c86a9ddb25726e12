//! Property-based tests for PersistentStack.
//!
//! These tests verify the stack laws and the algebraic laws of the type
//! classes it implements.

use fpds::persistent::PersistentStack;
use fpds::typeclass::{Foldable, FunctorMut, Monoid, Semigroup};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating PersistentStack
// =============================================================================

fn stack_strategy(max_size: usize) -> impl Strategy<Value = PersistentStack<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|vector| vector.into_iter().collect())
}

fn small_stack() -> impl Strategy<Value = PersistentStack<i32>> {
    stack_strategy(20)
}

fn non_empty_stack() -> impl Strategy<Value = PersistentStack<i32>> {
    stack_strategy(20).prop_filter("non-empty", |stack| !stack.is_empty())
}

proptest! {
    // =========================================================================
    // Stack Laws
    // =========================================================================

    #[test]
    fn prop_pop_after_push_returns_value_and_original(stack in small_stack(), value: i32) {
        let pushed = stack.push(value);
        let (top, rest) = pushed.pop().unwrap();
        prop_assert_eq!(*top, value);
        prop_assert!(rest.ptr_eq(&stack));
        prop_assert_eq!(rest, stack);
    }

    #[test]
    fn prop_push_increases_len_by_one(stack in small_stack(), value: i32) {
        prop_assert_eq!(stack.push(value).len(), stack.len() + 1);
        let pushed = stack.push(value);
        prop_assert_eq!(pushed.peek(), Ok(&value));
    }

    #[test]
    fn prop_pop_decreases_len_by_one(stack in non_empty_stack()) {
        let (_, rest) = stack.pop().unwrap();
        prop_assert_eq!(rest.len(), stack.len() - 1);
    }

    #[test]
    fn prop_len_matches_iter_count(stack in small_stack()) {
        prop_assert_eq!(stack.len(), stack.iter().count());
        prop_assert_eq!(stack.iter().len(), stack.len());
    }

    #[test]
    fn prop_collect_puts_last_on_top(values in prop::collection::vec(any::<i32>(), 1..20)) {
        let stack: PersistentStack<i32> = values.iter().copied().collect();
        prop_assert_eq!(stack.peek(), Ok(values.last().unwrap()));
    }

    #[test]
    fn prop_reverse_twice_is_identity(stack in small_stack()) {
        prop_assert_eq!(stack.reverse().reverse(), stack);
    }

    #[test]
    fn prop_branches_are_independent(stack in small_stack(), left: i32, right: i32) {
        let left_branch = stack.push(left);
        let right_branch = stack.push(right);
        prop_assert_eq!(left_branch.peek(), Ok(&left));
        prop_assert_eq!(right_branch.peek(), Ok(&right));
        prop_assert_eq!(left_branch.len(), right_branch.len());
    }

    // =========================================================================
    // Functor Laws
    // =========================================================================

    #[test]
    fn prop_functor_identity(stack in small_stack()) {
        prop_assert_eq!(stack.clone().fmap_mut(|x| x), stack);
    }

    #[test]
    fn prop_functor_composition(stack in small_stack()) {
        let function1 = |x: i32| x.wrapping_sub(7);
        let function2 = |x: i32| x.rotate_left(3);
        let composed = stack.clone().fmap_mut(|x| function2(function1(x)));
        let chained = stack.fmap_mut(function1).fmap_mut(function2);
        prop_assert_eq!(composed, chained);
    }

    // =========================================================================
    // Semigroup / Monoid Laws
    // =========================================================================

    #[test]
    fn prop_semigroup_associativity(a in small_stack(), b in small_stack(), c in small_stack()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monoid_identity(stack in small_stack()) {
        prop_assert_eq!(PersistentStack::empty().combine(stack.clone()), stack.clone());
        prop_assert_eq!(stack.clone().combine(PersistentStack::empty()), stack);
    }

    // =========================================================================
    // Foldable
    // =========================================================================

    #[test]
    fn prop_fold_right_visits_bottom_first(stack in small_stack()) {
        let visited = stack.clone().fold_right(Vec::new(), |x, mut acc| {
            acc.push(x);
            acc
        });
        let mut expected: Vec<i32> = stack.iter().copied().collect();
        expected.reverse();
        prop_assert_eq!(visited, expected);
    }
}
