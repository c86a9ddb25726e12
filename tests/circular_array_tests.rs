//! Unit tests for CircularArray.
//!
//! These tests exercise the buffer through its public API only, across
//! resizes in both directions.

use fpds::circular::CircularArray;
use fpds::typeclass::{Foldable, Monoid, Semigroup};
use fpds::{CollectionError, EmptyError, IndexError};
use rstest::rstest;
use std::collections::VecDeque;

fn contents<T: Clone>(array: &CircularArray<T>) -> Vec<T> {
    array.iter().cloned().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_is_empty() {
    let array: CircularArray<i32> = CircularArray::new();
    assert!(array.is_empty());
    assert_eq!(array.len(), 0);
    assert!(array.capacity() >= 1);
    assert_eq!(array.front(), None);
    assert_eq!(array.rear(), None);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(7)]
fn test_with_capacity_accepts_any_capacity(#[case] capacity: usize) {
    let mut array = CircularArray::with_capacity(capacity);
    for value in 0..20 {
        array.push_rear(value);
    }
    assert_eq!(contents(&array), (0..20).collect::<Vec<_>>());
}

// =============================================================================
// Push and pop
// =============================================================================

#[rstest]
fn test_capacity_two_scenario_keeps_all_values_in_order() {
    let mut array = CircularArray::with_capacity(2);
    for value in [10, 20, 30, 40] {
        array.push_rear(value);
    }
    assert_eq!(array.len(), 4);
    assert_eq!(contents(&array), vec![10, 20, 30, 40]);
    assert!(array.capacity() >= 4);
}

#[rstest]
fn test_mixed_ends_match_vecdeque() {
    let mut array = CircularArray::new();
    let mut reference = VecDeque::new();
    for step in 0..500_i32 {
        match step % 7 {
            0 | 3 => {
                array.push_front(step);
                reference.push_front(step);
            }
            1 | 4 | 5 => {
                array.push_rear(step);
                reference.push_back(step);
            }
            2 => assert_eq!(array.pop_front().ok(), reference.pop_front()),
            _ => assert_eq!(array.pop_rear().ok(), reference.pop_back()),
        }
        assert_eq!(array.len(), reference.len());
    }
    assert!(array.iter().eq(reference.iter()));
    for (index, expected) in reference.iter().enumerate() {
        assert_eq!(array.get(index), Ok(expected));
    }
}

#[rstest]
fn test_pop_on_empty_reports_the_operation() {
    let mut array: CircularArray<i32> = CircularArray::new();
    assert_eq!(
        array.pop_front(),
        Err(EmptyError {
            structure: "CircularArray",
            operation: "pop_front",
        })
    );
    assert_eq!(array.pop_rear().unwrap_err().operation, "pop_rear");
    assert!(array.is_empty());
}

#[rstest]
fn test_draining_shrinks_but_never_below_length() {
    let mut array: CircularArray<usize> = (0..1024).collect();
    let full = array.capacity();
    while array.len() > 3 {
        array.pop_front().unwrap();
        assert!(array.capacity() >= array.len());
    }
    assert!(array.capacity() < full);
    assert_eq!(contents(&array), vec![1021, 1022, 1023]);
}

// =============================================================================
// Indexed access
// =============================================================================

#[rstest]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn test_get_out_of_range(#[case] index: usize) {
    let array: CircularArray<i32> = vec![1, 2, 3].into();
    assert_eq!(
        array.get(index),
        Err(IndexError {
            structure: "CircularArray",
            operation: "get",
            index,
            length: 3,
        })
    );
}

#[rstest]
fn test_set_returns_previous_value_and_keeps_length() {
    let mut array: CircularArray<char> = "abc".chars().collect();
    assert_eq!(array.set(1, 'x'), Ok('b'));
    assert_eq!(array.len(), 3);
    assert_eq!(array.iter().collect::<String>(), "axc");
    assert!(array.set(3, 'y').is_err());
    assert_eq!(array.iter().collect::<String>(), "axc");
}

#[rstest]
fn test_errors_convert_into_collection_error() {
    fn swap_ends(array: &mut CircularArray<i32>) -> Result<(), CollectionError> {
        let front = array.pop_front()?;
        let rear = array.pop_rear()?;
        array.push_front(rear);
        array.push_rear(front);
        let _ = array.get(array.len())?;
        Ok(())
    }

    let mut array: CircularArray<i32> = vec![1, 2, 3].into();
    assert!(matches!(swap_ends(&mut array), Err(CollectionError::Index(_))));
    assert_eq!(contents(&array), vec![3, 2, 1]);

    let mut single: CircularArray<i32> = vec![1].into();
    assert!(matches!(swap_ends(&mut single), Err(CollectionError::Empty(_))));
}

// =============================================================================
// Bulk operations
// =============================================================================

#[rstest]
fn test_compact_and_reserve() {
    let mut array: CircularArray<i32> = CircularArray::with_capacity(100);
    array.extend([1, 2, 3]);
    array.compact();
    assert!(array.capacity() < 100);
    assert!((array.fraction_filled() - 3.0 / array.capacity() as f64).abs() < f64::EPSILON);
    array.reserve(50);
    assert!(array.capacity() >= 53);
    assert_eq!(contents(&array), vec![1, 2, 3]);
}

#[rstest]
fn test_reverse_returns_new_array() {
    let array: CircularArray<i32> = (1..=4).collect();
    let reversed = array.reverse();
    assert_eq!(contents(&reversed), vec![4, 3, 2, 1]);
    assert_eq!(contents(&array), vec![1, 2, 3, 4]);
}

#[rstest]
fn test_into_iter_from_both_ends() {
    let array: CircularArray<i32> = (1..=5).collect();
    let mut iterator = array.into_iter();
    assert_eq!(iterator.next(), Some(1));
    assert_eq!(iterator.next_back(), Some(5));
    assert_eq!(iterator.collect::<Vec<_>>(), vec![2, 3, 4]);
}

// =============================================================================
// Type classes
// =============================================================================

#[rstest]
fn test_fold_left_and_right_directions() {
    let array: CircularArray<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
    let left = array.clone().fold_left(String::new(), |acc, s| acc + &s);
    let right = array.fold_right(String::new(), |s, acc| acc + &s);
    assert_eq!(left, "abc");
    assert_eq!(right, "cba");
}

#[rstest]
fn test_reduce_seeds_from_the_end_element() {
    let array: CircularArray<i32> = vec![10, 2, 3].into();
    assert_eq!(array.reduce_left(|acc, n| acc - n), Some(5));
    assert_eq!(array.reduce_right(|acc, n| acc - n), Some(-9));
    assert_eq!(CircularArray::<i32>::new().reduce_left(|acc, n| acc + n), None);
}

#[rstest]
fn test_monoid_identity_and_combine_all() {
    let parts: Vec<CircularArray<i32>> = vec![vec![1, 2].into(), CircularArray::empty(), vec![3].into()];
    let combined = CircularArray::combine_all(parts);
    assert_eq!(contents(&combined), vec![1, 2, 3]);
    let single: CircularArray<i32> = vec![4].into();
    assert_eq!(single.clone().combine(CircularArray::empty()), single);
}

#[rstest]
fn test_display_and_debug() {
    let array: CircularArray<i32> = vec![1, 2, 3].into();
    assert_eq!(array.to_string(), "(|1, 2, 3|)");
    assert_eq!(format!("{array:?}"), "[1, 2, 3]");
    assert_eq!(CircularArray::<i32>::new().to_string(), "(||)");
}
