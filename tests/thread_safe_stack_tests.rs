//! Integration tests for PersistentStack with the `arc` feature enabled.
//!
//! Stacks are shared across threads; every thread builds its own versions
//! on top of the shared nodes.

#![cfg(feature = "arc")]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

use fpds::persistent::PersistentStack;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_stack_cross_thread_structural_sharing() {
    let original: Arc<PersistentStack<i32>> = Arc::new((1..=3).collect());

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let stack_clone = Arc::clone(&original);
            thread::spawn(move || {
                let extended = stack_clone.push(index * 10);
                assert_eq!(extended.peek(), Ok(&(index * 10)));
                assert_eq!(extended.len(), 4);
                assert_eq!(stack_clone.len(), 3);
                extended
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (index, stack) in results.iter().enumerate() {
        assert_eq!(stack.peek(), Ok(&((index * 10) as i32)));
        assert!(stack.pop().unwrap().1.ptr_eq(&original));
    }
    assert_eq!(original.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[rstest]
fn test_stack_moved_into_thread_without_arc_wrapper() {
    let stack: PersistentStack<String> = ["a", "b"].into_iter().map(String::from).collect();
    let shared = stack.clone();

    let handle = thread::spawn(move || {
        let (top, rest) = shared.pop().unwrap();
        (top.clone(), rest.push("c".to_string()))
    });
    let (top, rebuilt) = handle.join().expect("Thread panicked");

    assert_eq!(top, "b");
    assert_eq!(rebuilt.to_string(), "|| a <- c ><");
    assert_eq!(stack.len(), 2);
}

#[rstest]
fn test_concurrent_drops_of_shared_chain() {
    let base: PersistentStack<usize> = (0..10_000).collect();

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let branch = base.push(index);
            thread::spawn(move || {
                let longer = branch.push_all(0..1_000);
                longer.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), 11_001);
    }
    assert_eq!(base.len(), 10_000);
}
