#![cfg(feature = "control")]
//! Unit tests for the thread-safe `SharedEval`.
//!
//! Tests cover:
//! - Memoization across threads (the producer runs at most once)
//! - Every thread observing the same value
//! - Poisoning observed from other threads

use foldkit::control::{EvalError, SharedEval};
use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

// =============================================================================
// Single Thread
// =============================================================================

#[rstest]
fn deferred_waits_for_force() {
    let calls = AtomicUsize::new(0);
    let shared = SharedEval::deferred(|| {
        calls.fetch_add(1, Ordering::SeqCst);
        "value".to_string()
    });

    assert!(!shared.is_evaluated());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(shared.force(), "value");
    assert!(shared.is_evaluated());
}

#[rstest]
fn from_is_eager() {
    let shared: SharedEval<'_, i32> = 5.into();
    assert!(shared.is_evaluated());
    assert_eq!(shared.into_value(), 5);
}

#[rstest]
fn debug_shows_state() {
    let shared = SharedEval::deferred(|| 8);
    assert_eq!(format!("{shared:?}"), "SharedEval(\"<deferred>\")");
    shared.force();
    assert_eq!(format!("{shared:?}"), "SharedEval(8)");
}

// =============================================================================
// Concurrency
// =============================================================================

#[rstest]
#[case(2)]
#[case(8)]
#[case(32)]
fn concurrent_force_runs_producer_once(#[case] thread_count: usize) {
    let calls = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(thread_count));
    let shared = Arc::new(SharedEval::deferred({
        let calls = Arc::clone(&calls);
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            thread::yield_now();
            vec![1, 2, 3]
        }
    }));

    let handles: Vec<_> = (0..thread_count)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                shared.force().clone()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, 2, 3]);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn scoped_threads_may_borrow_from_the_stack() {
    let base = 40;
    let shared = SharedEval::deferred(|| base + 2);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(*shared.force(), 42));
        }
    });
}

// =============================================================================
// Failure
// =============================================================================

#[rstest]
fn poisoning_is_observed_from_other_threads() {
    let shared: Arc<SharedEval<'static, i32>> =
        Arc::new(SharedEval::deferred(|| panic!("producer failed")));

    let outcome = catch_unwind(AssertUnwindSafe(|| *shared.force()));
    assert!(outcome.is_err());
    assert!(shared.is_poisoned());

    let observer = Arc::clone(&shared);
    let observed = thread::spawn(move || observer.try_force().copied())
        .join()
        .unwrap();
    assert_eq!(observed, Err(EvalError::Poisoned));
}

#[rstest]
fn poisoned_into_value_reports_error() {
    let shared: SharedEval<'_, u8> = SharedEval::deferred(|| panic!("boom"));
    let _ = catch_unwind(AssertUnwindSafe(|| *shared.force()));
    assert_eq!(shared.try_into_value(), Err(EvalError::Poisoned));
}
