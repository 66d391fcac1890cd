#![cfg(feature = "control")]
//! Property-based tests for suspended-value laws.
//!
//! This module verifies that `Eval` and `SharedEval` satisfy:
//!
//! - **Idempotence**: forcing returns the same value every time
//! - **Memoization**: the producer runs at most once
//! - **Eager/deferred equivalence**: both variants observe the same value
//! - **Map laws**: identity and composition

use foldkit::control::{Eval, SharedEval};
use proptest::prelude::*;
use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Idempotence and Memoization
// =============================================================================

proptest! {
    /// Forcing any number of times runs the producer once and yields one value
    #[test]
    fn prop_eval_memoization(value in any::<String>(), forces in 1_usize..10) {
        let calls = Cell::new(0);
        let eval = Eval::deferred(|| {
            calls.set(calls.get() + 1);
            value.clone()
        });

        for _ in 0..forces {
            prop_assert_eq!(&*eval.force(), &value);
        }
        prop_assert_eq!(calls.get(), 1);
    }
}

proptest! {
    /// The shared holder has the same memoization contract
    #[test]
    fn prop_shared_eval_memoization(value in any::<i64>(), forces in 1_usize..10) {
        let calls = AtomicUsize::new(0);
        let shared = SharedEval::deferred(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            value
        });

        for _ in 0..forces {
            prop_assert_eq!(*shared.force(), value);
        }
        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

// =============================================================================
// Eager/Deferred Equivalence
// =============================================================================

proptest! {
    /// An eager value and a deferred producer of it are indistinguishable once forced
    #[test]
    fn prop_eager_deferred_equivalence(value in any::<Vec<u16>>()) {
        let eager = Eval::eager(value.clone());
        let deferred = Eval::deferred(|| value.clone());

        prop_assert_eq!(&*eager.force(), &*deferred.force());
        prop_assert!(eager.is_evaluated() && deferred.is_evaluated());
        prop_assert_eq!(eager.into_value(), deferred.into_value());
    }
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Identity: mapping the identity function changes nothing
    #[test]
    fn prop_map_identity(value in any::<i32>()) {
        let mapped = Eval::deferred(move || value).map(|inner| inner);
        prop_assert_eq!(mapped.into_value(), value);
    }
}

proptest! {
    /// Composition: mapping twice equals mapping the composed function
    #[test]
    fn prop_map_composition(value in any::<i32>()) {
        let double = |inner: i32| inner.wrapping_mul(2);
        let describe = |inner: i32| inner.to_string();

        let stepwise = Eval::eager(value).map(double).map(describe);
        let composed = Eval::eager(value).map(move |inner| describe(double(inner)));

        prop_assert_eq!(stepwise.into_value(), composed.into_value());
    }
}
