#![cfg(feature = "typeclass")]
//! Property-based tests for `Foldable` laws.
//!
//! This module verifies that the shipped instances satisfy:
//!
//! - **Left/right agreement**: `fold`, `fold_left` and `fold_right` agree for
//!   any monoid
//! - **Override agreement**: specialised `fold_right`, `length` and `is_empty`
//!   agree with the definitions derived from `partial_fold`
//! - **find**: returns the first match in left-to-right order
//! - **Composition**: composed folds equal manual outer-then-inner folds

use foldkit::control::{Eval, Fold};
use foldkit::typeclass::{
    BTreeMapKind, Foldable, Kind, Monoid, OptionKind, Semigroup, Sum, VecDequeKind, VecKind,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, VecDeque};

/// Runs only the required operations, so every derived operation takes the
/// generic path.
struct Generic;

impl Kind for Generic {
    type Applied<A> = Vec<A>;
}

impl Foldable for Generic {
    fn fold_left<A, B, F>(&self, structure: Vec<A>, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        structure.into_iter().fold(init, function)
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: Vec<A>, step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        Fold::iterate_right(structure, step)
    }
}

// =============================================================================
// Left/Right Agreement
// =============================================================================

proptest! {
    /// Concatenation: fold == fold_left == fold_right
    #[test]
    fn prop_string_left_right_agreement(words in prop::collection::vec(".{0,4}", 0..20)) {
        let via_monoid = VecKind.fold(words.clone());
        let via_left = VecKind.fold_left(words.clone(), String::empty(), Semigroup::combine);
        let via_right = VecKind.fold_right(words, String::empty(), Semigroup::combine);

        prop_assert_eq!(&via_left, &via_monoid);
        prop_assert_eq!(&via_right, &via_monoid);
    }
}

proptest! {
    /// Vec concatenation keeps element order in both directions
    #[test]
    fn prop_vec_monoid_left_right_agreement(
        parts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..5), 0..10)
    ) {
        let flattened: Vec<u8> = parts.iter().flatten().copied().collect();
        prop_assert_eq!(VecKind.fold(parts.clone()), flattened.clone());
        prop_assert_eq!(
            VecKind.fold_right(parts, Vec::empty(), Semigroup::combine),
            flattened
        );
    }
}

proptest! {
    /// Sum monoid over a deque
    #[test]
    fn prop_sum_left_right_agreement(values in prop::collection::vec(-1000_i64..1000, 0..50)) {
        let deque: VecDeque<Sum<i64>> = values.iter().copied().map(Sum).collect();
        let via_left = VecDequeKind.fold_left(deque.clone(), Sum::empty(), Semigroup::combine);
        let via_right = VecDequeKind.fold_right(deque.clone(), Sum::empty(), Semigroup::combine);

        prop_assert_eq!(via_left, VecDequeKind.fold(deque));
        prop_assert_eq!(via_right, Sum(values.iter().sum()));
    }
}

// =============================================================================
// Override Agreement
// =============================================================================

proptest! {
    /// Specialised Vec operations agree with the generic ones
    #[test]
    fn prop_vec_overrides_agree_with_generic(
        values in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let render = |element: i32, rest: String| format!("{element},{rest}");

        prop_assert_eq!(
            VecKind.fold_right(values.clone(), String::new(), render),
            Generic.fold_right(values.clone(), String::new(), render)
        );
        prop_assert_eq!(VecKind.length(values.clone()), Generic.length(values.clone()));
        prop_assert_eq!(VecKind.is_empty(values.clone()), Generic.is_empty(values.clone()));
        prop_assert_eq!(VecKind.to_vec(values.clone()), Generic.to_vec(values));
    }
}

proptest! {
    /// BTreeMap fold_right override agrees with the lazy right fold
    #[test]
    fn prop_btree_map_fold_right_agrees_with_fold_lazy(
        map in prop::collection::btree_map(any::<u8>(), any::<i16>(), 0..30)
    ) {
        let kind = BTreeMapKind::<u8>::new();
        let strict = kind.fold_right(map.clone(), Vec::new(), |value, mut rest: Vec<i16>| {
            rest.push(value);
            rest
        });
        let lazy = kind
            .fold_lazy(map, Eval::eager(Vec::new()), |value| {
                Fold::continue_with(move |mut rest: Vec<i16>| {
                    rest.push(value);
                    rest
                })
            })
            .into_value();

        prop_assert_eq!(strict, lazy);
    }
}

// =============================================================================
// find
// =============================================================================

proptest! {
    /// find agrees with Iterator::find and never looks past the match
    #[test]
    fn prop_find_is_first_match(
        values in prop::collection::vec(0_u8..20, 0..40),
        target in 0_u8..20
    ) {
        let mut examined = 0;
        let found = VecKind.find(values.clone(), |element| {
            examined += 1;
            *element == target
        });

        prop_assert_eq!(found, values.iter().copied().find(|element| *element == target));
        let expected_examined = values
            .iter()
            .position(|element| *element == target)
            .map_or(values.len(), |index| index + 1);
        prop_assert_eq!(examined, expected_examined);
    }
}

proptest! {
    /// exists and for_all are duals
    #[test]
    fn prop_exists_for_all_duality(values in prop::collection::vec(any::<i8>(), 0..30)) {
        let exists_negative = Generic.exists(values.clone(), |element| *element < 0);
        let all_non_negative = Generic.for_all(values, |element| *element >= 0);
        prop_assert_eq!(exists_negative, !all_non_negative);
    }
}

// =============================================================================
// Composition
// =============================================================================

proptest! {
    /// Composed fold_left equals outer-then-inner folding
    #[test]
    fn prop_composed_fold_left_equivalence(
        nested in prop::collection::vec(prop::option::of(any::<i32>()), 0..30)
    ) {
        let combine = |accumulator: Vec<i32>, element: i32| {
            let mut accumulator = accumulator;
            accumulator.push(element);
            accumulator
        };

        let kind = VecKind.compose(OptionKind);
        let composed = kind.fold_left(nested.clone(), Vec::new(), combine);
        let manual = VecKind.fold_left(nested, Vec::new(), |accumulator, optional| {
            OptionKind.fold_left(optional, accumulator, combine)
        });

        prop_assert_eq!(composed, manual);
    }
}

proptest! {
    /// Composed right and left folds agree for a monoid
    #[test]
    fn prop_composed_left_right_agreement(
        nested in prop::collection::btree_map(
            any::<u8>(),
            prop::collection::vec(".{0,3}", 0..4),
            0..10,
        )
    ) {
        let kind = BTreeMapKind::<u8>::new().compose(VecKind);
        let via_left = kind.fold_left(nested.clone(), String::new(), Semigroup::combine);
        let via_right = kind.fold_right(nested.clone(), String::new(), Semigroup::combine);
        let expected: String = nested.into_values().flatten().collect();

        prop_assert_eq!(&via_left, &expected);
        prop_assert_eq!(&via_right, &expected);
    }
}

#[test]
fn derived_operations_on_minimal_instances() {
    let map: BTreeMap<u8, u8> = BTreeMap::new();
    assert!(BTreeMapKind::new().is_empty(map));
    assert_eq!(Generic.fold(vec![Sum(1), Sum(2)]), Sum(3));
}
