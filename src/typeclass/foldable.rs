//! Foldable type class - reducing structures to a summary value.
//!
//! A [`Foldable`] capability knows how to walk one kind of structure. Only
//! two operations are required:
//!
//! - [`Foldable::fold_left`]: a strict left-to-right fold
//! - [`Foldable::partial_fold`]: the structure's lazy right-fold step, built
//!   from one [`Fold`] per element
//!
//! Everything else is derived from these two. Operations derived from
//! `partial_fold` ([`find`](Foldable::find), [`exists`](Foldable::exists),
//! [`for_all`](Foldable::for_all), [`is_empty`](Foldable::is_empty)) stop
//! examining elements as soon as the answer is known.
//!
//! # Laws
//!
//! ## Left/right agreement
//!
//! For every monoid `M` and structure `s`:
//!
//! ```text
//! k.fold(s) == k.fold_left(s, M::empty(), combine) == k.fold_right(s, M::empty(), combine)
//! ```
//!
//! ## Short-circuit
//!
//! Once a step returns [`Fold::Return`], no later element is examined.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::{Foldable, OptionKind, VecKind};
//!
//! let sum = VecKind.fold_left(vec![1, 2, 3, 4, 5], 0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! assert_eq!(OptionKind.fold_left(Some(10), 5, |accumulator, element| accumulator + element), 15);
//! assert_eq!(OptionKind.fold_left(None, 5, |accumulator, element: i32| accumulator + element), 5);
//!
//! let first_even = VecKind.find(vec![1, 3, 4, 5, 6], |element| element % 2 == 0);
//! assert_eq!(first_even, Some(4));
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use super::applicative::Applicative;
use super::composed::Composed;
use super::higher::{
    BTreeMapKind, IdentityKind, Kind, OptionKind, ResultKind, VecDequeKind, VecKind,
};
use super::monoid::Monoid;
use super::monoid_k::MonoidK;
use super::semigroup::Semigroup;
use crate::control::{Eval, Fold};

/// A capability for folding the structures of one [`Kind`].
///
/// # Required Methods
///
/// - `fold_left`: strict left-associative fold
/// - `partial_fold`: the lazy right-fold step of a whole structure
///
/// # Examples
///
/// ```rust
/// use foldkit::typeclass::{Foldable, Sum, VecKind};
///
/// let values = vec![1, 2, 3, 4, 5];
/// let sum: Sum<i32> = VecKind.fold_map(values, Sum);
/// assert_eq!(sum, Sum(15));
/// ```
pub trait Foldable: Kind {
    /// Folds the structure from left to right, calling `function` once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// let digits = VecKind.fold_left(vec![1, 2, 3], String::new(), |mut text, digit| {
    ///     text.push_str(&digit.to_string());
    ///     text
    /// });
    /// assert_eq!(digits, "123");
    /// ```
    fn fold_left<A, B, F>(&self, structure: Self::Applied<A>, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B;

    /// Builds the right-fold step of the whole structure.
    ///
    /// `step` is applied to the elements in left-to-right order. Examining an
    /// element never requires the folded value of the elements after it, and
    /// once `step` returns [`Fold::Return`] it is not called again.
    ///
    /// Elements after the first non-`Pass` step may be examined only when the
    /// returned step is completed, which is why the step can borrow `self`
    /// and own `step` for `'a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::{Eval, Fold};
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// let step = VecKind.partial_fold(vec![1, 2, 3], |element| {
    ///     Fold::continue_with(move |rest: i32| element + rest)
    /// });
    /// assert_eq!(step.complete(Eval::eager(0)), 6);
    /// ```
    fn partial_fold<'a, A, B, F>(&'a self, structure: Self::Applied<A>, step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a;

    /// Lazy right fold: the result is a suspended value.
    ///
    /// Building it examines elements only up to the first one whose step is
    /// not `Pass`. The remaining elements are examined, and the continuations
    /// combined, only when the result is forced. A leading `Return` never
    /// forces `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::{Eval, Fold};
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// // The seed is never needed: the fold stops at 2.
    /// let seed = Eval::deferred(|| -> Option<i32> { unreachable!() });
    /// let found = VecKind.fold_lazy(vec![1, 2, 3], seed, |element| {
    ///     if element == 2 { Fold::Return(Some(element)) } else { Fold::Pass }
    /// });
    /// assert_eq!(found.into_value(), Some(2));
    /// ```
    fn fold_lazy<'a, A, B, F>(
        &'a self,
        structure: Self::Applied<A>,
        init: Eval<'a, B>,
        step: F,
    ) -> Eval<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        self.partial_fold::<A, B, F>(structure, step).complete_lazy(init)
    }

    /// Folds the structure from right to left: `f(a1, f(a2, ... f(an, init)))`.
    ///
    /// Stack depth does not grow with the size of the structure for any
    /// instance whose `partial_fold` is built with [`Fold::iterate_right`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// let result = VecKind.fold_right(vec![1, 2, 3], String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<A, B, F>(&self, structure: Self::Applied<A>, init: B, function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        let function = RefCell::new(function);
        let function = &function;
        self.fold_lazy::<A, B, _>(structure, Eval::eager(init), move |element| {
            Fold::continue_with(move |rest| (&mut *function.borrow_mut())(element, rest))
        })
        .into_value()
    }

    /// Combines all elements with their [`Monoid`].
    ///
    /// An empty structure folds to [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// let words = vec!["fold".to_string(), "kit".to_string()];
    /// assert_eq!(VecKind.fold(words), "foldkit");
    /// assert_eq!(VecKind.fold(Vec::<String>::new()), "");
    /// ```
    fn fold<A>(&self, structure: Self::Applied<A>) -> A
    where
        A: Monoid,
    {
        self.fold_left::<A, A, _>(structure, A::empty(), Semigroup::combine)
    }

    /// Maps every element into a [`Monoid`] and combines the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, Product, VecKind};
    ///
    /// assert_eq!(VecKind.fold_map(vec![1, 2, 3, 4], Product), Product(24));
    /// ```
    fn fold_map<A, M, F>(&self, structure: Self::Applied<A>, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        self.fold_left::<A, M, _>(structure, M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns the first element, in left-to-right order, satisfying `predicate`.
    ///
    /// `predicate` is never called on any element after the match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, VecKind};
    ///
    /// assert_eq!(VecKind.find(vec![1, 2, 3, 4], |element| *element == 2), Some(2));
    /// assert_eq!(VecKind.find(Vec::<i32>::new(), |_| true), None);
    /// ```
    fn find<A, P>(&self, structure: Self::Applied<A>, mut predicate: P) -> Option<A>
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_lazy::<A, Option<A>, _>(structure, Eval::eager(None), |element| {
            if predicate(&element) {
                Fold::Return(Some(element))
            } else {
                Fold::Pass
            }
        })
        .into_value()
    }

    /// Returns `true` if any element satisfies `predicate`, stopping at the first one.
    fn exists<A, P>(&self, structure: Self::Applied<A>, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_lazy::<A, bool, _>(structure, Eval::eager(false), |element| {
            if predicate(&element) {
                Fold::Return(true)
            } else {
                Fold::Pass
            }
        })
        .into_value()
    }

    /// Returns `true` if every element satisfies `predicate`, stopping at the first failure.
    ///
    /// Vacuously `true` for an empty structure.
    fn for_all<A, P>(&self, structure: Self::Applied<A>, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.fold_lazy::<A, bool, _>(structure, Eval::eager(true), |element| {
            if predicate(&element) {
                Fold::Pass
            } else {
                Fold::Return(false)
            }
        })
        .into_value()
    }

    /// Returns whether the structure has no elements. Examines at most one.
    fn is_empty<A>(&self, structure: Self::Applied<A>) -> bool {
        self.fold_lazy::<A, bool, _>(structure, Eval::eager(true), |_| Fold::Return(false))
            .into_value()
    }

    /// Counts the elements.
    fn length<A>(&self, structure: Self::Applied<A>) -> usize {
        self.fold_left::<A, usize, _>(structure, 0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec`, in left-to-right order.
    fn to_vec<A>(&self, structure: Self::Applied<A>) -> Vec<A> {
        self.fold_left::<A, Vec<A>, _>(structure, Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Runs one effect per element, left to right, keeping only the combined effect.
    ///
    /// The combined effect is built with [`Applicative::map2`], so it fails
    /// exactly when the applicative says it fails. `function` is applied to
    /// every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, ResultKind, VecKind};
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let effect = ResultKind::new();
    ///
    /// assert_eq!(VecKind.traverse_(vec!["333", "444"], &effect, parse), Ok(()));
    /// assert!(VecKind.traverse_(vec!["333", "zzz"], &effect, parse).is_err());
    /// ```
    fn traverse_<A, B, G, F>(
        &self,
        structure: Self::Applied<A>,
        effect: &G,
        mut function: F,
    ) -> G::Applied<()>
    where
        G: Applicative,
        F: FnMut(A) -> G::Applied<B>,
    {
        self.fold_left::<A, G::Applied<()>, _>(
            structure,
            effect.pure(()),
            |accumulator, element| {
                effect.map2::<(), B, (), _>(accumulator, function(element), |(), _| ())
            },
        )
    }

    /// Runs a structure of effects in order, discarding their values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, OptionKind, VecKind};
    ///
    /// assert_eq!(VecKind.sequence_(vec![Some(1), Some(2)], &OptionKind), Some(()));
    /// assert_eq!(VecKind.sequence_(vec![Some(1), None], &OptionKind), None);
    /// ```
    fn sequence_<A, G>(&self, structure: Self::Applied<G::Applied<A>>, effect: &G) -> G::Applied<()>
    where
        G: Applicative,
    {
        self.traverse_::<G::Applied<A>, A, G, _>(structure, effect, |effectful| effectful)
    }

    /// Folds a structure of `G` structures with `G`'s [`MonoidK`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, OptionKind, VecKind};
    ///
    /// let flat = VecKind.fold_k(vec![vec![1, 2], vec![3, 4, 5]], &VecKind);
    /// assert_eq!(flat, vec![1, 2, 3, 4, 5]);
    ///
    /// let first = VecKind.fold_k(vec![None, Some('b'), Some('c')], &OptionKind);
    /// assert_eq!(first, Some('b'));
    /// ```
    fn fold_k<A, G>(&self, structure: Self::Applied<G::Applied<A>>, algebra: &G) -> G::Applied<A>
    where
        G: MonoidK,
    {
        self.fold_left::<G::Applied<A>, G::Applied<A>, _>(
            structure,
            algebra.empty_k::<A>(),
            |accumulator, element| algebra.combine_k::<A>(accumulator, element),
        )
    }

    /// Composes this capability with the capability of the nested structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Foldable, OptionKind, VecKind};
    ///
    /// let nested = vec![Some(1), None, Some(3)];
    /// let total = VecKind.compose(OptionKind).fold_left(nested, 0, |sum, element| sum + element);
    /// assert_eq!(total, 4);
    /// ```
    fn compose<G>(self, inner: G) -> Composed<Self, G>
    where
        Self: Sized,
        G: Foldable,
    {
        Composed::new(self, inner)
    }
}

impl Foldable for VecKind {
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

    fn fold_right<A, B, F>(&self, structure: Vec<A>, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        structure
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty<A>(&self, structure: Vec<A>) -> bool {
        structure.is_empty()
    }

    fn length<A>(&self, structure: Vec<A>) -> usize {
        structure.len()
    }

    fn to_vec<A>(&self, structure: Vec<A>) -> Vec<A> {
        structure
    }
}

impl Foldable for VecDequeKind {
    fn fold_left<A, B, F>(&self, structure: VecDeque<A>, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        structure.into_iter().fold(init, function)
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: VecDeque<A>, step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        Fold::iterate_right(structure, step)
    }

    fn fold_right<A, B, F>(&self, structure: VecDeque<A>, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        structure
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty<A>(&self, structure: VecDeque<A>) -> bool {
        structure.is_empty()
    }

    fn length<A>(&self, structure: VecDeque<A>) -> usize {
        structure.len()
    }
}

/// Folds the values in ascending key order.
impl<K> Foldable for BTreeMapKind<K> {
    fn fold_left<A, B, F>(&self, structure: BTreeMap<K, A>, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        structure.into_values().fold(init, function)
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: BTreeMap<K, A>, step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        Fold::iterate_right(structure.into_values(), step)
    }

    fn fold_right<A, B, F>(&self, structure: BTreeMap<K, A>, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        structure
            .into_values()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    fn is_empty<A>(&self, structure: BTreeMap<K, A>) -> bool {
        structure.is_empty()
    }

    fn length<A>(&self, structure: BTreeMap<K, A>) -> usize {
        structure.len()
    }
}

impl Foldable for OptionKind {
    fn fold_left<A, B, F>(&self, structure: Option<A>, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match structure {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: Option<A>, mut step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        structure.map_or(Fold::Pass, |element| step(element))
    }

    fn fold_right<A, B, F>(&self, structure: Option<A>, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match structure {
            Some(element) => function(element, init),
            None => init,
        }
    }
}

/// An `Err` holds no elements.
impl<E> Foldable for ResultKind<E> {
    fn fold_left<A, B, F>(&self, structure: Result<A, E>, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match structure {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: Result<A, E>, mut step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        match structure {
            Ok(element) => step(element),
            Err(_) => Fold::Pass,
        }
    }
}

/// The structure is the single element itself.
impl Foldable for IdentityKind {
    fn fold_left<A, B, F>(&self, structure: A, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, structure)
    }

    fn partial_fold<'a, A, B, F>(&'a self, structure: A, mut step: F) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        F: FnMut(A) -> Fold<'a, B> + 'a,
    {
        step(structure)
    }

    fn is_empty<A>(&self, _structure: A) -> bool {
        false
    }
}
