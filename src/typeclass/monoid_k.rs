//! `SemigroupK` and `MonoidK` - monoids that hold for every element type.
//!
//! A [`MonoidK`] is defined once for a type constructor and works for every
//! element type `A` without any bound on `A`: `Vec<A>` concatenates whatever
//! `A` is, `Option<A>` keeps the first `Some`. This is what
//! [`Foldable::fold_k`](super::Foldable::fold_k) folds with.
//!
//! # Laws
//!
//! For every `A` and all `x`, `y`, `z` of type `Applied<A>`:
//!
//! ```text
//! k.combine_k(k.combine_k(x, y), z) == k.combine_k(x, k.combine_k(y, z))
//! k.combine_k(k.empty_k(), x) == x == k.combine_k(x, k.empty_k())
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::{MonoidK, OptionKind, SemigroupK, VecKind};
//!
//! assert_eq!(VecKind.combine_k(vec!['a'], vec!['b']), vec!['a', 'b']);
//! assert_eq!(OptionKind.combine_k(None, Some(2)), Some(2));
//! assert_eq!(OptionKind.empty_k::<u8>(), None);
//! ```

use std::collections::VecDeque;

use super::higher::{Kind, OptionKind, VecDequeKind, VecKind};

/// An associative combination defined uniformly for all element types.
pub trait SemigroupK: Kind {
    /// Combines two structures. Must be associative.
    fn combine_k<A>(&self, first: Self::Applied<A>, second: Self::Applied<A>) -> Self::Applied<A>;
}

/// A [`SemigroupK`] with an identity structure for every element type.
pub trait MonoidK: SemigroupK {
    /// Returns the identity structure.
    fn empty_k<A>(&self) -> Self::Applied<A>;

    /// Combines all structures of an iterator, starting from [`MonoidK::empty_k`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{MonoidK, VecKind};
    ///
    /// let flat = VecKind.combine_all_k(vec![vec![1], vec![2, 3]]);
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    fn combine_all_k<A, I>(&self, iterator: I) -> Self::Applied<A>
    where
        I: IntoIterator<Item = Self::Applied<A>>,
    {
        iterator
            .into_iter()
            .fold(self.empty_k(), |accumulator, element| {
                self.combine_k(accumulator, element)
            })
    }
}

/// Concatenation.
impl SemigroupK for VecKind {
    fn combine_k<A>(&self, mut first: Vec<A>, mut second: Vec<A>) -> Vec<A> {
        first.append(&mut second);
        first
    }
}

impl MonoidK for VecKind {
    fn empty_k<A>(&self) -> Vec<A> {
        Vec::new()
    }
}

/// Concatenation.
impl SemigroupK for VecDequeKind {
    fn combine_k<A>(&self, mut first: VecDeque<A>, mut second: VecDeque<A>) -> VecDeque<A> {
        first.append(&mut second);
        first
    }
}

impl MonoidK for VecDequeKind {
    fn empty_k<A>(&self) -> VecDeque<A> {
        VecDeque::new()
    }
}

/// First `Some` wins; `A` needs no `Semigroup`.
impl SemigroupK for OptionKind {
    fn combine_k<A>(&self, first: Option<A>, second: Option<A>) -> Option<A> {
        first.or(second)
    }
}

impl MonoidK for OptionKind {
    fn empty_k<A>(&self) -> Option<A> {
        None
    }
}
