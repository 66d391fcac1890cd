//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::Semigroup;
//!
//! assert_eq!(String::from("fold").combine(String::from("kit")), "foldkit");
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! ```

use std::ops::{Add, Mul};

use super::wrappers::{All, Any, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// Folds only rely on associativity: grouping may change, element order never does.
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements of an iterator, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::Semigroup;
    ///
    /// let words = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(words), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
