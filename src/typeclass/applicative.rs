//! Applicative type class - combining independent effects.
//!
//! An [`Applicative`] capability can lift a plain value into its effect
//! ([`Applicative::pure`]) and combine two effectful values with a function
//! ([`Applicative::map2`]). [`Foldable::traverse_`](super::Foldable::traverse_)
//! uses exactly these two operations to run one effect per element.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! k.map2(k.pure(()), fa, |(), a| a) == fa
//! k.map2(fa, k.pure(()), |a, ()| a) == fa
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! k.map2(k.pure(a), k.pure(b), f) == k.pure(f(a, b))
//! ```
//!
//! ## Associativity
//!
//! Combining `fa`, `fb`, `fc` pairwise in either grouping yields the same
//! effect, up to re-nesting of the tuple.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::{Applicative, OptionKind, ResultKind};
//!
//! assert_eq!(OptionKind.pure(42), Some(42));
//! assert_eq!(OptionKind.map2(Some(1), Some(2), |x, y| x + y), Some(3));
//!
//! let results = ResultKind::<&str>::new();
//! assert_eq!(results.map2(Ok(1), Err("bad"), |x: i32, y: i32| x + y), Err("bad"));
//! ```

use super::higher::{IdentityKind, Kind, OptionKind, ResultKind};

/// A capability for lifting values into an effect and combining effects.
///
/// # Examples
///
/// ```rust
/// use foldkit::typeclass::{Applicative, OptionKind};
///
/// assert_eq!(OptionKind.product(Some(1), Some("one")), Some((1, "one")));
/// assert_eq!(OptionKind.product(Some(1), None::<&str>), None);
/// ```
pub trait Applicative: Kind {
    /// Lifts a plain value into the effect.
    fn pure<A>(&self, value: A) -> Self::Applied<A>;

    /// Combines two effectful values with a binary function.
    ///
    /// The effect of `first` comes before the effect of `second`; for
    /// failing effects this decides which failure is reported.
    fn map2<A, B, C, F>(
        &self,
        first: Self::Applied<A>,
        second: Self::Applied<B>,
        function: F,
    ) -> Self::Applied<C>
    where
        F: FnOnce(A, B) -> C;

    /// Pairs the values of two effects.
    fn product<A, B>(
        &self,
        first: Self::Applied<A>,
        second: Self::Applied<B>,
    ) -> Self::Applied<(A, B)> {
        self.map2::<A, B, (A, B), _>(first, second, |left, right| (left, right))
    }
}

/// All-or-nothing: any `None` makes the result `None`.
impl Applicative for OptionKind {
    fn pure<A>(&self, value: A) -> Option<A> {
        Some(value)
    }

    fn map2<A, B, C, F>(&self, first: Option<A>, second: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        first
            .zip(second)
            .map(|(left, right)| function(left, right))
    }
}

/// The first error wins.
impl<E> Applicative for ResultKind<E> {
    fn pure<A>(&self, value: A) -> Result<A, E> {
        Ok(value)
    }

    fn map2<A, B, C, F>(
        &self,
        first: Result<A, E>,
        second: Result<B, E>,
        function: F,
    ) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        match (first, second) {
            (Ok(left), Ok(right)) => Ok(function(left, right)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

/// No effect at all.
impl Applicative for IdentityKind {
    fn pure<A>(&self, value: A) -> A {
        value
    }

    fn map2<A, B, C, F>(&self, first: A, second: B, function: F) -> C
    where
        F: FnOnce(A, B) -> C,
    {
        function(first, second)
    }
}
