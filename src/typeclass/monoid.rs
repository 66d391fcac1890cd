//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T`:
//!
//! ```text
//! T::empty().combine(a) == a          // left identity
//! a.combine(T::empty()) == a          // right identity
//! ```
//!
//! plus associativity, inherited from [`Semigroup`].
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().combine(String::from("hello")), "hello");
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Product, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines all elements of an iterator, starting from [`Monoid::empty`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
    /// assert_eq!(Sum::<i32>::combine_all(Vec::new()), Sum(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

/// `Sum` takes its zero from `Default`.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

macro_rules! product_monoid {
    ($one:literal => $($numeric:ty),+) => {
        $(
            impl Monoid for Product<$numeric> {
                fn empty() -> Self {
                    Self($one)
                }
            }
        )+
    };
}

product_monoid!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
product_monoid!(1.0 => f32, f64);

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}
