//! Newtype wrappers selecting an algebraic operation.
//!
//! The same underlying type can be combined in more than one lawful way;
//! these wrappers pick one so that [`Semigroup`](super::Semigroup) and
//! [`Monoid`](super::Monoid) have a single instance each.
//!
//! - [`Sum`]: addition (identity: 0)
//! - [`Product`]: multiplication (identity: 1)
//! - [`All`]: conjunction (identity: `true`)
//! - [`Any`]: disjunction (identity: `false`)

/// The additive monoid.
///
/// # Examples
///
/// ```rust
/// use foldkit::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum(3).combine(Sum(5)), Sum(8));
/// assert_eq!(Sum::<i32>::empty(), Sum(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

/// The multiplicative monoid.
///
/// # Examples
///
/// ```rust
/// use foldkit::typeclass::{Monoid, Product, Semigroup};
///
/// assert_eq!(Product(3).combine(Product(5)), Product(15));
/// assert_eq!(Product::<i64>::empty(), Product(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

/// Boolean conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

/// Boolean disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

macro_rules! wrapper_accessors {
    ($name:ident < $param:ident >, $inner:ty) => {
        impl<$param> $name<$param> {
            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl<$param> From<$inner> for $name<$param> {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
    ($name:ident, $inner:ty) => {
        impl $name {
            /// Consumes the wrapper and returns the inner value.
            #[inline]
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }
    };
}

wrapper_accessors!(Sum<A>, A);
wrapper_accessors!(Product<A>, A);
wrapper_accessors!(All, bool);
wrapper_accessors!(Any, bool);
