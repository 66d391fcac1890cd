//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Vec<_>` or `Option<_>` as type constructors
//! directly. A [`Kind`] is a small capability object that names one: its
//! generic associated type `Applied<A>` is the constructor applied to `A`.
//! Type classes such as [`Foldable`](super::Foldable) are then implemented on
//! the capability object rather than on the container, which lets
//! [`Composed`](super::Composed) implement the same trait for nested
//! structures by containment.
//!
//! # Example
//!
//! ```rust
//! use foldkit::typeclass::{Kind, OptionKind, VecKind};
//!
//! fn empty<K: Kind>(_kind: K) -> K::Applied<String>
//! where
//!     K::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty(OptionKind);
//! let nothing: Vec<String> = empty(VecKind);
//! assert_eq!(none, None);
//! assert!(nothing.is_empty());
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::marker::PhantomData;

/// A capability object standing for a type constructor.
///
/// # Laws
///
/// `Applied<A>` must mention `A` exactly as the container stores its
/// elements, so that type classes can reach every element.
pub trait Kind {
    /// The type constructor applied to `A`.
    ///
    /// For [`VecKind`], `Applied<i32>` is `Vec<i32>`.
    type Applied<A>;
}

/// The kind of `Vec<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecKind;

/// The kind of `VecDeque<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VecDequeKind;

/// The kind of `Option<_>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OptionKind;

/// The identity kind: `Applied<A>` is `A` itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityKind;

/// The kind of `Result<_, E>` for a fixed error type `E`.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

/// The kind of `BTreeMap<K, _>` for a fixed key type `K`; elements are the values.
pub struct BTreeMapKind<K>(PhantomData<fn() -> K>);

impl Kind for VecKind {
    type Applied<A> = Vec<A>;
}

impl Kind for VecDequeKind {
    type Applied<A> = VecDeque<A>;
}

impl Kind for OptionKind {
    type Applied<A> = Option<A>;
}

impl Kind for IdentityKind {
    type Applied<A> = A;
}

impl<E> Kind for ResultKind<E> {
    type Applied<A> = Result<A, E>;
}

impl<K> Kind for BTreeMapKind<K> {
    type Applied<A> = BTreeMap<K, A>;
}

// The phantom kinds are zero-sized regardless of their parameter, so these
// are implemented by hand instead of derived (derive would bound `E`/`K`).
macro_rules! phantom_kind {
    ($name:ident) => {
        impl<P> $name<P> {
            /// Creates the capability object.
            #[inline]
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<P> Default for $name<P> {
            fn default() -> Self {
                Self::new()
            }
        }

        #[allow(clippy::expl_impl_clone_on_copy)]
        impl<P> Clone for $name<P> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<P> Copy for $name<P> {}

        impl<P> fmt::Debug for $name<P> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

phantom_kind!(ResultKind);
phantom_kind!(BTreeMapKind);
