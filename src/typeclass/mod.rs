//! Type class traits for folding structures.
//!
//! This module provides the `Foldable` contract and the algebra it folds
//! with:
//!
//! - [`Foldable`]: Reducing structures to a summary value, with lazy,
//!   short-circuiting right folds
//! - [`Composed`]: Folding nested structures by composing capabilities
//! - [`Semigroup`], [`Monoid`]: Combining values of one type
//! - [`SemigroupK`], [`MonoidK`]: Combining structures for every element type
//! - [`Applicative`]: Combining independent effects
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! This library uses Generic Associated Types (GAT) on small capability
//! objects ([`Kind`]) to emulate them. Capabilities are passed explicitly:
//! `VecKind.fold(values)` rather than a global lookup on `Vec`.
//!
//! ## Foundation Types
//!
//! - [`Kind`]: Trait for emulating higher-kinded types
//! - [`VecKind`], [`VecDequeKind`], [`OptionKind`], [`ResultKind`],
//!   [`BTreeMapKind`], [`IdentityKind`]: Capabilities for standard containers
//! - [`Sum`], [`Product`], [`All`], [`Any`]: Wrappers selecting a monoid
//!
//! # Examples
//!
//! ## Using Monoid
//!
//! ```rust
//! use foldkit::typeclass::{Monoid, Semigroup, Sum};
//!
//! let value = String::from("hello");
//! assert_eq!(String::empty().combine(value.clone()), value);
//!
//! let numbers = vec![Sum(1), Sum(2), Sum(3)];
//! assert_eq!(Sum::combine_all(numbers), Sum(6));
//! ```
//!
//! ## Using Foldable
//!
//! ```rust
//! use foldkit::typeclass::{Foldable, OptionKind, VecKind};
//!
//! let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
//! assert_eq!(VecKind.fold(words), "abc");
//!
//! let nested = vec![Some(1), None, Some(2)];
//! assert_eq!(VecKind.compose(OptionKind).to_vec(nested), vec![1, 2]);
//! ```

mod applicative;
mod composed;
mod foldable;
mod higher;
mod monoid;
mod monoid_k;
mod semigroup;
mod wrappers;

pub use applicative::Applicative;
pub use composed::Composed;
pub use foldable::Foldable;
pub use higher::{
    BTreeMapKind, IdentityKind, Kind, OptionKind, ResultKind, VecDequeKind, VecKind,
};
pub use monoid::Monoid;
pub use monoid_k::{MonoidK, SemigroupK};
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Product, Sum};
