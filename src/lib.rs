//! # foldkit
//!
//! A `Foldable` abstraction for Rust: one contract for reducing any
//! container-like structure to a summary value, with right folds that are
//! lazy, short-circuitable and stack-safe regardless of input size.
//!
//! ## Overview
//!
//! - **Type Classes**: `Foldable`, `Semigroup`, `Monoid`, `MonoidK`, `Applicative`
//! - **Control Structures**: suspended values (`Eval`, `SharedEval`) and the
//!   per-element fold step (`Fold`) that drive lazy right folds
//! - **Composition**: folding nested structures such as `Vec<Option<A>>`
//!   through composed capabilities
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the container capabilities
//! - `control`: Control structures (`Eval`, `SharedEval`, `Fold`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use foldkit::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(VecKind.fold_map(numbers.clone(), Sum), Sum(10));
//! assert_eq!(VecKind.find(numbers, |number| *number > 2), Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use foldkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
