//! Control structures that drive the fold engine.
//!
//! - [`Eval`]: a suspended value, computed at most once and then cached
//! - [`SharedEval`]: the same contract, safe to force from several threads
//! - [`Fold`]: the per-element step of a lazy right fold (continue, return, pass)
//!
//! # Examples
//!
//! ## Suspended Values
//!
//! ```rust
//! use foldkit::control::Eval;
//!
//! let eval = Eval::deferred(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! assert_eq!(*eval.force(), 42);
//! ```
//!
//! ## Short-Circuiting Right Folds
//!
//! ```rust
//! use foldkit::control::{Eval, Fold};
//!
//! let first_even = Fold::iterate_right(vec![1, 3, 4, 5, 6], |element| {
//!     if element % 2 == 0 { Fold::Return(Some(element)) } else { Fold::Pass }
//! });
//! assert_eq!(first_even.complete(Eval::eager(None)), Some(4));
//! ```

mod eval;
mod fold;
mod shared_eval;

pub use eval::{Eval, EvalError};
pub use fold::{Continuation, Fold};
pub use shared_eval::SharedEval;
