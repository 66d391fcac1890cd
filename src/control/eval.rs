//! Suspended values with at-most-once evaluation.
//!
//! This module provides [`Eval`], the holder the fold engine uses to pass
//! "the rest of the fold" along without computing it. An `Eval` is either
//! already known ([`Eval::eager`]) or computed on demand
//! ([`Eval::deferred`]); a deferred producer runs on the first force only and
//! its result is cached for every later observation.
//!
//! `Eval` is confined to a single thread (it is neither `Send` nor `Sync`),
//! which is how it upholds the at-most-once guarantee. For a holder that can
//! be forced from several threads, see [`SharedEval`](super::SharedEval).
//!
//! # Examples
//!
//! ```rust
//! use foldkit::control::Eval;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let eval = Eval::deferred(|| {
//!     calls.set(calls.get() + 1);
//!     42
//! });
//!
//! assert_eq!(calls.get(), 0);
//! assert_eq!(*eval.force(), 42);
//! assert_eq!(*eval.force(), 42);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

/// Error reported when a suspended value cannot produce its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The producer panicked during an earlier force.
    #[error("suspended value is poisoned: its producer panicked")]
    Poisoned,
    /// The value was forced again from inside its own producer.
    #[error("suspended value was forced while its producer was still running")]
    Reentrant,
}

type Producer<'a, A> = Box<dyn FnOnce() -> A + 'a>;

enum EvalState<'a, A: 'a> {
    Deferred(Producer<'a, A>),
    Evaluating,
    Evaluated(A),
    Poisoned,
}

/// A lazily evaluated, memoised value.
///
/// # Type Parameters
///
/// * `'a` - The lifetime of anything the producer borrows
/// * `A` - The type of the value
///
/// # Failure
///
/// If the producer panics, the panic reaches the caller that forced it and
/// the value becomes poisoned: [`Eval::try_force`] then reports
/// [`EvalError::Poisoned`] and [`Eval::force`] panics with that message.
/// A producer that returns a `Result` is cached like any other value.
///
/// # Examples
///
/// ```rust
/// use foldkit::control::Eval;
///
/// let known = Eval::eager(1);
/// let later = Eval::deferred(|| 20 + 1);
///
/// assert!(known.is_evaluated());
/// assert!(!later.is_evaluated());
/// assert_eq!(*known.force() + *later.force(), 22);
/// ```
pub struct Eval<'a, A: 'a> {
    state: RefCell<EvalState<'a, A>>,
}

static_assertions::assert_not_impl_any!(Eval<'static, i32>: Sync, Send);

impl<'a, A: 'a> Eval<'a, A> {
    /// Creates a suspended value that is already resolved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let eval = Eval::eager("ready");
    /// assert!(eval.is_evaluated());
    /// ```
    #[inline]
    pub const fn eager(value: A) -> Self {
        Self {
            state: RefCell::new(EvalState::Evaluated(value)),
        }
    }

    /// Creates a suspended value that runs `producer` on first force.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let eval = Eval::deferred(|| vec![1, 2, 3]);
    /// assert!(!eval.is_evaluated());
    /// assert_eq!(eval.force().len(), 3);
    /// ```
    #[inline]
    pub fn deferred<F>(producer: F) -> Self
    where
        F: FnOnce() -> A + 'a,
    {
        Self {
            state: RefCell::new(EvalState::Deferred(Box::new(producer))),
        }
    }

    /// Forces the value and returns a reference to it.
    ///
    /// The producer runs the first time only; every later call returns the
    /// cached value.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned, if it is forced from inside its own
    /// producer, or if the producer itself panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let eval = Eval::deferred(|| String::from("hello"));
    /// assert_eq!(eval.force().as_str(), "hello");
    /// ```
    pub fn force(&self) -> Ref<'_, A> {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces the value, reporting poisoning or re-entry as an error.
    ///
    /// # Errors
    ///
    /// - [`EvalError::Poisoned`] if the producer panicked on an earlier force.
    /// - [`EvalError::Reentrant`] if called from inside the producer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let eval = Eval::deferred(|| 7);
    /// assert_eq!(*eval.try_force().unwrap(), 7);
    /// ```
    pub fn try_force(&self) -> Result<Ref<'_, A>, EvalError> {
        self.evaluate()?;
        Ref::filter_map(self.state.borrow(), |state| match state {
            EvalState::Evaluated(value) => Some(value),
            _ => None,
        })
        .map_err(|_| EvalError::Poisoned)
    }

    /// Consumes the holder and returns the value, forcing it if needed.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned or the producer panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let eval = Eval::deferred(|| vec![1, 2]);
    /// assert_eq!(eval.into_value(), vec![1, 2]);
    /// ```
    pub fn into_value(self) -> A {
        match self.try_into_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Consumes the holder and returns the value, reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Poisoned`] if the producer panicked on an earlier force.
    pub fn try_into_value(self) -> Result<A, EvalError> {
        match self.state.into_inner() {
            EvalState::Evaluated(value) => Ok(value),
            EvalState::Deferred(producer) => {
                tracing::trace!("evaluating deferred value on consumption");
                Ok(producer())
            }
            EvalState::Evaluating => Err(EvalError::Reentrant),
            EvalState::Poisoned => Err(EvalError::Poisoned),
        }
    }

    /// Returns a deferred value that applies `function` to this one.
    ///
    /// Nothing is forced until the result is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::Eval;
    ///
    /// let doubled = Eval::deferred(|| 21).map(|value| value * 2);
    /// assert!(!doubled.is_evaluated());
    /// assert_eq!(doubled.into_value(), 42);
    /// ```
    pub fn map<B, F>(self, function: F) -> Eval<'a, B>
    where
        B: 'a,
        F: FnOnce(A) -> B + 'a,
    {
        Eval::deferred(move || function(self.into_value()))
    }

    /// Returns whether the value has been computed. Never forces.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        matches!(
            self.state.try_borrow().as_deref(),
            Ok(EvalState::Evaluated(_))
        )
    }

    /// Returns whether the producer panicked on an earlier force.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(self.state.try_borrow().as_deref(), Ok(EvalState::Poisoned))
    }

    fn evaluate(&self) -> Result<(), EvalError> {
        match &*self.state.borrow() {
            EvalState::Evaluated(_) => return Ok(()),
            EvalState::Deferred(_) => {}
            EvalState::Evaluating => {
                tracing::debug!("suspended value forced from inside its own producer");
                return Err(EvalError::Reentrant);
            }
            EvalState::Poisoned => {
                tracing::debug!("poisoned suspended value observed");
                return Err(EvalError::Poisoned);
            }
        }

        let EvalState::Deferred(producer) =
            std::mem::replace(&mut *self.state.borrow_mut(), EvalState::Evaluating)
        else {
            return Err(EvalError::Reentrant);
        };

        tracing::trace!("evaluating deferred value");
        let value = {
            let _poison = PoisonOnUnwind { state: &self.state };
            producer()
        };
        *self.state.borrow_mut() = EvalState::Evaluated(value);
        Ok(())
    }
}

/// Marks the state poisoned if the producer unwinds.
struct PoisonOnUnwind<'s, 'a, A: 'a> {
    state: &'s RefCell<EvalState<'a, A>>,
}

impl<'a, A: 'a> Drop for PoisonOnUnwind<'_, 'a, A> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            *self.state.borrow_mut() = EvalState::Poisoned;
        }
    }
}

impl<A> From<A> for Eval<'_, A> {
    fn from(value: A) -> Self {
        Self::eager(value)
    }
}

impl<A: Default> Default for Eval<'_, A> {
    /// A deferred value producing `A::default()`.
    fn default() -> Self {
        Self::deferred(A::default)
    }
}

impl<A: fmt::Debug> fmt::Debug for Eval<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("Eval");
        match self.state.try_borrow().as_deref() {
            Ok(EvalState::Evaluated(value)) => tuple.field(value),
            Ok(EvalState::Deferred(_)) => tuple.field(&"<deferred>"),
            Ok(EvalState::Poisoned) => tuple.field(&"<poisoned>"),
            Ok(EvalState::Evaluating) | Err(_) => tuple.field(&"<evaluating>"),
        };
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn deferred_is_not_run_on_creation() {
        let calls = Cell::new(0);
        let _eval = Eval::deferred(|| {
            calls.set(calls.get() + 1);
            1
        });
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn repeated_force_runs_producer_once() {
        let calls = Cell::new(0);
        let eval = Eval::deferred(|| {
            calls.set(calls.get() + 1);
            "value".to_string()
        });

        let first = eval.force().clone();
        let second = eval.force().clone();
        let third = eval.force().clone();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[rstest]
    fn force_while_holding_previous_reference() {
        let eval = Eval::deferred(|| 5);
        let held = eval.force();
        let again = eval.force();
        assert_eq!(*held + *again, 10);
    }

    #[rstest]
    fn into_value_after_force_reuses_cache() {
        let calls = Cell::new(0);
        let eval = Eval::deferred(|| {
            calls.set(calls.get() + 1);
            3
        });
        let _ = eval.force();
        assert_eq!(eval.into_value(), 3);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn panicking_producer_poisons() {
        crate::test_utils::init_test_logging();
        let eval: Eval<'_, i32> = Eval::deferred(|| panic!("boom"));
        let outcome = catch_unwind(AssertUnwindSafe(|| *eval.force()));

        assert!(outcome.is_err());
        assert!(eval.is_poisoned());
        assert_eq!(eval.try_force().err(), Some(EvalError::Poisoned));
    }

    #[rstest]
    fn debug_shows_state() {
        let eval = Eval::deferred(|| 9);
        assert_eq!(format!("{eval:?}"), "Eval(\"<deferred>\")");
        let _ = eval.force();
        assert_eq!(format!("{eval:?}"), "Eval(9)");
    }
}
