//! Thread-safe suspended values.
//!
//! [`SharedEval`] has the same contract as [`Eval`](super::Eval) but may be
//! forced concurrently from several threads. The producer still runs at most
//! once: the first forcer wins, the others block until it finishes and then
//! observe the same value, or the same [`EvalError::Poisoned`] failure if the
//! producer panicked.
//!
//! # Re-entry Warning
//!
//! Forcing a `SharedEval` from inside its own producer deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::control::SharedEval;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let shared = Arc::new(SharedEval::deferred(|| 6 * 7));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let shared = Arc::clone(&shared);
//!         thread::spawn(move || *shared.force())
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 42);
//! }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use super::eval::EvalError;

type SharedProducer<'a, A> = Box<dyn FnOnce() -> A + Send + 'a>;

/// A lazily evaluated, memoised value that can be shared between threads.
///
/// `SharedEval<'a, A>` is `Send + Sync` whenever `A: Send + Sync`.
pub struct SharedEval<'a, A: 'a> {
    value: OnceCell<A>,
    producer: Mutex<Option<SharedProducer<'a, A>>>,
    poisoned: AtomicBool,
}

static_assertions::assert_impl_all!(SharedEval<'static, i32>: Send, Sync);

impl<'a, A: 'a> SharedEval<'a, A> {
    /// Creates a shared suspended value that is already resolved.
    #[inline]
    pub fn eager(value: A) -> Self {
        Self {
            value: OnceCell::with_value(value),
            producer: Mutex::new(None),
            poisoned: AtomicBool::new(false),
        }
    }

    /// Creates a shared suspended value that runs `producer` on first force.
    #[inline]
    pub fn deferred<F>(producer: F) -> Self
    where
        F: FnOnce() -> A + Send + 'a,
    {
        Self {
            value: OnceCell::new(),
            producer: Mutex::new(Some(Box::new(producer))),
            poisoned: AtomicBool::new(false),
        }
    }

    /// Forces the value and returns a reference to it.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned or the producer panics.
    pub fn force(&self) -> &A {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces the value, reporting poisoning as an error.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::Poisoned`] if the producer panicked, on this
    /// thread or any other.
    pub fn try_force(&self) -> Result<&A, EvalError> {
        self.value.get_or_try_init(|| {
            let producer = self.producer.lock().take();
            let Some(producer) = producer else {
                tracing::debug!("poisoned shared suspended value observed");
                return Err(EvalError::Poisoned);
            };
            tracing::trace!("evaluating shared deferred value");
            let _poison = PoisonOnUnwind {
                poisoned: &self.poisoned,
            };
            Ok(producer())
        })
    }

    /// Consumes the holder and returns the value, forcing it if needed.
    ///
    /// # Panics
    ///
    /// Panics if the value is poisoned or the producer panics.
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
        if let Some(value) = self.value.into_inner() {
            return Ok(value);
        }
        match self.producer.into_inner() {
            Some(producer) => Ok(producer()),
            None => Err(EvalError::Poisoned),
        }
    }

    /// Returns whether the value has been computed. Never forces or blocks.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether the producer panicked on an earlier force.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.load(Ordering::Acquire)
    }
}

struct PoisonOnUnwind<'p> {
    poisoned: &'p AtomicBool,
}

impl Drop for PoisonOnUnwind<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.poisoned.store(true, Ordering::Release);
        }
    }
}

impl<A> From<A> for SharedEval<'_, A> {
    fn from(value: A) -> Self {
        Self::eager(value)
    }
}

impl<A: fmt::Debug> fmt::Debug for SharedEval<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("SharedEval");
        match self.value.get() {
            Some(value) => tuple.field(value),
            None if self.is_poisoned() => tuple.field(&"<poisoned>"),
            None => tuple.field(&"<deferred>"),
        };
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::AtomicUsize;

    #[rstest]
    fn eager_is_evaluated() {
        let shared = SharedEval::eager(3);
        assert!(shared.is_evaluated());
        assert_eq!(*shared.force(), 3);
    }

    #[rstest]
    fn deferred_runs_once() {
        let calls = AtomicUsize::new(0);
        let shared = SharedEval::deferred(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            10
        });

        assert_eq!(*shared.force(), 10);
        assert_eq!(*shared.force(), 10);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn panicking_producer_poisons() {
        let shared: SharedEval<'_, i32> = SharedEval::deferred(|| panic!("boom"));
        let outcome = catch_unwind(AssertUnwindSafe(|| *shared.force()));

        assert!(outcome.is_err());
        assert!(shared.is_poisoned());
        assert_eq!(shared.try_force().err(), Some(EvalError::Poisoned));
    }

    #[rstest]
    fn into_value_without_force() {
        let shared = SharedEval::deferred(|| String::from("owned"));
        assert_eq!(shared.into_value(), "owned");
    }
}
