//! Per-element steps of a lazy right fold.
//!
//! A [`Fold`] is what a partial fold produces when it looks at one element:
//! keep going with a continuation ([`Fold::Continue`]), stop with a final
//! value ([`Fold::Return`]), or skip the element ([`Fold::Pass`]).
//!
//! Steps for a whole structure are assembled by [`Fold::iterate_right`] in
//! two phases. Building the step examines elements only up to the first one
//! that does not pass. If that element continues, the rest of the walk is
//! deferred into the returned continuation and runs only when the combined
//! value is demanded. That walk keeps pending continuations on an explicit
//! work list until the first `Return` and then unrolls them in a loop, so no
//! recursion depth grows with the size of the structure.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::control::{Eval, Fold};
//!
//! // Right fold of [1, 2, 3] into a string: "1(2(3(end)))"
//! let step = Fold::iterate_right(vec![1, 2, 3], |element| {
//!     Fold::continue_with(move |rest: String| format!("{element}({rest})"))
//! });
//! assert_eq!(step.complete(Eval::eager("end".to_string())), "1(2(3(end)))");
//!
//! // Stopping early: the step for 3 is never produced.
//! let step = Fold::iterate_right(vec![1, 2, 3], |element| {
//!     assert!(element < 3);
//!     if element == 2 { Fold::Return(element) } else { Fold::Pass }
//! });
//! assert_eq!(step.complete(Eval::eager(0)), 2);
//! ```

use std::fmt;

use smallvec::SmallVec;

use super::Eval;

/// A boxed continuation: combines an element with the folded rest.
pub type Continuation<'a, B> = Box<dyn FnOnce(B) -> B + 'a>;

/// Continuations kept inline before the work list spills to the heap.
const INLINE_CONTINUATIONS: usize = 8;

type WorkList<'a, B> = SmallVec<[Continuation<'a, B>; INLINE_CONTINUATIONS]>;

/// The result of examining one element (or a whole structure) in a lazy right fold.
pub enum Fold<'a, B: 'a> {
    /// Accumulate: apply the continuation to the folded value of everything
    /// further to the right.
    Continue(Continuation<'a, B>),
    /// Stop with this value; nothing further to the right is examined.
    Return(B),
    /// Skip: the folded value from the right passes through unchanged.
    Pass,
}

impl<'a, B: 'a> Fold<'a, B> {
    /// Creates a [`Fold::Continue`] step.
    #[inline]
    pub fn continue_with<F>(continuation: F) -> Self
    where
        F: FnOnce(B) -> B + 'a,
    {
        Self::Continue(Box::new(continuation))
    }

    /// Creates a [`Fold::Return`] step.
    #[inline]
    pub const fn return_with(value: B) -> Self {
        Self::Return(value)
    }

    /// Creates a [`Fold::Pass`] step.
    #[inline]
    pub const fn pass() -> Self {
        Self::Pass
    }

    /// Returns `true` for [`Fold::Continue`].
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns `true` for [`Fold::Return`].
    #[inline]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    /// Returns `true` for [`Fold::Pass`].
    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Finishes the step against the folded value of the rest.
    ///
    /// `rest` is forced only for `Continue` and `Pass`; a `Return` discards it
    /// unevaluated.
    ///
    /// # Panics
    ///
    /// Panics if `rest` is forced and turns out to be poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::{Eval, Fold};
    ///
    /// let rest = Eval::deferred(|| -> i32 { unreachable!() });
    /// assert_eq!(Fold::Return(1).complete(rest), 1);
    ///
    /// assert_eq!(Fold::Pass.complete(Eval::eager(2)), 2);
    /// assert_eq!(Fold::continue_with(|rest| rest + 1).complete(Eval::eager(2)), 3);
    /// ```
    pub fn complete(self, rest: Eval<'a, B>) -> B {
        match self {
            Self::Continue(continuation) => continuation(rest.into_value()),
            Self::Return(value) => value,
            Self::Pass => rest.into_value(),
        }
    }

    /// Finishes the step lazily, without forcing anything.
    ///
    /// - `Return(b)` becomes an eager `b`.
    /// - `Pass` returns `rest` unchanged.
    /// - `Continue(k)` becomes a deferred `k(rest)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::{Eval, Fold};
    ///
    /// let lazy = Fold::continue_with(|rest: i32| rest * 10).complete_lazy(Eval::deferred(|| 4));
    /// assert!(!lazy.is_evaluated());
    /// assert_eq!(lazy.into_value(), 40);
    /// ```
    pub fn complete_lazy(self, rest: Eval<'a, B>) -> Eval<'a, B> {
        match self {
            Self::Continue(continuation) => {
                Eval::deferred(move || continuation(rest.into_value()))
            }
            Self::Return(value) => Eval::eager(value),
            Self::Pass => rest,
        }
    }

    /// Builds the step for a whole sequence of elements.
    ///
    /// `step` is called on the elements from left to right until one of them
    /// does not pass:
    ///
    /// - `Return(b)` becomes the step of the whole sequence, and `step` is
    ///   never called on a later element.
    /// - `Continue(k)` becomes a `Continue` that owns the remaining elements
    ///   and `step`. Applying it walks the remaining elements, stopping at the
    ///   first `Return`, and then applies the pending continuations right to
    ///   left in a loop. Neither `step` nor any continuation runs before that.
    ///
    /// Returns `Pass` if every element passes. The result is equivalent to
    /// nesting the per-element steps, with constant stack depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::control::{Eval, Fold};
    ///
    /// let total = Fold::iterate_right(0..100_000, |element: u64| {
    ///     Fold::continue_with(move |rest: u64| rest + element)
    /// });
    /// assert_eq!(total.complete(Eval::eager(0)), 4_999_950_000);
    /// ```
    pub fn iterate_right<A, I, F>(elements: I, mut step: F) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'a,
        F: FnMut(A) -> Self + 'a,
    {
        let mut elements = elements.into_iter();
        let mut examined = 0_usize;
        let head = loop {
            let Some(element) = elements.next() else {
                return Self::Pass;
            };
            examined += 1;
            match step(element) {
                Self::Continue(continuation) => break continuation,
                Self::Return(value) => {
                    tracing::trace!(examined, "partial fold short-circuited");
                    return Self::Return(value);
                }
                Self::Pass => {}
            }
        };

        Self::Continue(Box::new(move |rest| {
            let mut pending: WorkList<'a, B> = SmallVec::new();
            pending.push(head);
            for element in elements {
                examined += 1;
                match step(element) {
                    Self::Continue(continuation) => pending.push(continuation),
                    Self::Return(value) => {
                        tracing::trace!(examined, "partial fold short-circuited");
                        return unroll(value, pending);
                    }
                    Self::Pass => {}
                }
            }
            unroll(rest, pending)
        }))
    }
}

fn unroll<'a, B: 'a>(seed: B, pending: WorkList<'a, B>) -> B {
    pending
        .into_iter()
        .rev()
        .fold(seed, |accumulator, continuation| continuation(accumulator))
}

impl<B: fmt::Debug> fmt::Debug for Fold<'_, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue(_) => formatter.write_str("Continue(<continuation>)"),
            Self::Return(value) => formatter.debug_tuple("Return").field(value).finish(),
            Self::Pass => formatter.write_str("Pass"),
        }
    }
}
