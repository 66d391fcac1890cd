//! Folding nested structures through composed capabilities.
//!
//! [`Composed`] pairs the capability of an outer structure with the
//! capability of the structures nested inside it. It holds no data; every
//! operation delegates to the outer fold, which in turn runs the inner fold
//! on each nested structure. Since `Composed` is itself a
//! [`Foldable`], compositions nest to any depth.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::typeclass::{Composed, Foldable, OptionKind, VecKind};
//!
//! let kind = Composed::new(VecKind, OptionKind);
//! let nested = vec![Some(1), None, Some(3)];
//!
//! assert_eq!(kind.to_vec(nested.clone()), vec![1, 3]);
//! assert_eq!(kind.find(nested, |element| *element > 1), Some(3));
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::foldable::Foldable;
use super::higher::Kind;
use crate::control::Fold;

/// The capability for `F` structures of `G` structures.
///
/// `Applied<A>` is `F::Applied<G::Applied<A>>`: for
/// `Composed<VecKind, OptionKind>` it is `Vec<Option<A>>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Composed<F, G> {
    outer: F,
    inner: G,
}

impl<F, G> Composed<F, G> {
    /// Pairs the outer capability with the inner one.
    #[inline]
    pub const fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }

    /// The capability of the outer structure.
    #[inline]
    pub const fn outer(&self) -> &F {
        &self.outer
    }

    /// The capability of the nested structures.
    #[inline]
    pub const fn inner(&self) -> &G {
        &self.inner
    }
}

impl<F: Kind, G: Kind> Kind for Composed<F, G> {
    type Applied<A> = F::Applied<G::Applied<A>>;
}

impl<F: Foldable, G: Foldable> Foldable for Composed<F, G> {
    fn fold_left<A, B, Combine>(
        &self,
        structure: F::Applied<G::Applied<A>>,
        init: B,
        mut function: Combine,
    ) -> B
    where
        Combine: FnMut(B, A) -> B,
    {
        let inner = &self.inner;
        self.outer
            .fold_left::<G::Applied<A>, B, _>(structure, init, |accumulator, nested| {
                inner.fold_left::<A, B, _>(nested, accumulator, &mut function)
            })
    }

    /// The step of each nested structure is the outer step for it, so an
    /// inner `Return` stops the outer fold as well. A `Return` that the inner
    /// fold only reaches after a `Continue` is found when that continuation
    /// is applied.
    ///
    /// `step` is shared by every nested step, which may outlive this call.
    fn partial_fold<'a, A, B, Step>(
        &'a self,
        structure: F::Applied<G::Applied<A>>,
        step: Step,
    ) -> Fold<'a, B>
    where
        A: 'a,
        B: 'a,
        Step: FnMut(A) -> Fold<'a, B> + 'a,
    {
        let inner = &self.inner;
        let step = Rc::new(RefCell::new(step));
        self.outer
            .partial_fold::<G::Applied<A>, B, _>(structure, move |nested| {
                let step = Rc::clone(&step);
                inner.partial_fold::<A, B, _>(nested, move |element| {
                    (&mut *step.borrow_mut())(element)
                })
            })
    }

    fn fold_right<A, B, Combine>(
        &self,
        structure: F::Applied<G::Applied<A>>,
        init: B,
        mut function: Combine,
    ) -> B
    where
        Combine: FnMut(A, B) -> B,
    {
        let inner = &self.inner;
        self.outer
            .fold_right::<G::Applied<A>, B, _>(structure, init, |nested, accumulator| {
                inner.fold_right::<A, B, _>(nested, accumulator, &mut function)
            })
    }
}
