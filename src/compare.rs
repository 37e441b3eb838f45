//! Comparators and the cross-type comparison helper.
//!
//! A comparator is any [`Compare`] implementation: a strict-weak-ordering
//! predicate over an element of the first range and an element of the second.
//! Plain closures and fn items qualify through a blanket impl.
//!
//! Two comparator forms are exercised by the sweep:
//!
//! - **shared**: the closure as written; it only needs `&self` to be called.
//! - **mutable**: the same closure wrapped in [`NonConst`], whose call mutates
//!   its own state. A candidate that quietly requires shared-call access (for
//!   example by sharing one comparator reference across workers instead of
//!   cloning it) fails to accept this form.

use core::marker::PhantomData;

use serde::Serialize;

use crate::value::Convert;

/// Strict-weak-ordering predicate between two possibly different types.
pub trait Compare<A: ?Sized, B: ?Sized> {
    /// Returns true when `a` is ordered before `b`.
    fn less(&mut self, a: &A, b: &B) -> bool;
}

impl<A: ?Sized, B: ?Sized, F> Compare<A, B> for F
where
    F: FnMut(&A, &B) -> bool,
{
    fn less(&mut self, a: &A, b: &B) -> bool {
        self(a, b)
    }
}

/// Default ordering: `a < b`.
pub fn less<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Adapter whose call operator requires exclusive access.
///
/// Every call bumps an internal counter, so the wrapper is observationally
/// equivalent to the inner comparator but cannot be invoked through a shared
/// reference.
#[derive(Debug, Clone)]
pub struct NonConst<C> {
    inner: C,
    calls: u64,
}

impl<C> NonConst<C> {
    /// Wraps a comparator.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self { inner, calls: 0 }
    }

    /// Number of calls made through this instance.
    #[must_use]
    pub const fn calls(&self) -> u64 {
        self.calls
    }
}

impl<A: ?Sized, B: ?Sized, C: Compare<A, B>> Compare<A, B> for NonConst<C> {
    fn less(&mut self, a: &A, b: &B) -> bool {
        self.calls = self.calls.wrapping_add(1);
        self.inner.less(a, b)
    }
}

/// Which comparator form a dispatch used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparatorForm {
    /// The comparator as supplied.
    Shared,
    /// The comparator wrapped in [`NonConst`].
    Mutable,
}

impl ComparatorForm {
    /// Stable name for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Mutable => "mutable",
        }
    }
}

/// Applies a `Compare<A, B>` to every argument pairing an algorithm needs.
///
/// Inclusion compares in both directions and also within one range (run
/// detection, bound searches). The comparator only accepts `(A, B)`, so the
/// other pairings convert their arguments explicitly first.
pub struct CrossLess<A, B, C> {
    comp: C,
    _elems: PhantomData<fn(&A, &B)>,
}

impl<A, B, C> CrossLess<A, B, C>
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    /// Wraps a comparator.
    pub const fn new(comp: C) -> Self {
        Self {
            comp,
            _elems: PhantomData,
        }
    }

    /// `a < b` for `a` from the first range and `b` from the second.
    pub fn first_second(&mut self, a: &A, b: &B) -> bool {
        self.comp.less(a, b)
    }

    /// `b < a` for `b` from the second range and `a` from the first.
    pub fn second_first(&mut self, b: &B, a: &A) -> bool {
        self.comp.less(&b.convert(), &a.convert())
    }

    /// `x < y`, both from the first range.
    pub fn first_first(&mut self, x: &A, y: &A) -> bool {
        self.comp.less(x, &y.convert())
    }

    /// `x < y`, both from the second range.
    pub fn second_second(&mut self, x: &B, y: &B) -> bool {
        self.comp.less(&x.convert(), y)
    }

    /// Unwraps the comparator.
    pub fn into_inner(self) -> C {
        self.comp
    }
}
