//! Ordered inclusion: the trusted reference and the candidate under test.
//!
//! The reference ([`reference::includes`]) is a plain sequential walk. A
//! [`Candidate`] takes an [`ExecutionPolicy`] and may use any strategy it
//! likes; the harness only compares its answer against the reference.

pub mod candidate;
pub(crate) mod kernels;
pub mod reference;

pub use candidate::{ParallelRuntime, PstlCandidate};

use crate::compare::Compare;
use crate::policy::ExecutionPolicy;
use crate::sequence::Element;
use crate::shape::RangeView;
use crate::value::Convert;

/// An ordered-inclusion implementation exercised by the harness.
///
/// Implementations must accept both comparator forms, so the comparator
/// bound is `Clone` rather than `Fn`: a worker that needs its own comparator
/// clones it.
pub trait Candidate: Sync {
    /// Name used in reports.
    fn name(&self) -> &'static str;

    /// Returns true when `second` is included in `first` under `comp`.
    fn includes<'a, A, B, V1, V2, C>(
        &self,
        policy: ExecutionPolicy,
        first: V1,
        second: V2,
        comp: C,
    ) -> bool
    where
        A: Element + Convert<B>,
        B: Element + Convert<A>,
        V1: RangeView<'a, A>,
        V2: RangeView<'a, B>,
        C: Compare<A, B> + Clone + Send + Sync;
}
