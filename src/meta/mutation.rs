//! Built-in faulty candidates.
//!
//! Each mutation wraps the default candidate and breaks one property the
//! oracle is expected to catch.

use crate::algorithm::{Candidate, PstlCandidate};
use crate::compare::{Compare, CrossLess};
use crate::harness::Mismatch;
use crate::policy::ExecutionPolicy;
use crate::sequence::Element;
use crate::shape::RangeView;
use crate::value::Convert;

/// Each element of the second range consumes a distinct partner.
pub const PROPERTY_MULTIPLICITY: &str = "multiplicity";
/// A non-empty range is never included in an empty one.
pub const PROPERTY_EMPTY_FIRST: &str = "empty_first";
/// An empty range is included in anything.
pub const PROPERTY_EMPTY_SECOND: &str = "empty_second";
/// Parallel chunks keep runs of equivalent elements whole.
pub const PROPERTY_RUN_PARTITIONING: &str = "run_partitioning";

/// Every property covered by a built-in mutation.
pub const ALL_PROPERTIES: &[&str] = &[
    PROPERTY_MULTIPLICITY,
    PROPERTY_EMPTY_FIRST,
    PROPERTY_EMPTY_SECOND,
    PROPERTY_RUN_PARTITIONING,
];

/// Attribution of a mismatch no built-in property explains.
pub const UNCLASSIFIED: &str = "unclassified";

/// Shape name of a slice-backed view, the only shape the parallel kernel
/// chunks.
const CHUNKED_SHAPE: &str = "random_access";

/// Maps a mismatch to the property it is evidence against.
///
/// Empty ranges are attributed first. A false acceptance on chunked parallel
/// input points at run partitioning, any other false acceptance at
/// multiplicity. False rejections of non-empty ranges are unclassified.
pub fn property_from_mismatch(mismatch: &Mismatch) -> &'static str {
    if mismatch.m == 0 {
        return PROPERTY_EMPTY_SECOND;
    }
    if mismatch.n == 0 {
        return PROPERTY_EMPTY_FIRST;
    }
    if mismatch.expected || !mismatch.actual {
        return UNCLASSIFIED;
    }
    if mismatch.policy.is_parallel()
        && mismatch.first_shape == CHUNKED_SHAPE
        && mismatch.second_shape == CHUNKED_SHAPE
    {
        PROPERTY_RUN_PARTITIONING
    } else {
        PROPERTY_MULTIPLICITY
    }
}

/// A known defect injected into the default candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum BuiltinMutation {
    /// Matches duplicates against a single partner.
    IgnoresMultiplicity,
    /// Answers true whenever the first range is empty.
    EmptyFirstAccepts,
    /// Answers false whenever the second range is empty.
    EmptySecondRejects,
    /// Parallel policies check every element of the second range alone.
    ParallelChunkSplitsRuns,
}

/// Every built-in mutation.
pub fn builtin_mutations() -> Vec<BuiltinMutation> {
    vec![
        BuiltinMutation::IgnoresMultiplicity,
        BuiltinMutation::EmptyFirstAccepts,
        BuiltinMutation::EmptySecondRejects,
        BuiltinMutation::ParallelChunkSplitsRuns,
    ]
}

impl BuiltinMutation {
    /// Stable identifier.
    pub fn name(self) -> &'static str {
        match self {
            Self::IgnoresMultiplicity => "mutation_ignores_multiplicity",
            Self::EmptyFirstAccepts => "mutation_empty_first_accepts",
            Self::EmptySecondRejects => "mutation_empty_second_rejects",
            Self::ParallelChunkSplitsRuns => "mutation_parallel_chunk_splits_runs",
        }
    }

    /// Property the oracle must catch this mutation breaking.
    pub fn property(self) -> &'static str {
        match self {
            Self::IgnoresMultiplicity => PROPERTY_MULTIPLICITY,
            Self::EmptyFirstAccepts => PROPERTY_EMPTY_FIRST,
            Self::EmptySecondRejects => PROPERTY_EMPTY_SECOND,
            Self::ParallelChunkSplitsRuns => PROPERTY_RUN_PARTITIONING,
        }
    }
}

/// The default candidate with one mutation applied.
#[derive(Debug)]
pub struct MutantCandidate {
    mutation: BuiltinMutation,
    inner: PstlCandidate,
}

impl MutantCandidate {
    /// Wraps `inner` with `mutation`.
    pub fn new(mutation: BuiltinMutation, inner: PstlCandidate) -> Self {
        Self { mutation, inner }
    }

    /// The applied mutation.
    pub fn mutation(&self) -> BuiltinMutation {
        self.mutation
    }
}

impl Candidate for MutantCandidate {
    fn name(&self) -> &'static str {
        self.mutation.name()
    }

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
        C: Compare<A, B> + Clone + Send + Sync,
    {
        match self.mutation {
            BuiltinMutation::IgnoresMultiplicity => {
                set_includes(first.iter(), second.iter(), &mut CrossLess::new(comp))
            }
            BuiltinMutation::EmptyFirstAccepts if first.is_empty() => true,
            BuiltinMutation::EmptySecondRejects if second.is_empty() => false,
            BuiltinMutation::ParallelChunkSplitsRuns if policy.is_parallel() => {
                match (first.as_slice(), second.as_slice()) {
                    (Some(first), Some(second)) => {
                        unadjusted_chunks(first, second, &mut CrossLess::new(comp))
                    }
                    _ => self.inner.includes(policy, first, second, comp),
                }
            }
            _ => self.inner.includes(policy, first, second, comp),
        }
    }
}

/// Matches each element of `second` without consuming its partner.
fn set_includes<'a, A, B, C, I1, I2>(first: I1, second: I2, less: &mut CrossLess<A, B, C>) -> bool
where
    A: Convert<B> + 'a,
    B: Convert<A> + 'a,
    C: Compare<A, B>,
    I1: Iterator<Item = &'a A>,
    I2: Iterator<Item = &'a B>,
{
    let mut first = first.peekable();
    for b in second {
        loop {
            let Some(&a) = first.peek() else {
                return false;
            };
            if less.first_second(a, b) {
                first.next();
                continue;
            }
            if less.second_first(b, a) {
                return false;
            }
            break;
        }
    }
    true
}

/// Checks single-element chunks of `second` independently, so a run of
/// equivalent elements is never counted as a whole.
fn unadjusted_chunks<A, B, C>(first: &[A], second: &[B], less: &mut CrossLess<A, B, C>) -> bool
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    second.iter().all(|b| {
        let start = first.partition_point(|a| less.first_second(a, b));
        first
            .get(start)
            .is_some_and(|a| !less.second_first(b, a))
    })
}
