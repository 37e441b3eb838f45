//! Differential oracle: the candidate must agree with the reference.
//!
//! For every admitted (policy, shape pair, comparator) combination the
//! oracle computes the reference answer, asks the candidate, and records the
//! comparison with the [`Reporter`]. A reversed first range is sorted under
//! the opposite order, so its shape's admission gate is
//! [`Skipped`](crate::shape::Skipped) and the combination is only counted.

use tracing::trace;

use crate::algorithm::{Candidate, reference};
use crate::compare::{ComparatorForm, Compare};
use crate::harness::dispatch::PolicyCase;
use crate::harness::report::{Mismatch, Reporter};
use crate::policy::ExecutionPolicy;
use crate::sequence::Element;
use crate::shape::{AccessShape, Admission, RangeView};
use crate::value::Convert;

/// Diagnostic attached to every oracle check.
pub const WRONG_RESULT: &str = "wrong result for includes";

/// Compares one candidate against the reference for a fixed (n, m) pair.
#[derive(Debug)]
pub struct DifferentialOracle<'r, K> {
    candidate: &'r K,
    reporter: &'r mut Reporter,
    scenario: &'static str,
    n: usize,
    m: usize,
    form: ComparatorForm,
}

impl<'r, K: Candidate> DifferentialOracle<'r, K> {
    /// Creates an oracle for one dispatch.
    pub fn new(
        candidate: &'r K,
        reporter: &'r mut Reporter,
        scenario: &'static str,
        (n, m): (usize, usize),
        form: ComparatorForm,
    ) -> Self {
        Self {
            candidate,
            reporter,
            scenario,
            n,
            m,
            form,
        }
    }
}

impl<A, B, K> PolicyCase<A, B> for DifferentialOracle<'_, K>
where
    A: Element + Convert<B>,
    B: Element + Convert<A>,
    K: Candidate,
{
    fn run<'a, V1, V2, C>(&mut self, policy: ExecutionPolicy, first: V1, second: V2, comp: C)
    where
        A: 'a,
        B: 'a,
        V1: RangeView<'a, A>,
        V2: RangeView<'a, B>,
        C: Compare<A, B> + Clone + Send + Sync,
    {
        let first_shape = <V1::Shape as AccessShape>::NAME;
        let second_shape = <V2::Shape as AccessShape>::NAME;
        let candidate = self.candidate;
        let outcome = <<V1::Shape as AccessShape>::Admission as Admission>::admit(|| {
            let expected = reference::includes(first.iter(), second.iter(), comp.clone());
            let actual = candidate.includes(policy, first, second, comp);
            (expected, actual)
        });

        let Some((expected, actual)) = outcome else {
            trace!(policy = policy.as_str(), first_shape, "reverse first range skipped");
            self.reporter.record_skip();
            return;
        };
        let (scenario, n, m, form) = (self.scenario, self.n, self.m, self.form);
        self.reporter
            .expect_true(expected == actual, WRONG_RESULT, |message| Mismatch {
                message,
                scenario,
                n,
                m,
                policy,
                first_shape,
                second_shape,
                form,
                expected,
                actual,
            });
    }
}
