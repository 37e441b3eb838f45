//! Size-space sweep.
//!
//! Every length below [`DEFAULT_LINEAR_LIMIT`](crate::config::DEFAULT_LINEAR_LIMIT)
//! (inclusive) plus one is visited, then lengths grow geometrically until
//! they reach the size limit. The first range uses a wide value spread and
//! the second a narrow one, so the second range is dense in duplicates.

use tracing::{debug, info, info_span};

use crate::algorithm::Candidate;
use crate::compare::{ComparatorForm, Compare, CrossLess, NonConst};
use crate::config::HarnessConfig;
use crate::harness::dispatch::invoke_on_all_policies;
use crate::harness::oracle::DifferentialOracle;
use crate::harness::report::{Reporter, SweepReport};
use crate::sequence::{Element, Sequence};
use crate::util::SweepRng;
use crate::value::Convert;

/// Two-phase length schedule: `n + 1` while `n <= linear_limit`, then
/// `trunc(n * growth)`, stopping before `limit`.
#[derive(Debug, Clone)]
pub struct SizeSchedule {
    next: Option<usize>,
    limit: usize,
    linear_limit: usize,
    growth: f64,
}

impl SizeSchedule {
    /// Schedule starting at zero.
    #[must_use]
    pub fn new(limit: usize, linear_limit: usize, growth: f64) -> Self {
        Self {
            next: (limit > 0).then_some(0),
            limit,
            linear_limit,
            growth,
        }
    }
}

impl Iterator for SizeSchedule {
    type Item = usize;

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        let following = if current <= self.linear_limit {
            current + 1
        } else {
            ((current as f64 * self.growth) as usize).max(current + 1)
        };
        self.next = (following < self.limit).then_some(following);
        Some(current)
    }
}

/// Runs one scenario sweep of `candidate` against the reference.
///
/// The generator is seeded from `config.seed` at the start, so two calls
/// with the same configuration see identical inputs. Small pairs (both
/// lengths below `config.mutable_comparator_limit`) are dispatched a second
/// time with the comparator wrapped in [`NonConst`].
pub fn test_includes<A, B, C, K>(
    config: &HarnessConfig,
    candidate: &K,
    scenario: &'static str,
    comp: C,
    reporter: &mut Reporter,
) -> SweepReport
where
    A: Element + Convert<B>,
    B: Element + Convert<A>,
    C: Compare<A, B> + Clone + Send + Sync,
    K: Candidate,
{
    let span = info_span!("sweep", scenario, candidate = candidate.name(), seed = config.seed);
    let _guard = span.enter();

    let mark = reporter.mark();
    let mut rng = SweepRng::new(config.seed);
    let mut less = CrossLess::new(comp.clone());
    let mut pairs = 0_u64;

    'sweep: for n in config.first_schedule() {
        for m in config.second_schedule() {
            let mut first = Sequence::<A>::wide(n, &mut rng);
            let mut second = Sequence::<B>::narrow(m, &mut rng);
            first.sort_by_less(|x, y| less.first_first(x, y));
            second.sort_by_less(|x, y| less.second_second(x, y));
            pairs += 1;
            debug!(n, m, "dispatching pair");

            let mut oracle = DifferentialOracle::new(
                candidate,
                reporter,
                scenario,
                (n, m),
                ComparatorForm::Shared,
            );
            invoke_on_all_policies(&mut oracle, &first, &second, &comp);

            let limit = config.mutable_comparator_limit;
            if n < limit && m < limit {
                let mut oracle = DifferentialOracle::new(
                    candidate,
                    reporter,
                    scenario,
                    (n, m),
                    ComparatorForm::Mutable,
                );
                invoke_on_all_policies(&mut oracle, &first, &second, &NonConst::new(comp.clone()));
            }

            if reporter.should_stop() {
                info!(n, m, "stopping sweep at first mismatch");
                break 'sweep;
            }
        }
    }

    let report = reporter.report_since(mark, scenario, config.seed, pairs);
    info!(
        pairs = report.pairs,
        checks = report.checks,
        skips = report.skips,
        mismatches = report.mismatches.len(),
        "sweep complete"
    );
    report
}
