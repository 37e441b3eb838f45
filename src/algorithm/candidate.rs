//! Default candidate: ordered inclusion under every execution policy.
//!
//! | Policy | Random-access views | Other views |
//! |--------|---------------------|-------------|
//! | `Sequenced` | merge kernel | merge kernel |
//! | `Unsequenced` | gallop kernel | merge kernel |
//! | `Parallel` | chunked merge on the pool | merge kernel |
//! | `ParallelUnsequenced` | chunked gallop on the pool | merge kernel |
//!
//! Parallel execution needs indexed access to split the second range, so
//! views without a slice fall back to a sequential pass.

use rayon::prelude::*;
use tracing::trace;

use crate::algorithm::Candidate;
use crate::algorithm::kernels::{Kernel, chunk_includes, merge_includes};
use crate::compare::{Compare, CrossLess};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::policy::ExecutionPolicy;
use crate::sequence::Element;
use crate::shape::RangeView;
use crate::value::Convert;

/// Worker pool backing the parallel policies.
#[derive(Debug)]
pub struct ParallelRuntime {
    pool: rayon::ThreadPool,
}

impl ParallelRuntime {
    /// Builds a pool; `None` lets rayon pick the thread count.
    pub fn new(workers: Option<usize>) -> Result<Self, HarnessError> {
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(|i| format!("includes-worker-{i}"));
        if let Some(workers) = workers {
            builder = builder.num_threads(workers);
        }
        Ok(Self {
            pool: builder.build()?,
        })
    }

    /// Number of worker threads.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside the pool and waits for its result.
    pub fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(op)
    }
}

/// The candidate implementation shipped with the harness.
#[derive(Debug)]
pub struct PstlCandidate {
    runtime: ParallelRuntime,
    grain: usize,
}

impl PstlCandidate {
    /// Builds a candidate with its own pool.
    pub fn new(workers: Option<usize>, grain: usize) -> Result<Self, HarnessError> {
        if grain == 0 {
            return Err(HarnessError::invalid("grain", "must be at least 1"));
        }
        Ok(Self {
            runtime: ParallelRuntime::new(workers)?,
            grain,
        })
    }

    /// Builds a candidate from the worker and grain settings of `config`.
    pub fn from_config(config: &HarnessConfig) -> Result<Self, HarnessError> {
        Self::new(config.workers, config.grain)
    }

    /// Chunk size used by the parallel policies.
    #[must_use]
    pub const fn grain(&self) -> usize {
        self.grain
    }

    /// The worker pool.
    #[must_use]
    pub const fn runtime(&self) -> &ParallelRuntime {
        &self.runtime
    }
}

impl Candidate for PstlCandidate {
    fn name(&self) -> &'static str {
        "pstl"
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
        let kernel = if policy.is_vectorized() {
            Kernel::Gallop
        } else {
            Kernel::Merge
        };
        match (first.as_slice(), second.as_slice()) {
            (Some(first), Some(second)) if policy.is_parallel() => {
                let grain = self.grain;
                self.runtime
                    .install(|| par_includes(first, second, &comp, grain, kernel))
            }
            (Some(first), Some(second)) => kernel.run(first, second, &mut CrossLess::new(comp)),
            _ => merge_includes(first.iter(), second.iter(), &mut CrossLess::new(comp)),
        }
    }
}

/// Chunked inclusion of `second` in `first` on the current rayon pool.
///
/// Each chunk clones the comparator, so comparators that need exclusive
/// access work unchanged.
pub(crate) fn par_includes<A, B, C>(
    first: &[A],
    second: &[B],
    comp: &C,
    grain: usize,
    kernel: Kernel,
) -> bool
where
    A: Convert<B> + Sync,
    B: Convert<A> + Sync,
    C: Compare<A, B> + Clone + Send + Sync,
{
    let (Some(first_head), Some(second_head)) = (first.first(), second.first()) else {
        return second.is_empty();
    };
    let (Some(first_tail), Some(second_tail)) = (first.last(), second.last()) else {
        return second.is_empty();
    };
    let mut less = CrossLess::new(comp.clone());
    if less.second_first(second_head, first_head) || less.first_second(first_tail, second_tail) {
        return false;
    }
    if second.len() <= grain {
        return kernel.run(first, second, &mut less);
    }

    let chunks = second.len().div_ceil(grain);
    trace!(chunks, grain, "parallel includes");
    (0..chunks).into_par_iter().all(|chunk| {
        let lo = chunk * grain;
        let hi = (lo + grain).min(second.len());
        let mut less = CrossLess::new(comp.clone());
        chunk_includes(first, second, lo, hi, &mut less, kernel)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::reference;
    use crate::compare::{NonConst, less};
    use crate::shape::{BidirectionalView, ForwardView, RandomAccessView};
    use crate::value::Num;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    fn candidate(grain: usize) -> PstlCandidate {
        PstlCandidate::new(Some(2), grain).expect("pool")
    }

    #[test]
    fn every_policy_agrees_on_examples() {
        init_test("every_policy_agrees_on_examples");
        let cand = candidate(1);
        let first = [0.0, 2.0, 2.0, 5.0];
        let cases: [(&[f64], bool); 5] = [
            (&[2.0, 2.0], true),
            (&[2.0, 2.0, 2.0], false),
            (&[], true),
            (&[0.0, 5.0], true),
            (&[6.0], false),
        ];
        for policy in ExecutionPolicy::ALL {
            for (second, expected) in cases {
                let actual = cand.includes(
                    policy,
                    RandomAccessView::new(&first),
                    RandomAccessView::new(second),
                    less::<f64>,
                );
                crate::assert_with_log!(actual == expected, policy.as_str(), expected, actual);
            }
        }
        crate::test_complete!("every_policy_agrees_on_examples");
    }

    #[test]
    fn parallel_matches_reference_with_duplicates() {
        init_test("parallel_matches_reference_with_duplicates");
        let cand = candidate(3);
        let first: Vec<u32> = (0..200).map(|v| v / 4).collect();
        for m in [0_usize, 1, 7, 16, 40, 120] {
            let second: Vec<u32> = (0..m as u32).map(|v| v / 3).collect();
            let expected = reference::includes(&first, &second, less::<u32>);
            for policy in [ExecutionPolicy::Parallel, ExecutionPolicy::ParallelUnsequenced] {
                let actual = cand.includes(
                    policy,
                    RandomAccessView::new(&first),
                    RandomAccessView::new(&second),
                    NonConst::new(less::<u32>),
                );
                crate::assert_with_log!(actual == expected, policy.as_str(), expected, actual);
            }
        }
        crate::test_complete!("parallel_matches_reference_with_duplicates");
    }

    #[test]
    fn non_random_access_views_fall_back() {
        init_test("non_random_access_views_fall_back");
        let cand = candidate(1);
        let first = [1_i64, 1, 2].map(Num::new);
        let second = [1_i32, 1].map(Num::new);
        let comp = |x: &Num<i64>, y: &Num<i32>| x < y;
        let fwd = cand.includes(
            ExecutionPolicy::Parallel,
            ForwardView::new(&first),
            ForwardView::new(&second),
            comp,
        );
        let bidi = cand.includes(
            ExecutionPolicy::Sequenced,
            BidirectionalView::new(&first),
            BidirectionalView::new(&second),
            comp,
        );
        crate::assert_with_log!(fwd && bidi, "cross-type fallback", true, (fwd, bidi));
        crate::test_complete!("non_random_access_views_fall_back");
    }

    #[test]
    fn pool_honours_worker_count() {
        init_test("pool_honours_worker_count");
        let cand = PstlCandidate::new(Some(3), 4).expect("pool");
        let workers = cand.runtime().workers();
        crate::assert_with_log!(workers == 3, "workers", 3, workers);
        let on_pool = cand
            .runtime()
            .install(|| rayon::current_thread_index().is_some());
        crate::assert_with_log!(on_pool, "runs on a pool thread", true, on_pool);
        crate::test_complete!("pool_honours_worker_count");
    }

    #[test]
    fn zero_grain_is_rejected() {
        init_test("zero_grain_is_rejected");
        let err = PstlCandidate::new(None, 0).err();
        let is_config = err.as_ref().is_some_and(HarnessError::is_config);
        crate::assert_with_log!(is_config, "grain", true, err);
        crate::test_complete!("zero_grain_is_rejected");
    }
}
