//! Fan-out of one test case over every execution policy and access shape.
//!
//! | Policy | Shapes |
//! |--------|--------|
//! | `seq`, `par` | forward, bidirectional, reverse bidirectional, random access, reverse random access |
//! | `unseq`, `par_unseq` | random access, reverse random access |
//!
//! Both ranges are presented with the same shape.

use crate::compare::Compare;
use crate::policy::ExecutionPolicy;
use crate::shape::{BidirectionalView, ForwardView, RandomAccessView, RangeView, ReverseView};

/// A test case that can run against any view pair.
pub trait PolicyCase<A, B> {
    /// Runs the case for one policy and one view pair.
    fn run<'a, V1, V2, C>(&mut self, policy: ExecutionPolicy, first: V1, second: V2, comp: C)
    where
        A: 'a,
        B: 'a,
        V1: RangeView<'a, A>,
        V2: RangeView<'a, B>,
        C: Compare<A, B> + Clone + Send + Sync;
}

/// Invokes `case` once per registered (policy, shape) combination.
///
/// Each invocation receives its own clone of `comp`.
pub fn invoke_on_all_policies<A, B, P, C>(case: &mut P, first: &[A], second: &[B], comp: &C)
where
    P: PolicyCase<A, B>,
    C: Compare<A, B> + Clone + Send + Sync,
{
    for policy in ExecutionPolicy::ALL {
        if policy.accepts_sequential_shapes() {
            case.run(
                policy,
                ForwardView::new(first),
                ForwardView::new(second),
                comp.clone(),
            );
            case.run(
                policy,
                BidirectionalView::new(first),
                BidirectionalView::new(second),
                comp.clone(),
            );
            case.run(
                policy,
                ReverseView::new(BidirectionalView::new(first)),
                ReverseView::new(BidirectionalView::new(second)),
                comp.clone(),
            );
        }
        case.run(
            policy,
            RandomAccessView::new(first),
            RandomAccessView::new(second),
            comp.clone(),
        );
        case.run(
            policy,
            ReverseView::new(RandomAccessView::new(first)),
            ReverseView::new(RandomAccessView::new(second)),
            comp.clone(),
        );
    }
}
