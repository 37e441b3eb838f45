//! Inclusion kernels used by the default candidate.
//!
//! - [`merge_includes`]: single pass over any iterator pair.
//! - [`gallop_includes`]: run-length batches over slices, locating each run of
//!   `second` in `first` with an exponential search.
//! - [`chunk_includes`]: checks one chunk of `second` independently, after
//!   moving the chunk's bounds so no run of equivalent elements is split.

use crate::compare::{Compare, CrossLess};
use crate::value::Convert;

/// Which kernel a chunk or a whole call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kernel {
    Merge,
    Gallop,
}

impl Kernel {
    pub(crate) fn run<A, B, C>(self, first: &[A], second: &[B], less: &mut CrossLess<A, B, C>) -> bool
    where
        A: Convert<B>,
        B: Convert<A>,
        C: Compare<A, B>,
    {
        match self {
            Self::Merge => merge_includes(first, second, less),
            Self::Gallop => gallop_includes(first, second, less),
        }
    }
}

pub(crate) fn merge_includes<'a, A, B, C, I1, I2>(
    first: I1,
    second: I2,
    less: &mut CrossLess<A, B, C>,
) -> bool
where
    A: Convert<B> + 'a,
    B: Convert<A> + 'a,
    C: Compare<A, B>,
    I1: IntoIterator<Item = &'a A>,
    I2: IntoIterator<Item = &'a B>,
{
    let mut first = first.into_iter().peekable();
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
            first.next();
            break;
        }
    }
    true
}

pub(crate) fn gallop_includes<A, B, C>(
    first: &[A],
    second: &[B],
    less: &mut CrossLess<A, B, C>,
) -> bool
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    let mut lo = 0;
    let mut j = 0;
    while j < second.len() {
        let pivot = &second[j];
        let run = 1 + second[j + 1..].partition_point(|b| !less.second_second(pivot, b));
        let start = lo + gallop_lower_bound(&first[lo..], |a| less.first_second(a, pivot));
        let end = start + run;
        // first[start] is not before pivot; the run matches iff first[end - 1]
        // is not after it.
        if end > first.len() || less.second_first(pivot, &first[end - 1]) {
            return false;
        }
        lo = end;
        j += run;
    }
    true
}

/// First index whose element is not `before`, probing 1, 2, 4, ... first.
fn gallop_lower_bound<T>(items: &[T], mut before: impl FnMut(&T) -> bool) -> usize {
    let mut bound = 1;
    while bound <= items.len() && before(&items[bound - 1]) {
        bound *= 2;
    }
    let lo = bound / 2;
    let hi = bound.min(items.len());
    lo + items[lo..hi].partition_point(before)
}

fn equivalent<A, B, C>(less: &mut CrossLess<A, B, C>, x: &B, y: &B) -> bool
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    !less.second_second(x, y) && !less.second_second(y, x)
}

fn upper_bound<A, B, C>(less: &mut CrossLess<A, B, C>, items: &[B], pivot: &B) -> usize
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    items.partition_point(|b| !less.second_second(pivot, b))
}

/// Checks `second[lo..hi]` against `first` in isolation.
///
/// A chunk that starts inside a run of equivalent elements skips that run,
/// and a chunk that ends inside one extends to its end, so every run is
/// checked whole by exactly one chunk.
pub(crate) fn chunk_includes<A, B, C>(
    first: &[A],
    second: &[B],
    lo: usize,
    hi: usize,
    less: &mut CrossLess<A, B, C>,
    kernel: Kernel,
) -> bool
where
    A: Convert<B>,
    B: Convert<A>,
    C: Compare<A, B>,
{
    let mut i = lo;
    let mut j = hi;
    if i > 0 && equivalent(less, &second[i - 1], &second[i]) {
        if equivalent(less, &second[i], &second[j - 1]) {
            return true;
        }
        i += upper_bound(less, &second[i..j], &second[i]);
    }
    if j < second.len() && equivalent(less, &second[j - 1], &second[j]) {
        j += upper_bound(less, &second[j..], &second[j]);
    }
    let pivot = &second[i];
    let start = first.partition_point(|a| less.first_second(a, pivot));
    kernel.run(&first[start..], &second[i..j], less)
}
