//! Generated input sequences.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Deref;

use crate::util::SweepRng;
use crate::value::{Num, Scalar, Wide};

/// An ordered value the generator can build from a raw random number.
pub trait Element: Clone + fmt::Debug + Send + Sync + 'static {
    /// Builds an element from a raw generator value.
    fn from_raw(raw: u32) -> Self;
}

impl<T: Scalar> Element for T {
    fn from_raw(raw: u32) -> Self {
        T::narrow(Wide::Int(i128::from(raw)))
    }
}

impl<T: Scalar> Element for Num<T> {
    fn from_raw(raw: u32) -> Self {
        Self::new(T::from_raw(raw))
    }
}

/// A finite input range, mutable until sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T: Element> Sequence<T> {
    /// Builds a sequence of length `n` whose element `k` is `f(rng, k)`.
    ///
    /// Elements are produced in index order, so the random stream is consumed
    /// deterministically.
    pub fn generate<F>(n: usize, rng: &mut SweepRng, mut f: F) -> Self
    where
        F: FnMut(&mut SweepRng, usize) -> T,
    {
        let mut items = Vec::with_capacity(n);
        for k in 0..n {
            items.push(f(rng, k));
        }
        Self { items }
    }

    /// Element `k` is `rand() % (2k + 1)`: wide range, many distinct values.
    pub fn wide(n: usize, rng: &mut SweepRng) -> Self {
        Self::generate(n, rng, |rng, k| T::from_raw(rng.below(2 * k as u64 + 1)))
    }

    /// Element `k` is `rand() % (k + 1)`: narrow range, heavy duplication.
    pub fn narrow(n: usize, rng: &mut SweepRng) -> Self {
        Self::generate(n, rng, |rng, k| T::from_raw(rng.below(k as u64 + 1)))
    }

    /// Sorts in place under a strict-weak-ordering predicate.
    pub fn sort_by_less<F>(&mut self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.sort_by(|a, b| {
            if less(a, b) {
                Ordering::Less
            } else if less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
    }

    /// Returns true when no adjacent pair is out of order under `less`.
    pub fn is_sorted_by_less<F>(&self, mut less: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.items.windows(2).all(|w| !less(&w[1], &w[0]))
    }
}

impl<T> Sequence<T> {
    /// Borrows the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}
