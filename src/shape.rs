//! Access shapes: the traversal capabilities a range is presented with.
//!
//! A sorted slice is wrapped in a view that exposes only what its shape
//! allows:
//!
//! | View | Shape | Iterator | Random access |
//! |------|-------|----------|---------------|
//! | [`ForwardView`] | [`Forward`] | `Iterator` only | no |
//! | [`BidirectionalView`] | [`Bidirectional`] | `DoubleEndedIterator` | no |
//! | [`RandomAccessView`] | [`RandomAccess`] | slice iterator | yes |
//! | [`ReverseView`] | [`Reversed<S>`] | reversed inner iterator | no |
//!
//! Each shape also carries an [`Admission`]: whether ordered inclusion is a
//! meaningful check under that traversal. A reversed range is sorted under the
//! opposite order, so it is `Skipped`. The choice is made by type, so the
//! skipped branch is never instantiated for the check.

use core::fmt;
use core::iter::Rev;
use core::marker::PhantomData;
use core::slice;

/// Type-level gate selecting whether a check runs.
pub trait Admission {
    /// Whether checks are executed under this gate.
    const CHECKED: bool;

    /// Runs `check` when admitted.
    fn admit<R, F: FnOnce() -> R>(check: F) -> Option<R>;
}

/// Gate that runs the check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checked;

/// Gate that drops the check without running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skipped;

impl Admission for Checked {
    const CHECKED: bool = true;

    fn admit<R, F: FnOnce() -> R>(check: F) -> Option<R> {
        Some(check())
    }
}

impl Admission for Skipped {
    const CHECKED: bool = false;

    fn admit<R, F: FnOnce() -> R>(_check: F) -> Option<R> {
        None
    }
}

/// A traversal capability tag.
pub trait AccessShape {
    /// Stable name for logs and reports.
    const NAME: &'static str;
    /// Whether inclusion checks run when the first range has this shape.
    type Admission: Admission;
}

/// Single-pass forward traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forward;

/// Forward and backward traversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bidirectional;

/// Indexed traversal; the view can hand out its slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAccess;

/// Reversed traversal of an inner shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<S>(PhantomData<S>);

impl AccessShape for Forward {
    const NAME: &'static str = "forward";
    type Admission = Checked;
}

impl AccessShape for Bidirectional {
    const NAME: &'static str = "bidirectional";
    type Admission = Checked;
}

impl AccessShape for RandomAccess {
    const NAME: &'static str = "random_access";
    type Admission = Checked;
}

impl AccessShape for Reversed<Bidirectional> {
    const NAME: &'static str = "reverse_bidirectional";
    type Admission = Skipped;
}

impl AccessShape for Reversed<RandomAccess> {
    const NAME: &'static str = "reverse_random_access";
    type Admission = Skipped;
}

/// A borrowed range presented through one access shape.
pub trait RangeView<'a, T: 'a>: Copy {
    /// The traversal capability of this view.
    type Shape: AccessShape;
    /// Iterator over the elements in traversal order.
    type Iter: Iterator<Item = &'a T> + Clone;

    /// Starts a traversal.
    fn iter(self) -> Self::Iter;

    /// Number of elements.
    fn len(self) -> usize;

    /// Returns true when the range is empty.
    fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// The underlying slice in traversal order, for random-access views only.
    fn as_slice(self) -> Option<&'a [T]> {
        None
    }
}

macro_rules! slice_view {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<'a, T> {
            items: &'a [T],
        }

        impl<'a, T> $name<'a, T> {
            /// Wraps a slice.
            #[must_use]
            pub const fn new(items: &'a [T]) -> Self {
                Self { items }
            }
        }

        impl<T> Clone for $name<'_, T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<T> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("len", &self.items.len())
                    .finish()
            }
        }
    };
}

slice_view!(
    /// Forward-only view.
    ForwardView
);
slice_view!(
    /// Bidirectional view without random access.
    BidirectionalView
);
slice_view!(
    /// Random-access view.
    RandomAccessView
);

/// Iterator that only exposes forward traversal.
pub struct ForwardIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for ForwardIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

/// Iterator that exposes forward and backward traversal, but no indexing.
pub struct BidirectionalIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for BidirectionalIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for BidirectionalIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

impl<'a, T> DoubleEndedIterator for BidirectionalIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<'a, T: 'a> RangeView<'a, T> for ForwardView<'a, T> {
    type Shape = Forward;
    type Iter = ForwardIter<'a, T>;

    fn iter(self) -> Self::Iter {
        ForwardIter {
            inner: self.items.iter(),
        }
    }

    fn len(self) -> usize {
        self.items.len()
    }
}

impl<'a, T: 'a> RangeView<'a, T> for BidirectionalView<'a, T> {
    type Shape = Bidirectional;
    type Iter = BidirectionalIter<'a, T>;

    fn iter(self) -> Self::Iter {
        BidirectionalIter {
            inner: self.items.iter(),
        }
    }

    fn len(self) -> usize {
        self.items.len()
    }
}

impl<'a, T: 'a> RangeView<'a, T> for RandomAccessView<'a, T> {
    type Shape = RandomAccess;
    type Iter = slice::Iter<'a, T>;

    fn iter(self) -> Self::Iter {
        self.items.iter()
    }

    fn len(self) -> usize {
        self.items.len()
    }

    fn as_slice(self) -> Option<&'a [T]> {
        Some(self.items)
    }
}

/// Reversed traversal of a bidirectional-capable view.
#[derive(Debug, Clone, Copy)]
pub struct ReverseView<V> {
    inner: V,
}

impl<V> ReverseView<V> {
    /// Wraps a view.
    #[must_use]
    pub const fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<'a, T, V> RangeView<'a, T> for ReverseView<V>
where
    T: 'a,
    V: RangeView<'a, T>,
    V::Iter: DoubleEndedIterator,
    Reversed<V::Shape>: AccessShape,
{
    type Shape = Reversed<V::Shape>;
    type Iter = Rev<V::Iter>;

    fn iter(self) -> Self::Iter {
        self.inner.iter().rev()
    }

    fn len(self) -> usize {
        self.inner.len()
    }
}
