//! Ordered values used as sweep elements.
//!
//! Two kinds of values flow through the harness:
//!
//! - bare numeric scalars ([`Scalar`]), compared with their own `PartialOrd`;
//! - the [`Num`] wrapper, which compares against a `Num` of a *different*
//!   scalar type and converts into one on request.
//!
//! The wrapper exists so the candidate algorithm is exercised with two ranges
//! whose element types differ but are mutually comparable. Comparison widens
//! both sides to a common domain ([`Wide`]) following the usual numeric
//! conversion rules. Conversion is explicit ([`Convert`]) and is invoked at
//! comparison sites by [`CrossLess`](crate::compare::CrossLess).

use core::cmp::Ordering;
use core::fmt;

/// A scalar widened into a common comparison domain.
///
/// Integers widen losslessly into `i128`; floats widen into `f64`. Mixed
/// integer/float comparisons happen in `f64`, as they would after the usual
/// arithmetic conversions.
#[derive(Debug, Clone, Copy)]
pub enum Wide {
    /// Any integer scalar.
    Int(i128),
    /// Any floating-point scalar.
    Float(f64),
}

impl Wide {
    fn as_f64(self) -> f64 {
        match self {
            #[allow(clippy::cast_precision_loss)]
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl PartialEq for Wide {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Wide {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// A built-in numeric type usable as an ordered value.
pub trait Scalar: Copy + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Widens the scalar into the common comparison domain.
    fn widen(self) -> Wide;

    /// Narrows a widened value into this type with `as`-cast semantics.
    fn narrow(wide: Wide) -> Self;

    /// Converts into another scalar type with `as`-cast semantics.
    #[must_use]
    fn cast<U: Scalar>(self) -> U {
        U::narrow(self.widen())
    }
}

macro_rules! impl_int_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn widen(self) -> Wide {
                Wide::Int(i128::from(self))
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_possible_wrap
            )]
            fn narrow(wide: Wide) -> Self {
                match wide {
                    Wide::Int(v) => v as Self,
                    Wide::Float(v) => v as Self,
                }
            }
        }
    )*};
}

macro_rules! impl_float_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Scalar for $ty {
            fn widen(self) -> Wide {
                Wide::Float(f64::from(self))
            }

            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            fn narrow(wide: Wide) -> Self {
                match wide {
                    Wide::Int(v) => v as Self,
                    Wide::Float(v) => v as Self,
                }
            }
        }
    )*};
}

impl_int_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_float_scalar!(f32, f64);

/// Explicit conversion between ordered value types.
///
/// Generic comparison code converts an element of one range into the element
/// type of the other before calling a comparator that only accepts the latter.
pub trait Convert<T> {
    /// Converts `self` into a `T`.
    fn convert(&self) -> T;
}

impl<T: Scalar, U: Scalar> Convert<U> for T {
    fn convert(&self) -> U {
        self.cast()
    }
}

/// Minimal ordered value wrapper with cross-type comparison and conversion.
///
/// ```
/// use includes_conformance::value::Num;
///
/// let wide = Num::new(7_i64);
/// let narrow = Num::new(9_i32);
/// assert!(wide < narrow);
/// assert_eq!(wide.convert::<i32>().get(), 7);
/// ```
#[derive(Clone, Copy)]
pub struct Num<T> {
    val: T,
}

impl<T: Scalar> Num<T> {
    /// Wraps a scalar.
    #[must_use]
    pub const fn new(val: T) -> Self {
        Self { val }
    }

    /// Returns the wrapped scalar.
    #[must_use]
    pub const fn get(self) -> T {
        self.val
    }

    /// Converts into a wrapper over another scalar type.
    #[must_use]
    pub fn convert<U: Scalar>(self) -> Num<U> {
        Num::new(self.val.cast())
    }
}

impl<T: Scalar, U: Scalar> Convert<Num<U>> for Num<T> {
    fn convert(&self) -> Num<U> {
        (*self).convert()
    }
}

impl<T: Scalar, U: Scalar> PartialEq<Num<U>> for Num<T> {
    fn eq(&self, other: &Num<U>) -> bool {
        self.val.widen() == other.val.widen()
    }
}

impl<T: Scalar, U: Scalar> PartialOrd<Num<U>> for Num<T> {
    fn partial_cmp(&self, other: &Num<U>) -> Option<Ordering> {
        self.val.widen().partial_cmp(&other.val.widen())
    }
}

impl<T: fmt::Debug> fmt::Debug for Num<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Num({:?})", self.val)
    }
}
