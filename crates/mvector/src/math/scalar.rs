use std::fmt;

use num_traits::{Signed, Zero};
use rand::distributions::uniform::SampleUniform;

use crate::error::VectorError;

/// Element type of a [`Vector`](crate::math::Vector).
///
/// Covers the signed integer and floating point primitives. The hooks below
/// are the places where integer and float semantics differ.
pub trait Scalar:
    Copy + PartialOrd + Signed + SampleUniform + fmt::Debug + fmt::Display + 'static
{
    fn as_f64(self) -> f64;

    /// Truncates toward zero for integer types.
    fn from_f64(value: f64) -> Self;

    /// `Some(1 / self)` for floats, `None` for integers.
    fn reciprocal(self) -> Option<Self>;

    /// IEEE division for floats (a zero divisor gives inf or NaN), checked
    /// division for integers.
    fn checked_quotient(self, rhs: Self) -> Result<Self, VectorError>;

    /// Whether `max - min` is representable in `Self`.
    fn span_is_finite(min: Self, max: Self) -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn reciprocal(self) -> Option<Self> {
                Some(1.0 / self)
            }

            #[inline]
            fn checked_quotient(self, rhs: Self) -> Result<Self, VectorError> {
                Ok(self / rhs)
            }

            fn span_is_finite(min: Self, max: Self) -> bool {
                (max - min).is_finite()
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn reciprocal(self) -> Option<Self> {
                None
            }

            fn checked_quotient(self, rhs: Self) -> Result<Self, VectorError> {
                if rhs.is_zero() {
                    return Err(VectorError::DivisionByZero);
                }
                self.checked_div(rhs).ok_or(VectorError::ArithmeticOverflow)
            }

            fn span_is_finite(_min: Self, _max: Self) -> bool {
                true
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_quotient_reports_zero_divisor() {
        assert_eq!(7i32.checked_quotient(0), Err(VectorError::DivisionByZero));
        assert_eq!(7i32.checked_quotient(2), Ok(3));
        assert_eq!(
            i8::MIN.checked_quotient(-1),
            Err(VectorError::ArithmeticOverflow)
        );
    }

    #[test]
    fn float_quotient_follows_ieee() {
        assert_eq!(1.0f64.checked_quotient(0.0), Ok(f64::INFINITY));
        assert!(0.0f64.checked_quotient(0.0).unwrap().is_nan());
    }

    #[test]
    fn reciprocal_only_for_floats() {
        assert_eq!(4.0f32.reciprocal(), Some(0.25));
        assert_eq!(4i64.reciprocal(), None);
    }

    #[test]
    fn span_overflow_is_detected_for_floats() {
        assert!(f32::span_is_finite(-1.0, 1.0));
        assert!(!f32::span_is_finite(f32::MIN, f32::MAX));
        assert!(i32::span_is_finite(i32::MIN, i32::MAX));
    }
}
