//! `std::ops` implementations for [`Vector`].
//!
//! Each operator forwards to the matching `try_*` method and panics with the
//! error message when the operands do not fit.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::VectorError;
use crate::math::scalar::Scalar;
use crate::math::vector::Vector;

#[track_caller]
fn or_panic<U>(result: Result<U, VectorError>) -> U {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

macro_rules! impl_elementwise_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, 'b, T: Scalar> $trait<&'b Vector<T>> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &'b Vector<T>) -> Self::Output {
                or_panic(self.$checked(rhs))
            }
        }

        impl<T: Scalar> $trait<Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl<'b, T: Scalar> $trait<&'b Vector<T>> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &'b Vector<T>) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl<'a, T: Scalar> $trait<Vector<T>> for &'a Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: Vector<T>) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add, try_add);
impl_elementwise_op!(Sub, sub, try_sub);
impl_elementwise_op!(Mul, mul, try_mul);

impl<'a, T: Scalar> Neg for &'a Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        self.mapv(|&x| -x)
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(mut self) -> Self::Output {
        for x in self.iter_mut() {
            *x = -*x;
        }
        self
    }
}

impl<'a, T: Scalar> Mul<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, t: T) -> Self::Output {
        self.scale(t)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(mut self, t: T) -> Self::Output {
        self.scale_assign(t);
        self
    }
}

// Scalar on the left needs a concrete type per primitive.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: Vector<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl<'a> Mul<&'a Vector<$t>> for $t {
            type Output = Vector<$t>;

            fn mul(self, rhs: &'a Vector<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, isize);

impl<'a, T: Scalar> Div<T> for &'a Vector<T> {
    type Output = Vector<T>;

    fn div(self, t: T) -> Self::Output {
        or_panic(self.try_div_scalar(t))
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<T>;

    fn div(self, t: T) -> Self::Output {
        Div::div(&self, t)
    }
}

impl<'b, T: Scalar> AddAssign<&'b Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &'b Vector<T>) {
        or_panic(self.try_add_assign(rhs));
    }
}

impl<T: Scalar> AddAssign<Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: Vector<T>) {
        *self += &rhs;
    }
}

impl<'b, T: Scalar> SubAssign<&'b Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &'b Vector<T>) {
        or_panic(self.try_sub_assign(rhs));
    }
}

impl<T: Scalar> SubAssign<Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: Vector<T>) {
        *self -= &rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, t: T) {
        self.scale_assign(t);
    }
}

impl<T: Scalar> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, t: T) {
        or_panic(self.try_div_assign(t));
    }
}

#[cfg(test)]
mod tests {
    use crate::math::{Color, Point, Vector};

    #[test]
    fn operators_cover_owned_and_borrowed_operands() {
        let a = Point::from([1.0, 2.0, 3.0]);
        let b = Point::from([4.0, 5.0, 6.0]);

        assert_eq!((&a + &b).to_vec(), vec![5.0, 7.0, 9.0]);
        assert_eq!((a.clone() - &b).to_vec(), vec![-3.0, -3.0, -3.0]);
        assert_eq!((&a * b.clone()).to_vec(), vec![4.0, 10.0, 18.0]);
        assert_eq!((a.clone() + b.clone()).to_vec(), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn scalar_multiply_in_both_orders() {
        let a = Point::from([1.0, -2.0]);
        assert_eq!(2.0 * &a, &a * 2.0);
        assert_eq!((3.0 * a.clone()).to_vec(), vec![3.0, -6.0]);

        let c = Color::from([1, 2, 3]);
        assert_eq!((2 * c).to_vec(), vec![2, 4, 6]);
    }

    #[test]
    fn negation() {
        let a = Vector::from([1, -2, 0]);
        assert_eq!((-&a).to_vec(), vec![-1, 2, 0]);
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn float_division_by_zero_is_infinite() {
        let a = Point::from([1.0, -1.0]);
        let q = a / 0.0;
        assert_eq!(q[0], f64::INFINITY);
        assert_eq!(q[1], f64::NEG_INFINITY);
    }

    #[test]
    fn compound_assignment() {
        let mut a = Point::from([1.0, 2.0]);
        a += &Point::from([1.0, 1.0]);
        a -= Point::from([0.5, 0.5]);
        a *= 2.0;
        a /= 4.0;
        assert_eq!(a.to_vec(), vec![0.75, 1.25]);
    }

    #[test]
    #[should_panic(expected = "addition requires vectors of equal length (got 2 and 3)")]
    fn add_panics_on_length_mismatch() {
        let _ = &Point::from([1.0, 2.0]) + &Point::from([1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn integer_division_by_zero_panics() {
        let mut c = Color::from([1, 2]);
        c /= 0;
    }
}
