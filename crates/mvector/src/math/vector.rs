use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use num_traits::{Float, Zero};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::VectorError;
use crate::math::scalar::Scalar;

/// Magnitude below which every component must fall for [`Vector::near_zero`].
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Owned, resizable sequence of scalars with vector arithmetic.
///
/// Binary operations come in two forms: `try_*` methods (and the free
/// functions [`dot`] and [`cross`]) that return a [`VectorError`] when the
/// operands do not fit, and the `std::ops` operators, which panic with the
/// same message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    data: Vec<T>,
}

/// Vector of floating point coordinates.
pub type Point = Vector<f64>;

/// Vector of integer channels.
pub type Color = Vector<i32>;

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Vector<U>
    where
        F: FnMut(&T) -> U,
    {
        Vector::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone,
{
    pub fn from_elem(len: usize, value: T) -> Self {
        Vector::from_vec(vec![value; len])
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }

    /// Grows with zeros or truncates to `len` components.
    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, T::zero());
    }
}

impl<T: Scalar> Vector<T> {
    fn check_same_len(&self, other: &Vector<T>, op: &'static str) -> Result<(), VectorError> {
        if self.len() != other.len() {
            return Err(VectorError::LengthMismatch {
                op,
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector<T>, op: &'static str, f: F) -> Result<Vector<T>, VectorError>
    where
        F: Fn(T, T) -> T,
    {
        self.check_same_len(other, op)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    fn dot_unchecked(&self, other: &Vector<T>) -> T {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    pub fn try_add(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Elementwise (Hadamard) product. See [`Vector::dot`] for the scalar product.
    pub fn try_mul(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        self.zip_with(other, "elementwise product", |a, b| a * b)
    }

    /// Sum of pairwise products, accumulated from index 0 upward.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, VectorError> {
        self.check_same_len(other, "dot product")?;
        Ok(self.dot_unchecked(other))
    }

    pub fn cross(&self, other: &Vector<T>) -> Result<Vector<T>, VectorError> {
        for operand in [self, other] {
            if operand.len() != 3 {
                return Err(VectorError::DimensionMismatch {
                    op: "cross product",
                    expected: 3,
                    found: operand.len(),
                });
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Vector::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn scale(&self, t: T) -> Vector<T> {
        self.mapv(|&x| t * x)
    }

    /// Divides every component by `t`.
    ///
    /// Float vectors are multiplied by a single precomputed reciprocal, so a
    /// zero divisor yields infinities or NaN. Integer vectors use exact
    /// quotients and report [`VectorError::DivisionByZero`].
    pub fn try_div_scalar(&self, t: T) -> Result<Vector<T>, VectorError> {
        match t.reciprocal() {
            Some(inv) => Ok(self.scale(inv)),
            None => self.data.iter().map(|&x| x.checked_quotient(t)).collect(),
        }
    }

    pub fn try_add_assign(&mut self, other: &Vector<T>) -> Result<&mut Self, VectorError> {
        self.check_same_len(other, "addition")?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + b;
        }
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, other: &Vector<T>) -> Result<&mut Self, VectorError> {
        self.check_same_len(other, "subtraction")?;
        for (a, &b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a - b;
        }
        Ok(self)
    }

    pub fn scale_assign(&mut self, t: T) -> &mut Self {
        for x in self.data.iter_mut() {
            *x = *x * t;
        }
        self
    }

    /// Divides each component by `t` in place. The receiver is left
    /// untouched when an integer division fails.
    pub fn try_div_assign(&mut self, t: T) -> Result<&mut Self, VectorError> {
        let quotients = self
            .data
            .iter()
            .map(|&x| x.checked_quotient(t))
            .collect::<Result<Vec<T>, VectorError>>()?;
        self.data = quotients;
        Ok(self)
    }

    pub fn length_sq(&self) -> T {
        self.dot_unchecked(self)
    }

    /// Euclidean norm, computed in f64.
    ///
    /// Components are divided by the largest magnitude before squaring, so
    /// the result is zero only when every component is zero and integer
    /// vectors never overflow their own type.
    pub fn length(&self) -> f64 {
        let scale = self
            .data
            .iter()
            .map(|x| x.as_f64().abs())
            .fold(0.0, f64::max);
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let sum: f64 = self
            .data
            .iter()
            .map(|x| {
                let r = x.as_f64() / scale;
                r * r
            })
            .sum();
        scale * sum.sqrt()
    }

    pub fn near_zero(&self) -> bool {
        self.data
            .iter()
            .all(|x| x.as_f64().abs() < NEAR_ZERO_EPSILON)
    }

    /// Fills every component with an independent sample from `[-1, 1]`.
    ///
    /// A new entropy-seeded generator is created on each call; use
    /// [`Vector::random_seeded`] or [`Vector::random_with`] for reproducible
    /// output.
    pub fn random(&mut self) -> &mut Self {
        let mut rng = StdRng::from_entropy();
        self.fill_uniform(&mut rng, -T::one(), T::one());
        self
    }

    /// Like [`Vector::random`] but sampling from `[min, max]`.
    pub fn random_range(&mut self, min: T, max: T) -> Result<&mut Self, VectorError> {
        let mut rng = StdRng::from_entropy();
        self.random_with(&mut rng, min, max)
    }

    pub fn random_seeded(&mut self, seed: u64, min: T, max: T) -> Result<&mut Self, VectorError> {
        log::trace!("Filling {} components from seed {}", self.len(), seed);
        let mut rng = StdRng::seed_from_u64(seed);
        self.random_with(&mut rng, min, max)
    }

    pub fn random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: T,
        max: T,
    ) -> Result<&mut Self, VectorError> {
        // `!(min <= max)` also rejects NaN bounds.
        if !(min <= max) || !T::span_is_finite(min, max) {
            return Err(VectorError::InvalidRange {
                min: min.as_f64(),
                max: max.as_f64(),
            });
        }
        self.fill_uniform(rng, min, max);
        Ok(self)
    }

    fn fill_uniform<R: Rng + ?Sized>(&mut self, rng: &mut R, min: T, max: T) {
        let uniform = Uniform::new_inclusive(min, max);
        for x in self.data.iter_mut() {
            *x = uniform.sample(rng);
        }
    }
}

impl<T: Scalar + Float> Vector<T> {
    /// `self / self.length()`. A zero-length input yields NaN components.
    pub fn unit_vector(&self) -> Vector<T> {
        let length = self.length();
        if length == 0.0 {
            log::debug!("unit_vector called on a zero-length vector of {} components", self.len());
        }
        self.scale(T::one() / T::from_f64(length))
    }
}

pub fn dot<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<T, VectorError> {
    a.dot(b)
}

pub fn cross<T: Scalar>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>, VectorError> {
    a.cross(b)
}

pub fn unit_vector<T: Scalar + Float>(a: &Vector<T>) -> Vector<T> {
    a.unit_vector()
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::from_vec(Vec::new())
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from_vec(Vec::from(value))
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(value: Vector<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Parses the display form `[1, 2, 3]`; the brackets are optional.
impl<T: FromStr> FromStr for Vector<T> {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Ok(Vector::default());
        }

        inner
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<T>().map_err(|_| VectorError::Parse {
                    token: token.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_zero_fills() {
        let mut v: Vector<f64> = Vector::default();
        v.resize(3);
        assert_eq!(v.to_vec(), vec![0.0, 0.0, 0.0]);
        v[1] = 2.5;
        v.resize(2);
        assert_eq!(v.to_vec(), vec![0.0, 2.5]);
    }

    #[test]
    fn length_sq_matches_dot() {
        let v = Vector::from_vec(vec![1.5, -2.0, 0.25]);
        assert_eq!(v.length_sq(), v.dot(&v).unwrap());
    }

    #[test]
    fn integer_length_widens_before_sqrt() {
        let c: Color = Vector::from([3, 4]);
        assert_eq!(c.length_sq(), 25);
        assert_eq!(c.length(), 5.0);
    }

    #[test]
    fn integer_length_does_not_overflow() {
        let c: Color = Vector::from([50_000, 50_000, 0]);
        assert!((c.length() - 50_000.0 * 2f64.sqrt()).abs() < 1e-6);
        let extreme: Color = Vector::from([i32::MIN, i32::MAX]);
        assert!(extreme.length().is_finite());
    }

    #[test]
    fn tiny_components_keep_positive_length() {
        let p: Point = Vector::from([1e-200, 0.0, 0.0]);
        assert_eq!(p.length(), 1e-200);
        let q: Point = Vector::from([0.0, 5e-324]);
        assert!(q.length() > 0.0);
    }

    #[test]
    fn huge_components_keep_finite_length() {
        let p: Point = Vector::from([3e200, 4e200]);
        assert!((p.length() / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn near_zero_accepts_integer_min() {
        let c: Color = Vector::from([i32::MIN, 0, 0]);
        assert!(!c.near_zero());
        let small: Vector<i8> = Vector::from([i8::MIN]);
        assert!(!small.near_zero());
    }

    #[test]
    fn from_elem_repeats_value() {
        let c: Color = Vector::from_elem(4, 7);
        assert_eq!(c.to_vec(), vec![7, 7, 7, 7]);
    }

    #[test]
    fn cross_rejects_wrong_dimension() {
        let a = Vector::from([1.0, 0.0]);
        let b = Vector::from([0.0, 1.0, 0.0]);
        assert_eq!(
            a.cross(&b),
            Err(VectorError::DimensionMismatch {
                op: "cross product",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn failed_integer_division_leaves_receiver() {
        let mut c: Color = Vector::from([2, 4, 6]);
        assert_eq!(c.try_div_assign(0).unwrap_err(), VectorError::DivisionByZero);
        assert_eq!(c.to_vec(), vec![2, 4, 6]);
        c.try_div_assign(2).unwrap();
        assert_eq!(c.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn display_empty_and_single() {
        assert_eq!(Vector::<i32>::default().to_string(), "[]");
        assert_eq!(Vector::from([7]).to_string(), "[7]");
    }

    #[test]
    fn parse_without_brackets() {
        let v: Point = " -1.5, 2 ,3e-1 ".parse().unwrap();
        assert_eq!(v.to_vec(), vec![-1.5, 2.0, 0.3]);
    }
}
