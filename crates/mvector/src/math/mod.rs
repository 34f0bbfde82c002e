//! Generic vector arithmetic.
//!
//! `Vector<T>` owns a plain `Vec<T>` and exposes only sizing, indexing and
//! arithmetic on top of it. Element types implement [`Scalar`].
pub mod ops;
pub mod scalar;
pub mod vector;

pub use scalar::Scalar;
pub use vector::{cross, dot, unit_vector, Color, Point, Vector, NEAR_ZERO_EPSILON};
