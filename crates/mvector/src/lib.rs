//! mvector: a small generic vector-math crate.
//!
//! Provides `Vector<T>`, an owned resizable sequence of integer or float
//! scalars with elementwise arithmetic, dot and cross products, lengths,
//! unit vectors and random fill. Misuse (mismatched lengths, a cross product
//! outside three dimensions, integer division by zero) is reported as a
//! [`VectorError`] by the `try_*` methods; the operator overloads panic with
//! the same message.
pub mod error;
pub mod math;
pub mod ownership;

pub use error::VectorError;
pub use math::{cross, dot, unit_vector, Color, Point, Scalar, Vector, NEAR_ZERO_EPSILON};
