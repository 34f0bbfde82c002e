use std::error::Error;
use std::fmt;

/// Precondition failures reported by vector operations.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Elementwise operation on operands of different length.
    LengthMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },
    /// Operation defined only for one fixed length (cross product).
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        found: usize,
    },
    DivisionByZero,
    ArithmeticOverflow,
    /// Random fill bounds that cannot be sampled from.
    InvalidRange { min: f64, max: f64 },
    Parse { token: String },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::LengthMismatch { op, left, right } => write!(
                f,
                "{} requires vectors of equal length (got {} and {})",
                op, left, right
            ),
            VectorError::DimensionMismatch {
                op,
                expected,
                found,
            } => write!(
                f,
                "{} requires vectors of length {} (got {})",
                op, expected, found
            ),
            VectorError::DivisionByZero => write!(f, "division by zero"),
            VectorError::ArithmeticOverflow => write!(f, "arithmetic overflow"),
            VectorError::InvalidRange { min, max } => {
                write!(f, "invalid sampling range [{}, {}]", min, max)
            }
            VectorError::Parse { token } => {
                write!(f, "could not parse vector component '{}'", token)
            }
        }
    }
}

impl Error for VectorError {}
