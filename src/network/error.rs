use std::fmt;

use crate::math::MatrixError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// A matrix operation inside the network refused its operands, usually
    /// because an input or target row has the wrong length.
    Matrix(MatrixError),
    /// `backward` was called without a preceding `forward`.
    StateViolation,
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkError::Matrix(e) => write!(f, "{}", e),
            NetworkError::StateViolation => {
                write!(f, "backward() called without a cached forward() result.")
            }
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NetworkError::Matrix(e) => Some(e),
            NetworkError::StateViolation => None,
        }
    }
}

impl From<MatrixError> for NetworkError {
    fn from(e: MatrixError) -> Self {
        NetworkError::Matrix(e)
    }
}
