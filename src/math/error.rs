use std::fmt;

/// Shape violations raised by `Matrix` construction and arithmetic.
///
/// Every variant belongs to the dimension-mismatch family: the operation is
/// refused outright, nothing is truncated, padded or broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operands of a binary operation have incompatible shapes.
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// A constructor was asked for a matrix with zero rows or zero columns.
    Empty { rows: usize, cols: usize },
    /// A row-sequence constructor received rows of unequal length.
    JaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { op, left, right } => write!(
                f,
                "Dimension mismatch in {}: {}x{} vs {}x{}.",
                op, left.0, left.1, right.0, right.1
            ),
            MatrixError::Empty { rows, cols } => write!(
                f,
                "Matrix must have at least one row and one column, got {}x{}.",
                rows, cols
            ),
            MatrixError::JaggedRows { row, expected, actual } => write!(
                f,
                "Row {} has {} elements, expected {}.",
                row, actual, expected
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
