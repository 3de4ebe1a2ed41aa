use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

use crate::math::error::MatrixError;

/// Dense, row-major matrix of `f64`.
///
/// The shape is fixed at construction. Every operation returns a new matrix
/// and leaves its operands untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty { rows, cols });
        }
        Ok(Matrix::filled(rows, cols))
    }

    /// Builds a matrix from a sequence of rows.
    ///
    /// The width is taken from the first row; every other row must match it.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Matrix, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if height == 0 || width == 0 {
            return Err(MatrixError::Empty { rows: height, cols: width });
        }

        let mut data = Vec::with_capacity(height * width);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MatrixError::JaggedRows {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Matrix { rows: height, cols: width, data })
    }

    /// `1 x n` matrix holding `values`.
    pub fn row_vector(values: &[f64]) -> Result<Matrix, MatrixError> {
        Matrix::from_rows(vec![values.to_vec()])
    }

    /// Builds a matrix whose `(i, j)` element is `f(i, j)`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Matrix, MatrixError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut res = Matrix::zeros(rows, cols)?;
        for i in 0..rows {
            for j in 0..cols {
                res.data[i * cols + j] = f(i, j);
            }
        }
        Ok(res)
    }

    pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
        Matrix::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrow row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row-major view of every element.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "hadamard", |a, b| a * b)
    }

    /// Matrix product. Requires `self.cols() == other.rows()`; the result is
    /// `self.rows() x other.cols()`.
    pub fn dot(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "dot",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let mut res = Matrix::filled(self.rows, other.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }

                res.data[i * res.cols + j] = sum;
            }
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::filled(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i * res.cols + j] = self.data[j * self.cols + i];
            }
        }

        res
    }

    /// Applies `functor` to every element independently.
    pub fn map<F>(&self, mut functor: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&x| functor(x)).collect(),
        }
    }

    fn zip_with<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix, MatrixError>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| f(a, b)).collect(),
        })
    }

    // Shape is trusted: only called with dimensions derived from valid matrices.
    fn filled(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i, j, self.rows, self.cols
        );
        &self.data[i * self.cols + j]
    }
}

/// Column-aligned grid: every value is followed by enough spaces to reach the
/// widest value of its column, plus one separator.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered: Vec<String> = self.data.iter().map(|x| x.to_string()).collect();

        let mut widths = vec![0; self.cols];
        for (idx, s) in rendered.iter().enumerate() {
            let col = idx % self.cols;
            widths[col] = widths[col].max(s.chars().count());
        }

        for i in 0..self.rows {
            for j in 0..self.cols {
                let s = &rendered[i * self.cols + j];
                write!(f, "{:<width$} ", s, width = widths[j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the shapes differ. Use [`Matrix::add`] to get a `Result`.
    fn add(self, rhs: Self) -> Matrix {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics if the shapes differ. Use [`Matrix::subtract`] to get a `Result`.
    fn sub(self, rhs: Self) -> Matrix {
        self.subtract(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// Matrix product.
    ///
    /// # Panics
    /// Panics if the inner dimensions differ. Use [`Matrix::dot`] to get a `Result`.
    fn mul(self, rhs: Self) -> Matrix {
        self.dot(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn zeros_has_requested_shape() {
        let z = Matrix::zeros(2, 3).unwrap();
        assert_eq!(z.shape(), (2, 3));
        assert!(z.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn zeros_rejects_empty_shape() {
        assert_eq!(Matrix::zeros(0, 3), Err(MatrixError::Empty { rows: 0, cols: 3 }));
        assert_eq!(Matrix::zeros(3, 0), Err(MatrixError::Empty { rows: 3, cols: 0 }));
    }

    #[test]
    fn from_rows_rejects_empty_input() {
        assert!(matches!(Matrix::from_rows(vec![]), Err(MatrixError::Empty { .. })));
        assert!(matches!(Matrix::from_rows(vec![vec![]]), Err(MatrixError::Empty { .. })));
    }

    #[test]
    fn from_rows_rejects_jagged_rows() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err, MatrixError::JaggedRows { row: 1, expected: 2, actual: 1 });
    }

    #[test]
    fn row_vector_is_one_by_n() {
        let r = Matrix::row_vector(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(r.row(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn dot_with_identity_is_noop() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let i = Matrix::identity(3).unwrap();
        assert_eq!(a.dot(&i).unwrap(), a);
    }

    #[test]
    fn dot_computes_product() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0, 7.0], vec![8.0, 9.0, 10.0]]);
        let c = a.dot(&b).unwrap();
        assert_eq!(c, m(vec![vec![21.0, 24.0, 27.0], vec![47.0, 54.0, 61.0]]));
    }

    #[test]
    fn dot_rejects_incompatible_inner_dimensions() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(4, 2).unwrap();
        assert_eq!(
            a.dot(&b),
            Err(MatrixError::DimensionMismatch { op: "dot", left: (2, 3), right: (4, 2) })
        );
    }

    #[test]
    fn transpose_twice_is_identity() {
        let a = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t[(2, 1)], 6.0);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn add_then_subtract_restores_original() {
        let a = m(vec![vec![0.1, -2.5], vec![3.3, 1e-3]]);
        let b = m(vec![vec![7.25, 0.3], vec![-1.1, 42.0]]);
        let back = a.add(&b).unwrap().subtract(&b).unwrap();
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn hadamard_is_commutative() {
        let a = m(vec![vec![1.5, -2.0], vec![0.0, 4.0]]);
        let b = m(vec![vec![3.0, 0.5], vec![9.0, -1.0]]);
        assert_eq!(a.hadamard(&b).unwrap(), b.hadamard(&a).unwrap());
        assert_eq!(a.hadamard(&b).unwrap(), m(vec![vec![4.5, -1.0], vec![0.0, -4.0]]));
    }

    #[test]
    fn elementwise_ops_reject_shape_mismatch() {
        let a = Matrix::zeros(2, 2).unwrap();
        let b = Matrix::zeros(2, 3).unwrap();
        assert!(matches!(a.add(&b), Err(MatrixError::DimensionMismatch { op: "add", .. })));
        assert!(matches!(a.subtract(&b), Err(MatrixError::DimensionMismatch { op: "subtract", .. })));
        assert!(matches!(a.hadamard(&b), Err(MatrixError::DimensionMismatch { op: "hadamard", .. })));
    }

    #[test]
    fn scale_and_map() {
        let a = m(vec![vec![1.0, -2.0]]);
        assert_eq!(a.scale(0.5), m(vec![vec![0.5, -1.0]]));
        assert_eq!(a.map(|x| x * x), m(vec![vec![1.0, 4.0]]));
    }

    #[test]
    fn map_accepts_stateful_closure() {
        let mut n = 0.0;
        let a = Matrix::zeros(2, 2).unwrap().map(|_| {
            n += 1.0;
            n
        });
        assert_eq!(a, m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]));
    }

    #[test]
    fn operators_match_methods() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![0.5, 0.0], vec![0.0, 0.5]]);
        assert_eq!(&a + &b, a.add(&b).unwrap());
        assert_eq!(&a - &b, a.subtract(&b).unwrap());
        assert_eq!(&a * &b, a.dot(&b).unwrap());
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch in dot")]
    fn mul_operator_panics_on_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(4, 2).unwrap();
        let _ = &a * &b;
    }

    #[test]
    fn display_aligns_columns() {
        let a = m(vec![vec![1.0, 10.0], vec![100.0, 2.0]]);
        assert_eq!(a.to_string(), "1   10 \n100 2  \n");
    }

    #[test]
    fn display_renders_fractions() {
        let a = m(vec![vec![0.5, 0.0, 1.0]]);
        assert_eq!(a.to_string(), "0.5 0 1 \n");
    }
}
