use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use crate::algorithms::{self, Algorithm, AutoThresholds};
use crate::error::{MatrixError, Result};

/// A dense row-major matrix of `f64`.
///
/// The shape is fixed at construction. Multiplication never mutates its
/// operands and always returns a freshly allocated `rows x other.cols`
/// matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a `rows x cols` matrix with every entry set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: f64) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![fill; rows * cols],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, 0.0)
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap row-major `data` as a `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns `MatrixError::ShapeMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                expected: vec![rows * cols],
                got: vec![data.len()],
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// # Errors
    /// Returns `MatrixError::IndexOutOfBounds` outside the shape.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        Ok(self.data[self.check_index(row, col)?])
    }

    /// # Errors
    /// Returns `MatrixError::IndexOutOfBounds` outside the shape.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let idx = self.check_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix::from_parts(self.cols, self.rows, out)
    }

    /// Copy of the `rows x cols` window at `(row, col)`. Entries that fall
    /// outside `self` read as zero, which is how operands are padded.
    pub(crate) fn window(&self, row: usize, col: usize, rows: usize, cols: usize) -> Matrix {
        let mut out = Matrix::zeros(rows, cols);
        let row_end = (row + rows).min(self.rows);
        let col_end = (col + cols).min(self.cols);
        if row >= row_end || col >= col_end {
            return out;
        }
        let width = col_end - col;
        for (dst, src) in (row..row_end).enumerate() {
            let from = src * self.cols + col;
            out.data[dst * cols..dst * cols + width].copy_from_slice(&self.data[from..from + width]);
        }
        out
    }

    /// Write `src` at `(row, col)`, dropping whatever falls outside `self`.
    pub(crate) fn paste(&mut self, row: usize, col: usize, src: &Matrix) {
        let row_end = (row + src.rows).min(self.rows);
        let col_end = (col + src.cols).min(self.cols);
        if row >= row_end || col >= col_end {
            return;
        }
        let width = col_end - col;
        for (s, dst) in (row..row_end).enumerate() {
            let to = dst * self.cols + col;
            self.data[to..to + width].copy_from_slice(&src.data[s * src.cols..s * src.cols + width]);
        }
    }

    /// `self += scale * other`, for equally shaped matrices.
    pub(crate) fn add_scaled_assign(&mut self, other: &Matrix, scale: f64) {
        debug_assert_eq!(self.shape(), other.shape());
        if scale == 1.0 {
            self.data.iter_mut().zip(&other.data).for_each(|(x, y)| *x += y);
        } else if scale == -1.0 {
            self.data.iter_mut().zip(&other.data).for_each(|(x, y)| *x -= y);
        } else {
            self.data.iter_mut().zip(&other.data).for_each(|(x, y)| *x += scale * y);
        }
    }

    /// The `rows x cols` block whose top-left corner is `(row, col)`.
    ///
    /// # Errors
    /// Returns `MatrixError::InvalidRange` if the block leaves the matrix.
    pub fn submatrix(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Matrix> {
        if row + rows > self.rows || col + cols > self.cols {
            return Err(MatrixError::InvalidRange(format!(
                "{}x{} block at ({}, {}) in {}x{} matrix",
                rows, cols, row, col, self.rows, self.cols
            )));
        }
        Ok(self.window(row, col, rows, cols))
    }

    /// Overwrite the block at `(row, col)` with `src`.
    ///
    /// # Errors
    /// Returns `MatrixError::InvalidRange` if `src` does not fit.
    pub fn set_submatrix(&mut self, row: usize, col: usize, src: &Matrix) -> Result<()> {
        if row + src.rows > self.rows || col + src.cols > self.cols {
            return Err(MatrixError::InvalidRange(format!(
                "{}x{} block at ({}, {}) in {}x{} matrix",
                src.rows, src.cols, row, col, self.rows, self.cols
            )));
        }
        self.paste(row, col, src);
        Ok(())
    }

    /// Sum of the diagonal.
    ///
    /// # Errors
    /// Returns `MatrixError::NotSquare` for rectangular matrices.
    pub fn trace(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((0..self.rows).map(|i| self.data[i * self.cols + i]).sum())
    }

    pub fn frobenius_norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Same shape and every pair of entries within `tol`, relative to the
    /// larger magnitude (absolute below 1.0).
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(x, y)| {
                let scale = x.abs().max(y.abs()).max(1.0);
                (x - y).abs() <= tol * scale
            })
    }

    /// Element-wise sum.
    ///
    /// # Errors
    /// Returns `MatrixError::ShapeMismatch` for differently shaped operands.
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x + y)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    /// Returns `MatrixError::ShapeMismatch` for differently shaped operands.
    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.zip_with(other, |x, y| x - y)
    }

    fn zip_with(&self, other: &Matrix, f: impl Fn(f64, f64) -> f64) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(MatrixError::ShapeMismatch {
                expected: vec![self.rows, self.cols],
                got: vec![other.rows, other.cols],
            });
        }
        let data = self.data.iter().zip(&other.data).map(|(&x, &y)| f(x, y)).collect();
        Ok(Matrix::from_parts(self.rows, self.cols, data))
    }

    /// Matrix product `self x other` computed by `algorithm`.
    ///
    /// # Errors
    /// Returns `MatrixError::MatmulMismatch` unless
    /// `self.cols() == other.rows()`.
    pub fn multiply(&self, other: &Matrix, algorithm: Algorithm) -> Result<Matrix> {
        algorithms::multiply(self, other, algorithm)
    }

    /// Like [`multiply`](Self::multiply) with `Algorithm::Auto`, choosing
    /// with the given thresholds.
    ///
    /// # Errors
    /// Returns `MatrixError::MatmulMismatch` unless
    /// `self.cols() == other.rows()`.
    pub fn multiply_auto(&self, other: &Matrix, thresholds: &AutoThresholds) -> Result<Matrix> {
        algorithms::multiply_with_thresholds(self, other, Algorithm::Auto, thresholds)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// # Panics
    /// Panics outside the shape.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        &mut self.data[row * self.cols + col]
    }
}

impl<'a> Add<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics for differently shaped operands; see [`Matrix::try_add`].
    fn add(self, other: &Matrix) -> Matrix {
        match self.try_add(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Sub<&'a Matrix> for &'a Matrix {
    type Output = Matrix;

    /// # Panics
    /// Panics for differently shaped operands; see [`Matrix::try_sub`].
    fn sub(self, other: &Matrix) -> Matrix {
        match self.try_sub(other) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, s: f64) -> Matrix {
        Matrix::from_parts(self.rows, self.cols, self.data.iter().map(|x| x * s).collect())
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, s: f64) -> Matrix {
        self.data.iter_mut().for_each(|x| *x *= s);
        self
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for (j, x) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, x)?,
                    None => write!(f, "{}", x)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: usize, cols: usize, data: &[f64]) -> Matrix {
        Matrix::from_vec(rows, cols, data.to_vec()).unwrap()
    }

    #[test]
    fn test_new_and_access() {
        let mut a = Matrix::new(2, 3, 1.5);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.get(1, 2).unwrap(), 1.5);
        a.set(0, 1, 4.0).unwrap();
        assert_eq!(a[(0, 1)], 4.0);
        a[(1, 0)] = -2.0;
        assert_eq!(a.get(1, 0).unwrap(), -2.0);
        assert!(matches!(a.get(2, 0), Err(MatrixError::IndexOutOfBounds { .. })));
        assert!(a.set(0, 3, 0.0).is_err());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_bounds_panics() {
        let a = Matrix::zeros(2, 2);
        let _ = a[(0, 2)];
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0; 3]),
            Err(MatrixError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_shapes() {
        let a = Matrix::zeros(0, 5);
        assert!(a.is_empty());
        assert_eq!(a.shape(), (0, 5));
        assert_eq!(a.transpose().shape(), (5, 0));
    }

    #[test]
    fn test_transpose() {
        let a = m(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(a.transpose(), m(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]));
    }

    #[test]
    fn test_window_pads_with_zeros() {
        let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            a.window(0, 0, 3, 3),
            m(3, 3, &[1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0])
        );
        assert_eq!(a.window(1, 1, 2, 2), m(2, 2, &[4.0, 0.0, 0.0, 0.0]));
        assert_eq!(a.window(5, 5, 1, 1), Matrix::zeros(1, 1));
    }

    #[test]
    fn test_submatrix_roundtrip() {
        let mut a = Matrix::zeros(4, 4);
        let block = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        a.set_submatrix(1, 2, &block).unwrap();
        assert_eq!(a.submatrix(1, 2, 2, 2).unwrap(), block);
        assert_eq!(a[(2, 3)], 4.0);
        assert!(a.submatrix(3, 3, 2, 2).is_err());
        assert!(a.set_submatrix(3, 0, &block).is_err());
    }

    #[test]
    fn test_identity_and_trace() {
        let i = Matrix::identity(4);
        assert_eq!(i.trace().unwrap(), 4.0);
        assert_eq!(i.frobenius_norm(), 2.0);
        assert!(matches!(Matrix::zeros(2, 3).trace(), Err(MatrixError::NotSquare { .. })));
    }

    #[test]
    fn test_elementwise_ops() {
        let a = m(1, 3, &[1.0, 2.0, 3.0]);
        let b = m(1, 3, &[0.5, 0.5, 0.5]);
        assert_eq!(&a + &b, m(1, 3, &[1.5, 2.5, 3.5]));
        assert_eq!(&a - &b, m(1, 3, &[0.5, 1.5, 2.5]));
        assert_eq!(&a * 2.0, m(1, 3, &[2.0, 4.0, 6.0]));
        assert!(a.try_add(&Matrix::zeros(3, 1)).is_err());
        let mut c = a.clone();
        c.fill(7.0);
        assert_eq!(c, Matrix::new(1, 3, 7.0));
    }

    #[test]
    fn test_approx_eq() {
        let a = m(1, 2, &[1.0e6, 1.0e-12]);
        let b = m(1, 2, &[1.0e6 + 1.0e-4, 0.0]);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b, 1e-12));
        assert!(!a.approx_eq(&Matrix::zeros(2, 1), 1.0));
    }

    #[test]
    fn test_display() {
        let a = m(2, 2, &[1.0, 2.5, -3.0, 4.0]);
        assert_eq!(a.to_string(), "1 2.5\n-3 4\n");
        assert_eq!(format!("{:.1}", a), "1.0 2.5\n-3.0 4.0\n");
    }
}
