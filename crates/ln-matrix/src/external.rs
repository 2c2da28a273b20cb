//! Plain row-major interchange with external array libraries.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::shape::Shape;

/// A row-major `f64` array with an explicit shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalArray {
    pub shape: Shape,
    pub data: Vec<f64>,
}

/// Copy a rank-2 external array into a [`Matrix`].
///
/// # Errors
/// Returns `MatrixError::ShapeMismatch` if the shape is not rank 2 or its
/// element count differs from `data.len()`.
pub fn matrix_from_external(array: &ExternalArray) -> Result<Matrix> {
    let (rows, cols) = array.shape.as_matrix()?;
    Matrix::from_vec(rows, cols, array.data.clone())
}

pub fn matrix_to_external(matrix: &Matrix) -> ExternalArray {
    ExternalArray {
        shape: Shape::matrix(matrix.rows(), matrix.cols()),
        data: matrix.as_slice().to_vec(),
    }
}
