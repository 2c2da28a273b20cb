use ln_random::RandomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    MatmulMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Random(#[from] RandomError),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
