//! `ln-matrix` - Dense matrices with interchangeable multiplication
//! algorithms for longnums.
//!
//! This crate provides:
//! - A row-major `f64` `Matrix` with bounds-checked access
//! - Nine multiplication strategies selected by `Algorithm`: naive,
//!   transposed, SIMD, NEON, cache-blocked, Strassen, Winograd, a rank-49
//!   4x4 block scheme, and an automatic selector
//! - Plain row-major interchange through `ExternalArray`
//! - Random matrix creation from `ln-random` generators
//!
//! Enable the `concurrent` feature to compute the sub-products of the
//! recursive strategies on the rayon thread pool.

pub mod algorithms;
pub mod error;
pub mod external;
pub mod matrix;
pub mod random;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use algorithms::{
    is_neon_available, is_simd_available, select_algorithm, Algorithm, AutoThresholds,
    ALPHA_TENSOR_CROSSOVER, BLOCK_SIZE, STRASSEN_CROSSOVER, WINOGRAD_CROSSOVER,
};
pub use error::{MatrixError, Result};
pub use external::{matrix_from_external, matrix_to_external, ExternalArray};
pub use matrix::Matrix;
pub use random::{create_random_matrix, create_random_matrix_with};
pub use shape::Shape;
