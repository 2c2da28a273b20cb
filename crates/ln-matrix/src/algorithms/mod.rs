//! Matrix multiplication strategies and the single dispatch entry point.
//!
//! Every strategy receives validated, non-degenerate operands and returns a
//! new `a.rows() x b.cols()` matrix. Block-structured strategies pad
//! internally and crop before returning.

pub mod alpha_tensor;
pub mod auto;
pub mod blocked;
pub mod naive;
pub mod neon;
mod padding;
pub mod simd;
pub mod strassen;
pub mod transposed;
pub mod winograd;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

pub use alpha_tensor::ALPHA_TENSOR_CROSSOVER;
pub use auto::{select_algorithm, AutoThresholds};
pub use blocked::BLOCK_SIZE;
pub use neon::is_neon_available;
pub use simd::is_simd_available;
pub use strassen::STRASSEN_CROSSOVER;
pub use winograd::WINOGRAD_CROSSOVER;

/// A matrix multiplication algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Triple loop in i-k-j order.
    Naive,
    /// Transposes the right operand, then takes row-by-row dot products.
    NaiveTransposed,
    /// The naive loop on the platform vector unit.
    SimdNaive,
    /// The naive loop on NEON; downgrades to `SimdNaive` without NEON.
    ArmNeon,
    /// Cache tiles of [`BLOCK_SIZE`].
    Block,
    Strassen,
    Winograd,
    /// Rank-49 scheme for 4x4 block products.
    AlphaTensor,
    /// Picks one of the others from the operand shapes.
    #[default]
    Auto,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Naive,
        Algorithm::NaiveTransposed,
        Algorithm::SimdNaive,
        Algorithm::ArmNeon,
        Algorithm::Block,
        Algorithm::Strassen,
        Algorithm::Winograd,
        Algorithm::AlphaTensor,
        Algorithm::Auto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Naive => "NAIVE",
            Algorithm::NaiveTransposed => "NAIVE_TRANSPOSED",
            Algorithm::SimdNaive => "SIMD_NAIVE",
            Algorithm::ArmNeon => "ARM_NEON",
            Algorithm::Block => "BLOCK",
            Algorithm::Strassen => "STRASSEN",
            Algorithm::Winograd => "WINOGRAD",
            Algorithm::AlphaTensor => "ALPHA_TENSOR",
            Algorithm::Auto => "AUTO",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl FromStr for Algorithm {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        let key = squash(s);
        Algorithm::ALL
            .into_iter()
            .find(|a| squash(a.name()) == key)
            .ok_or_else(|| MatrixError::UnknownAlgorithm(s.to_string()))
    }
}

/// Multiply `a x b` with `algorithm`, resolving `Auto` with the default
/// thresholds.
///
/// # Errors
/// Returns `MatrixError::MatmulMismatch` unless `a.cols() == b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix, algorithm: Algorithm) -> Result<Matrix> {
    multiply_with_thresholds(a, b, algorithm, &AutoThresholds::default())
}

/// Multiply `a x b` with `algorithm`, resolving `Auto` with `thresholds`.
///
/// # Errors
/// Returns `MatrixError::MatmulMismatch` unless `a.cols() == b.rows()`.
pub fn multiply_with_thresholds(
    a: &Matrix,
    b: &Matrix,
    algorithm: Algorithm,
    thresholds: &AutoThresholds,
) -> Result<Matrix> {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    if k != b.rows() {
        return Err(MatrixError::MatmulMismatch {
            m,
            k,
            k2: b.rows(),
            n,
        });
    }
    if m == 0 || k == 0 || n == 0 {
        return Ok(Matrix::zeros(m, n));
    }

    let resolved = resolve(algorithm, m, k, n, thresholds);
    debug!(%algorithm, %resolved, m, k, n, "matrix multiply");
    Ok(run(resolved, a, b))
}

/// Maps `Auto` to a concrete strategy and `ArmNeon` to `SimdNaive` where
/// NEON is missing.
pub(crate) fn resolve(
    algorithm: Algorithm,
    m: usize,
    k: usize,
    n: usize,
    thresholds: &AutoThresholds,
) -> Algorithm {
    match algorithm {
        Algorithm::Auto => resolve(select_algorithm(m, k, n, thresholds), m, k, n, thresholds),
        Algorithm::ArmNeon if !is_neon_available() => {
            debug!("NEON unavailable, downgrading ARM_NEON to SIMD_NAIVE");
            Algorithm::SimdNaive
        }
        other => other,
    }
}

fn run(algorithm: Algorithm, a: &Matrix, b: &Matrix) -> Matrix {
    match algorithm {
        Algorithm::Naive => naive::multiply(a, b),
        Algorithm::NaiveTransposed => transposed::multiply(a, b),
        Algorithm::SimdNaive => simd::multiply(a, b),
        Algorithm::ArmNeon => neon::multiply(a, b),
        Algorithm::Block => blocked::multiply(a, b),
        Algorithm::Strassen => strassen::multiply(a, b),
        Algorithm::Winograd => winograd::multiply(a, b),
        Algorithm::AlphaTensor => alpha_tensor::multiply(a, b),
        Algorithm::Auto => unreachable!("resolve never yields Auto"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!("alpha-tensor".parse::<Algorithm>().unwrap(), Algorithm::AlphaTensor);
        assert_eq!("SimdNaive".parse::<Algorithm>().unwrap(), Algorithm::SimdNaive);
        assert!(matches!(
            "cuda".parse::<Algorithm>(),
            Err(MatrixError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_resolve_never_returns_auto() {
        let t = AutoThresholds::default();
        for (m, k, n) in [(1, 1, 1), (100, 100, 100), (600, 600, 600), (2000, 2000, 2000), (70, 3, 90)] {
            assert_ne!(resolve(Algorithm::Auto, m, k, n, &t), Algorithm::Auto);
        }
    }

    #[test]
    fn test_arm_neon_downgrade() {
        let resolved = resolve(Algorithm::ArmNeon, 4, 4, 4, &AutoThresholds::default());
        if is_neon_available() {
            assert_eq!(resolved, Algorithm::ArmNeon);
        } else {
            assert_eq!(resolved, Algorithm::SimdNaive);
        }
    }

    #[test]
    fn test_mismatch_and_degenerate() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert!(matches!(
            multiply(&a, &b, Algorithm::Naive),
            Err(MatrixError::MatmulMismatch { m: 2, k: 3, k2: 2, n: 3 })
        ));
        let empty = Matrix::zeros(3, 0);
        for algorithm in Algorithm::ALL {
            let c = multiply(&a, &Matrix::zeros(3, 0), algorithm).unwrap();
            assert_eq!(c.shape(), (2, 0));
            let c = multiply(&empty, &Matrix::zeros(0, 4), algorithm).unwrap();
            assert_eq!(c, Matrix::zeros(3, 4));
        }
    }
}
