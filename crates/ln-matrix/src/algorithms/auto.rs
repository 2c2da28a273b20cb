use tracing::trace;

use crate::algorithms::{is_simd_available, Algorithm};

/// Size limits consulted by [`Algorithm::Auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoThresholds {
    /// Up to this largest dimension a dense kernel is used.
    pub naive: usize,
    /// Square sizes up to this use Strassen.
    pub strassen: usize,
    /// Square sizes up to this use Winograd; larger ones AlphaTensor.
    pub winograd: usize,
}

impl Default for AutoThresholds {
    fn default() -> Self {
        Self {
            naive: 64,
            strassen: 512,
            winograd: 1024,
        }
    }
}

/// Picks a concrete algorithm for an `m x k` by `k x n` product. Never
/// returns `Auto` or `ArmNeon`.
pub fn select_algorithm(m: usize, k: usize, n: usize, thresholds: &AutoThresholds) -> Algorithm {
    let largest = m.max(k).max(n);
    let selected = if largest <= thresholds.naive {
        if is_simd_available() {
            Algorithm::SimdNaive
        } else {
            Algorithm::Naive
        }
    } else if m != k || k != n {
        Algorithm::Block
    } else if n <= thresholds.strassen {
        Algorithm::Strassen
    } else if n <= thresholds.winograd {
        Algorithm::Winograd
    } else {
        Algorithm::AlphaTensor
    };
    trace!(m, k, n, %selected, "auto selection");
    selected
}
