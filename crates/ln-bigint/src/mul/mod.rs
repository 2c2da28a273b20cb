//! Interchangeable multiplication algorithms.
//!
//! All algorithms work on magnitudes and produce the exact same limbs; the
//! sign is applied by [`BigInt::multiply_with`](crate::BigInt::multiply_with).

mod karatsuba;
mod schoolbook;
mod strassen;
mod toom;

use std::fmt;
use std::str::FromStr;

use crate::error::BigIntError;

/// Below this many limbs (in the shorter operand) Karatsuba multiplies with
/// the schoolbook kernel.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Below this many limbs (in the shorter operand) Toom-3 multiplies with the
/// schoolbook kernel.
pub const TOOM3_THRESHOLD: usize = 48;

/// Below this many limbs (in the shorter operand) the transform multiplier
/// uses the schoolbook kernel.
pub const STRASSEN_THRESHOLD: usize = 64;

// Crossovers used by the size-selected default in `for_operands`.
const DEFAULT_TOOM3_LIMBS: usize = 192;
const DEFAULT_STRASSEN_LIMBS: usize = 1024;

/// A BigInt multiplication algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MulAlgorithm {
    /// O(n^2) digit convolution; the reference implementation.
    Schoolbook,
    /// Three half-size products per level.
    Karatsuba,
    /// Toom-3: five third-size products per level.
    ToomCook,
    /// Exact number-theoretic transform convolution.
    Strassen,
}

impl MulAlgorithm {
    pub const ALL: [MulAlgorithm; 4] = [
        MulAlgorithm::Schoolbook,
        MulAlgorithm::Karatsuba,
        MulAlgorithm::ToomCook,
        MulAlgorithm::Strassen,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MulAlgorithm::Schoolbook => "schoolbook",
            MulAlgorithm::Karatsuba => "karatsuba",
            MulAlgorithm::ToomCook => "toomcook",
            MulAlgorithm::Strassen => "strassen",
        }
    }

    /// Picks an algorithm from operand lengths in limbs.
    pub fn for_operands(lhs_limbs: usize, rhs_limbs: usize) -> MulAlgorithm {
        let shorter = lhs_limbs.min(rhs_limbs);
        if shorter < KARATSUBA_THRESHOLD {
            MulAlgorithm::Schoolbook
        } else if shorter < DEFAULT_TOOM3_LIMBS {
            MulAlgorithm::Karatsuba
        } else if shorter < DEFAULT_STRASSEN_LIMBS {
            MulAlgorithm::ToomCook
        } else {
            MulAlgorithm::Strassen
        }
    }

    pub(crate) fn multiply_magnitudes(self, a: &[u32], b: &[u32]) -> Vec<u32> {
        match self {
            MulAlgorithm::Schoolbook => schoolbook::mul(a, b),
            MulAlgorithm::Karatsuba => karatsuba::mul(a, b),
            MulAlgorithm::ToomCook => toom::mul(a, b),
            MulAlgorithm::Strassen => strassen::mul(a, b),
        }
    }
}

impl fmt::Display for MulAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MulAlgorithm {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "schoolbook" | "naive" => Ok(MulAlgorithm::Schoolbook),
            "karatsuba" => Ok(MulAlgorithm::Karatsuba),
            "toomcook" | "toom3" => Ok(MulAlgorithm::ToomCook),
            "strassen" => Ok(MulAlgorithm::Strassen),
            _ => Err(BigIntError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_roundtrip() {
        for algorithm in MulAlgorithm::ALL {
            assert_eq!(algorithm.name().parse::<MulAlgorithm>().unwrap(), algorithm);
        }
        assert_eq!("Toom-Cook".parse::<MulAlgorithm>().unwrap(), MulAlgorithm::ToomCook);
        assert!("fft".parse::<MulAlgorithm>().is_err());
    }

    #[test]
    fn test_for_operands_respects_thresholds() {
        assert_eq!(MulAlgorithm::for_operands(1, 10_000), MulAlgorithm::Schoolbook);
        assert_eq!(
            MulAlgorithm::for_operands(KARATSUBA_THRESHOLD, KARATSUBA_THRESHOLD),
            MulAlgorithm::Karatsuba
        );
        assert_eq!(MulAlgorithm::for_operands(500, 500), MulAlgorithm::ToomCook);
        assert_eq!(MulAlgorithm::for_operands(5000, 4000), MulAlgorithm::Strassen);
    }

    #[test]
    fn test_thresholds_are_ordered() {
        assert!(KARATSUBA_THRESHOLD >= 2);
        assert!(TOOM3_THRESHOLD >= 3);
        assert!(DEFAULT_TOOM3_LIMBS > KARATSUBA_THRESHOLD);
        assert!(DEFAULT_STRASSEN_LIMBS > DEFAULT_TOOM3_LIMBS);
    }
}
