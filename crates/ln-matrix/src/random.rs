use ln_random::{GeneratorKind, RandomGenerator};
use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// A `rows x cols` matrix of values uniform in `[min, max]` drawn from `rng`.
///
/// # Errors
/// Returns `MatrixError::InvalidRange` when a bound is not finite or
/// `min > max`.
pub fn create_random_matrix(
    rows: usize,
    cols: usize,
    min: f64,
    max: f64,
    rng: &mut dyn RandomGenerator,
) -> Result<Matrix> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(MatrixError::InvalidRange(format!("[{}, {}]", min, max)));
    }
    let data = (0..rows * cols)
        .map(|_| rng.uniform(min, max))
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Like [`create_random_matrix`] with a fresh generator of `kind`.
///
/// # Errors
/// Returns `MatrixError::InvalidRange` when a bound is not finite or
/// `min > max`.
pub fn create_random_matrix_with(
    rows: usize,
    cols: usize,
    min: f64,
    max: f64,
    kind: GeneratorKind,
    seed: u64,
) -> Result<Matrix> {
    debug!(rows, cols, %kind, seed, "random matrix");
    let mut rng = kind.build(seed);
    create_random_matrix(rows, cols, min, max, rng.as_mut())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_range() {
        for kind in GeneratorKind::ALL {
            let m = create_random_matrix_with(10, 7, -3.0, 5.0, kind, 99).unwrap();
            assert_eq!(m.shape(), (10, 7));
            assert!(m.as_slice().iter().all(|x| (-3.0..=5.0).contains(x)));
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let a = create_random_matrix_with(4, 4, 0.0, 1.0, GeneratorKind::QuadCon, 1034).unwrap();
        let b = create_random_matrix_with(4, 4, 0.0, 1.0, GeneratorKind::QuadCon, 1034).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_bounds() {
        let mut rng = GeneratorKind::General.build(0);
        assert!(matches!(
            create_random_matrix(2, 2, 1.0, 0.0, rng.as_mut()),
            Err(MatrixError::InvalidRange(_))
        ));
        assert!(create_random_matrix(0, 0, f64::NAN, 1.0, rng.as_mut()).is_err());
        assert_eq!(create_random_matrix(2, 2, 3.0, 3.0, rng.as_mut()).unwrap(), Matrix::new(2, 2, 3.0));
    }

    #[test]
    fn test_wide_finite_bounds_stay_finite() {
        for kind in GeneratorKind::ALL {
            let m = create_random_matrix_with(2, 2, -1e308, 1e308, kind, 1).unwrap();
            assert!(m.as_slice().iter().all(|x| (-1e308..=1e308).contains(x)), "{}", kind);
        }
    }
}
