use approx::assert_relative_eq;
use ln_matrix::{
    create_random_matrix_with, matrix_from_external, matrix_to_external, Algorithm, AutoThresholds, Matrix,
    MatrixError, ALPHA_TENSOR_CROSSOVER, STRASSEN_CROSSOVER,
};
use ln_random::GeneratorKind;
use proptest::prelude::*;
use rstest::rstest;
use std::time::{Duration, Instant};

const TOLERANCE: f64 = 1e-9;

fn random(rows: usize, cols: usize, seed: u64) -> Matrix {
    create_random_matrix_with(rows, cols, -1.0, 1.0, GeneratorKind::General, seed).unwrap()
}

#[rstest]
#[case(1, 1, 1)]
#[case(2, 2, 2)]
#[case(3, 5, 7)]
#[case(13, 13, 13)]
#[case(17, 1, 19)]
#[case(32, 32, 32)]
#[case(64, 64, 64)]
#[case(65, 65, 65)]
#[case(67, 67, 67)]
#[case(128, 128, 128)]
#[case(100, 70, 130)]
#[case(1, 90, 1)]
fn test_every_algorithm_matches_naive(#[case] m: usize, #[case] k: usize, #[case] n: usize) {
    let a = random(m, k, 1);
    let b = random(k, n, 2);
    let expected = a.multiply(&b, Algorithm::Naive).unwrap();
    for algorithm in Algorithm::ALL {
        let c = a.multiply(&b, algorithm).unwrap();
        assert_eq!(c.shape(), (m, n));
        assert!(
            c.approx_eq(&expected, TOLERANCE),
            "{} diverges from NAIVE on {}x{}x{}",
            algorithm,
            m,
            k,
            n
        );
    }
}

#[test]
fn test_recursive_strategies_past_their_crossovers() {
    let n = STRASSEN_CROSSOVER.max(ALPHA_TENSOR_CROSSOVER) * 2 + 3;
    let a = random(n, n, 5);
    let b = random(n, n, 6);
    let expected = a.multiply(&b, Algorithm::Naive).unwrap();
    for algorithm in [Algorithm::Strassen, Algorithm::Winograd, Algorithm::AlphaTensor] {
        assert!(a.multiply(&b, algorithm).unwrap().approx_eq(&expected, TOLERANCE));
    }
}

#[rstest]
#[case(5000, 1, 1)]
#[case(1, 5000, 1)]
#[case(4000, 3, 5)]
#[case(3, 2, 6000)]
#[case(600, 70, 90)]
#[case(70, 300, 65)]
fn test_skinny_products_stay_cheap(#[case] m: usize, #[case] k: usize, #[case] n: usize) {
    let a = random(m, k, 31);
    let b = random(k, n, 32);
    let expected = a.multiply(&b, Algorithm::Naive).unwrap();
    for algorithm in Algorithm::ALL {
        let start = Instant::now();
        let c = a.multiply(&b, algorithm).unwrap();
        let elapsed = start.elapsed();
        assert_eq!(c.shape(), (m, n));
        assert!(c.approx_eq(&expected, TOLERANCE), "{} on {}x{}x{}", algorithm, m, k, n);
        assert!(
            elapsed < Duration::from_secs(2),
            "{} took {:?} on {}x{}x{}",
            algorithm,
            elapsed,
            m,
            k,
            n
        );
    }
}

#[test]
fn test_exact_strategies_are_bit_identical() {
    let a = random(37, 41, 3);
    let b = random(41, 29, 4);
    let expected = a.multiply(&b, Algorithm::Naive).unwrap();
    for algorithm in [
        Algorithm::NaiveTransposed,
        Algorithm::SimdNaive,
        Algorithm::ArmNeon,
        Algorithm::Block,
    ] {
        assert_eq!(a.multiply(&b, algorithm).unwrap(), expected, "{}", algorithm);
    }
}

#[test]
fn test_ones_times_twos_is_all_six() {
    let a = Matrix::new(3, 3, 1.0);
    let b = Matrix::new(3, 3, 2.0);
    for algorithm in Algorithm::ALL {
        let c = a.multiply(&b, algorithm).unwrap();
        assert_eq!(c, Matrix::new(3, 3, 6.0), "{}", algorithm);
    }
}

#[test]
fn test_dimension_mismatch_fails_for_every_algorithm() {
    let a = Matrix::zeros(4, 3);
    let b = Matrix::zeros(4, 3);
    for algorithm in Algorithm::ALL {
        assert!(matches!(
            a.multiply(&b, algorithm),
            Err(MatrixError::MatmulMismatch { m: 4, k: 3, k2: 4, n: 3 })
        ));
    }
}

#[test]
fn test_identity_is_neutral() {
    let a = random(70, 70, 11);
    let i = Matrix::identity(70);
    for algorithm in Algorithm::ALL {
        assert!(a.multiply(&i, algorithm).unwrap().approx_eq(&a, TOLERANCE));
        assert!(i.multiply(&a, algorithm).unwrap().approx_eq(&a, TOLERANCE));
    }
}

#[test]
fn test_auto_with_custom_thresholds() {
    let t = AutoThresholds {
        naive: 4,
        strassen: 16,
        winograd: 32,
    };
    for n in [3, 10, 20, 40] {
        let a = random(n, n, 21);
        let b = random(n, n, 22);
        let expected = a.multiply(&b, Algorithm::Naive).unwrap();
        assert!(a.multiply_auto(&b, &t).unwrap().approx_eq(&expected, TOLERANCE));
    }
}

#[test]
fn test_trace_of_product_commutes() {
    let a = random(30, 50, 7);
    let b = random(50, 30, 8);
    let ab = a.multiply(&b, Algorithm::Strassen).unwrap();
    let ba = b.multiply(&a, Algorithm::Winograd).unwrap();
    assert_relative_eq!(ab.trace().unwrap(), ba.trace().unwrap(), max_relative = 1e-9);
}

#[test]
fn test_external_roundtrip() {
    let m = random(6, 9, 13);
    assert_eq!(matrix_from_external(&matrix_to_external(&m)).unwrap(), m);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_random_shapes_agree(m in 1usize..40, k in 1usize..40, n in 1usize..40, seed in any::<u64>()) {
        let a = random(m, k, seed);
        let b = random(k, n, seed.wrapping_add(1));
        let expected = a.multiply(&b, Algorithm::Naive).unwrap();
        for algorithm in Algorithm::ALL {
            prop_assert!(a.multiply(&b, algorithm).unwrap().approx_eq(&expected, TOLERANCE));
        }
    }
}
