use tracing::trace;

use crate::algorithms::padding::{self, SquareKernel};
use crate::algorithms::simd;
use crate::algorithms::strassen::quadrants;
use crate::matrix::Matrix;

/// Blocks of at most this size are multiplied densely.
pub const WINOGRAD_CROSSOVER: usize = 64;

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    padding::square_product(a, b, square, WINOGRAD_CROSSOVER)
}

/// Winograd's form of Strassen: seven products and fifteen additions.
pub(crate) fn square(a: &Matrix, b: &Matrix, crossover: usize) -> Matrix {
    let n = a.rows();
    if n <= crossover.max(1) {
        return simd::multiply(a, b);
    }
    if n % 2 == 1 {
        return padding::padded(a, b, n + 1, square as SquareKernel, crossover);
    }
    trace!(n, "winograd level");

    let [a11, a12, a21, a22] = quadrants(a);
    let [b11, b12, b21, b22] = quadrants(b);

    let s1 = &a21 + &a22;
    let s2 = &s1 - &a11;
    let s3 = &a11 - &a21;
    let s4 = &a12 - &s2;
    let t1 = &b12 - &b11;
    let t2 = &b22 - &t1;
    let t3 = &b22 - &b12;
    let t4 = &t2 - &b21;

    let pairs = vec![
        (a11, b11),
        (a12, b21),
        (s4, b22),
        (a22, t4),
        (s1, t1),
        (s2, t2),
        (s3, t3),
    ];
    let p = padding::multiply_all(pairs, square, crossover);

    let u1 = &p[0] + &p[1];
    let u2 = &p[0] + &p[5];
    let u3 = &u2 + &p[6];
    let u4 = &u2 + &p[4];
    let u5 = &u4 + &p[2];
    let u6 = &u3 - &p[3];
    let u7 = &u3 + &p[4];
    padding::join(&[u1, u5, u6, u7], 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::naive;

    fn sample(rows: usize, cols: usize, seed: f64) -> Matrix {
        let data = (0..rows * cols).map(|x| ((x as f64 + seed) * 0.377).cos()).collect();
        Matrix::from_vec(rows, cols, data).unwrap()
    }

    #[test]
    fn test_recursion_with_small_crossover() {
        for n in [2, 3, 4, 7, 12, 15] {
            let (a, b) = (sample(n, n, 0.5), sample(n, n, 9.0));
            for crossover in [1, 3] {
                let c = square(&a, &b, crossover);
                assert!(c.approx_eq(&naive::multiply(&a, &b), 1e-12), "n={} crossover={}", n, crossover);
            }
        }
    }

    #[test]
    fn test_integer_entries_are_exact() {
        let a = Matrix::from_vec(4, 4, (0..16).map(f64::from).collect()).unwrap();
        let b = Matrix::from_vec(4, 4, (0..16).map(|x| f64::from(x % 5) - 2.0).collect()).unwrap();
        assert_eq!(square(&a, &b, 1), naive::multiply(&a, &b));
    }
}
