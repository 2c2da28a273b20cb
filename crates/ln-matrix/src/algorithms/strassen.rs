use tracing::trace;

use crate::algorithms::padding::{self, SquareKernel};
use crate::algorithms::simd;
use crate::matrix::Matrix;

/// Blocks of at most this size are multiplied densely.
pub const STRASSEN_CROSSOVER: usize = 64;

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    padding::square_product(a, b, square, STRASSEN_CROSSOVER)
}

/// Seven half-size products per level. Odd sizes are padded by one.
pub(crate) fn square(a: &Matrix, b: &Matrix, crossover: usize) -> Matrix {
    let n = a.rows();
    if n <= crossover.max(1) {
        return simd::multiply(a, b);
    }
    if n % 2 == 1 {
        return padding::padded(a, b, n + 1, square as SquareKernel, crossover);
    }
    trace!(n, "strassen level");

    let [a11, a12, a21, a22]: [Matrix; 4] = quadrants(a);
    let [b11, b12, b21, b22]: [Matrix; 4] = quadrants(b);

    let pairs = vec![
        (&a11 + &a22, &b11 + &b22),
        (&a21 + &a22, b11.clone()),
        (a11.clone(), &b12 - &b22),
        (a22.clone(), &b21 - &b11),
        (&a11 + &a12, b22.clone()),
        (&a21 - &a11, &b11 + &b12),
        (&a12 - &a22, &b21 + &b22),
    ];
    let m = padding::multiply_all(pairs, square, crossover);

    let c11 = &(&(&m[0] + &m[3]) - &m[4]) + &m[6];
    let c12 = &m[2] + &m[4];
    let c21 = &m[1] + &m[3];
    let c22 = &(&(&m[0] - &m[1]) + &m[2]) + &m[5];
    padding::join(&[c11, c12, c21, c22], 2)
}

pub(crate) fn quadrants(m: &Matrix) -> [Matrix; 4] {
    let mut blocks = padding::split(m, 2).into_iter();
    let mut next = || blocks.next().unwrap_or_else(|| Matrix::zeros(0, 0));
    [next(), next(), next(), next()]
}
