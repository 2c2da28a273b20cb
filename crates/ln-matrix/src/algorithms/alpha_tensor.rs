//! Rank-49 multiplication of 4x4 block matrices.
//!
//! The factor table is the tensor square of Strassen's rank-7 scheme for
//! 2x2 blocks: a 4x4 block product is a 2x2 product of 2x2 block matrices,
//! so each of the 49 rank-one terms pairs an outer Strassen product with an
//! inner one. Product `r` is `(sum U[r][i] A_i) x (sum V[r][i] B_i)` and
//! contributes `W[r][i]` times itself to `C_i`, blocks indexed row-major.

use tracing::trace;

use crate::algorithms::padding::{self, SquareKernel};
use crate::algorithms::simd;
use crate::matrix::Matrix;

/// Blocks of at most this size are multiplied densely.
pub const ALPHA_TENSOR_CROSSOVER: usize = 64;

/// Number of block products per level.
pub const RANK: usize = 49;

const BLOCKS: usize = 16;

// Strassen's scheme over blocks [11, 12, 21, 22].
const STRASSEN_U: [[i8; 4]; 7] = [
    [1, 0, 0, 1],
    [0, 0, 1, 1],
    [1, 0, 0, 0],
    [0, 0, 0, 1],
    [1, 1, 0, 0],
    [-1, 0, 1, 0],
    [0, 1, 0, -1],
];
const STRASSEN_V: [[i8; 4]; 7] = [
    [1, 0, 0, 1],
    [1, 0, 0, 0],
    [0, 1, 0, -1],
    [-1, 0, 1, 0],
    [0, 0, 0, 1],
    [1, 1, 0, 0],
    [0, 0, 1, 1],
];
const STRASSEN_W: [[i8; 4]; 7] = [
    [1, 0, 0, 1],
    [0, 0, 1, -1],
    [0, 1, 0, 1],
    [1, 0, 1, 0],
    [-1, 1, 0, 0],
    [0, 0, 0, 1],
    [1, 0, 0, 0],
];

/// Coefficients of the 49 terms over the 16 blocks of a 4x4 partition.
const fn tensor_square(f: &[[i8; 4]; 7]) -> [[i8; BLOCKS]; RANK] {
    let mut out = [[0i8; BLOCKS]; RANK];
    let mut p = 0;
    while p < 7 {
        let mut q = 0;
        while q < 7 {
            let mut blk = 0;
            while blk < BLOCKS {
                let (row, col) = (blk / 4, blk % 4);
                let outer = (row / 2) * 2 + col / 2;
                let inner = (row % 2) * 2 + col % 2;
                out[p * 7 + q][blk] = f[p][outer] * f[q][inner];
                blk += 1;
            }
            q += 1;
        }
        p += 1;
    }
    out
}

pub(crate) const U: [[i8; BLOCKS]; RANK] = tensor_square(&STRASSEN_U);
pub(crate) const V: [[i8; BLOCKS]; RANK] = tensor_square(&STRASSEN_V);
pub(crate) const W: [[i8; BLOCKS]; RANK] = tensor_square(&STRASSEN_W);

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    padding::square_product(a, b, square, ALPHA_TENSOR_CROSSOVER)
}

/// Sizes that are not a multiple of four are padded up to one.
pub(crate) fn square(a: &Matrix, b: &Matrix, crossover: usize) -> Matrix {
    let n = a.rows();
    if n <= crossover.max(1) {
        return simd::multiply(a, b);
    }
    if n % 4 != 0 {
        return padding::padded(a, b, n + 4 - n % 4, square as SquareKernel, crossover);
    }
    trace!(n, "alpha tensor level");

    let h = n / 4;
    let a_blocks = padding::split(a, 4);
    let b_blocks = padding::split(b, 4);
    let pairs = (0..RANK)
        .map(|r| (combine(&a_blocks, &U[r], h), combine(&b_blocks, &V[r], h)))
        .collect();
    let products = padding::multiply_all(pairs, square, crossover);

    let mut c_blocks = vec![Matrix::zeros(h, h); BLOCKS];
    for (r, product) in products.iter().enumerate() {
        for (blk, &coeff) in W[r].iter().enumerate() {
            if coeff != 0 {
                c_blocks[blk].add_scaled_assign(product, f64::from(coeff));
            }
        }
    }
    padding::join(&c_blocks, 4)
}

fn combine(blocks: &[Matrix], coeffs: &[i8; BLOCKS], h: usize) -> Matrix {
    let mut acc = Matrix::zeros(h, h);
    for (block, &coeff) in blocks.iter().zip(coeffs) {
        if coeff != 0 {
            acc.add_scaled_assign(block, f64::from(coeff));
        }
    }
    acc
}
