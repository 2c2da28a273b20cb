// Zero-padding and block partitioning shared by the recursive strategies.

use tracing::trace;

use crate::algorithms::simd;
use crate::matrix::Matrix;

/// Recursive kernel on two equally sized square matrices. The last argument
/// is the crossover at or below which it multiplies densely.
pub(crate) type SquareKernel = fn(&Matrix, &Matrix, usize) -> Matrix;

/// Runs a square `kernel` on an arbitrary `a x b` product.
///
/// Products whose smallest dimension is at or below `crossover` go to the
/// dense kernel. Otherwise the product is cut into `t x t` tiles, `t` the
/// smallest dimension, and each output tile accumulates the kernel's
/// products along the inner dimension. Only tiles on the ragged edge are
/// zero-padded.
pub(crate) fn square_product(a: &Matrix, b: &Matrix, kernel: SquareKernel, crossover: usize) -> Matrix {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let t = m.min(k).min(n);
    if t <= crossover.max(1) {
        return simd::multiply(a, b);
    }
    if m == t && k == t && n == t {
        return kernel(a, b, crossover);
    }
    trace!(m, k, n, tile = t, "tiling non-square product");

    let mut c = Matrix::zeros(m, n);
    for i in (0..m).step_by(t) {
        for j in (0..n).step_by(t) {
            let pairs = (0..k)
                .step_by(t)
                .map(|p| (a.window(i, p, t, t), b.window(p, j, t, t)))
                .collect();
            let mut acc = Matrix::zeros(t, t);
            for product in multiply_all(pairs, kernel, crossover) {
                acc.add_scaled_assign(&product, 1.0);
            }
            c.paste(i, j, &acc);
        }
    }
    c
}

/// Runs `kernel` on `a` and `b` zero-padded to `size x size`, then crops.
pub(crate) fn padded(a: &Matrix, b: &Matrix, size: usize, kernel: SquareKernel, crossover: usize) -> Matrix {
    let n = a.rows();
    let c = kernel(&a.window(0, 0, size, size), &b.window(0, 0, size, size), crossover);
    c.window(0, 0, n, n)
}

/// Splits a square matrix whose size is divisible by `parts` into
/// `parts x parts` blocks, row-major.
pub(crate) fn split(m: &Matrix, parts: usize) -> Vec<Matrix> {
    let h = m.rows() / parts;
    debug_assert_eq!(h * parts, m.rows());
    let mut blocks = Vec::with_capacity(parts * parts);
    for r in 0..parts {
        for c in 0..parts {
            blocks.push(m.window(r * h, c * h, h, h));
        }
    }
    blocks
}

/// Inverse of [`split`].
pub(crate) fn join(blocks: &[Matrix], parts: usize) -> Matrix {
    let h = blocks[0].rows();
    let mut out = Matrix::zeros(h * parts, h * parts);
    for (idx, block) in blocks.iter().enumerate() {
        out.paste((idx / parts) * h, (idx % parts) * h, block);
    }
    out
}

cfg_if::cfg_if! {
    if #[cfg(feature = "concurrent")] {
        /// Multiplies every pair with `kernel` on the rayon pool. Products
        /// come back in input order.
        pub(crate) fn multiply_all(pairs: Vec<(Matrix, Matrix)>, kernel: SquareKernel, crossover: usize) -> Vec<Matrix> {
            use rayon::prelude::*;
            pairs
                .into_par_iter()
                .map(|(a, b)| kernel(&a, &b, crossover))
                .collect()
        }
    } else {
        /// Multiplies every pair with `kernel`. Products come back in input
        /// order.
        pub(crate) fn multiply_all(pairs: Vec<(Matrix, Matrix)>, kernel: SquareKernel, crossover: usize) -> Vec<Matrix> {
            pairs
                .into_iter()
                .map(|(a, b)| kernel(&a, &b, crossover))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::naive;

    fn naive_kernel(a: &Matrix, b: &Matrix, _crossover: usize) -> Matrix {
        naive::multiply(a, b)
    }

    #[test]
    fn test_split_join_roundtrip() {
        let m = Matrix::from_vec(4, 4, (0..16).map(f64::from).collect()).unwrap();
        let blocks = split(&m, 2);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[1].as_slice(), &[2.0, 3.0, 6.0, 7.0]);
        assert_eq!(join(&blocks, 2), m);
        assert_eq!(join(&split(&m, 4), 4), m);
    }

    #[test]
    fn test_square_product_crops() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 1, vec![1.0, 0.0, -1.0]).unwrap();
        let c = square_product(&a, &b, naive_kernel, 0);
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn test_square_product_tiles_non_square_shapes() {
        for (m, k, n) in [(7, 3, 11), (3, 9, 4), (10, 10, 3), (5, 12, 5)] {
            let a = Matrix::from_vec(m, k, (0..m * k).map(|x| (x % 7) as f64 - 3.0).collect()).unwrap();
            let b = Matrix::from_vec(k, n, (0..k * n).map(|x| (x % 5) as f64 - 2.0).collect()).unwrap();
            let c = square_product(&a, &b, naive_kernel, 2);
            assert_eq!(c, naive::multiply(&a, &b), "{}x{}x{}", m, k, n);
        }
    }

    #[test]
    fn test_multiply_all_keeps_order() {
        let pairs: Vec<_> = (1..=3)
            .map(|x| (Matrix::new(1, 1, x as f64), Matrix::new(1, 1, 10.0)))
            .collect();
        let products = multiply_all(pairs, naive_kernel, 0);
        let values: Vec<f64> = products.iter().map(|p| p[(0, 0)]).collect();
        assert_eq!(values, vec![10.0, 20.0, 30.0]);
    }
}
