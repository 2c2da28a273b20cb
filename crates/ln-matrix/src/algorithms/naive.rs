use crate::matrix::Matrix;

/// `c += a x b` over row-major slices, loop order i-k-j.
///
/// Each output entry accumulates its products in ascending `k`, the order
/// every exact strategy reproduces.
pub(crate) fn kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            let aik = a[i * k + p];
            let b_row = &b[p * n..(p + 1) * n];
            for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = vec![0.0; m * n];
    kernel(a.as_slice(), b.as_slice(), &mut c, m, k, n);
    Matrix::from_parts(m, n, c)
}
