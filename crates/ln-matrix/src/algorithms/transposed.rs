use crate::matrix::Matrix;

/// Transposes `b` once so both operands stream along contiguous rows.
pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let (m, n) = (a.rows(), b.cols());
    let bt = b.transpose();
    let mut c = Vec::with_capacity(m * n);
    for i in 0..m {
        let a_row = a.row(i);
        for j in 0..n {
            let mut sum = 0.0;
            for (&x, &y) in a_row.iter().zip(bt.row(j)) {
                sum += x * y;
            }
            c.push(sum);
        }
    }
    Matrix::from_parts(m, n, c)
}
