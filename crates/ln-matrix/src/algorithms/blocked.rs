use crate::algorithms::naive;
use crate::matrix::Matrix;

/// Edge length of the square cache tiles.
pub const BLOCK_SIZE: usize = 64;

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    multiply_tiled(a, b, BLOCK_SIZE)
}

/// Tiled i-k-j product. Tiles are visited with `k` ascending, so every
/// entry sums its products in the same order as the naive loop.
pub(crate) fn multiply_tiled(a: &Matrix, b: &Matrix, tile: usize) -> Matrix {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let tile = tile.max(1);
    if m <= tile && k <= tile && n <= tile {
        return naive::multiply(a, b);
    }

    let (a, b) = (a.as_slice(), b.as_slice());
    let mut c = vec![0.0; m * n];
    for ii in (0..m).step_by(tile) {
        let i_end = (ii + tile).min(m);
        for kk in (0..k).step_by(tile) {
            let k_end = (kk + tile).min(k);
            for jj in (0..n).step_by(tile) {
                let j_end = (jj + tile).min(n);
                for i in ii..i_end {
                    let c_row = &mut c[i * n + jj..i * n + j_end];
                    for p in kk..k_end {
                        let aik = a[i * k + p];
                        let b_row = &b[p * n + jj..p * n + j_end];
                        for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                            *cij += aik * bkj;
                        }
                    }
                }
            }
        }
    }
    Matrix::from_parts(m, n, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_tiles_match_naive() {
        let a = Matrix::from_vec(7, 5, (0..35).map(|x| (x as f64).sin()).collect()).unwrap();
        let b = Matrix::from_vec(5, 9, (0..45).map(|x| (x as f64).cos()).collect()).unwrap();
        for tile in [1, 2, 3, 4, 64] {
            assert_eq!(multiply_tiled(&a, &b, tile), naive::multiply(&a, &b));
        }
    }
}
