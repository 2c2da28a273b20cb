//! The naive i-k-j loop on the platform vector unit.
//!
//! Kernels broadcast `a[i][k]` and multiply then add (never fused), so the
//! result is bit-identical to [`naive`](super::naive). Without a usable
//! vector unit the scalar kernel runs instead.

use crate::algorithms::naive;
use crate::matrix::Matrix;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "x86_64")] {
        /// Whether a vector kernel will run on this machine.
        pub fn is_simd_available() -> bool {
            std::arch::is_x86_feature_detected!("avx")
        }

        fn vector_kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) -> bool {
            if !is_simd_available() {
                return false;
            }
            // SAFETY: AVX support was just detected and the slices hold
            // m*k, k*n and m*n entries.
            unsafe { avx::kernel(a, b, c, m, k, n) };
            true
        }

        mod avx {
            use std::arch::x86_64::*;

            const LANES: usize = 4;

            /// # Safety
            /// The CPU must support AVX; `a`, `b` and `c` must hold at least
            /// `m*k`, `k*n` and `m*n` entries.
            #[target_feature(enable = "avx")]
            pub(super) unsafe fn kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
                let body = n - n % LANES;
                for i in 0..m {
                    let c_row = &mut c[i * n..(i + 1) * n];
                    for p in 0..k {
                        let aik = a[i * k + p];
                        let b_row = &b[p * n..(p + 1) * n];
                        let va = _mm256_set1_pd(aik);
                        let mut j = 0;
                        while j < body {
                            let vb = _mm256_loadu_pd(b_row.as_ptr().add(j));
                            let vc = _mm256_loadu_pd(c_row.as_ptr().add(j));
                            _mm256_storeu_pd(c_row.as_mut_ptr().add(j), _mm256_add_pd(vc, _mm256_mul_pd(va, vb)));
                            j += LANES;
                        }
                        for j in body..n {
                            c_row[j] += aik * b_row[j];
                        }
                    }
                }
            }
        }
    } else if #[cfg(target_arch = "aarch64")] {
        /// Whether a vector kernel will run on this machine.
        pub fn is_simd_available() -> bool {
            super::neon::is_neon_available()
        }

        fn vector_kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) -> bool {
            super::neon::kernel(a, b, c, m, k, n)
        }
    } else {
        /// Whether a vector kernel will run on this machine.
        pub fn is_simd_available() -> bool {
            false
        }

        fn vector_kernel(_a: &[f64], _b: &[f64], _c: &mut [f64], _m: usize, _k: usize, _n: usize) -> bool {
            false
        }
    }
}

pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    let mut c = vec![0.0; m * n];
    if !vector_kernel(a.as_slice(), b.as_slice(), &mut c, m, k, n) {
        naive::kernel(a.as_slice(), b.as_slice(), &mut c, m, k, n);
    }
    Matrix::from_parts(m, n, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_identical_to_naive() {
        // Widths around the lane count exercise the scalar tail.
        for n in [1, 3, 4, 5, 8, 13] {
            let a = Matrix::from_vec(6, 7, (0..42).map(|x| (x as f64 * 0.731).sin()).collect()).unwrap();
            let b = Matrix::from_vec(7, n, (0..7 * n).map(|x| (x as f64 * 1.37).cos()).collect()).unwrap();
            assert_eq!(multiply(&a, &b), naive::multiply(&a, &b));
        }
    }
}
