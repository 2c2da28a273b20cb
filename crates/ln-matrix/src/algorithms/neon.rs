//! NEON kernel, compiled only for aarch64.

use crate::matrix::Matrix;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "aarch64")] {
        use std::arch::aarch64::*;

        const LANES: usize = 2;

        pub fn is_neon_available() -> bool {
            std::arch::is_aarch64_feature_detected!("neon")
        }

        /// Runs the NEON kernel if the CPU has NEON; returns whether it ran.
        pub(crate) fn kernel(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) -> bool {
            if !is_neon_available() {
                return false;
            }
            // SAFETY: NEON support was just detected and the slices hold
            // m*k, k*n and m*n entries.
            unsafe { kernel_neon(a, b, c, m, k, n) };
            true
        }

        /// # Safety
        /// The CPU must support NEON; `a`, `b` and `c` must hold at least
        /// `m*k`, `k*n` and `m*n` entries.
        #[target_feature(enable = "neon")]
        unsafe fn kernel_neon(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
            let body = n - n % LANES;
            for i in 0..m {
                let c_row = &mut c[i * n..(i + 1) * n];
                for p in 0..k {
                    let aik = a[i * k + p];
                    let b_row = &b[p * n..(p + 1) * n];
                    let va = vdupq_n_f64(aik);
                    let mut j = 0;
                    while j < body {
                        let vb = vld1q_f64(b_row.as_ptr().add(j));
                        let vc = vld1q_f64(c_row.as_ptr().add(j));
                        vst1q_f64(c_row.as_mut_ptr().add(j), vaddq_f64(vc, vmulq_f64(va, vb)));
                        j += LANES;
                    }
                    for j in body..n {
                        c_row[j] += aik * b_row[j];
                    }
                }
            }
        }

        pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
            let (m, k, n) = (a.rows(), a.cols(), b.cols());
            let mut c = vec![0.0; m * n];
            if !kernel(a.as_slice(), b.as_slice(), &mut c, m, k, n) {
                super::naive::kernel(a.as_slice(), b.as_slice(), &mut c, m, k, n);
            }
            Matrix::from_parts(m, n, c)
        }
    } else {
        pub fn is_neon_available() -> bool {
            false
        }

        /// No NEON on this target; the portable vector path stands in.
        pub(crate) fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
            super::simd::multiply(a, b)
        }
    }
}
