use super::{schoolbook, KARATSUBA_THRESHOLD};
use crate::limbs;

/// Splits `a` into its low `k` limbs and the remaining high limbs.
pub(super) fn split_at(a: &[u32], k: usize) -> (&[u32], &[u32]) {
    if a.len() <= k {
        (a, &[])
    } else {
        (limbs::significant(&a[..k]), &a[k..])
    }
}

/// `a * b = z2 B^2k + ((a0 + a1)(b0 + b1) - z0 - z2) B^k + z0`.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = limbs::significant(a);
    let b = limbs::significant(b);
    if a.len().min(b.len()) < KARATSUBA_THRESHOLD {
        return schoolbook::mul(a, b);
    }

    let k = (a.len().max(b.len()) + 1) / 2;
    let (a0, a1) = split_at(a, k);
    let (b0, b1) = split_at(b, k);

    let z0 = mul(a0, b0);
    let z2 = mul(a1, b1);
    let z1 = mul(&limbs::add(a0, a1), &limbs::add(b0, b1));
    let z1 = limbs::sub(&limbs::sub(&z1, &z0), &z2);

    let mut out = z0;
    limbs::add_shifted(&mut out, &z1, k);
    limbs::add_shifted(&mut out, &z2, 2 * k);
    limbs::trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, seed: u32) -> Vec<u32> {
        (0..len as u32)
            .map(|i| (i.wrapping_mul(2_654_435_761).wrapping_add(seed)) % 1_000_000_000)
            .collect()
    }

    #[test]
    fn test_matches_schoolbook_above_threshold() {
        let a = ramp(3 * KARATSUBA_THRESHOLD + 5, 7);
        let b = ramp(2 * KARATSUBA_THRESHOLD + 1, 11);
        assert_eq!(mul(&a, &b), schoolbook::mul(&a, &b));
    }

    #[test]
    fn test_low_half_with_zero_limbs() {
        // Low halves made of zeros exercise the trimmed split.
        let mut a = vec![0u32; 2 * KARATSUBA_THRESHOLD];
        a.push(9);
        let b = ramp(2 * KARATSUBA_THRESHOLD + 1, 3);
        assert_eq!(mul(&a, &b), schoolbook::mul(&a, &b));
    }
}
