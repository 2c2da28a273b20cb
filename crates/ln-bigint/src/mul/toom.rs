use super::{schoolbook, TOOM3_THRESHOLD};
use crate::bigint::BigInt;
use crate::limbs;

/// Splits `a` into three `k`-limb pieces, least significant first.
fn split3(a: &[u32], k: usize) -> [BigInt; 3] {
    let piece = |i: usize| {
        let start = (i * k).min(a.len());
        let end = ((i + 1) * k).min(a.len());
        BigInt::from_magnitude(a[start..end].to_vec())
    };
    [piece(0), piece(1), piece(2)]
}

/// Values of `p0 + p1 x + p2 x^2` at 0, 1, -1, -2 and infinity.
fn evaluate([p0, p1, p2]: &[BigInt; 3]) -> [BigInt; 5] {
    let p02 = p0 + p2;
    let at_one = &p02 + p1;
    let at_minus_one = &p02 - p1;
    let at_minus_two = (&at_minus_one + p2).mul_small(2) - p0;
    [p0.clone(), at_one, at_minus_one, at_minus_two, p2.clone()]
}

fn signed_mul(x: &BigInt, y: &BigInt) -> BigInt {
    let sign = x.sign().product(y.sign());
    BigInt::from_parts(sign, mul(x.limbs(), y.limbs()))
}

/// Divides a value known to be a multiple of `d`.
fn exact_div(x: &BigInt, d: u32) -> BigInt {
    let (q, r) = limbs::div_rem_small(x.limbs(), d);
    debug_assert_eq!(r, 0, "toom-3 interpolation produced an inexact division");
    BigInt::from_parts(x.sign(), q)
}

/// Toom-3 with evaluation points {0, 1, -1, -2, inf} and Bodrato's
/// interpolation sequence.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = limbs::significant(a);
    let b = limbs::significant(b);
    if a.len().min(b.len()) < TOOM3_THRESHOLD {
        return schoolbook::mul(a, b);
    }

    let k = (a.len().max(b.len()) + 2) / 3;
    let u = evaluate(&split3(a, k));
    let v = evaluate(&split3(b, k));

    let r0 = signed_mul(&u[0], &v[0]);
    let r1 = signed_mul(&u[1], &v[1]);
    let rm1 = signed_mul(&u[2], &v[2]);
    let rm2 = signed_mul(&u[3], &v[3]);
    let rinf = signed_mul(&u[4], &v[4]);

    let c3 = exact_div(&(&rm2 - &r1), 3);
    let c1 = exact_div(&(&r1 - &rm1), 2);
    let c2 = &rm1 - &r0;
    let c3 = exact_div(&(&c2 - &c3), 2) + rinf.mul_small(2);
    let c2 = c2 + &c1 - &rinf;
    let c1 = c1 - &c3;

    let result = r0 + c1.shl_limbs(k) + c2.shl_limbs(2 * k) + c3.shl_limbs(3 * k) + rinf.shl_limbs(4 * k);
    debug_assert!(!result.is_negative());
    result.limbs().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, seed: u32) -> Vec<u32> {
        (0..len as u32)
            .map(|i| (i.wrapping_mul(40_503).wrapping_add(seed).wrapping_mul(2_246_822_519)) % 1_000_000_000)
            .collect()
    }

    #[test]
    fn test_matches_schoolbook_balanced() {
        let a = ramp(4 * TOOM3_THRESHOLD + 2, 1);
        let b = ramp(4 * TOOM3_THRESHOLD + 1, 2);
        assert_eq!(mul(&a, &b), schoolbook::mul(&a, &b));
    }

    #[test]
    fn test_matches_schoolbook_unbalanced() {
        let a = ramp(6 * TOOM3_THRESHOLD, 5);
        let b = ramp(TOOM3_THRESHOLD, 9);
        assert_eq!(mul(&a, &b), schoolbook::mul(&a, &b));
    }

    #[test]
    fn test_all_max_limbs() {
        let a = vec![999_999_999u32; 3 * TOOM3_THRESHOLD];
        assert_eq!(mul(&a, &a), schoolbook::mul(&a, &a));
    }
}
