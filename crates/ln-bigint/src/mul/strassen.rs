// Schönhage–Strassen style multiplication: the limbs are re-radixed to
// base 1000 and convolved with a number-theoretic transform over the prime
// P = 2^64 - 2^32 + 1. Every convolution coefficient is below
// min(len) * 999^2, far under P, so the result is exact.

use super::{schoolbook, STRASSEN_THRESHOLD};
use crate::limbs::{self, BASE};

const P: u64 = 0xFFFF_FFFF_0000_0001;
/// Generator of the multiplicative group mod P.
const GENERATOR: u64 = 7;
/// P - 1 = 2^32 * odd, so transforms up to 2^32 points exist.
const MAX_LOG_LEN: u32 = 32;

const SUB_RADIX: u64 = 1_000;
const SUB_DIGITS_PER_LIMB: usize = 3;

fn add_mod(a: u64, b: u64) -> u64 {
    let (s, overflow) = a.overflowing_add(b);
    if overflow || s >= P {
        s.wrapping_sub(P)
    } else {
        s
    }
}

fn sub_mod(a: u64, b: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + (P - b)
    }
}

fn mul_mod(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % P as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut acc = 1u64;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base);
        }
        base = mul_mod(base, base);
        exp >>= 1;
    }
    acc
}

/// In-place iterative radix-2 transform. `a.len()` must be a power of two.
fn transform(a: &mut [u64], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two());
    debug_assert!(n.trailing_zeros() <= MAX_LOG_LEN);

    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j |= bit;
        if i < j {
            a.swap(i, j);
        }
    }

    let mut len = 2;
    while len <= n {
        let mut w_len = pow_mod(GENERATOR, (P - 1) / len as u64);
        if invert {
            w_len = pow_mod(w_len, P - 2);
        }
        let half = len / 2;
        for chunk in a.chunks_mut(len) {
            let mut w = 1u64;
            for i in 0..half {
                let u = chunk[i];
                let v = mul_mod(chunk[i + half], w);
                chunk[i] = add_mod(u, v);
                chunk[i + half] = sub_mod(u, v);
                w = mul_mod(w, w_len);
            }
        }
        len <<= 1;
    }

    if invert {
        let n_inv = pow_mod(n as u64, P - 2);
        for x in a.iter_mut() {
            *x = mul_mod(*x, n_inv);
        }
    }
}

fn to_sub_digits(a: &[u32], len: usize) -> Vec<u64> {
    let mut out = Vec::with_capacity(len);
    for &limb in a {
        let mut l = limb as u64;
        for _ in 0..SUB_DIGITS_PER_LIMB {
            out.push(l % SUB_RADIX);
            l /= SUB_RADIX;
        }
    }
    out.resize(len, 0);
    out
}

pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = limbs::significant(a);
    let b = limbs::significant(b);
    if a.len().min(b.len()) < STRASSEN_THRESHOLD {
        return schoolbook::mul(a, b);
    }

    let digits = (a.len() + b.len()) * SUB_DIGITS_PER_LIMB;
    let n = digits.next_power_of_two();
    let mut fa = to_sub_digits(a, n);
    let mut fb = to_sub_digits(b, n);

    transform(&mut fa, false);
    transform(&mut fb, false);
    for (x, y) in fa.iter_mut().zip(fb.iter()) {
        *x = mul_mod(*x, *y);
    }
    transform(&mut fa, true);

    // Carry in base 1000, then pack three sub-digits per limb.
    let mut carry = 0u128;
    let mut sub = Vec::with_capacity(n + 8);
    for &c in &fa {
        let t = c as u128 + carry;
        sub.push((t % SUB_RADIX as u128) as u64);
        carry = t / SUB_RADIX as u128;
    }
    while carry > 0 {
        sub.push((carry % SUB_RADIX as u128) as u64);
        carry /= SUB_RADIX as u128;
    }

    let mut out: Vec<u32> = sub
        .chunks(SUB_DIGITS_PER_LIMB)
        .map(|c| {
            let limb = c.iter().rev().fold(0u64, |acc, &d| acc * SUB_RADIX + d);
            debug_assert!(limb < BASE);
            limb as u32
        })
        .collect();
    limbs::trim(&mut out);
    out
}
