// Magnitude arithmetic on little-endian radix-10^9 limb slices.
//
// Every function accepts slices that may carry high zero limbs and returns a
// trimmed vector (no most-significant zero limbs; zero is the empty vector).

use std::cmp::Ordering;

/// Limb radix. `(BASE - 1)^2 + 2 * (BASE - 1)` fits in a `u64`, so one
/// multiply-add step plus carry never overflows the accumulator.
pub const BASE: u64 = 1_000_000_000;

/// Decimal digits held by one limb.
pub const BASE_DIGITS: usize = 9;

/// Powers of ten below `BASE`, indexed by exponent.
pub(crate) const POW10: [u32; BASE_DIGITS] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
];

pub(crate) fn trim(v: &mut Vec<u32>) {
    while v.last() == Some(&0) {
        v.pop();
    }
}

/// Strips high zero limbs from a borrowed slice.
pub(crate) fn significant(a: &[u32]) -> &[u32] {
    let mut len = a.len();
    while len > 0 && a[len - 1] == 0 {
        len -= 1;
    }
    &a[..len]
}

pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    let a = significant(a);
    let b = significant(b);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &x) in long.iter().enumerate() {
        let s = x as u64 + short.get(i).copied().unwrap_or(0) as u64 + carry;
        if s >= BASE {
            out.push((s - BASE) as u32);
            carry = 1;
        } else {
            out.push(s as u32);
            carry = 0;
        }
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// `a - b`. The caller guarantees `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let b = significant(b);
    debug_assert!(cmp(a, b) != Ordering::Less, "magnitude subtraction underflow");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for (i, &x) in a.iter().enumerate() {
        let mut d = x as i64 - b.get(i).copied().unwrap_or(0) as i64 - borrow;
        if d < 0 {
            d += BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(d as u32);
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut out);
    out
}

/// `acc += b * BASE^shift`, growing `acc` as needed.
pub(crate) fn add_shifted(acc: &mut Vec<u32>, b: &[u32], shift: usize) {
    let b = significant(b);
    if b.is_empty() {
        return;
    }
    if acc.len() < shift + b.len() {
        acc.resize(shift + b.len(), 0);
    }
    let mut carry = 0u64;
    let mut i = 0;
    while i < b.len() || carry > 0 {
        let pos = shift + i;
        if pos == acc.len() {
            acc.push(0);
        }
        let s = acc[pos] as u64 + b.get(i).copied().unwrap_or(0) as u64 + carry;
        if s >= BASE {
            acc[pos] = (s - BASE) as u32;
            carry = 1;
        } else {
            acc[pos] = s as u32;
            carry = 0;
        }
        i += 1;
    }
}

/// Multiplies by `BASE^n` (prepends `n` zero limbs).
pub(crate) fn shl(a: &[u32], n: usize) -> Vec<u32> {
    let a = significant(a);
    if a.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; n];
    out.extend_from_slice(a);
    out
}

pub(crate) fn mul_small(a: &[u32], m: u32) -> Vec<u32> {
    if m == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &x in a {
        let t = x as u64 * m as u64 + carry;
        out.push((t % BASE) as u32);
        carry = t / BASE;
    }
    while carry > 0 {
        out.push((carry % BASE) as u32);
        carry /= BASE;
    }
    trim(&mut out);
    out
}

/// Divides by a single non-zero word, returning quotient and remainder.
pub(crate) fn div_rem_small(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let mut q = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = rem * BASE + a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    trim(&mut q);
    (q, rem as u32)
}

/// Long division (Knuth, TAOCP vol. 2, algorithm D) in radix `BASE`.
///
/// `b` must be non-zero.
pub(crate) fn div_rem(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let a = significant(a);
    let b = significant(b);
    debug_assert!(!b.is_empty());

    if cmp(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    if b.len() == 1 {
        let (q, r) = div_rem_small(a, b[0]);
        let r = if r == 0 { Vec::new() } else { vec![r] };
        return (q, r);
    }

    // Normalize so the divisor's top limb is at least BASE / 2.
    let d = (BASE / (b[b.len() - 1] as u64 + 1)) as u32;
    let v = mul_small(b, d);
    let mut u = mul_small(a, d);
    u.resize(a.len() + 1, 0);

    let n = v.len();
    let m = a.len() - n;
    let v_top = v[n - 1] as u64;
    let v_next = v[n - 2] as u64;
    let mut q = vec![0u32; m + 1];

    for j in (0..=m).rev() {
        let num = u[j + n] as u64 * BASE + u[j + n - 1] as u64;
        let mut q_hat = num / v_top;
        let mut r_hat = num % v_top;
        while q_hat >= BASE || q_hat * v_next > r_hat * BASE + u[j + n - 2] as u64 {
            q_hat -= 1;
            r_hat += v_top;
            if r_hat >= BASE {
                break;
            }
        }

        // u[j..=j+n] -= q_hat * v
        let mut borrow = 0i64;
        let mut carry = 0u64;
        for i in 0..n {
            let p = q_hat * v[i] as u64 + carry;
            carry = p / BASE;
            let t = u[i + j] as i64 - (p % BASE) as i64 - borrow;
            if t < 0 {
                u[i + j] = (t + BASE as i64) as u32;
                borrow = 1;
            } else {
                u[i + j] = t as u32;
                borrow = 0;
            }
        }
        let t = u[j + n] as i64 - carry as i64 - borrow;
        if t < 0 {
            // q_hat was one too large: add the divisor back.
            u[j + n] = (t + BASE as i64) as u32;
            q_hat -= 1;
            let mut c = 0u64;
            for i in 0..n {
                let s = u[i + j] as u64 + v[i] as u64 + c;
                if s >= BASE {
                    u[i + j] = (s - BASE) as u32;
                    c = 1;
                } else {
                    u[i + j] = s as u32;
                    c = 0;
                }
            }
            u[j + n] = ((u[j + n] as u64 + c) % BASE) as u32;
        } else {
            u[j + n] = t as u32;
        }
        q[j] = q_hat as u32;
    }

    trim(&mut q);
    let (r, _) = div_rem_small(&u[..n], d);
    (q, r)
}
