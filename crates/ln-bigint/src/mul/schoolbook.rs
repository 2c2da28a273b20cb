use crate::limbs::{self, BASE};

/// Digit-by-digit convolution with per-step carry propagation.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let a = limbs::significant(a);
    let b = limbs::significant(b);
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = out[i + j] as u64 + x as u64 * y as u64 + carry;
            out[i + j] = (t % BASE) as u32;
            carry = t / BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = out[k] as u64 + carry;
            out[k] = (t % BASE) as u32;
            carry = t / BASE;
            k += 1;
        }
    }
    limbs::trim(&mut out);
    out
}
