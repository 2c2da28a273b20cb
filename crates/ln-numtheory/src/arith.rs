use ln_bigint::{BigInt, BASE};
use ln_random::RandomGenerator;

use crate::error::{NumTheoryError, Result};

fn require_non_negative(what: &'static str, value: &BigInt) -> Result<()> {
    if value.is_negative() {
        return Err(NumTheoryError::NegativeArgument {
            what,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Greatest common divisor of `|a|` and `|b|` by Euclid's algorithm.
///
/// `gcd(a, 0) = |a|` and `gcd(0, 0) = 0`; the result is never negative.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `|a b| / gcd(a, b)`. Zero if either input is zero.
pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }
    (&a.abs() / &gcd(a, b)) * b.abs()
}

/// `n!`
///
/// # Errors
/// Returns `NumTheoryError::NegativeArgument` for negative `n`.
pub fn factorial(n: &BigInt) -> Result<BigInt> {
    require_non_negative("factorial argument", n)?;
    let one = BigInt::one();
    let mut acc = BigInt::one();
    let mut i = BigInt::from(2u32);
    while &i <= n {
        acc = &acc * &i;
        i = &i + &one;
    }
    Ok(acc)
}

/// `base^exponent` by square-and-multiply. `pow(x, 0) = 1`, including `0^0`.
///
/// # Errors
/// Returns `NumTheoryError::NegativeArgument` for a negative exponent.
pub fn pow(base: &BigInt, exponent: &BigInt) -> Result<BigInt> {
    require_non_negative("exponent", exponent)?;
    let mut result = BigInt::one();
    let mut square = base.clone();
    let mut e = exponent.clone();
    while !e.is_zero() {
        let (half, bit) = e.div_rem_small(2)?;
        if bit == 1 {
            result = &result * &square;
        }
        e = half;
        if !e.is_zero() {
            square = &square * &square;
        }
    }
    Ok(result)
}

/// `base^exponent mod modulus`, in `[0, modulus)`.
///
/// Negative bases are reduced first; every squaring and multiplication is
/// reduced immediately, so intermediates stay below `modulus^2`.
///
/// # Errors
/// Returns `NumTheoryError::NonPositiveModulus` when `modulus <= 0` and
/// `NumTheoryError::NegativeArgument` for a negative exponent.
pub fn pow_mod(base: &BigInt, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
    if !modulus.is_positive() {
        return Err(NumTheoryError::NonPositiveModulus(modulus.to_string()));
    }
    require_non_negative("exponent", exponent)?;

    let mut result = BigInt::one().rem_euclid(modulus)?;
    let mut square = base.rem_euclid(modulus)?;
    let mut e = exponent.clone();
    while !e.is_zero() {
        let (half, bit) = e.div_rem_small(2)?;
        if bit == 1 {
            result = (&result * &square).rem_euclid(modulus)?;
        }
        e = half;
        if !e.is_zero() {
            square = (&square * &square).rem_euclid(modulus)?;
        }
    }
    Ok(result)
}

/// Jacobi symbol `(a / n)`: -1, 0 or 1.
///
/// # Errors
/// Returns `NumTheoryError::InvalidJacobiModulus` unless `n` is odd and
/// positive.
pub fn jacobi(a: &BigInt, n: &BigInt) -> Result<i32> {
    if !n.is_positive() || n.is_even() {
        return Err(NumTheoryError::InvalidJacobiModulus(n.to_string()));
    }
    let mut a = a.rem_euclid(n)?;
    let mut n = n.clone();
    let mut result = 1;
    while !a.is_zero() {
        while a.is_even() {
            a = a.div_rem_small(2)?.0;
            let r = n.div_rem_small(8)?.1;
            if r == 3 || r == 5 {
                result = -result;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if a.div_rem_small(4)?.1 == 3 && n.div_rem_small(4)?.1 == 3 {
            result = -result;
        }
        a = a.rem_euclid(&n)?;
    }
    Ok(if n == BigInt::one() { result } else { 0 })
}

/// Uniform value in `[0, bound)`.
///
/// Limbs are drawn independently, the top one capped at the bound's top
/// limb, and candidates `>= bound` are rejected. At least half of all
/// candidates are accepted.
///
/// # Errors
/// Returns `NumTheoryError::EmptyRange` when `bound <= 0`.
pub fn random_below(bound: &BigInt, rng: &mut dyn RandomGenerator) -> Result<BigInt> {
    if !bound.is_positive() {
        return Err(NumTheoryError::EmptyRange(bound.to_string()));
    }
    let limbs = bound.limbs();
    let top = limbs[limbs.len() - 1] as u64;
    loop {
        let mut candidate = BigInt::from(rng.gen_below(top + 1)?);
        for _ in 1..limbs.len() {
            candidate = candidate.shl_limbs(1) + BigInt::from(rng.gen_below(BASE)?);
        }
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Uniform value in `[low, high]`.
///
/// # Errors
/// Returns `NumTheoryError::EmptyRange` when `low > high`.
pub fn random_range(low: &BigInt, high: &BigInt, rng: &mut dyn RandomGenerator) -> Result<BigInt> {
    if low > high {
        return Err(NumTheoryError::EmptyRange(format!("[{}, {}]", low, high)));
    }
    let width = high - low + BigInt::one();
    Ok(low + &random_below(&width, rng)?)
}
