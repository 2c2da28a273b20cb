use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BigIntError, Result};
use crate::limbs::{self, BASE, BASE_DIGITS, POW10};
use crate::mul::MulAlgorithm;

/// Sign of a [`BigInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Sign {
    pub(crate) fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (a, b) if a == b => Sign::Plus,
            _ => Sign::Minus,
        }
    }

    pub(crate) fn negate(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }
}

/// An arbitrary-precision signed integer.
///
/// Stored as a sign plus little-endian limbs in radix [`BASE`] (10^9).
/// The magnitude never carries most-significant zero limbs, and zero is
/// always `Sign::NoSign` with no limbs, so derived equality and hashing are
/// structural. Values are immutable; every operation returns a new value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

impl BigInt {
    /// Builds a value from a sign and an untrimmed magnitude, restoring the
    /// canonical form.
    pub(crate) fn from_parts(sign: Sign, mut mag: Vec<u32>) -> Self {
        limbs::trim(&mut mag);
        if mag.is_empty() || sign == Sign::NoSign {
            return BigInt::zero();
        }
        BigInt { sign, mag }
    }

    pub(crate) fn from_magnitude(mag: Vec<u32>) -> Self {
        Self::from_parts(Sign::Plus, mag)
    }

    pub fn zero() -> Self {
        BigInt {
            sign: Sign::NoSign,
            mag: Vec::new(),
        }
    }

    pub fn one() -> Self {
        BigInt {
            sign: Sign::Plus,
            mag: vec![1],
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian radix-10^9 limbs of the magnitude. Empty for zero.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    pub fn is_even(&self) -> bool {
        self.mag.first().map_or(true, |&l| l % 2 == 0)
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> BigInt {
        match self.sign {
            Sign::Minus => BigInt::from(-1i64),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_magnitude(self.mag.clone())
    }

    /// Compares absolute values.
    pub fn cmp_abs(&self, other: &BigInt) -> Ordering {
        limbs::cmp(&self.mag, &other.mag)
    }

    /// Number of decimal digits in the magnitude (1 for zero).
    pub fn num_digits(&self) -> usize {
        match self.mag.last() {
            None => 1,
            Some(&top) => {
                let top_digits = POW10.iter().take_while(|&&p| p <= top).count();
                (self.mag.len() - 1) * BASE_DIGITS + top_digits
            }
        }
    }

    /// Subtraction for callers that need an unsigned result.
    ///
    /// # Errors
    /// Returns [`BigIntError::Underflow`] if `other > self`.
    pub fn sub_unsigned(&self, other: &BigInt) -> Result<BigInt> {
        if self < other {
            return Err(BigIntError::Underflow {
                lhs: self.to_string(),
                rhs: other.to_string(),
            });
        }
        Ok(self - other)
    }

    /// Multiplies by `BASE^n`.
    pub fn shl_limbs(&self, n: usize) -> BigInt {
        BigInt::from_parts(self.sign, limbs::shl(&self.mag, n))
    }

    /// Divides by `BASE^n`, truncating toward zero.
    pub fn shr_limbs(&self, n: usize) -> BigInt {
        if n >= self.mag.len() {
            return BigInt::zero();
        }
        BigInt::from_parts(self.sign, self.mag[n..].to_vec())
    }

    /// Multiplies by `10^n`.
    pub fn shl_decimal(&self, n: usize) -> BigInt {
        let shifted = limbs::shl(&self.mag, n / BASE_DIGITS);
        BigInt::from_parts(self.sign, limbs::mul_small(&shifted, POW10[n % BASE_DIGITS]))
    }

    /// Divides by `10^n`, truncating toward zero.
    pub fn shr_decimal(&self, n: usize) -> BigInt {
        let shifted = self.shr_limbs(n / BASE_DIGITS);
        let (q, _) = limbs::div_rem_small(&shifted.mag, POW10[n % BASE_DIGITS]);
        BigInt::from_parts(self.sign, q)
    }

    pub fn mul_small(&self, m: u32) -> BigInt {
        BigInt::from_parts(self.sign, limbs::mul_small(&self.mag, m))
    }

    /// Truncating division by a machine word. The remainder carries the
    /// magnitude only; its sign is that of `self`.
    ///
    /// # Errors
    /// Returns [`BigIntError::DivisionByZero`] if `d == 0`.
    pub fn div_rem_small(&self, d: u32) -> Result<(BigInt, u32)> {
        if d == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = limbs::div_rem_small(&self.mag, d);
        Ok((BigInt::from_parts(self.sign, q), r))
    }

    /// Truncating division: the quotient rounds toward zero and the
    /// remainder takes the sign of `self`, so `self == q * other + r`.
    ///
    /// # Errors
    /// Returns [`BigIntError::DivisionByZero`] if `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = limbs::div_rem(&self.mag, &other.mag);
        Ok((
            BigInt::from_parts(self.sign.product(other.sign), q),
            BigInt::from_parts(self.sign, r),
        ))
    }

    /// Euclidean remainder, always in `[0, |other|)`.
    pub fn rem_euclid(&self, other: &BigInt) -> Result<BigInt> {
        let (_, r) = self.div_rem(other)?;
        if r.is_negative() {
            Ok(&r + &other.abs())
        } else {
            Ok(r)
        }
    }

    /// Euclidean quotient, paired with [`BigInt::rem_euclid`].
    pub fn div_euclid(&self, other: &BigInt) -> Result<BigInt> {
        let (q, r) = self.div_rem(other)?;
        if r.is_negative() {
            if other.is_positive() {
                Ok(&q - &BigInt::one())
            } else {
                Ok(&q + &BigInt::one())
            }
        } else {
            Ok(q)
        }
    }

    /// Product using the size-selected default algorithm.
    pub fn multiply(&self, other: &BigInt) -> BigInt {
        let algorithm = MulAlgorithm::for_operands(self.mag.len(), other.mag.len());
        self.multiply_with(other, algorithm)
    }

    /// Product using an explicitly chosen algorithm. Every algorithm yields
    /// the identical exact result.
    pub fn multiply_with(&self, other: &BigInt, algorithm: MulAlgorithm) -> BigInt {
        let sign = self.sign.product(other.sign);
        if sign == Sign::NoSign {
            return BigInt::zero();
        }
        tracing::trace!(
            %algorithm,
            lhs_limbs = self.mag.len(),
            rhs_limbs = other.mag.len(),
            "bigint multiply"
        );
        BigInt::from_parts(sign, algorithm.multiply_magnitudes(&self.mag, &other.mag))
    }

    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.to_u128_magnitude()?;
        match self.sign {
            Sign::NoSign => Some(0),
            Sign::Plus => i64::try_from(mag).ok(),
            Sign::Minus => {
                if mag == i64::MIN.unsigned_abs() as u128 {
                    Some(i64::MIN)
                } else {
                    i64::try_from(mag).ok().map(|v| -v)
                }
            }
        }
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        u64::try_from(self.to_u128_magnitude()?).ok()
    }

    fn to_u128_magnitude(&self) -> Option<u128> {
        // u128::MAX has 39 decimal digits, so anything over 5 limbs overflows.
        if self.mag.len() > 5 {
            return None;
        }
        self.mag.iter().rev().try_fold(0u128, |acc, &l| {
            acc.checked_mul(BASE as u128)?.checked_add(l as u128)
        })
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| match self.sign {
            Sign::NoSign => Ordering::Equal,
            Sign::Plus => self.cmp_abs(other),
            Sign::Minus => other.cmp_abs(self),
        })
    }
}

impl From<u64> for BigInt {
    fn from(mut v: u64) -> Self {
        let mut mag = Vec::new();
        while v > 0 {
            mag.push((v % BASE) as u32);
            v /= BASE;
        }
        BigInt::from_magnitude(mag)
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        let magnitude = BigInt::from(v.unsigned_abs());
        if v < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        BigInt::from(v as u64)
    }
}

impl From<i32> for BigInt {
    fn from(v: i32) -> Self {
        BigInt::from(v as i64)
    }
}

impl From<usize> for BigInt {
    fn from(v: usize) -> Self {
        BigInt::from(v as u64)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parses an optionally signed decimal integer such as `"-12345"`.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let (sign, start) = match bytes.first() {
            Some(b'-') => (Sign::Minus, 1),
            Some(b'+') => (Sign::Plus, 1),
            _ => (Sign::Plus, 0),
        };
        let digits = &bytes[start..];
        if digits.is_empty() {
            return Err(BigIntError::Empty);
        }
        if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
            let index = start + pos;
            let ch = s[index..].chars().next().unwrap_or('\u{fffd}');
            return Err(BigIntError::InvalidDigit { ch, index });
        }

        let mut mag = Vec::with_capacity(digits.len() / BASE_DIGITS + 1);
        for chunk in digits.rchunks(BASE_DIGITS) {
            let limb = chunk
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            mag.push(limb);
        }
        Ok(BigInt::from_parts(sign, mag))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * BASE_DIGITS);
        match self.mag.split_last() {
            None => digits.push('0'),
            Some((top, rest)) => {
                digits.push_str(&top.to_string());
                for limb in rest.iter().rev() {
                    digits.push_str(&format!("{:09}", limb));
                }
            }
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
