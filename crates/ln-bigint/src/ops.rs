// Operator impls. Each operator is written once for `&BigInt op &BigInt`
// and forwarded for the owned combinations.

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::bigint::{BigInt, Sign};
use crate::limbs;

fn add_signed(a: &BigInt, a_sign: Sign, b: &BigInt, b_sign: Sign) -> BigInt {
    if a_sign == Sign::NoSign {
        return BigInt::from_parts(b_sign, b.limbs().to_vec());
    }
    if b_sign == Sign::NoSign {
        return BigInt::from_parts(a_sign, a.limbs().to_vec());
    }
    if a_sign == b_sign {
        return BigInt::from_parts(a_sign, limbs::add(a.limbs(), b.limbs()));
    }
    match limbs::cmp(a.limbs(), b.limbs()) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_parts(a_sign, limbs::sub(a.limbs(), b.limbs())),
        Ordering::Less => BigInt::from_parts(b_sign, limbs::sub(b.limbs(), a.limbs())),
    }
}

impl<'a> Add<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn add(self, other: &BigInt) -> BigInt {
        add_signed(self, self.sign(), other, other.sign())
    }
}

impl<'a> Sub<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        add_signed(self, self.sign(), other, other.sign().negate())
    }
}

impl<'a> Mul<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        self.multiply(other)
    }
}

impl<'a> Div<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics on division by zero, like the primitive integer types.
    fn div(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Rem<&'a BigInt> for &'a BigInt {
    type Output = BigInt;

    /// # Panics
    /// Panics on division by zero, like the primitive integer types.
    fn rem(self, other: &BigInt) -> BigInt {
        match self.div_rem(other) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! forward_owned_binop {
    ($($imp:ident, $method:ident;)*) => {
        $(
            impl $imp<BigInt> for BigInt {
                type Output = BigInt;

                fn $method(self, other: BigInt) -> BigInt {
                    (&self).$method(&other)
                }
            }

            impl<'a> $imp<&'a BigInt> for BigInt {
                type Output = BigInt;

                fn $method(self, other: &BigInt) -> BigInt {
                    (&self).$method(other)
                }
            }

            impl<'a> $imp<BigInt> for &'a BigInt {
                type Output = BigInt;

                fn $method(self, other: BigInt) -> BigInt {
                    self.$method(&other)
                }
            }
        )*
    };
}

forward_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
    Div, div;
    Rem, rem;
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let sign = self.sign().negate();
        BigInt::from_parts(sign, self.limbs().to_vec())
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.sign().negate(), self.limbs().to_vec())
    }
}
