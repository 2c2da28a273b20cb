//! `ln-numtheory` - Number theory on top of `ln-bigint`.
//!
//! This crate provides:
//! - `gcd`, `lcm`, `factorial`, `pow`, `pow_mod` and the Jacobi symbol
//! - Uniform random `BigInt` values drawn from an `ln-random` generator
//! - Solovay–Strassen, Lehmann and Rabin–Miller primality testers returning
//!   a confidence in `[0, 1]`

pub mod arith;
pub mod error;
pub mod primality;

pub use arith::{factorial, gcd, jacobi, lcm, pow, pow_mod, random_below, random_range};
pub use error::{NumTheoryError, Result};
pub use primality::{lehmann_test, rabin_miller_test, solovay_strassen_test, PrimalityTest};
