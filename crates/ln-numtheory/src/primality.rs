//! Probabilistic primality testers.
//!
//! Every tester returns a confidence in `[0, 1]`: `0.0` means a witness
//! proved `n` composite, anything else is the probability bound that a
//! composite survived all rounds. Trivial inputs are decided without
//! drawing from the generator.

use std::fmt;

use ln_bigint::BigInt;
use ln_random::RandomGenerator;
use tracing::{debug, trace};

use crate::arith::{gcd, jacobi, pow_mod, random_range};
use crate::error::Result;

/// Outcome of the checks that need no witnesses.
enum Trivial {
    Decided(f64),
    Odd,
}

fn classify(n: &BigInt, iterations: u32) -> Trivial {
    if *n < BigInt::from(2u32) {
        return Trivial::Decided(0.0);
    }
    if *n <= BigInt::from(3u32) {
        return Trivial::Decided(1.0);
    }
    if n.is_even() || iterations == 0 {
        return Trivial::Decided(0.0);
    }
    Trivial::Odd
}

/// `1 - (1/k)^iterations`.
fn confidence(per_round_error: f64, iterations: u32) -> f64 {
    1.0 - per_round_error.powi(iterations.min(i32::MAX as u32) as i32)
}

fn witness(n: &BigInt, rng: &mut dyn RandomGenerator) -> Result<BigInt> {
    let high = n - BigInt::from(2u32);
    random_range(&BigInt::from(2u32), &high, rng)
}

/// Solovay–Strassen test: Euler's criterion against the Jacobi symbol.
///
/// # Errors
/// Only propagates failures from the generator.
pub fn solovay_strassen_test(n: &BigInt, iterations: u32, rng: &mut dyn RandomGenerator) -> Result<f64> {
    if let Trivial::Decided(c) = classify(n, iterations) {
        return Ok(c);
    }
    let one = BigInt::one();
    let n_minus_one = n - &one;
    let half = n_minus_one.div_rem_small(2)?.0;

    for round in 0..iterations {
        let a = witness(n, rng)?;
        if gcd(&a, n) != one {
            trace!(round, %a, "shared factor");
            return Ok(0.0);
        }
        let symbol = BigInt::from(jacobi(&a, n)?).rem_euclid(n)?;
        if pow_mod(&a, &half, n)? != symbol {
            trace!(round, %a, "Euler witness");
            return Ok(0.0);
        }
    }
    Ok(confidence(0.5, iterations))
}

/// Lehmann test: `a^((n-1)/2)` must be `1` or `n - 1` for every base.
///
/// # Errors
/// Only propagates failures from the generator.
pub fn lehmann_test(n: &BigInt, iterations: u32, rng: &mut dyn RandomGenerator) -> Result<f64> {
    if let Trivial::Decided(c) = classify(n, iterations) {
        return Ok(c);
    }
    let one = BigInt::one();
    let n_minus_one = n - &one;
    let half = n_minus_one.div_rem_small(2)?.0;

    for round in 0..iterations {
        let a = witness(n, rng)?;
        let x = pow_mod(&a, &half, n)?;
        if x != one && x != n_minus_one {
            trace!(round, %a, "Lehmann witness");
            return Ok(0.0);
        }
    }
    Ok(confidence(0.5, iterations))
}

/// Rabin–Miller strong pseudoprime test.
///
/// # Errors
/// Only propagates failures from the generator.
pub fn rabin_miller_test(n: &BigInt, iterations: u32, rng: &mut dyn RandomGenerator) -> Result<f64> {
    if let Trivial::Decided(c) = classify(n, iterations) {
        return Ok(c);
    }
    let one = BigInt::one();
    let two = BigInt::from(2u32);
    let n_minus_one = n - &one;

    // n - 1 = 2^s d with d odd
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = d.div_rem_small(2)?.0;
        s += 1;
    }

    'rounds: for round in 0..iterations {
        let a = witness(n, rng)?;
        let mut x = pow_mod(&a, &d, n)?;
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = pow_mod(&x, &two, n)?;
            if x == n_minus_one {
                continue 'rounds;
            }
        }
        trace!(round, %a, "strong witness");
        return Ok(0.0);
    }
    Ok(confidence(0.25, iterations))
}

/// The available primality testers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimalityTest {
    SolovayStrassen,
    Lehmann,
    RabinMiller,
}

impl PrimalityTest {
    pub const ALL: [PrimalityTest; 3] = [
        PrimalityTest::SolovayStrassen,
        PrimalityTest::Lehmann,
        PrimalityTest::RabinMiller,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimalityTest::SolovayStrassen => "solovay-strassen",
            PrimalityTest::Lehmann => "lehmann",
            PrimalityTest::RabinMiller => "rabin-miller",
        }
    }

    /// Run this tester on `n`.
    ///
    /// # Errors
    /// Only propagates failures from the generator.
    pub fn run(self, n: &BigInt, iterations: u32, rng: &mut dyn RandomGenerator) -> Result<f64> {
        let confidence = match self {
            PrimalityTest::SolovayStrassen => solovay_strassen_test(n, iterations, rng)?,
            PrimalityTest::Lehmann => lehmann_test(n, iterations, rng)?,
            PrimalityTest::RabinMiller => rabin_miller_test(n, iterations, rng)?,
        };
        debug!(test = self.name(), %n, iterations, confidence, "primality test finished");
        Ok(confidence)
    }
}

impl fmt::Display for PrimalityTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ln_random::{GeneratorKind, RandomGenerator};

    /// Fails the test if the tester draws anything.
    struct Exhausted;

    impl RandomGenerator for Exhausted {
        fn name(&self) -> &str {
            "exhausted"
        }

        fn modulus(&self) -> u64 {
            1 << 32
        }

        fn next_raw(&mut self) -> u64 {
            panic!("trivial input consumed randomness");
        }

        fn reseed(&mut self, _seed: u64) {}
    }

    #[test]
    fn test_trivial_inputs_draw_nothing() {
        for test in PrimalityTest::ALL {
            let mut rng = Exhausted;
            for (n, expected) in [(-5i64, 0.0), (0, 0.0), (1, 0.0), (2, 1.0), (3, 1.0), (4, 0.0), (100, 0.0)] {
                assert_eq!(test.run(&BigInt::from(n), 10, &mut rng).unwrap(), expected);
            }
            // No rounds means no evidence either way.
            assert_eq!(test.run(&BigInt::from(97u32), 0, &mut rng).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(confidence(0.5, 1), 0.5);
        assert_eq!(confidence(0.25, 2), 0.9375);
        assert_eq!(confidence(0.5, u32::MAX), 1.0);
    }

    #[test]
    fn test_smallest_odd_candidate() {
        // n = 5 leaves the single witness range [2, 3].
        let mut rng = GeneratorKind::Evenly.build(1);
        for test in PrimalityTest::ALL {
            assert!(test.run(&BigInt::from(5u32), 8, rng.as_mut()).unwrap() > 0.99);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(PrimalityTest::RabinMiller.to_string(), "rabin-miller");
    }
}
