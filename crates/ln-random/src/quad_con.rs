use crate::evenly::{A, C, MODULUS};
use crate::generator::RandomGenerator;

/// Quadratic coefficient; divisible by 6.
const D: u64 = 92_526;

/// Quadratic congruential generator `x' = (D x^2 + A x + C) mod 3^20`.
pub struct QuadConGen {
    state: u64,
}

impl QuadConGen {
    pub fn new(seed: u64) -> Self {
        let mut gen = Self { state: 0 };
        gen.reseed(seed);
        gen
    }

    fn step(&mut self) -> u64 {
        let x = self.state as u128;
        let m = MODULUS as u128;
        self.state = ((D as u128 * x % m * x + A as u128 * x + C as u128) % m) as u64;
        self.state
    }
}

impl RandomGenerator for QuadConGen {
    fn name(&self) -> &str {
        "quadcon"
    }

    fn modulus(&self) -> u64 {
        MODULUS
    }

    fn next_raw(&mut self) -> u64 {
        self.step()
    }

    fn reseed(&mut self, seed: u64) {
        self.state = seed % MODULUS;
        self.step();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients() {
        assert_eq!(D % 6, 0);
    }

    #[test]
    fn test_first_draw_from_zero_seed() {
        let mut rng = QuadConGen::new(0);
        let x = C as u128;
        let m = MODULUS as u128;
        let expected = (D as u128 * x * x + A as u128 * x + C as u128) % m;
        assert_eq!(rng.next_raw() as u128, expected);
    }

    #[test]
    fn test_draws_stay_below_modulus() {
        let mut rng = QuadConGen::new(u64::MAX);
        for _ in 0..10_000 {
            assert!(rng.next_raw() < MODULUS);
        }
    }
}
