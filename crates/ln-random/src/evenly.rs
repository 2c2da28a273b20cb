use crate::generator::RandomGenerator;

/// 3^20, the modulus shared by the congruential generators.
pub const MODULUS: u64 = 3_486_784_401;

/// Multiplier; `A - 1` is divisible by 3, the only prime factor of the modulus.
pub(crate) const A: u64 = 67_867_966;

/// Increment; coprime to the modulus.
pub(crate) const C: u64 = 104_395_301;

/// Linear congruential generator `x' = (A x + C) mod 3^20`.
///
/// The constants satisfy the Hull–Dobell conditions, so the sequence visits
/// every residue once per period and outputs are evenly distributed over
/// `[0, 3^20)`.
pub struct EvenlyGen {
    state: u64,
}

impl EvenlyGen {
    pub fn new(seed: u64) -> Self {
        let mut gen = Self { state: 0 };
        gen.reseed(seed);
        gen
    }

    fn step(&mut self) -> u64 {
        self.state = ((A as u128 * self.state as u128 + C as u128) % MODULUS as u128) as u64;
        self.state
    }
}

impl RandomGenerator for EvenlyGen {
    fn name(&self) -> &str {
        "evenly"
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
