use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::generator::RandomGenerator;

const MANTISSA_BITS: u32 = 53;

/// General-purpose generator backed by `StdRng`.
///
/// Raw draws are the top 53 bits of each 64-bit output, so
/// [`next_f64`](RandomGenerator::next_f64) is exact.
pub struct GeneralGen {
    rng: StdRng,
}

impl GeneralGen {
    /// Create a generator with the given seed for reproducibility.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for GeneralGen {
    fn name(&self) -> &str {
        "general"
    }

    fn modulus(&self) -> u64 {
        1 << MANTISSA_BITS
    }

    fn next_raw(&mut self) -> u64 {
        self.rng.next_u64() >> (64 - MANTISSA_BITS)
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
