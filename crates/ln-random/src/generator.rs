use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{RandomError, Result};
use crate::{EvenlyGen, GeneralGen, QuadConGen};

/// A seeded source of uniform random numbers.
///
/// Implementors supply raw draws uniform on `[0, modulus())`; everything
/// else is derived from those. A generator is single-writer: share one
/// across threads only behind external synchronization.
pub trait RandomGenerator: Send {
    /// Returns the name of this generator.
    fn name(&self) -> &str;

    /// Exclusive upper bound of [`next_raw`](Self::next_raw). At least 2^31.
    fn modulus(&self) -> u64;

    /// Next raw draw, uniform on `[0, modulus())`.
    fn next_raw(&mut self) -> u64;

    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u64);

    /// Uniform real in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        self.next_raw() as f64 / self.modulus() as f64
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Raw draws are combined until they cover `bound`, and draws from the
    /// incomplete top stripe are rejected so every value is equally likely.
    ///
    /// # Errors
    /// Returns `RandomError::InvalidRange` when `bound` is zero.
    fn gen_below(&mut self, bound: u64) -> Result<u64> {
        if bound == 0 {
            return Err(RandomError::InvalidRange("bound must be positive".into()));
        }
        let m = self.modulus() as u128;
        let mut span = m;
        let mut draws = 1;
        while span < bound as u128 {
            span *= m;
            draws += 1;
        }
        let limit = span - span % bound as u128;
        loop {
            let mut v = 0u128;
            for _ in 0..draws {
                v = v * m + self.next_raw() as u128;
            }
            if v < limit {
                return Ok((v % bound as u128) as u64);
            }
        }
    }

    /// Uniform integer in `[low, high]`.
    ///
    /// # Errors
    /// Returns `RandomError::InvalidRange` when `low > high`.
    fn gen_range_inclusive(&mut self, low: u64, high: u64) -> Result<u64> {
        if low > high {
            return Err(RandomError::InvalidRange(format!("{} > {}", low, high)));
        }
        match (high - low).checked_add(1) {
            Some(width) => Ok(low + self.gen_below(width)?),
            // The full u64 range: two 32-bit halves.
            None => Ok((self.gen_below(1 << 32)? << 32) | self.gen_below(1 << 32)?),
        }
    }

    /// Uniform real in `[min, max]`.
    ///
    /// # Errors
    /// Returns `RandomError::InvalidRange` when either bound is not finite
    /// or `min > max`.
    fn uniform(&mut self, min: f64, max: f64) -> Result<f64> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(RandomError::InvalidRange(format!("[{}, {}]", min, max)));
        }
        // Convex combination: `max - min` overflows for wide finite bounds.
        let u = self.next_f64();
        Ok((min * (1.0 - u) + max * u).clamp(min, max))
    }
}

/// The available generator strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeneratorKind {
    #[default]
    General,
    Evenly,
    QuadCon,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::General,
        GeneratorKind::Evenly,
        GeneratorKind::QuadCon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::General => "general",
            GeneratorKind::Evenly => "evenly",
            GeneratorKind::QuadCon => "quadcon",
        }
    }

    /// Create a boxed generator of this kind seeded with `seed`.
    pub fn build(self, seed: u64) -> Box<dyn RandomGenerator> {
        debug!(kind = self.name(), seed, "building random generator");
        match self {
            GeneratorKind::General => Box::new(GeneralGen::new(seed)),
            GeneratorKind::Evenly => Box::new(EvenlyGen::new(seed)),
            GeneratorKind::QuadCon => Box::new(QuadConGen::new(seed)),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "general" | "std" => Ok(GeneratorKind::General),
            "evenly" | "lcg" => Ok(GeneratorKind::Evenly),
            "quadcon" | "quadratic" => Ok(GeneratorKind::QuadCon),
            _ => Err(RandomError::UnknownGenerator(s.to_string())),
        }
    }
}
