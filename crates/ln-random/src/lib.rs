//! `ln-random` - Seeded random generators for longnums.
//!
//! This crate provides:
//! - The `RandomGenerator` trait: uniform integers below a bound and uniform
//!   reals in `[0, 1)` or `[min, max]`
//! - `GeneralGen`, backed by `rand`'s `StdRng`
//! - `EvenlyGen`, a full-period linear congruential generator modulo 3^20
//! - `QuadConGen`, a quadratic congruential generator modulo 3^20
//! - `GeneratorKind` for selecting a generator by name

pub mod error;
pub mod evenly;
pub mod general;
pub mod generator;
pub mod quad_con;

pub use error::{RandomError, Result};
pub use evenly::EvenlyGen;
pub use general::GeneralGen;
pub use generator::{GeneratorKind, RandomGenerator};
pub use quad_con::QuadConGen;
