//! `ln-bigint` - Arbitrary-precision signed integers for longnums.
//!
//! This crate provides:
//! - A sign-magnitude `BigInt` stored as radix 10^9 limbs
//! - Exact parsing from and formatting to decimal strings
//! - Signed addition, subtraction, truncating division and decimal shifts
//! - Four interchangeable multiplication algorithms selected by `MulAlgorithm`:
//!   schoolbook, Karatsuba, Toom-3 and a Schönhage–Strassen style transform

pub mod bigint;
pub mod error;
mod limbs;
pub mod mul;
mod ops;

// Re-export primary types at the crate root for convenience.
pub use bigint::{BigInt, Sign};
pub use error::{BigIntError, Result};
pub use limbs::{BASE, BASE_DIGITS};
pub use mul::{MulAlgorithm, KARATSUBA_THRESHOLD, STRASSEN_THRESHOLD, TOOM3_THRESHOLD};
