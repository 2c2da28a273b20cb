use ln_bigint::BigIntError;
use ln_random::RandomError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumTheoryError {
    #[error("{what} must be non-negative, got {value}")]
    NegativeArgument { what: &'static str, value: String },

    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(String),

    #[error("Jacobi symbol needs an odd positive modulus, got {0}")]
    InvalidJacobiModulus(String),

    #[error("empty range below {0}")]
    EmptyRange(String),

    #[error(transparent)]
    BigInt(#[from] BigIntError),

    #[error(transparent)]
    Random(#[from] RandomError),
}

pub type Result<T> = std::result::Result<T, NumTheoryError>;
