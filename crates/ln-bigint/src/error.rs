use thiserror::Error;

#[derive(Error, Debug)]
pub enum BigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,
    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("unsigned subtraction underflow: {lhs} - {rhs} is negative")]
    Underflow { lhs: String, rhs: String },
    #[error("unknown multiplication algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, BigIntError>;
