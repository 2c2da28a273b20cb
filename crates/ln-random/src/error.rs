use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("unknown generator: {0}")]
    UnknownGenerator(String),
}

pub type Result<T> = std::result::Result<T, RandomError>;
