//! Errors for primitive value construction

use thiserror::Error;

/// Error while building or parsing a [`crate::Dec`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecError {
    #[error("Empty decimal string")]
    Empty,

    #[error("Invalid decimal string: {0}")]
    InvalidFormat(String),

    #[error("Too many fractional digits: {0} (max 18)")]
    TooManyDecimals(usize),

    #[error("Decimal value out of range")]
    OutOfRange,
}

/// Error while building a normalized coin collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoinsError {
    #[error("Coin amount overflow while merging denoms")]
    Overflow,
}
