//! Mint Errors

use thiserror::Error;

/// Error while computing a block provision
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MintError {
    #[error("Mint oracle query failed: {0}")]
    Oracle(String),

    #[error("Invalid mint parameters: {0}")]
    InvalidParams(String),

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Result type for mint operations
pub type MintResult<T> = Result<T, MintError>;
