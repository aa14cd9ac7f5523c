//! Distribution Errors

use lib_types::{Address, ConsensusAddress, Dec, DecCoins};
use thiserror::Error;

/// Error during reward distribution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistributionError {
    #[error("Validator not found for consensus address {0}")]
    ValidatorNotFound(ConsensusAddress),

    #[error("Ledger error: {0}")]
    Ledger(String),

    #[error("Storage error: {0}")]
    Store(String),

    #[error("Negative reward for validator {validator}: {tokens}")]
    NegativeReward { validator: Address, tokens: DecCoins },

    #[error("Commission rate {rate} out of range for validator {validator}")]
    InvalidCommissionRate { validator: Address, rate: Dec },

    #[error("Conservation invariant violated: {0}")]
    ConservationViolated(String),

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Invalid genesis: {0}")]
    InvalidGenesis(String),
}

impl DistributionError {
    /// True for errors that can only come from a bug in this crate or its
    /// callers, as opposed to a failing collaborator or bad input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::NegativeReward { .. }
                | Self::InvalidCommissionRate { .. }
                | Self::ConservationViolated(_)
                | Self::Overflow
        )
    }
}

/// Result type for distribution operations
pub type DistributionResult<T> = Result<T, DistributionError>;
