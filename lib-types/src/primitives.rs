//! Canonical Primitive Types for Reward Distribution
//!
//! Rule: No String identifiers in consensus state for accounts. Ever.
//! Module accounts are the one exception; they are addressed by name
//! through the bank ledger interface.
//!
//! These types are:
//! - Fixed-size (no dynamic allocation)
//! - Deterministically serializable
//! - Totally ordered, so maps keyed by them iterate identically on every node

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Block height in the chain
pub type BlockHeight = u64;

/// Integer token amounts in the smallest unit
pub type Amount = u128;

/// Consensus voting power reported by the host runtime
pub type VotingPower = u64;

// ============================================================================
// ADDRESS TYPES
// ============================================================================

/// Validator operator address (the stable identity rewards are keyed by)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create a new Address from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed Address
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Consensus address of a validator, as it appears in the previous block's votes.
///
/// Distinct from [`Address`]: the host runtime only knows validators by
/// their consensus key, and the staking ledger maps it back to an operator.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize, Default)]
pub struct ConsensusAddress(pub [u8; 20]);

impl ConsensusAddress {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Debug for ConsensusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConsensusAddress({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for ConsensusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 20]> for ConsensusAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

// ============================================================================
// TESTS
// ============================================================================
