//! Reward distribution primitives.
//!
//! Pure data types for the distribution module. Behavior (validation,
//! allocation, coefficient control) lives in lib-distribution.

use serde::{Deserialize, Serialize};

use crate::coins::DecCoins;
use crate::dec::Dec;
use crate::primitives::{Address, Amount, ConsensusAddress, VotingPower};

// =============================================================================
// PARAMETERS
// =============================================================================

/// Distribution module parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Fraction of collected fees diverted to the community pool (0..=1)
    pub community_tax: Dec,
    /// η: fraction of validator rewards paid as a flat per-validator bonus (0..=1)
    pub nakamoto_bonus_coefficient: Dec,
    /// When false the coefficient controller pins η to zero
    pub nakamoto_bonus_enabled: bool,
    /// Whether delegators may set a separate withdraw address
    pub withdraw_addr_enabled: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            community_tax: Dec::with_precision(2, 2),
            nakamoto_bonus_coefficient: Dec::with_precision(3, 2),
            nakamoto_bonus_enabled: true,
            withdraw_addr_enabled: true,
        }
    }
}

// =============================================================================
// PERSISTED RECORDS
// =============================================================================

/// Global fee pool
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeePool {
    pub community_pool: DecCoins,
}

/// Undistributed rewards owed to a validator's commission and delegator pools combined
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorOutstandingRewards {
    pub rewards: DecCoins,
}

/// Commission owed to the validator operator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorAccumulatedCommission {
    pub commission: DecCoins,
}

/// Rewards owed to delegators for the current period
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorCurrentRewards {
    pub rewards: DecCoins,
    pub period: u64,
}

// =============================================================================
// EXTERNAL VIEWS
// =============================================================================

/// Read-only view of a bonded validator, owned by the staking ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondedValidator {
    pub operator: Address,
    pub consensus_address: ConsensusAddress,
    pub bonded_tokens: Amount,
    pub commission_rate: Dec,
}

/// A validator's participation in the previous block, supplied by the host runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteInfo {
    pub consensus_address: ConsensusAddress,
    pub power: VotingPower,
}

impl VoteInfo {
    pub fn new(consensus_address: ConsensusAddress, power: VotingPower) -> Self {
        Self { consensus_address, power }
    }
}
