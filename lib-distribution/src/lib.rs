//! Per-block Validator Reward Distribution
//!
//! Collected transaction fees are split every block between the community
//! pool, validator commission and delegators. Validator rewards blend a
//! stake-proportional share with a flat Nakamoto bonus whose weight η is
//! tuned every [`ETA_UPDATE_INTERVAL`] blocks from how concentrated bonded
//! stake is.
//!
//! # Design Principles
//!
//! 1. **Deterministic** - fixed-point [`Dec`] arithmetic truncating toward zero
//! 2. **Conservation** - every collected coin ends up with a validator or in
//!    the community pool, exactly
//! 3. **Borrowed collaborators** - the engine holds no state of its own
//!    between blocks; store and ledgers are passed in per block
//!
//! # Usage
//!
//! ```ignore
//! use lib_distribution::{RewardEngine, MemoryStore, MemoryStakingLedger, MemoryBank, EventLog};
//!
//! let engine = RewardEngine::new(&store, &staking, &bank, &events);
//! engine.begin_block(height, &votes)?;
//! ```

pub mod allocation;
pub mod commission;
pub mod config;
pub mod engine;
pub mod errors;
pub mod eta;
pub mod events;
pub mod genesis;
pub mod invariants;
pub mod ledger;
pub mod params;
pub mod store;

#[cfg(test)]
mod golden_vectors;

pub use allocation::RewardPools;
pub use commission::{split_commission, CommissionSplit};
pub use config::{DistributionConfig, PartialParams};
pub use engine::{RewardEngine, DISTRIBUTION_MODULE, FEE_COLLECTOR_MODULE};
pub use errors::{DistributionError, DistributionResult};
pub use eta::{
    average_bonded_tokens, next_eta, partition_by_stake, ETA_STEP, ETA_UPDATE_INTERVAL,
    MIN_VALIDATORS_FOR_ETA,
};
pub use events::{DistributionEvent, EventLog, EventSink};
pub use genesis::{export_genesis, init_genesis, GenesisState};
pub use invariants::{
    assert_invariants, check_invariant, DistributionInvariant, DistributionSnapshot,
};
pub use ledger::{BankLedger, MemoryBank, MemoryStakingLedger, StakingLedger};
pub use params::ParamsExt;
pub use store::{DistributionStore, MemoryStore};

// Re-export pure data types from lib-types (canonical location)
pub use lib_types::{
    Address, BondedValidator, Coin, Coins, ConsensusAddress, Dec, DecCoin, DecCoins, FeePool,
    Params, ValidatorAccumulatedCommission, ValidatorCurrentRewards, ValidatorOutstandingRewards,
    VoteInfo,
};
