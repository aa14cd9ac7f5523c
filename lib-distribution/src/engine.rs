//! Reward engine
//!
//! [`RewardEngine`] borrows its collaborators for the duration of one block.
//! The allocation, commission and coefficient operations are implemented in
//! their own modules as `impl RewardEngine` blocks; this module holds the
//! wiring, the per-block hook and the read-only queries.

use lib_types::{
    Address, BlockHeight, DecCoins, Params, ValidatorAccumulatedCommission,
    ValidatorCurrentRewards, ValidatorOutstandingRewards, VoteInfo, VotingPower,
};
use tracing::info;

use crate::config::DistributionConfig;
use crate::errors::{DistributionError, DistributionResult};
use crate::events::EventSink;
use crate::ledger::{BankLedger, StakingLedger};
use crate::params::ParamsExt;
use crate::store::DistributionStore;

/// Module account that accumulates transaction fees during a block
pub const FEE_COLLECTOR_MODULE: &str = "fee_collector";

/// Module account that backs every unpaid reward
pub const DISTRIBUTION_MODULE: &str = "distribution";

/// Per-block reward distribution
pub struct RewardEngine<'a> {
    pub(crate) store: &'a dyn DistributionStore,
    pub(crate) staking: &'a dyn StakingLedger,
    pub(crate) bank: &'a dyn BankLedger,
    pub(crate) events: &'a dyn EventSink,
    pub(crate) fee_collector: String,
    pub(crate) distribution_module: String,
}

impl<'a> RewardEngine<'a> {
    pub fn new(
        store: &'a dyn DistributionStore,
        staking: &'a dyn StakingLedger,
        bank: &'a dyn BankLedger,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            store,
            staking,
            bank,
            events,
            fee_collector: FEE_COLLECTOR_MODULE.to_string(),
            distribution_module: DISTRIBUTION_MODULE.to_string(),
        }
    }

    /// Use the module account names from `config`
    pub fn with_config(mut self, config: &DistributionConfig) -> Self {
        self.fee_collector = config.fee_collector_module.clone();
        self.distribution_module = config.distribution_module.clone();
        self
    }

    pub fn fee_collector_module(&self) -> &str {
        &self.fee_collector
    }

    pub fn distribution_module(&self) -> &str {
        &self.distribution_module
    }

    /// Per-block hook: reward the previous block's voters, then give the
    /// coefficient controller its chance to run.
    ///
    /// Nothing is allocated at height 1 since no block precedes it.
    pub fn begin_block(&self, height: BlockHeight, votes: &[VoteInfo]) -> DistributionResult<()> {
        let total_power = votes.iter().try_fold(0 as VotingPower, |acc, vote| {
            acc.checked_add(vote.power).ok_or(DistributionError::Overflow)
        })?;

        if height > 1 {
            self.allocate_tokens(total_power, votes)?;
        }
        self.adjust_eta(height)
    }

    /// Replace the module parameters after validating them
    pub fn set_params(&self, params: &Params) -> DistributionResult<()> {
        params.validate()?;
        self.store.set_params(params)?;
        info!(
            "Distribution params updated: community_tax={} eta={} bonus_enabled={}",
            params.community_tax, params.nakamoto_bonus_coefficient, params.nakamoto_bonus_enabled
        );
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn params(&self) -> DistributionResult<Params> {
        self.store.get_params()
    }

    pub fn community_pool(&self) -> DistributionResult<DecCoins> {
        Ok(self.store.get_fee_pool()?.community_pool)
    }

    pub fn validator_outstanding_rewards(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorOutstandingRewards> {
        self.store.get_outstanding_rewards(validator)
    }

    pub fn validator_commission(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorAccumulatedCommission> {
        self.store.get_accumulated_commission(validator)
    }

    pub fn validator_current_rewards(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorCurrentRewards> {
        self.store.get_current_rewards(validator)
    }
}
