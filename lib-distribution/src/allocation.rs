//! Reward allocator
//!
//! Once per block, the fees collected during the previous block are moved
//! to the distribution module account and split:
//!
//! ```text
//! validator_total   = trunc(fees * (1 - community_tax))
//! nakamoto_bonus    = trunc(validator_total * eta)
//! proportional      = validator_total - nakamoto_bonus
//! bonus_per_val     = trunc(nakamoto_bonus[bond_denom] / votes)
//!
//! reward(v)         = trunc(proportional * trunc(power(v) / total_power)) + bonus_per_val
//! community_pool   += fees - sum(reward(v))
//! ```
//!
//! The community tax is never computed directly; it ends up in the
//! community pool together with the truncation dust.

use lib_types::{Dec, DecCoins, Params, VoteInfo, VotingPower};
use tracing::{debug, info};

use crate::engine::RewardEngine;
use crate::errors::{DistributionError, DistributionResult};
use crate::events::DistributionEvent;

/// Per-block reward pools derived from collected fees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardPools {
    /// Shared among voters by power
    pub proportional: DecCoins,
    /// Shared equally among voters (bond denom only)
    pub nakamoto_bonus: DecCoins,
    /// What each voter receives from the Nakamoto bonus
    pub bonus_per_validator: DecCoins,
}

impl RewardPools {
    /// Split `fees` per `params` for `voters` validators
    pub fn compute(
        fees: &DecCoins,
        params: &Params,
        bond_denom: &str,
        voters: usize,
    ) -> DistributionResult<Self> {
        let keep = Dec::ONE
            .checked_sub(params.community_tax)
            .ok_or(DistributionError::Overflow)?;
        let validator_total = fees.mul_dec_truncate(keep).ok_or(DistributionError::Overflow)?;
        let nakamoto_bonus = validator_total
            .mul_dec_truncate(params.nakamoto_bonus_coefficient)
            .ok_or(DistributionError::Overflow)?;
        let proportional = validator_total.checked_sub(&nakamoto_bonus).ok_or_else(|| {
            DistributionError::ConservationViolated(format!(
                "nakamoto bonus {} exceeds validator rewards {}",
                nakamoto_bonus, validator_total
            ))
        })?;

        let bonus_per_validator = match voters {
            0 => DecCoins::empty(),
            n => DecCoins::single(
                bond_denom,
                nakamoto_bonus
                    .amount_of(bond_denom)
                    .checked_quo_int(n as u64)
                    .ok_or(DistributionError::Overflow)?,
            ),
        };

        Ok(Self {
            proportional,
            nakamoto_bonus,
            bonus_per_validator,
        })
    }
}

impl<'a> RewardEngine<'a> {
    /// Distribute the fee collector's balance among `bonded_votes`.
    ///
    /// Votes are processed in the order given. A vote whose consensus
    /// address does not resolve to a validator aborts the whole block.
    pub fn allocate_tokens(
        &self,
        total_previous_power: VotingPower,
        bonded_votes: &[VoteInfo],
    ) -> DistributionResult<()> {
        let collected = self.bank.get_all_balances(&self.fee_collector)?;
        self.bank.send_coins_from_module_to_module(
            &self.fee_collector,
            &self.distribution_module,
            &collected,
        )?;
        let fees = DecCoins::from_coins(&collected).ok_or(DistributionError::Overflow)?;

        if total_previous_power == 0 {
            self.fund_community_pool(&fees)?;
            info!("No voting power in previous block, {} sent to community pool", fees);
            return Ok(());
        }

        let params = self.store.get_params()?;
        let bond_denom = self.staking.bond_denom()?;
        let pools = RewardPools::compute(&fees, &params, &bond_denom, bonded_votes.len())?;
        let total_power = Dec::from_u64(total_previous_power);

        let mut remaining = fees.clone();
        for vote in bonded_votes {
            let validator = self
                .staking
                .validator_by_cons_addr(&vote.consensus_address)?
                .ok_or(DistributionError::ValidatorNotFound(vote.consensus_address))?;

            let power_fraction = Dec::from_u64(vote.power)
                .checked_quo_truncate(total_power)
                .ok_or(DistributionError::Overflow)?;
            let reward = pools
                .proportional
                .mul_dec_truncate(power_fraction)
                .and_then(|proportional| proportional.checked_add(&pools.bonus_per_validator))
                .ok_or(DistributionError::Overflow)?;

            self.allocate_tokens_to_validator(&validator, &reward)?;

            remaining = remaining.checked_sub(&reward).ok_or_else(|| {
                DistributionError::ConservationViolated(format!(
                    "rewards exceed collected fees {} (total power {})",
                    fees, total_previous_power
                ))
            })?;
            debug!(
                "Validator {} power {}/{} rewarded {}",
                validator.operator, vote.power, total_previous_power, reward
            );
        }

        self.fund_community_pool(&remaining)?;
        info!(
            "Allocated fees {} to {} validators, {} to community pool (eta {})",
            fees,
            bonded_votes.len(),
            remaining,
            params.nakamoto_bonus_coefficient
        );
        Ok(())
    }

    fn fund_community_pool(&self, amount: &DecCoins) -> DistributionResult<()> {
        let mut fee_pool = self.store.get_fee_pool()?;
        fee_pool.community_pool = fee_pool
            .community_pool
            .checked_add(amount)
            .ok_or(DistributionError::Overflow)?;
        self.store.set_fee_pool(&fee_pool)?;

        if !amount.is_zero() {
            self.events.emit(DistributionEvent::CommunityPoolFunded {
                amount: amount.clone(),
            });
        }
        Ok(())
    }
}
