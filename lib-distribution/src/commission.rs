//! Validator commission splitter
//!
//! ```text
//! commission = trunc(tokens * rate)
//! shared     = tokens - commission        (exact)
//! ```
//!
//! Outstanding rewards grow by the original `tokens`, never by a recomputed
//! `commission + shared`.

use lib_types::{BondedValidator, Dec, DecCoins};
use tracing::debug;

use crate::engine::RewardEngine;
use crate::errors::{DistributionError, DistributionResult};
use crate::events::DistributionEvent;

/// A reward split between operator and delegators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionSplit {
    pub commission: DecCoins,
    pub shared: DecCoins,
}

/// Split `tokens` at `rate`. Expects non-negative tokens and `rate` in `[0, 1]`.
pub fn split_commission(tokens: &DecCoins, rate: Dec) -> DistributionResult<CommissionSplit> {
    let commission = tokens.mul_dec_truncate(rate).ok_or(DistributionError::Overflow)?;
    let shared = tokens.checked_sub(&commission).ok_or_else(|| {
        DistributionError::ConservationViolated(format!(
            "commission {} exceeds reward {}",
            commission, tokens
        ))
    })?;
    Ok(CommissionSplit { commission, shared })
}

impl<'a> RewardEngine<'a> {
    /// Credit `tokens` to `validator`: commission to the operator, the rest
    /// to delegators, all of it to outstanding rewards.
    pub fn allocate_tokens_to_validator(
        &self,
        validator: &BondedValidator,
        tokens: &DecCoins,
    ) -> DistributionResult<()> {
        let operator = validator.operator;
        if tokens.is_any_negative() {
            return Err(DistributionError::NegativeReward {
                validator: operator,
                tokens: tokens.clone(),
            });
        }
        if validator.commission_rate.is_negative() || validator.commission_rate > Dec::ONE {
            return Err(DistributionError::InvalidCommissionRate {
                validator: operator,
                rate: validator.commission_rate,
            });
        }

        let split = split_commission(tokens, validator.commission_rate)?;

        let mut commission = self.store.get_accumulated_commission(&operator)?;
        commission.commission = commission
            .commission
            .checked_add(&split.commission)
            .ok_or(DistributionError::Overflow)?;
        self.store.set_accumulated_commission(&operator, &commission)?;
        self.events.emit(DistributionEvent::Commission {
            validator: operator,
            amount: split.commission.clone(),
        });

        let mut current = self.store.get_current_rewards(&operator)?;
        current.rewards = current
            .rewards
            .checked_add(&split.shared)
            .ok_or(DistributionError::Overflow)?;
        self.store.set_current_rewards(&operator, &current)?;

        self.events.emit(DistributionEvent::Rewards {
            validator: operator,
            amount: tokens.clone(),
        });
        let mut outstanding = self.store.get_outstanding_rewards(&operator)?;
        outstanding.rewards = outstanding
            .rewards
            .checked_add(tokens)
            .ok_or(DistributionError::Overflow)?;
        self.store.set_outstanding_rewards(&operator, &outstanding)?;

        debug!(
            "Allocated {} to validator {} (commission {})",
            tokens, operator, split.commission
        );
        Ok(())
    }
}
