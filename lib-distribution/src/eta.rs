//! Decentralization coefficient (η) controller
//!
//! Every [`ETA_UPDATE_INTERVAL`] blocks, bonded stake is split into a high
//! and a low bracket. If the high bracket's average stake is at least
//! [`ETA_STEP`] times the low bracket's, η rises by `ETA_STEP / 100`;
//! otherwise it falls by the same step. η stays within `[0, 1]`.
//!
//! Bracket boundaries are fixed, not a smooth function of `n`:
//!
//! | n        | high     | low          |
//! |----------|----------|--------------|
//! | < 100    | `[..n/3]`| last `n/3`   |
//! | >= 100   | `[..33]` | `[66..]`     |

use lib_types::{BlockHeight, BondedValidator, Dec};
use tracing::{debug, info};

use crate::engine::RewardEngine;
use crate::errors::{DistributionError, DistributionResult};
use crate::events::DistributionEvent;

/// Blocks between coefficient updates
pub const ETA_UPDATE_INTERVAL: BlockHeight = 120_000;

/// Concentration ratio threshold; also the step size in hundredths
pub const ETA_STEP: i64 = 3;

/// Minimum bonded validators before the controller acts
pub const MIN_VALIDATORS_FOR_ETA: usize = 3;

/// Validator count from which fixed bracket indices apply
const FIXED_BRACKET_THRESHOLD: usize = 100;
const FIXED_HIGH_END: usize = 33;
const FIXED_LOW_START: usize = 66;

/// Split a slice sorted by descending stake into (high, low) brackets
pub fn partition_by_stake<T>(sorted: &[T]) -> (&[T], &[T]) {
    let n = sorted.len();
    if n < FIXED_BRACKET_THRESHOLD {
        let third = n / 3;
        (&sorted[..third], &sorted[n - third..])
    } else {
        (&sorted[..FIXED_HIGH_END], &sorted[FIXED_LOW_START..])
    }
}

/// Mean bonded tokens, truncated; zero for an empty group
pub fn average_bonded_tokens(validators: &[BondedValidator]) -> DistributionResult<Dec> {
    if validators.is_empty() {
        return Ok(Dec::ZERO);
    }
    let total = validators.iter().try_fold(Dec::ZERO, |acc, v| {
        Dec::checked_from_amount(v.bonded_tokens)
            .and_then(|tokens| acc.checked_add(tokens))
            .ok_or(DistributionError::Overflow)
    })?;
    total
        .checked_quo_int(validators.len() as u64)
        .ok_or(DistributionError::Overflow)
}

/// The coefficient after one controller step
pub fn next_eta(current: Dec, high_avg: Dec, low_avg: Dec) -> DistributionResult<Dec> {
    let step = Dec::with_precision(ETA_STEP, 2);
    let concentrated = low_avg.is_zero()
        || high_avg
            .checked_quo_truncate(low_avg)
            .ok_or(DistributionError::Overflow)?
            >= Dec::from_int(ETA_STEP);

    let moved = if concentrated {
        current.checked_add(step)
    } else {
        current.checked_sub(step)
    }
    .ok_or(DistributionError::Overflow)?;

    Ok(moved.clamp_to(Dec::ZERO, Dec::ONE))
}

impl<'a> RewardEngine<'a> {
    /// Run the controller if `height` is an update height
    pub fn adjust_eta(&self, height: BlockHeight) -> DistributionResult<()> {
        if height % ETA_UPDATE_INTERVAL != 0 {
            return Ok(());
        }

        let mut params = self.store.get_params()?;
        let previous = params.nakamoto_bonus_coefficient;

        if !params.nakamoto_bonus_enabled {
            if !previous.is_zero() {
                params.nakamoto_bonus_coefficient = Dec::ZERO;
                self.store.set_params(&params)?;
                self.events.emit(DistributionEvent::NakamotoCoefficientChanged {
                    coefficient: Dec::ZERO,
                });
                info!("Nakamoto bonus disabled, eta {} -> 0 at height {}", previous, height);
            }
            return Ok(());
        }

        let mut validators = self.staking.bonded_validators_by_power()?;
        validators.sort_by(|a, b| b.bonded_tokens.cmp(&a.bonded_tokens));
        if validators.len() < MIN_VALIDATORS_FOR_ETA {
            debug!(
                "Only {} bonded validators at height {}, eta unchanged",
                validators.len(),
                height
            );
            return Ok(());
        }

        let (high, low) = partition_by_stake(&validators);
        let high_avg = average_bonded_tokens(high)?;
        let low_avg = average_bonded_tokens(low)?;
        let updated = next_eta(previous, high_avg, low_avg)?;

        params.nakamoto_bonus_coefficient = updated;
        self.store.set_params(&params)?;

        if updated != previous {
            self.events.emit(DistributionEvent::NakamotoCoefficientChanged {
                coefficient: updated,
            });
            info!(
                "Eta {} -> {} at height {} (high avg {}, low avg {})",
                previous, updated, height, high_avg, low_avg
            );
        } else {
            debug!("Eta stays {} at height {}", previous, height);
        }
        Ok(())
    }
}
