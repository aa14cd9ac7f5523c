//! Distribution state invariants
//!
//! Checked after block processing or on demand by a host's crisis module.
//!
//! - **NonNegativeOutstanding**: no validator's outstanding rewards hold a
//!   negative amount
//! - **ModuleAccount**: the distribution module account holds exactly the
//!   whole-coin part of (Σ outstanding rewards + community pool)

use lib_types::{Address, Coins, DecCoins};

use crate::errors::{DistributionError, DistributionResult};
use crate::ledger::BankLedger;
use crate::store::DistributionStore;

/// Properties distribution state must always satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionInvariant {
    NonNegativeOutstanding,
    ModuleAccount,
}

impl DistributionInvariant {
    pub fn description(&self) -> &'static str {
        match self {
            Self::NonNegativeOutstanding => "outstanding rewards must never be negative",
            Self::ModuleAccount => concat!(
                "module account balance must equal truncated outstanding rewards ",
                "plus community pool"
            ),
        }
    }
}

/// State captured for invariant checks
#[derive(Debug, Clone)]
pub struct DistributionSnapshot {
    pub outstanding: Vec<(Address, DecCoins)>,
    pub community_pool: DecCoins,
    pub module_balance: Coins,
}

impl DistributionSnapshot {
    pub fn capture(
        store: &dyn DistributionStore,
        bank: &dyn BankLedger,
        distribution_module: &str,
    ) -> DistributionResult<Self> {
        Ok(Self {
            outstanding: store
                .all_outstanding_rewards()?
                .into_iter()
                .map(|(validator, record)| (validator, record.rewards))
                .collect(),
            community_pool: store.get_fee_pool()?.community_pool,
            module_balance: bank.get_all_balances(distribution_module)?,
        })
    }

    pub fn check_non_negative_outstanding(&self) -> bool {
        self.outstanding.iter().all(|(_, rewards)| !rewards.is_any_negative())
    }

    /// Σ outstanding + community pool; `None` on overflow
    pub fn expected_module_balance(&self) -> Option<DecCoins> {
        self.outstanding
            .iter()
            .try_fold(self.community_pool.clone(), |acc, (_, rewards)| acc.checked_add(rewards))
    }

    pub fn check_module_account(&self) -> bool {
        match self.expected_module_balance() {
            Some(expected) => expected.truncate_decimal().0 == self.module_balance,
            None => false,
        }
    }

    /// Every violated invariant; empty if all hold
    pub fn check_all_invariants(&self) -> Vec<DistributionInvariant> {
        let mut violations = Vec::new();

        if !self.check_non_negative_outstanding() {
            violations.push(DistributionInvariant::NonNegativeOutstanding);
        }
        if !self.check_module_account() {
            violations.push(DistributionInvariant::ModuleAccount);
        }

        violations
    }
}

/// `Ok(())` if `invariant` holds for `snapshot`, otherwise a descriptive message
pub fn check_invariant(
    invariant: &DistributionInvariant,
    snapshot: &DistributionSnapshot,
) -> Result<(), String> {
    let holds = match invariant {
        DistributionInvariant::NonNegativeOutstanding => snapshot.check_non_negative_outstanding(),
        DistributionInvariant::ModuleAccount => snapshot.check_module_account(),
    };

    if !holds {
        Err(format!(
            "distribution invariant violated [{:?}]: {}",
            invariant,
            invariant.description()
        ))
    } else {
        Ok(())
    }
}

/// Capture state and fail with [`DistributionError::ConservationViolated`]
/// listing every broken invariant
pub fn assert_invariants(
    store: &dyn DistributionStore,
    bank: &dyn BankLedger,
    distribution_module: &str,
) -> DistributionResult<()> {
    let snapshot = DistributionSnapshot::capture(store, bank, distribution_module)?;
    let violations = snapshot.check_all_invariants();
    if violations.is_empty() {
        return Ok(());
    }

    let detail: Vec<String> = violations
        .iter()
        .map(|v| format!("[{:?}]: {}", v, v.description()))
        .collect();
    Err(DistributionError::ConservationViolated(detail.join("; ")))
}
