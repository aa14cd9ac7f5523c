//! External ledgers
//!
//! The staking ledger and the bank are owned elsewhere. This crate only
//! reads validator records and moves collected fees between module
//! accounts. Nothing returned here is cached across blocks.

use std::cell::RefCell;
use std::collections::BTreeMap;

use lib_types::{BondedValidator, Coins, ConsensusAddress};

use crate::errors::{DistributionError, DistributionResult};

/// Read-only view of the staking module
pub trait StakingLedger {
    /// Denom validators bond in; the Nakamoto bonus is paid only in this denom
    fn bond_denom(&self) -> DistributionResult<String>;

    /// Resolve a validator from the consensus address it signed with
    fn validator_by_cons_addr(
        &self,
        consensus_address: &ConsensusAddress,
    ) -> DistributionResult<Option<BondedValidator>>;

    /// Bonded validators, highest power first
    fn bonded_validators_by_power(&self) -> DistributionResult<Vec<BondedValidator>>;
}

/// Module-account balances
pub trait BankLedger {
    fn get_all_balances(&self, module: &str) -> DistributionResult<Coins>;

    fn send_coins_from_module_to_module(
        &self,
        from: &str,
        to: &str,
        amount: &Coins,
    ) -> DistributionResult<()>;
}

// ============================================================================
// IN-MEMORY LEDGERS
// ============================================================================

/// In-process staking ledger
#[derive(Debug)]
pub struct MemoryStakingLedger {
    bond_denom: String,
    validators: RefCell<Vec<BondedValidator>>,
}

impl MemoryStakingLedger {
    pub fn new(bond_denom: impl Into<String>) -> Self {
        Self {
            bond_denom: bond_denom.into(),
            validators: RefCell::new(Vec::new()),
        }
    }

    /// Add or replace a validator (matched by operator address)
    pub fn upsert_validator(&self, validator: BondedValidator) {
        let mut validators = self.validators.borrow_mut();
        match validators.iter_mut().find(|v| v.operator == validator.operator) {
            Some(existing) => *existing = validator,
            None => validators.push(validator),
        }
    }

    pub fn remove_validator(&self, consensus_address: &ConsensusAddress) {
        self.validators
            .borrow_mut()
            .retain(|v| v.consensus_address != *consensus_address);
    }
}

impl StakingLedger for MemoryStakingLedger {
    fn bond_denom(&self) -> DistributionResult<String> {
        Ok(self.bond_denom.clone())
    }

    fn validator_by_cons_addr(
        &self,
        consensus_address: &ConsensusAddress,
    ) -> DistributionResult<Option<BondedValidator>> {
        Ok(self
            .validators
            .borrow()
            .iter()
            .find(|v| v.consensus_address == *consensus_address)
            .cloned())
    }

    fn bonded_validators_by_power(&self) -> DistributionResult<Vec<BondedValidator>> {
        let mut validators = self.validators.borrow().clone();
        validators.sort_by(|a, b| b.bonded_tokens.cmp(&a.bonded_tokens));
        Ok(validators)
    }
}

/// In-process bank holding module-account balances
#[derive(Debug, Default)]
pub struct MemoryBank {
    balances: RefCell<BTreeMap<String, Coins>>,
}

impl MemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, module: &str, coins: Coins) {
        self.balances.borrow_mut().insert(module.to_string(), coins);
    }

    pub fn balance(&self, module: &str) -> Coins {
        self.balances.borrow().get(module).cloned().unwrap_or_default()
    }

    /// Credit `coins` to `module`
    pub fn mint_to(&self, module: &str, coins: &Coins) -> DistributionResult<()> {
        let updated = self
            .balance(module)
            .checked_add(coins)
            .ok_or(DistributionError::Overflow)?;
        self.set_balance(module, updated);
        Ok(())
    }
}

impl BankLedger for MemoryBank {
    fn get_all_balances(&self, module: &str) -> DistributionResult<Coins> {
        Ok(self.balance(module))
    }

    fn send_coins_from_module_to_module(
        &self,
        from: &str,
        to: &str,
        amount: &Coins,
    ) -> DistributionResult<()> {
        let debited = self.balance(from).checked_sub(amount).ok_or_else(|| {
            DistributionError::Ledger(format!("insufficient funds in {}: need {}", from, amount))
        })?;
        let credited = self
            .balance(to)
            .checked_add(amount)
            .ok_or(DistributionError::Overflow)?;
        self.set_balance(from, debited);
        self.set_balance(to, credited);
        Ok(())
    }
}
