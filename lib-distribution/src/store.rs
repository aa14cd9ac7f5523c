//! Persistent reward state
//!
//! The distribution module owns five kinds of records: its [`Params`], the
//! global [`FeePool`], and three per-validator maps keyed by operator
//! address. Missing per-validator records read as empty.
//!
//! Storage is synchronous and scoped to the current block's transactional
//! view; rollback on error is the host's responsibility.

use std::cell::RefCell;
use std::collections::BTreeMap;

use lib_types::{
    Address, FeePool, Params, ValidatorAccumulatedCommission, ValidatorCurrentRewards,
    ValidatorOutstandingRewards,
};

use crate::errors::DistributionResult;

/// Storage backend for distribution state
pub trait DistributionStore {
    fn get_params(&self) -> DistributionResult<Params>;

    fn set_params(&self, params: &Params) -> DistributionResult<()>;

    fn get_fee_pool(&self) -> DistributionResult<FeePool>;

    fn set_fee_pool(&self, fee_pool: &FeePool) -> DistributionResult<()>;

    fn get_outstanding_rewards(&self, validator: &Address)
        -> DistributionResult<ValidatorOutstandingRewards>;

    fn set_outstanding_rewards(
        &self,
        validator: &Address,
        rewards: &ValidatorOutstandingRewards,
    ) -> DistributionResult<()>;

    fn get_accumulated_commission(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorAccumulatedCommission>;

    fn set_accumulated_commission(
        &self,
        validator: &Address,
        commission: &ValidatorAccumulatedCommission,
    ) -> DistributionResult<()>;

    fn get_current_rewards(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorCurrentRewards>;

    fn set_current_rewards(
        &self,
        validator: &Address,
        rewards: &ValidatorCurrentRewards,
    ) -> DistributionResult<()>;

    /// All outstanding-reward records, ordered by operator address
    fn all_outstanding_rewards(
        &self,
    ) -> DistributionResult<Vec<(Address, ValidatorOutstandingRewards)>>;

    /// All accumulated-commission records, ordered by operator address
    fn all_accumulated_commission(
        &self,
    ) -> DistributionResult<Vec<(Address, ValidatorAccumulatedCommission)>>;

    /// All current-reward records, ordered by operator address
    fn all_current_rewards(&self) -> DistributionResult<Vec<(Address, ValidatorCurrentRewards)>>;
}

/// In-process store. Iteration is ordered by address.
#[derive(Debug, Default)]
pub struct MemoryStore {
    params: RefCell<Params>,
    fee_pool: RefCell<FeePool>,
    outstanding: RefCell<BTreeMap<Address, ValidatorOutstandingRewards>>,
    commission: RefCell<BTreeMap<Address, ValidatorAccumulatedCommission>>,
    current: RefCell<BTreeMap<Address, ValidatorCurrentRewards>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: Params) -> Self {
        let store = Self::default();
        store.params.replace(params);
        store
    }
}

impl DistributionStore for MemoryStore {
    fn get_params(&self) -> DistributionResult<Params> {
        Ok(self.params.borrow().clone())
    }

    fn set_params(&self, params: &Params) -> DistributionResult<()> {
        self.params.replace(params.clone());
        Ok(())
    }

    fn get_fee_pool(&self) -> DistributionResult<FeePool> {
        Ok(self.fee_pool.borrow().clone())
    }

    fn set_fee_pool(&self, fee_pool: &FeePool) -> DistributionResult<()> {
        self.fee_pool.replace(fee_pool.clone());
        Ok(())
    }

    fn get_outstanding_rewards(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorOutstandingRewards> {
        Ok(self.outstanding.borrow().get(validator).cloned().unwrap_or_default())
    }

    fn set_outstanding_rewards(
        &self,
        validator: &Address,
        rewards: &ValidatorOutstandingRewards,
    ) -> DistributionResult<()> {
        self.outstanding.borrow_mut().insert(*validator, rewards.clone());
        Ok(())
    }

    fn get_accumulated_commission(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorAccumulatedCommission> {
        Ok(self.commission.borrow().get(validator).cloned().unwrap_or_default())
    }

    fn set_accumulated_commission(
        &self,
        validator: &Address,
        commission: &ValidatorAccumulatedCommission,
    ) -> DistributionResult<()> {
        self.commission.borrow_mut().insert(*validator, commission.clone());
        Ok(())
    }

    fn get_current_rewards(
        &self,
        validator: &Address,
    ) -> DistributionResult<ValidatorCurrentRewards> {
        Ok(self.current.borrow().get(validator).cloned().unwrap_or_default())
    }

    fn set_current_rewards(
        &self,
        validator: &Address,
        rewards: &ValidatorCurrentRewards,
    ) -> DistributionResult<()> {
        self.current.borrow_mut().insert(*validator, rewards.clone());
        Ok(())
    }

    fn all_outstanding_rewards(
        &self,
    ) -> DistributionResult<Vec<(Address, ValidatorOutstandingRewards)>> {
        Ok(self.outstanding.borrow().iter().map(|(a, r)| (*a, r.clone())).collect())
    }

    fn all_accumulated_commission(
        &self,
    ) -> DistributionResult<Vec<(Address, ValidatorAccumulatedCommission)>> {
        Ok(self.commission.borrow().iter().map(|(a, c)| (*a, c.clone())).collect())
    }

    fn all_current_rewards(&self) -> DistributionResult<Vec<(Address, ValidatorCurrentRewards)>> {
        Ok(self.current.borrow().iter().map(|(a, r)| (*a, r.clone())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_types::{Dec, DecCoins};

    #[test]
    fn test_missing_records_read_empty() {
        let store = MemoryStore::new();
        let addr = Address::new([7u8; 32]);
        assert!(store.get_outstanding_rewards(&addr).unwrap().rewards.is_zero());
        assert!(store.get_accumulated_commission(&addr).unwrap().commission.is_zero());
        assert_eq!(store.get_current_rewards(&addr).unwrap().period, 0);
        assert!(store.all_outstanding_rewards().unwrap().is_empty());
    }

    #[test]
    fn test_iteration_ordered_by_address() {
        let store = MemoryStore::new();
        let record = ValidatorOutstandingRewards {
            rewards: DecCoins::single("stake", Dec::ONE),
        };
        for byte in [9u8, 1, 5] {
            store.set_outstanding_rewards(&Address::new([byte; 32]), &record).unwrap();
        }
        let order: Vec<u8> = store
            .all_outstanding_rewards()
            .unwrap()
            .iter()
            .map(|(a, _)| a.as_bytes()[0])
            .collect();
        assert_eq!(order, vec![1, 5, 9]);
    }

    #[test]
    fn test_params_roundtrip() {
        let mut params = Params::default();
        params.nakamoto_bonus_enabled = false;
        let store = MemoryStore::with_params(params.clone());
        assert_eq!(store.get_params().unwrap(), params);
        store.set_params(&Params::default()).unwrap();
        assert!(store.get_params().unwrap().nakamoto_bonus_enabled);
    }
}
