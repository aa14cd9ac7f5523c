//! Genesis import and export

use std::collections::BTreeSet;

use lib_types::{
    Address, DecCoins, FeePool, Params, ValidatorAccumulatedCommission, ValidatorCurrentRewards,
    ValidatorOutstandingRewards,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{DistributionError, DistributionResult};
use crate::params::ParamsExt;
use crate::store::DistributionStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutstandingRewardsRecord {
    pub validator: Address,
    pub outstanding: ValidatorOutstandingRewards,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulatedCommissionRecord {
    pub validator: Address,
    pub accumulated: ValidatorAccumulatedCommission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentRewardsRecord {
    pub validator: Address,
    pub rewards: ValidatorCurrentRewards,
}

/// Complete distribution state at a height
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    pub fee_pool: FeePool,
    #[serde(default)]
    pub outstanding_rewards: Vec<OutstandingRewardsRecord>,
    #[serde(default)]
    pub accumulated_commissions: Vec<AccumulatedCommissionRecord>,
    #[serde(default)]
    pub current_rewards: Vec<CurrentRewardsRecord>,
}

impl GenesisState {
    /// Params in range, no negative balances, one record per validator per map
    pub fn validate(&self) -> DistributionResult<()> {
        self.params
            .validate()
            .map_err(|e| DistributionError::InvalidGenesis(e.to_string()))?;

        check_non_negative("community pool", &self.fee_pool.community_pool)?;
        check_records(
            "outstanding rewards",
            self.outstanding_rewards.iter().map(|r| (&r.validator, &r.outstanding.rewards)),
        )?;
        check_records(
            "accumulated commission",
            self.accumulated_commissions.iter().map(|r| (&r.validator, &r.accumulated.commission)),
        )?;
        check_records(
            "current rewards",
            self.current_rewards.iter().map(|r| (&r.validator, &r.rewards.rewards)),
        )?;
        Ok(())
    }

    pub fn to_json(&self) -> DistributionResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DistributionError::InvalidGenesis(e.to_string()))
    }

    pub fn from_json(json: &str) -> DistributionResult<Self> {
        serde_json::from_str(json).map_err(|e| DistributionError::InvalidGenesis(e.to_string()))
    }
}

fn check_non_negative(what: &str, coins: &DecCoins) -> DistributionResult<()> {
    if coins.is_any_negative() {
        return Err(DistributionError::InvalidGenesis(format!("negative {}: {}", what, coins)));
    }
    Ok(())
}

fn check_records<'a>(
    what: &str,
    records: impl Iterator<Item = (&'a Address, &'a DecCoins)>,
) -> DistributionResult<()> {
    let mut seen = BTreeSet::new();
    for (validator, coins) in records {
        if !seen.insert(*validator) {
            return Err(DistributionError::InvalidGenesis(format!(
                "duplicate {} for validator {}",
                what, validator
            )));
        }
        check_non_negative(what, coins)?;
    }
    Ok(())
}

/// Validate `genesis` and write it into `store`
pub fn init_genesis(
    store: &dyn DistributionStore,
    genesis: &GenesisState,
) -> DistributionResult<()> {
    genesis.validate()?;

    store.set_params(&genesis.params)?;
    store.set_fee_pool(&genesis.fee_pool)?;
    for record in &genesis.outstanding_rewards {
        store.set_outstanding_rewards(&record.validator, &record.outstanding)?;
    }
    for record in &genesis.accumulated_commissions {
        store.set_accumulated_commission(&record.validator, &record.accumulated)?;
    }
    for record in &genesis.current_rewards {
        store.set_current_rewards(&record.validator, &record.rewards)?;
    }

    info!(
        "Distribution genesis loaded: {} validators with outstanding rewards, community pool {}",
        genesis.outstanding_rewards.len(),
        genesis.fee_pool.community_pool
    );
    Ok(())
}

/// Snapshot everything in `store`
pub fn export_genesis(store: &dyn DistributionStore) -> DistributionResult<GenesisState> {
    Ok(GenesisState {
        params: store.get_params()?,
        fee_pool: store.get_fee_pool()?,
        outstanding_rewards: store
            .all_outstanding_rewards()?
            .into_iter()
            .map(|(validator, outstanding)| OutstandingRewardsRecord { validator, outstanding })
            .collect(),
        accumulated_commissions: store
            .all_accumulated_commission()?
            .into_iter()
            .map(|(validator, accumulated)| AccumulatedCommissionRecord { validator, accumulated })
            .collect(),
        current_rewards: store
            .all_current_rewards()?
            .into_iter()
            .map(|(validator, rewards)| CurrentRewardsRecord { validator, rewards })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use lib_types::Dec;

    fn outstanding(byte: u8, amount: &str) -> OutstandingRewardsRecord {
        OutstandingRewardsRecord {
            validator: Address::new([byte; 32]),
            outstanding: ValidatorOutstandingRewards {
                rewards: DecCoins::single("stake", amount.parse().unwrap()),
            },
        }
    }

    #[test]
    fn test_default_genesis_valid() {
        assert!(GenesisState::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_validator_rejected() {
        let genesis = GenesisState {
            outstanding_rewards: vec![outstanding(1, "1"), outstanding(1, "2")],
            ..Default::default()
        };
        let err = genesis.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate outstanding rewards"));
    }

    #[test]
    fn test_negative_balance_rejected() {
        let genesis = GenesisState {
            outstanding_rewards: vec![outstanding(1, "-1")],
            ..Default::default()
        };
        assert!(matches!(genesis.validate(), Err(DistributionError::InvalidGenesis(_))));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let mut genesis = GenesisState::default();
        genesis.params.nakamoto_bonus_coefficient = Dec::from_int(2);
        let store = MemoryStore::new();
        assert!(init_genesis(&store, &genesis).is_err());
        assert_eq!(store.get_params().unwrap(), Params::default());
    }

    #[test]
    fn test_import_export() {
        let genesis = GenesisState {
            params: Params {
                nakamoto_bonus_coefficient: Dec::with_precision(12, 2),
                ..Params::default()
            },
            fee_pool: FeePool {
                community_pool: DecCoins::single("stake", "3.5".parse().unwrap()),
            },
            outstanding_rewards: vec![outstanding(2, "7"), outstanding(1, "4.25")],
            ..Default::default()
        };

        let store = MemoryStore::new();
        init_genesis(&store, &genesis).unwrap();
        let exported = export_genesis(&store).unwrap();

        assert_eq!(exported.params, genesis.params);
        assert_eq!(exported.fee_pool, genesis.fee_pool);
        // export is ordered by address
        assert_eq!(
            exported.outstanding_rewards,
            vec![outstanding(1, "4.25"), outstanding(2, "7")]
        );

        let json = exported.to_json().unwrap();
        assert_eq!(GenesisState::from_json(&json).unwrap(), exported);
    }

    #[test]
    fn test_duplicate_and_zero_denoms_normalized_on_import() {
        let mut value = serde_json::to_value(GenesisState::default()).unwrap();
        value["fee_pool"]["community_pool"] = serde_json::json!([
            {"denom": "stake", "amount": "1"},
            {"denom": "stake", "amount": "2"},
            {"denom": "atom", "amount": "0"}
        ]);
        let genesis = GenesisState::from_json(&value.to_string()).unwrap();
        let pool = &genesis.fee_pool.community_pool;
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.amount_of("stake"), Dec::from_int(3));
        assert!(genesis.validate().is_ok());

        let store = MemoryStore::new();
        init_genesis(&store, &genesis).unwrap();
        let exported = export_genesis(&store).unwrap();
        assert_eq!(
            exported.fee_pool.community_pool,
            DecCoins::single("stake", Dec::from_int(3))
        );
    }

    #[test]
    fn test_overflowing_denoms_rejected_on_import() {
        let mut value = serde_json::to_value(GenesisState::default()).unwrap();
        value["fee_pool"]["community_pool"] = serde_json::json!([
            {"denom": "stake", "amount": "100000000000000000000"},
            {"denom": "stake", "amount": "100000000000000000000"}
        ]);
        assert!(matches!(
            GenesisState::from_json(&value.to_string()),
            Err(DistributionError::InvalidGenesis(_))
        ));
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(matches!(
            GenesisState::from_json("{not json"),
            Err(DistributionError::InvalidGenesis(_))
        ));
    }
}
