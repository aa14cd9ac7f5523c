//! Shared fixtures for distribution integration tests

#![allow(dead_code)]

use lib_distribution::{
    Address, BondedValidator, Coin, Coins, ConsensusAddress, Dec, EventLog, MemoryBank,
    MemoryStakingLedger, MemoryStore, Params, RewardEngine, VoteInfo, FEE_COLLECTOR_MODULE,
};

pub const BOND_DENOM: &str = "stake";

pub fn d(s: &str) -> Dec {
    s.parse().unwrap()
}

pub fn params(tax: &str, eta: &str, enabled: bool) -> Params {
    Params {
        community_tax: d(tax),
        nakamoto_bonus_coefficient: d(eta),
        nakamoto_bonus_enabled: enabled,
        withdraw_addr_enabled: true,
    }
}

pub fn validator(id: u8, bonded_tokens: u128, rate: &str) -> BondedValidator {
    BondedValidator {
        operator: Address::new([id; 32]),
        consensus_address: ConsensusAddress::new([id; 20]),
        bonded_tokens,
        commission_rate: d(rate),
    }
}

/// Store, ledgers and event log for one test chain
pub struct TestChain {
    pub store: MemoryStore,
    pub staking: MemoryStakingLedger,
    pub bank: MemoryBank,
    pub events: EventLog,
}

impl TestChain {
    pub fn new(params: Params) -> Self {
        Self {
            store: MemoryStore::with_params(params),
            staking: MemoryStakingLedger::new(BOND_DENOM),
            bank: MemoryBank::new(),
            events: EventLog::new(),
        }
    }

    pub fn engine(&self) -> RewardEngine<'_> {
        RewardEngine::new(&self.store, &self.staking, &self.bank, &self.events)
    }

    /// Register validators with the given bonded tokens, ids starting at 1
    pub fn with_validators(self, stakes: &[u128], rate: &str) -> Self {
        for (i, tokens) in stakes.iter().enumerate() {
            self.staking.upsert_validator(validator(i as u8 + 1, *tokens, rate));
        }
        self
    }

    pub fn collect_fees(&self, coins: &[(&str, u128)]) {
        let coins = Coins::new(coins.iter().map(|(denom, amount)| Coin::new(*denom, *amount)))
            .unwrap();
        self.bank.mint_to(FEE_COLLECTOR_MODULE, &coins).unwrap();
    }

    /// Votes for validators 1..=powers.len() with the given powers
    pub fn votes(&self, powers: &[u64]) -> Vec<VoteInfo> {
        powers
            .iter()
            .enumerate()
            .map(|(i, power)| VoteInfo::new(ConsensusAddress::new([i as u8 + 1; 20]), *power))
            .collect()
    }
}
