//! Golden Vector Tests for Reward Distribution
//!
//! Exact expected state after one block for fixed inputs. A failure here
//! means nodes running different versions would commit different state
//! roots for the same block.

#[cfg(test)]
mod tests {
    use crate::{
        Address, BondedValidator, Coin, Coins, ConsensusAddress, Dec, DistributionEvent,
        DistributionStore, EventLog, MemoryBank, MemoryStakingLedger, MemoryStore, Params,
        RewardEngine, VoteInfo, DISTRIBUTION_MODULE, ETA_UPDATE_INTERVAL, FEE_COLLECTOR_MODULE,
    };

    fn d(s: &str) -> Dec {
        s.parse().unwrap()
    }

    fn validator(byte: u8, tokens: u128, rate: &str) -> BondedValidator {
        BondedValidator {
            operator: Address::new([byte; 32]),
            consensus_address: ConsensusAddress::new([byte; 20]),
            bonded_tokens: tokens,
            commission_rate: d(rate),
        }
    }

    fn params(tax: &str, eta: &str, enabled: bool) -> Params {
        Params {
            community_tax: d(tax),
            nakamoto_bonus_coefficient: d(eta),
            nakamoto_bonus_enabled: enabled,
            withdraw_addr_enabled: true,
        }
    }

    // =========================================================================
    // GOLDEN VECTOR: Two equal validators
    // =========================================================================

    /// Fees 100stake, tax 2%, η 0.1, two validators with power 100 each
    ///
    /// - validator_total: 100 * 0.98 = 98
    /// - nakamoto_bonus: 98 * 0.1 = 9.8
    /// - proportional: 98 - 9.8 = 88.2
    /// - bonus per validator: 9.8 / 2 = 4.9
    /// - reward: 88.2 * 0.5 + 4.9 = 49
    /// - community pool: 100 - 49 - 49 = 2
    #[test]
    fn golden_two_equal_validators() {
        let store = MemoryStore::with_params(params("0.02", "0.1", true));
        let staking = MemoryStakingLedger::new("stake");
        let bank = MemoryBank::new();
        let events = EventLog::new();

        let a = validator(1, 100, "0.1");
        let b = validator(2, 100, "0");
        staking.upsert_validator(a.clone());
        staking.upsert_validator(b.clone());
        bank.set_balance(FEE_COLLECTOR_MODULE, Coins::new(vec![Coin::new("stake", 100)]).unwrap());

        let engine = RewardEngine::new(&store, &staking, &bank, &events);
        let votes = [
            VoteInfo::new(a.consensus_address, 100),
            VoteInfo::new(b.consensus_address, 100),
        ];
        engine.allocate_tokens(200, &votes).unwrap();

        // GOLDEN VECTOR: These exact values MUST NOT change
        assert_eq!(engine.community_pool().unwrap().amount_of("stake"), d("2"));
        for v in [&a, &b] {
            let outstanding = engine.validator_outstanding_rewards(&v.operator).unwrap();
            assert_eq!(outstanding.rewards.amount_of("stake"), d("49"));
        }
        assert_eq!(
            engine.validator_commission(&a.operator).unwrap().commission.amount_of("stake"),
            d("4.9")
        );
        assert_eq!(
            engine.validator_current_rewards(&a.operator).unwrap().rewards.amount_of("stake"),
            d("44.1")
        );
        assert!(engine.validator_commission(&b.operator).unwrap().commission.is_zero());

        assert!(bank.balance(FEE_COLLECTOR_MODULE).is_zero());
        assert_eq!(bank.balance(DISTRIBUTION_MODULE).amount_of("stake"), 100);
    }

    // =========================================================================
    // GOLDEN VECTOR: Truncation dust
    // =========================================================================

    /// Fees 10stake, no tax, no bonus, three validators with power 1 each
    ///
    /// - power fraction: 1/3 = 0.333333333333333333
    /// - reward: 10 * 0.333333333333333333 = 3.33333333333333333
    /// - community pool: 10 - 3 * 3.33333333333333333 = 0.00000000000000001
    #[test]
    fn golden_truncation_dust() {
        let store = MemoryStore::with_params(params("0", "0", true));
        let staking = MemoryStakingLedger::new("stake");
        let bank = MemoryBank::new();
        let events = EventLog::new();

        let validators: Vec<_> = (1..=3).map(|i| validator(i, 1, "0")).collect();
        let votes: Vec<_> = validators
            .iter()
            .map(|v| {
                staking.upsert_validator(v.clone());
                VoteInfo::new(v.consensus_address, 1)
            })
            .collect();
        bank.set_balance(FEE_COLLECTOR_MODULE, Coins::new(vec![Coin::new("stake", 10)]).unwrap());

        let engine = RewardEngine::new(&store, &staking, &bank, &events);
        engine.allocate_tokens(3, &votes).unwrap();

        // GOLDEN VECTOR: These exact values MUST NOT change
        for v in &validators {
            assert_eq!(
                store.get_outstanding_rewards(&v.operator).unwrap().rewards.amount_of("stake"),
                d("3.33333333333333333")
            );
        }
        assert_eq!(
            engine.community_pool().unwrap().amount_of("stake"),
            d("0.00000000000000001")
        );
    }

    // =========================================================================
    // GOLDEN VECTOR: Concentrated stake raises η
    // =========================================================================

    /// η 0.03, bonded (100, 100, 10): high avg 100, low avg 10, ratio 10 ≥ 3 → 0.06
    #[test]
    fn golden_eta_increase() {
        let store = MemoryStore::with_params(params("0.02", "0.03", true));
        let staking = MemoryStakingLedger::new("stake");
        let bank = MemoryBank::new();
        let events = EventLog::new();
        for (i, tokens) in [100u128, 100, 10].iter().enumerate() {
            staking.upsert_validator(validator(i as u8 + 1, *tokens, "0"));
        }

        let engine = RewardEngine::new(&store, &staking, &bank, &events);
        engine.adjust_eta(ETA_UPDATE_INTERVAL).unwrap();

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(engine.params().unwrap().nakamoto_bonus_coefficient, d("0.06"));
        assert_eq!(
            events.events(),
            vec![DistributionEvent::NakamotoCoefficientChanged { coefficient: d("0.06") }]
        );
    }

    // =========================================================================
    // GOLDEN VECTOR: Even stake lowers η
    // =========================================================================

    /// η 0.03, bonded (20, 20, 10): ratio 2 < 3 → 0.03 - 0.03 = 0
    #[test]
    fn golden_eta_decrease() {
        let store = MemoryStore::with_params(params("0.02", "0.03", true));
        let staking = MemoryStakingLedger::new("stake");
        let bank = MemoryBank::new();
        let events = EventLog::new();
        for (i, tokens) in [20u128, 20, 10].iter().enumerate() {
            staking.upsert_validator(validator(i as u8 + 1, *tokens, "0"));
        }

        let engine = RewardEngine::new(&store, &staking, &bank, &events);
        engine.adjust_eta(ETA_UPDATE_INTERVAL).unwrap();

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(engine.params().unwrap().nakamoto_bonus_coefficient, Dec::ZERO);
        assert_eq!(
            events.events(),
            vec![DistributionEvent::NakamotoCoefficientChanged { coefficient: Dec::ZERO }]
        );
    }
}
