//! Golden Vector Tests for Block Provisions
//!
//! These tests define EXACT expected provisions for specific schedules.
//! If any of these tests fail, every node would mint a different amount
//! for the same block: a consensus-breaking change.
//!
//! # Updating Golden Vectors
//!
//! If you need to change provision logic:
//! 1. Update the computation code
//! 2. Update these golden vectors with new expected values
//! 3. Document the change in the commit message

#[cfg(test)]
mod tests {
    use crate::{compute_block_provision, Dec, MintParams};

    fn params(blocks_per_year: u64) -> MintParams {
        MintParams {
            mint_denom: "stake".to_string(),
            blocks_per_year,
        }
    }

    // =========================================================================
    // GOLDEN VECTOR: Default schedule
    // =========================================================================

    /// Golden vector: default params (5 second blocks)
    ///
    /// - blocks_per_year: 60 * 60 * 8766 / 5 = 6_311_520
    /// - annual: 13_000_000 stake
    /// - per block: 13_000_000 / 6_311_520 = 2.0597...
    /// - truncated: 2
    #[test]
    fn golden_default_schedule() {
        let defaults = MintParams::default();
        assert_eq!(defaults.blocks_per_year, 6_311_520);

        let coin = compute_block_provision(Dec::from_int(13_000_000), &defaults).unwrap();

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(coin.amount, 2, "Golden vector mismatch: default_schedule");
        assert_eq!(coin.denom, "stake");
    }

    // =========================================================================
    // GOLDEN VECTOR: Large supply
    // =========================================================================

    /// Golden vector: 10^9 tokens at 6 decimals minted per year
    ///
    /// - annual: 1_000_000_000_000_000
    /// - blocks_per_year: 6_311_520
    /// - per block: 158_440_439.42... -> 158_440_439
    #[test]
    fn golden_large_supply() {
        let coin = compute_block_provision(
            Dec::from_u64(1_000_000_000_000_000),
            &params(6_311_520),
        )
        .unwrap();

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(coin.amount, 158_440_439, "Golden vector mismatch: large_supply");
    }

    // =========================================================================
    // GOLDEN VECTOR: Exact division
    // =========================================================================

    /// Golden vector: annual provisions divide evenly
    #[test]
    fn golden_exact_division() {
        let coin = compute_block_provision(Dec::from_int(5_256_000), &params(5_256_000)).unwrap();

        // GOLDEN VECTOR: This exact value MUST NOT change
        assert_eq!(coin.amount, 1, "Golden vector mismatch: exact_division");
    }

    // =========================================================================
    // DETERMINISM
    // =========================================================================

    #[test]
    fn test_determinism() {
        let annual: Dec = "123456789.123456789123456789".parse().unwrap();
        let first = compute_block_provision(annual, &params(6_311_520)).unwrap();
        for _ in 0..100 {
            assert_eq!(compute_block_provision(annual, &params(6_311_520)).unwrap(), first);
        }
    }
}
