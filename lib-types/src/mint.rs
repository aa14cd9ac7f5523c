//! Mint primitives.
//!
//! The mint module itself is external; these are the values the block
//! provision calculator reads from it.

use serde::{Deserialize, Serialize};

/// Mint schedule parameters relevant to per-block provisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintParams {
    /// Denom newly minted tokens are issued in
    pub mint_denom: String,
    /// Expected number of blocks produced per year
    pub blocks_per_year: u64,
}

impl Default for MintParams {
    fn default() -> Self {
        Self {
            mint_denom: "stake".to_string(),
            // 5 second blocks
            blocks_per_year: 60 * 60 * 8766 / 5,
        }
    }
}
