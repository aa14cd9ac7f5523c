//! Per-block provision (pure function)
//!
//! ```text
//! provision = trunc(annual_provisions / blocks_per_year)   in mint_denom
//! ```

use lib_types::{Amount, Coin, Dec, MintParams};
use tracing::debug;

use crate::errors::{MintError, MintResult};

/// Read-only view of the external mint module
pub trait MintOracle {
    /// Tokens the current inflation rate mints over a year
    fn annual_provisions(&self) -> MintResult<Dec>;

    /// Current mint schedule parameters
    fn params(&self) -> MintResult<MintParams>;
}

/// Tokens minted for the current block, as reported by `oracle`.
///
/// Any oracle failure is returned unchanged.
pub fn block_provision(oracle: &dyn MintOracle) -> MintResult<Coin> {
    let annual = oracle.annual_provisions()?;
    let params = oracle.params()?;
    let provision = compute_block_provision(annual, &params)?;

    debug!(
        "Block provision: {} (annual {} over {} blocks)",
        provision, annual, params.blocks_per_year
    );
    Ok(provision)
}

/// `trunc(annual / params.blocks_per_year)` denominated in `params.mint_denom`
pub fn compute_block_provision(annual: Dec, params: &MintParams) -> MintResult<Coin> {
    if params.blocks_per_year == 0 {
        return Err(MintError::InvalidParams(
            "blocks_per_year must be positive".to_string(),
        ));
    }
    if params.mint_denom.is_empty() {
        return Err(MintError::InvalidParams("mint_denom is empty".to_string()));
    }
    if annual.is_negative() {
        return Err(MintError::InvalidParams(format!(
            "annual provisions are negative: {}",
            annual
        )));
    }

    let per_block = annual
        .checked_quo_int(params.blocks_per_year)
        .ok_or(MintError::Overflow)?;
    let amount = Amount::try_from(per_block.truncate_int()).map_err(|_| MintError::Overflow)?;

    Ok(Coin::new(params.mint_denom.clone(), amount))
}

// ============================================================================
// TESTS
// ============================================================================
