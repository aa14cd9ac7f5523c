//! Block Provision Calculator
//!
//! Pure, deterministic conversion of the chain's annual inflation schedule
//! into the amount minted for a single block.
//!
//! # Design Principles
//!
//! 1. **Pure functions** - the only inputs are what the [`MintOracle`] reports
//! 2. **Deterministic** - truncation toward zero, no floats
//! 3. **Fail closed** - oracle failures and nonsensical schedules are errors,
//!    never a silent zero provision
//!
//! # Usage
//!
//! ```ignore
//! use lib_mint::{block_provision, MintOracle};
//!
//! let minted = block_provision(&oracle)?;
//! assert_eq!(minted.denom, "stake");
//! ```

pub mod errors;
pub mod provision;

#[cfg(test)]
mod golden_vectors;

pub use errors::{MintError, MintResult};
pub use provision::{block_provision, compute_block_provision, MintOracle};

// Re-export pure data types from lib-types (canonical location)
pub use lib_types::{Coin, Dec, MintParams};
