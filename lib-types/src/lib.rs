//! Reward distribution primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No floating point in consensus state. Ever.

pub mod coins;
pub mod dec;
pub mod distribution;
pub mod errors;
pub mod mint;
pub mod primitives;

pub use coins::{Coin, Coins, DecCoin, DecCoins};
pub use dec::{Dec, DEC_PRECISION};
pub use distribution::{
    BondedValidator, FeePool, Params, ValidatorAccumulatedCommission, ValidatorCurrentRewards,
    ValidatorOutstandingRewards, VoteInfo,
};
pub use errors::{CoinsError, DecError};
pub use mint::MintParams;
pub use primitives::{Address, Amount, BlockHeight, ConsensusAddress, VotingPower};
