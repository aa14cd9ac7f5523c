//! Coin collections
//!
//! [`Coins`] hold integer ledger balances; [`DecCoins`] hold fractional
//! reward accounting. Both are kept normalized:
//! - sorted by denom (stable, deterministic iteration)
//! - one entry per denom
//! - no zero entries
//!
//! Two normalized collections with equal contents are therefore `==`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::dec::Dec;
use crate::errors::CoinsError;
use crate::primitives::Amount;

// ============================================================================
// INTEGER COINS
// ============================================================================

/// An integer amount of one denom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Amount) -> Self {
        Self { denom: denom.into(), amount }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Normalized set of integer coins
///
/// Deserialization goes through [`Coins::new`], so decoded sets are
/// normalized too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>")]
pub struct Coins(Vec<Coin>);

impl TryFrom<Vec<Coin>> for Coins {
    type Error = CoinsError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Coins::new(coins).ok_or(CoinsError::Overflow)
    }
}

impl Coins {
    /// Normalize arbitrary coins. Duplicate denoms are summed; `None` on overflow.
    pub fn new(coins: impl IntoIterator<Item = Coin>) -> Option<Self> {
        let mut by_denom: BTreeMap<String, Amount> = BTreeMap::new();
        for coin in coins {
            let entry = by_denom.entry(coin.denom).or_insert(0);
            *entry = entry.checked_add(coin.amount)?;
        }
        Some(Self(
            by_denom
                .into_iter()
                .filter(|(_, amount)| *amount > 0)
                .map(|(denom, amount)| Coin { denom, amount })
                .collect(),
        ))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    pub fn amount_of(&self, denom: &str) -> Amount {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    pub fn checked_add(&self, other: &Coins) -> Option<Coins> {
        Coins::new(self.0.iter().chain(other.0.iter()).cloned())
    }

    /// `self - other`; `None` if any denom would go below zero
    pub fn checked_sub(&self, other: &Coins) -> Option<Coins> {
        let mut by_denom: BTreeMap<String, Amount> =
            self.0.iter().map(|c| (c.denom.clone(), c.amount)).collect();
        for coin in &other.0 {
            let entry = by_denom.entry(coin.denom.clone()).or_insert(0);
            *entry = entry.checked_sub(coin.amount)?;
        }
        Coins::new(by_denom.into_iter().map(|(denom, amount)| Coin { denom, amount }))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

// ============================================================================
// DECIMAL COINS
// ============================================================================

/// A fractional amount of one denom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Self {
        Self { denom: denom.into(), amount }
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Normalized set of decimal coins
///
/// Amounts may be negative only if constructed that way explicitly;
/// [`DecCoins::checked_sub`] never produces a negative entry.
/// Deserialization goes through [`DecCoins::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<DecCoin>")]
pub struct DecCoins(Vec<DecCoin>);

impl TryFrom<Vec<DecCoin>> for DecCoins {
    type Error = CoinsError;

    fn try_from(coins: Vec<DecCoin>) -> Result<Self, Self::Error> {
        DecCoins::new(coins).ok_or(CoinsError::Overflow)
    }
}

impl DecCoins {
    /// Normalize arbitrary decimal coins. Duplicate denoms are summed; `None` on overflow.
    pub fn new(coins: impl IntoIterator<Item = DecCoin>) -> Option<Self> {
        let mut by_denom: BTreeMap<String, Dec> = BTreeMap::new();
        for coin in coins {
            let entry = by_denom.entry(coin.denom).or_insert(Dec::ZERO);
            *entry = entry.checked_add(coin.amount)?;
        }
        Some(Self::from_map(by_denom))
    }

    fn from_map(by_denom: BTreeMap<String, Dec>) -> Self {
        Self(
            by_denom
                .into_iter()
                .filter(|(_, amount)| !amount.is_zero())
                .map(|(denom, amount)| DecCoin { denom, amount })
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Single-denom collection (empty if `amount` is zero)
    pub fn single(denom: impl Into<String>, amount: Dec) -> Self {
        let mut map = BTreeMap::new();
        map.insert(denom.into(), amount);
        Self::from_map(map)
    }

    /// Lift integer ledger coins into decimal accounting. `None` if an amount
    /// exceeds the decimal range.
    pub fn from_coins(coins: &Coins) -> Option<Self> {
        let converted = coins
            .iter()
            .map(|c| {
                Dec::checked_from_amount(c.amount)
                    .map(|amount| DecCoin::new(c.denom.clone(), amount))
            })
            .collect::<Option<Vec<_>>>()?;
        DecCoins::new(converted)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecCoin> {
        self.0.iter()
    }

    pub fn amount_of(&self, denom: &str) -> Dec {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(Dec::ZERO)
    }

    pub fn is_any_negative(&self) -> bool {
        self.0.iter().any(|c| c.amount.is_negative())
    }

    pub fn checked_add(&self, other: &DecCoins) -> Option<DecCoins> {
        DecCoins::new(self.0.iter().chain(other.0.iter()).cloned())
    }

    /// `self - other`; `None` on overflow or if any denom would go negative
    pub fn checked_sub(&self, other: &DecCoins) -> Option<DecCoins> {
        let mut by_denom: BTreeMap<String, Dec> =
            self.0.iter().map(|c| (c.denom.clone(), c.amount)).collect();
        for coin in &other.0 {
            let entry = by_denom.entry(coin.denom.clone()).or_insert(Dec::ZERO);
            *entry = entry.checked_sub(coin.amount)?;
            if entry.is_negative() {
                return None;
            }
        }
        Some(Self::from_map(by_denom))
    }

    /// Multiply every amount by `factor`, truncating each product toward zero
    pub fn mul_dec_truncate(&self, factor: Dec) -> Option<DecCoins> {
        let mut by_denom = BTreeMap::new();
        for coin in &self.0 {
            by_denom.insert(coin.denom.clone(), coin.amount.checked_mul_truncate(factor)?);
        }
        Some(Self::from_map(by_denom))
    }

    /// Split into whole coins and the leftover fractional change.
    ///
    /// Negative entries are not representable as ledger coins and are
    /// carried entirely in the change.
    pub fn truncate_decimal(&self) -> (Coins, DecCoins) {
        let mut whole = Vec::new();
        let mut change = BTreeMap::new();
        for coin in &self.0 {
            if coin.amount.is_negative() {
                change.insert(coin.denom.clone(), coin.amount);
                continue;
            }
            let truncated = coin.amount.truncate();
            whole.push(Coin::new(coin.denom.clone(), coin.amount.truncate_int() as Amount));
            let fraction = coin.amount.checked_sub(truncated).unwrap_or(Dec::ZERO);
            change.insert(coin.denom.clone(), fraction);
        }
        let whole = Coins::new(whole).unwrap_or_default();
        (whole, Self::from_map(change))
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

// ============================================================================
// TESTS
// ============================================================================
