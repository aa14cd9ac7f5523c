//! Distribution configuration
//!
//! Loaded from a TOML file. Every field is optional; omitted fields keep
//! their defaults:
//!
//! ```toml
//! fee_collector_module = "fee_collector"
//!
//! [genesis_params]
//! community_tax = "0.02"
//! nakamoto_bonus_coefficient = "0.03"
//! ```

use anyhow::{Context, Result};
use lib_types::{Dec, Params};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::{DISTRIBUTION_MODULE, FEE_COLLECTOR_MODULE};
use crate::params::ParamsExt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    /// Module account fees are collected into
    pub fee_collector_module: String,
    /// Module account holding unpaid rewards
    pub distribution_module: String,
    /// Params written at genesis
    pub genesis_params: PartialParams,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            fee_collector_module: FEE_COLLECTOR_MODULE.to_string(),
            distribution_module: DISTRIBUTION_MODULE.to_string(),
            genesis_params: PartialParams::default(),
        }
    }
}

/// Params section with every field optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartialParams {
    #[serde(default)]
    pub community_tax: Option<Dec>,
    #[serde(default)]
    pub nakamoto_bonus_coefficient: Option<Dec>,
    #[serde(default)]
    pub nakamoto_bonus_enabled: Option<bool>,
    #[serde(default)]
    pub withdraw_addr_enabled: Option<bool>,
}

impl PartialParams {
    /// Overlay the configured fields on [`Params::default`]
    pub fn resolve(&self) -> Params {
        let defaults = Params::default();
        Params {
            community_tax: self.community_tax.unwrap_or(defaults.community_tax),
            nakamoto_bonus_coefficient: self
                .nakamoto_bonus_coefficient
                .unwrap_or(defaults.nakamoto_bonus_coefficient),
            nakamoto_bonus_enabled: self
                .nakamoto_bonus_enabled
                .unwrap_or(defaults.nakamoto_bonus_enabled),
            withdraw_addr_enabled: self
                .withdraw_addr_enabled
                .unwrap_or(defaults.withdraw_addr_enabled),
        }
    }
}

impl DistributionConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse distribution config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.fee_collector_module.is_empty() || self.distribution_module.is_empty() {
            anyhow::bail!("Module account names must not be empty");
        }
        if self.fee_collector_module == self.distribution_module {
            anyhow::bail!(
                "Fee collector and distribution module must differ (both '{}')",
                self.fee_collector_module
            );
        }
        self.genesis_params
            .resolve()
            .validate()
            .context("Invalid genesis params")?;
        Ok(())
    }

    /// Fully-resolved params for genesis
    pub fn genesis_params(&self) -> Params {
        self.genesis_params.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = DistributionConfig::from_toml_str("").unwrap();
        assert_eq!(config, DistributionConfig::default());
        assert_eq!(config.genesis_params(), Params::default());
    }

    #[test]
    fn test_partial_params_merge() {
        let config = DistributionConfig::from_toml_str(
            r#"
            distribution_module = "rewards"

            [genesis_params]
            nakamoto_bonus_coefficient = "0.1"
            nakamoto_bonus_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.fee_collector_module, FEE_COLLECTOR_MODULE);
        assert_eq!(config.distribution_module, "rewards");
        let params = config.genesis_params();
        assert_eq!(params.nakamoto_bonus_coefficient, Dec::with_precision(1, 1));
        assert!(!params.nakamoto_bonus_enabled);
        assert_eq!(params.community_tax, Dec::with_precision(2, 2));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = DistributionConfig::from_toml_str(
            r#"
            [genesis_params]
            community_tax = "1.5"
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("community_tax"));
    }

    #[test]
    fn test_same_module_rejected() {
        assert!(DistributionConfig::from_toml_str(
            r#"
            fee_collector_module = "x"
            distribution_module = "x"
            "#,
        )
        .is_err());
    }

    #[test]
    fn test_bad_decimal_rejected() {
        assert!(DistributionConfig::from_toml_str(
            r#"
            [genesis_params]
            community_tax = "two percent"
            "#,
        )
        .is_err());
    }
}
