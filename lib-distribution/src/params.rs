//! Parameter validation
//!
//! `Params` itself is a pure data type in lib-types; the rules live here.

use lib_types::{Dec, Params};

use crate::errors::{DistributionError, DistributionResult};

/// Behavior for [`Params`]
pub trait ParamsExt {
    /// Check every fraction lies in `[0, 1]`
    fn validate(&self) -> DistributionResult<()>;
}

impl ParamsExt for Params {
    fn validate(&self) -> DistributionResult<()> {
        validate_fraction("community_tax", self.community_tax)?;
        validate_fraction("nakamoto_bonus_coefficient", self.nakamoto_bonus_coefficient)?;
        Ok(())
    }
}

fn validate_fraction(name: &str, value: Dec) -> DistributionResult<()> {
    if value.is_negative() {
        return Err(DistributionError::InvalidParams(format!(
            "{} must not be negative: {}",
            name, value
        )));
    }
    if value > Dec::ONE {
        return Err(DistributionError::InvalidParams(format!(
            "{} must not exceed one: {}",
            name, value
        )));
    }
    Ok(())
}
