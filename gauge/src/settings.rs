//! Engine configuration

use gauge_plugin::{EvalContext, DEFAULT_PERCENTAGE_DECIMALS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::logging::LoggingConfig;

/// Largest `percentage_decimals` accepted
pub const MAX_PERCENTAGE_DECIMALS: usize = 20;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("percentage_decimals must be at most {max}, got {value}")]
    PercentageDecimals { value: usize, max: usize },
}

/// Settings shared by every call made through a [`crate::Gauge`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Decimals used by `to_percentage` when the caller omits them
    pub percentage_decimals: usize,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            percentage_decimals: DEFAULT_PERCENTAGE_DECIMALS,
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.percentage_decimals > MAX_PERCENTAGE_DECIMALS {
            return Err(SettingsError::PercentageDecimals {
                value: self.percentage_decimals,
                max: MAX_PERCENTAGE_DECIMALS,
            });
        }
        Ok(())
    }

    pub fn eval_context(&self) -> EvalContext {
        EvalContext::new().with_percentage_decimals(self.percentage_decimals)
    }
}
