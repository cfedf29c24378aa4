//! Calculator configuration loaded from a TOML file.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! ```toml
//! [calculator]
//! default_capital = 10000
//! minimum_capital = 1000
//! recommended_capital = 5000
//! default_risk_tier = "medium"
//! loading_delay_ms = 800
//!
//! [currency]
//! code = "CZK"
//! symbol = "Kč"
//! group_separator = " "
//!
//! [logging]
//! level = "info"
//! file = "calculator.log"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stake_core::{DEFAULT_CAPITAL, MINIMUM_CAPITAL, RiskTier};
use thiserror::Error;
use tracing::{debug, info};

use crate::utils::CurrencyFormat;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "profit-calculator.toml";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("minimum capital must be positive, got {0}")]
    NonPositiveMinimum(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    pub default_capital: Decimal,
    pub minimum_capital: Decimal,
    /// Shown as a hint under the capital field; not enforced.
    pub recommended_capital: Decimal,
    pub default_risk_tier: RiskTier,
    pub loading_delay_ms: u64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            default_capital: DEFAULT_CAPITAL,
            minimum_capital: MINIMUM_CAPITAL,
            recommended_capital: Decimal::from(5_000),
            default_risk_tier: RiskTier::default(),
            loading_delay_ms: 800,
        }
    }
}

impl CalculatorSettings {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Any `EnvFilter` directive, e.g. `debug` or `info,stake_core=trace`.
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub calculator: CalculatorSettings,
    pub currency: CurrencyFormat,
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(
        text: &str,
        origin: &Path,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// With an explicit path the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&text, &path)?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.calculator.minimum_capital <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveMinimum(
                self.calculator.minimum_capital,
            ));
        }
        Ok(())
    }
}
