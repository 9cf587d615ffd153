//! # Config Module
//!
//! Settings for the scenario driver, loaded from TOML. Every field has a
//! default, so an empty file (or no file) reproduces the classic scenarios.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub greeting: GreetingConfig,

    #[serde(default)]
    pub logger: LoggerConfig,

    #[serde(default)]
    pub power: PowerConfig,

    /// Fallback log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            account: AccountConfig::default(),
            greeting: GreetingConfig::default(),
            logger: LoggerConfig::default(),
            power: PowerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConfig {
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Decimal,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_username")]
    pub username: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            label: default_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerConfig {
    /// Each case builds one power function and applies it to its input
    #[serde(default = "default_power_cases")]
    pub cases: Vec<PowerCase>,
}

impl PowerConfig {
    pub fn exponents(&self) -> Vec<i32> {
        self.cases.iter().map(|case| case.exponent).collect()
    }
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            cases: default_power_cases(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCase {
    pub exponent: i32,
    pub input: f64,
}

fn default_initial_balance() -> Decimal {
    Decimal::from(1000)
}

fn default_username() -> String {
    "Alice".to_string()
}

fn default_label() -> String {
    "DEBUG".to_string()
}

fn default_power_cases() -> Vec<PowerCase> {
    vec![
        PowerCase {
            exponent: 2,
            input: 4.0,
        },
        PowerCase {
            exponent: 3,
            input: 2.0,
        },
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl KitConfig {
    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::load_str(&content)?;
        tracing::debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: KitConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.account.initial_balance.is_sign_negative() && !self.account.initial_balance.is_zero()
        {
            return Err(ConfigError::Validation(format!(
                "account.initial_balance must not be negative, got {}",
                self.account.initial_balance
            )));
        }

        if self.logger.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logger.label must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
