//! Configuration for the wallet core

use serde::{Deserialize, Serialize};

use crate::types::TOTAL_SUPPLY;

/// Wallet core configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Supply cap in minimal units
    pub total_supply_units: u64,

    /// Supply pool configuration
    pub pool: PoolConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_supply_units: TOTAL_SUPPLY.raw(),
            pool: PoolConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Supply pool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Time source for operation timestamps
    pub clock: ClockKind,
}

/// Time source selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Wall clock, millisecond precision
    #[default]
    System,
    /// Frozen clock starting at the Unix epoch
    Manual,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive (overridden by `RUST_LOG`)
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(supply) = std::env::var("WALLET_TOTAL_SUPPLY") {
            config.total_supply_units = supply.trim().parse().map_err(|e| {
                crate::Error::Config(format!("Invalid WALLET_TOTAL_SUPPLY {:?}: {}", supply, e))
            })?;
        }

        if let Ok(filter) = std::env::var("WALLET_LOG_FILTER") {
            config.logging.filter = filter;
        }

        if let Ok(json) = std::env::var("WALLET_LOG_JSON") {
            config.logging.json = matches!(json.trim(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> crate::Result<()> {
        if self.total_supply_units == 0 {
            return Err(crate::Error::Config(
                "total_supply_units must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.total_supply_units, 2_100_000_000_000_000);
        assert_eq!(config.pool.clock, ClockKind::System);
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "total_supply_units = 500").unwrap();
        writeln!(file, "[pool]").unwrap();
        writeln!(file, "clock = \"manual\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.total_supply_units, 500);
        assert_eq!(config.pool.clock, ClockKind::Manual);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_from_file_rejects_zero_supply() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "total_supply_units = 0").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/wallet.toml").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
