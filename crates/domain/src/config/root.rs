use serde::{Deserialize, Serialize};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;
use super::zone::RecordEntry;
use crate::dns_record::Record;
use crate::DomainError;

const DEFAULT_CONFIG_PATH: &str = "ferrous-mdns.toml";

/// Main configuration structure for Ferrous mDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Defaults applied to zone entries
    #[serde(default)]
    pub records: RecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Records published by this host
    #[serde(default)]
    pub zone: Vec<RecordEntry>,

    /// File the configuration was read from, `None` when running on defaults.
    /// Loading happens before logging is installed, so callers report it.
    #[serde(skip)]
    pub source: Option<String>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = path.or_else(|| {
            std::path::Path::new(DEFAULT_CONFIG_PATH)
                .exists()
                .then_some(DEFAULT_CONFIG_PATH)
        });

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        let mut config = Self::from_toml(&contents)?;
        config.source = Some(path.to_string());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(ttl) = overrides.default_ttl {
            self.records.default_ttl = ttl;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        for entry in &self.zone {
            let record_type = entry
                .parsed_type()
                .map_err(|e| ConfigError::Validation(e.to_string()))?;
            if record_type.is_any() {
                return Err(ConfigError::Validation(format!(
                    "Zone entry '{}' uses type ANY, which is only valid in queries",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// Builds a record for every zone entry, stopping at the first invalid one.
    pub fn records(&self) -> Result<Vec<Record>, DomainError> {
        self.zone
            .iter()
            .map(|entry| entry.to_record(&self.records))
            .collect()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub default_ttl: Option<u32>,
}
