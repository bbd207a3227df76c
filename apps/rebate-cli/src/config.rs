//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Command-line flags override what is loaded here.

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Default log filter: quiet dependencies, verbose rebate crates.
pub const DEFAULT_LOG_FILTER: &str = "info,rebate=debug";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directives (`REBATE_LOG_LEVEL`).
    /// `RUST_LOG` still wins when set.
    pub log_filter: String,

    /// Catalog used when `--catalog` is not given (`REBATE_CATALOG_PATH`).
    /// `None` means the bundled sample catalog.
    pub catalog_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = var("REBATE_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if EnvFilter::try_new(&log_filter).is_err() {
            return Err(ConfigError::InvalidValue("REBATE_LOG_LEVEL".to_string()));
        }

        let catalog_path = match var("REBATE_CATALOG_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue("REBATE_CATALOG_PATH".to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        Ok(CliConfig {
            log_filter,
            catalog_path,
        })
    }

    /// Applies a `--catalog` flag on top of the environment.
    pub fn with_catalog(mut self, catalog: Option<PathBuf>) -> Self {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        self
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            catalog_path: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::load_from(vars(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_reads_environment() {
        let config = CliConfig::load_from(vars(&[
            ("REBATE_LOG_LEVEL", "warn"),
            ("REBATE_CATALOG_PATH", "/srv/rebates/catalog.json"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "warn");
        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/rebates/catalog.json"))
        );
    }

    #[test]
    fn test_rejects_blank_catalog_path() {
        let result = CliConfig::load_from(vars(&[("REBATE_CATALOG_PATH", "  ")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(ref key)) if key == "REBATE_CATALOG_PATH"));
    }

    #[test]
    fn test_rejects_bad_log_filter() {
        let result = CliConfig::load_from(vars(&[("REBATE_LOG_LEVEL", "rebate=loud")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_flag_overrides_environment() {
        let config = CliConfig::load_from(vars(&[("REBATE_CATALOG_PATH", "env.json")]))
            .unwrap()
            .with_catalog(Some(PathBuf::from("flag.json")));
        assert_eq!(config.catalog_path, Some(PathBuf::from("flag.json")));

        let config = CliConfig::load_from(vars(&[("REBATE_CATALOG_PATH", "env.json")]))
            .unwrap()
            .with_catalog(None);
        assert_eq!(config.catalog_path, Some(PathBuf::from("env.json")));
    }
}
