//! Application configuration, created with opinionated default values, which can then be
//! overwritten by environment variables prefixed with `BEANWIRE_` or the `beanwire.json` file.
//! Neither source is required to run the application.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_ENV_PREFIX: &str = "BEANWIRE";

/// Name of the default config file.
pub const CONFIG_FILE: &str = "beanwire.json";

/// Application configuration used by the entry point.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct ApplicationConfig {
    /// Should a default tracing logger be installed in the scope of the application.
    pub install_tracing_logger: bool,
    /// Log filter directives used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            install_tracing_logger: true,
            log_filter: "info".to_string(),
        }
    }
}

impl From<OptionalApplicationConfig> for ApplicationConfig {
    fn from(value: OptionalApplicationConfig) -> Self {
        let default = Self::default();
        Self {
            install_tracing_logger: value
                .install_tracing_logger
                .unwrap_or(default.install_tracing_logger),
            log_filter: value.log_filter.unwrap_or(default.log_filter),
        }
    }
}

impl ApplicationConfig {
    /// Reads configuration from the default config file and environment.
    pub fn init_from_environment() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX))
            .build()
            .and_then(|config| config.try_deserialize::<OptionalApplicationConfig>())
            .map(|config| config.into())
    }
}

#[derive(Deserialize)]
struct OptionalApplicationConfig {
    install_tracing_logger: Option<bool>,
    log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::config::{ApplicationConfig, OptionalApplicationConfig};

    #[test]
    fn should_apply_defaults_for_missing_values() {
        let config: ApplicationConfig = OptionalApplicationConfig {
            install_tracing_logger: None,
            log_filter: None,
        }
        .into();

        assert!(config.install_tracing_logger);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn should_override_defaults() {
        let config: ApplicationConfig = OptionalApplicationConfig {
            install_tracing_logger: Some(false),
            log_filter: Some("beanwire=debug".to_string()),
        }
        .into();

        assert!(!config.install_tracing_logger);
        assert_eq!(config.log_filter, "beanwire=debug");
    }
}
