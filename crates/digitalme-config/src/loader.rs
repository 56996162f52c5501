//! Configuration loader (defaults + file + env merge).

use std::net::AddrParseError;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::DigitalMeConfig;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "DIGITALME_";

/// Keys (after the prefix) read from the environment. Other `DIGITALME_*`
/// variables are ignored rather than tripping `deny_unknown_fields`.
pub const ENV_KEYS: [&str; 4] = [
    "server_host",
    "server_port",
    "logging_level",
    "logging_format",
];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// `server.host` is not an IP address.
    #[error("invalid server.host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: AddrParseError,
    },
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`DIGITALME_` prefix, `_` separates sections,
///    e.g. `DIGITALME_SERVER_PORT=8080`); only [`ENV_KEYS`] are read
pub fn load_config(config_path: Option<&str>) -> Result<DigitalMeConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(DigitalMeConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS).split("_"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
