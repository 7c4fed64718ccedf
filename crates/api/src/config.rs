//! Runtime configuration, read once from the environment at startup.
//!
//! | Variable            | Default        |
//! |---------------------|----------------|
//! | `CATALOG_BIND_ADDR` | `0.0.0.0:8080` |
//! | `CATALOG_SEED`      | `true`         |
//! | `LOG_FORMAT`        | `json`         |
//!
//! Log filtering itself is driven by `RUST_LOG`.

use std::net::{AddrParseError, Ipv4Addr, SocketAddr, SocketAddrV4};

use catalog_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const SEED_VAR: &str = "CATALOG_SEED";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CATALOG_BIND_ADDR='{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("{key}='{value}' is not a boolean (expected true/false/1/0)")]
    InvalidBool { key: &'static str, value: String },

    #[error(transparent)]
    LogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Load the seed categories/products at startup.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            seed: true,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the environment in
    /// production, a map in tests). Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr {
                    value: value.clone(),
                    source,
                })?,
            None => DEFAULT_BIND_ADDR,
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => parse_bool(SEED_VAR, &value)?,
            None => true,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed,
            log_format,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (SEED_VAR, "false"),
            (LOG_FORMAT_VAR, "pretty"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert!(!config.seed);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = config_from(&[(BIND_ADDR_VAR, "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    }

    #[test]
    fn rejects_bad_seed_flag() {
        let err = config_from(&[(SEED_VAR, "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { key: SEED_VAR, .. }));
    }

    #[test]
    fn rejects_bad_log_format() {
        let err = config_from(&[(LOG_FORMAT_VAR, "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::LogFormat(_)));
    }
}
