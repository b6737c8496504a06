//! Process configuration, read from environment variables.

use std::net::SocketAddr;

use itemservice_observability::{LogFormat, ParseLogFormatError};
use thiserror::Error;

pub const ENV_BIND_ADDR: &str = "ITEMSERVICE_BIND_ADDR";
pub const ENV_LOG_FORMAT: &str = "ITEMSERVICE_LOG_FORMAT";
pub const ENV_SEED_ITEMS: &str = "ITEMSERVICE_SEED_ITEMS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("ITEMSERVICE_BIND_ADDR: invalid socket address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("ITEMSERVICE_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("{key}: expected a boolean, got '{value}'")]
    Bool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Insert the two demo items at startup.
    pub seed_items: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_format: LogFormat::Json,
            seed_items: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: bind_raw.clone(),
                source,
            })?;

        let log_format = match lookup(ENV_LOG_FORMAT) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let seed_items = match lookup(ENV_SEED_ITEMS) {
            Some(raw) => parse_bool(ENV_SEED_ITEMS, &raw)?,
            None => false,
        };

        Ok(Self {
            bind_addr,
            log_format,
            seed_items,
        })
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Bool {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let cfg = ApiConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_LOG_FORMAT, "pretty"),
            (ENV_SEED_ITEMS, "yes"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.log_format, LogFormat::Pretty);
        assert!(cfg.seed_items);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "nowhere")])),
            Err(ConfigError::BindAddr { .. })
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")])),
            Err(ConfigError::LogFormat(_))
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[(ENV_SEED_ITEMS, "maybe")])),
            Err(ConfigError::Bool { key: ENV_SEED_ITEMS, .. })
        ));
    }
}
