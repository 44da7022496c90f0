//! Process configuration read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use catalog_observability::LogFormat;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const SEED_DEMO_VAR: &str = "CATALOG_SEED_DEMO";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address (got {value:?})")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a boolean (got {value:?})")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var} must be `json` or `pretty` (got {value:?})")]
    InvalidLogFormat { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Insert the demo products into the store at startup.
    pub seed_demo: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], 8080).into(),
            seed_demo: false,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            None => false,
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidBool {
                var: SEED_DEMO_VAR,
                value: v.clone(),
            })?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(v) => LogFormat::parse(&v).ok_or(ConfigError::InvalidLogFormat {
                var: LOG_FORMAT_VAR,
                value: v.clone(),
            })?,
        };

        Ok(Self {
            bind_addr,
            seed_demo,
            log_format,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
