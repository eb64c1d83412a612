// src/config.rs
use std::num::ParseIntError;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "dropship_assistant=debug,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl Config {
    /// Reads `HOST`, `PORT` and `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            host,
            port,
            log_filter,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
