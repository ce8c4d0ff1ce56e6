// src/config.rs

use crate::services::errors::TlsError;
use crate::services::tls_parser::MAXIMUM_FILE_SIZE;
use std::env;

pub const MAX_FILE_SIZE_VAR: &str = "TLS_INSPECT_MAX_FILE_SIZE";
pub const LOG_FILTER_VAR: &str = "TLS_INSPECT_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest input file the loader will read, in bytes.
    pub max_file_size: u64,
    /// `tracing` filter directive, e.g. `debug` or `tls_handshake_inspector=trace`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_file_size: MAXIMUM_FILE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, TlsError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, TlsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(MAX_FILE_SIZE_VAR) {
            config = config.with_max_file_size(parse_size(&raw)?)?;
        }

        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            let filter = filter.trim();
            if !filter.is_empty() {
                config.log_filter = filter.to_string();
            }
        }

        Ok(config)
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Result<Self, TlsError> {
        if max_file_size == 0 {
            return Err(TlsError::Config(format!(
                "{MAX_FILE_SIZE_VAR} must be greater than zero"
            )));
        }
        self.max_file_size = max_file_size;
        Ok(self)
    }
}

fn parse_size(raw: &str) -> Result<u64, TlsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| TlsError::Config(format!("{MAX_FILE_SIZE_VAR}={raw:?}: {e}")))
}
