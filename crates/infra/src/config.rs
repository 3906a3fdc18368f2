//! Configuration loading and representation.
//!
//! Values come from environment variables; every key has a development
//! default so the service starts with no configuration at all.

use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const BIND_ADDR_KEY: &str = "JOBBOARD_BIND_ADDR";
pub const EXTERNAL_URL_KEY: &str = "EXTERNAL_JOBS_URL";
pub const EXTERNAL_TIMEOUT_KEY: &str = "EXTERNAL_JOBS_TIMEOUT_MS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_EXTERNAL_URL: &str = "http://localhost:8081/";
const DEFAULT_EXTERNAL_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key} ('{value}'): {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the external job source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSourceConfig {
    /// Base URL; always ends with `/` so relative endpoints keep its path.
    pub base_url: Url,
    /// Upper bound for a whole request; exceeding it counts as the source being unavailable.
    pub timeout: Duration,
}

impl ExternalSourceConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(EXTERNAL_URL_KEY, base_url)?,
            timeout,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub external: ExternalSourceConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(BIND_ADDR_KEY).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_ADDR_KEY, &bind_raw, e))?;

        let url_raw = lookup(EXTERNAL_URL_KEY).unwrap_or_else(|| DEFAULT_EXTERNAL_URL.to_string());
        let base_url = parse_base_url(EXTERNAL_URL_KEY, &url_raw)?;

        let timeout_ms = match lookup(EXTERNAL_TIMEOUT_KEY) {
            Some(raw) => {
                let ms = raw
                    .parse::<u64>()
                    .map_err(|e| invalid(EXTERNAL_TIMEOUT_KEY, &raw, e))?;
                if ms == 0 {
                    return Err(invalid(EXTERNAL_TIMEOUT_KEY, &raw, "must be greater than zero"));
                }
                ms
            }
            None => DEFAULT_EXTERNAL_TIMEOUT_MS,
        };

        Ok(Self {
            bind_addr,
            external: ExternalSourceConfig {
                base_url,
                timeout: Duration::from_millis(timeout_ms),
            },
        })
    }
}

fn parse_base_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| invalid(key, raw, e))?;
    if url.cannot_be_a_base() {
        return Err(invalid(key, raw, "not a base URL"));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
