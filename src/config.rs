//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Provider credentials are not part of it: callers send them with every request.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="[::]:8000"
//! export LOG_FORMAT="json"
//! export UPSTREAM_TIMEOUT_SECS="10"
//! export UPSTREAM_MAX_RETRIES="5"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `[::]:8000`, dual-stack where the OS allows)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PORKBUN_API_URL` - Provider API root (default: `https://api.porkbun.com/api/json/v3`)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-call provider timeout (default: 10, range 1..=120)
//! - `UPSTREAM_MAX_RETRIES` - Extra attempts on connect errors and 5xx (default: 5, max: 10)
//! - `UPSTREAM_BACKOFF_MS` - First retry delay, doubled each retry (default: 1000)
//! - `RECORD_TTL` - TTL for created/edited records (default: 600, min: 600)
//! - `SHUTDOWN_GRACE_SECS` - Drain window for in-flight requests (default: 5)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::application::services::DEFAULT_RECORD_TTL;
use crate::infrastructure::porkbun::{DEFAULT_BASE_URL, RetryPolicy};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Root of the Porkbun JSON API; endpoint paths are appended to it.
    pub provider_base_url: String,

    // ── Outbound calls ──────────────────────────────────────────────────────
    /// Timeout applied to every single provider call (`UPSTREAM_TIMEOUT_SECS`).
    pub upstream_timeout_secs: u64,
    /// Retries after the first attempt (`UPSTREAM_MAX_RETRIES`).
    pub upstream_max_retries: usize,
    /// First backoff delay in milliseconds (`UPSTREAM_BACKOFF_MS`).
    pub upstream_backoff_ms: u64,

    pub record_ttl: u32,
    pub shutdown_grace_secs: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "[::]:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let provider_base_url =
            env::var("PORKBUN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            provider_base_url,
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", 10)?,
            upstream_max_retries: parse_var("UPSTREAM_MAX_RETRIES", 5)?,
            upstream_backoff_ms: parse_var("UPSTREAM_BACKOFF_MS", 1000)?,
            record_ttl: parse_var("RECORD_TTL", DEFAULT_RECORD_TTL)?,
            shutdown_grace_secs: parse_var("SHUTDOWN_GRACE_SECS", 5)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a socket address
    /// - `log_format` is not `text` or `json`
    /// - `provider_base_url` is not an `https://` URL
    /// - `upstream_timeout_secs` is outside 1..=120
    /// - `upstream_max_retries` is above 10
    /// - `record_ttl` is below the provider minimum of 600
    pub fn validate(&self) -> Result<()> {
        self.listen_addr.parse::<SocketAddr>().with_context(|| {
            format!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            )
        })?;

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let base_url = self.provider_url()?;
        if base_url.scheme() != "https" {
            anyhow::bail!(
                "PORKBUN_API_URL must start with 'https://', got '{}'",
                self.provider_base_url
            );
        }

        if !(1..=120).contains(&self.upstream_timeout_secs) {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 120, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.upstream_max_retries > 10 {
            anyhow::bail!(
                "UPSTREAM_MAX_RETRIES is too large (max: 10), got {}",
                self.upstream_max_retries
            );
        }

        if self.record_ttl < DEFAULT_RECORD_TTL {
            anyhow::bail!(
                "RECORD_TTL must be at least {}, got {}",
                DEFAULT_RECORD_TTL,
                self.record_ttl
            );
        }

        Ok(())
    }

    /// Parsed provider API root.
    pub fn provider_url(&self) -> Result<Url> {
        Url::parse(&self.provider_base_url).with_context(|| {
            format!(
                "PORKBUN_API_URL is not a valid URL: '{}'",
                self.provider_base_url
            )
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.upstream_max_retries,
            Duration::from_millis(self.upstream_backoff_ms),
        )
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Provider API: {}", self.provider_base_url);
        tracing::info!(
            "  Upstream: timeout {}s, {} retries, {}ms backoff",
            self.upstream_timeout_secs,
            self.upstream_max_retries,
            self.upstream_backoff_ms
        );
        tracing::info!("  Record TTL: {}", self.record_ttl);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads `name` and parses it, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config() -> Config {
        Config {
            listen_addr: "[::]:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            provider_base_url: DEFAULT_BASE_URL.to_string(),
            upstream_timeout_secs: 10,
            upstream_max_retries: 5,
            upstream_backoff_ms: 1000,
            record_ttl: 600,
            shutdown_grace_secs: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8000".to_string();
        assert!(config.validate().is_ok());

        config.provider_base_url = "http://api.porkbun.com/api/json/v3".to_string();
        assert!(config.validate().is_err());

        config.provider_base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_limits() {
        let mut config = config();

        config.upstream_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.upstream_timeout_secs = 10;

        config.upstream_max_retries = 11;
        assert!(config.validate().is_err());
        config.upstream_max_retries = 0;
        assert!(config.validate().is_ok());

        config.record_ttl = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_derived_settings() {
        let config = config();
        assert_eq!(config.upstream_timeout(), Duration::from_secs(10));
        assert_eq!(config.shutdown_grace(), Duration::from_secs(5));
        assert_eq!(
            config.retry_policy(),
            RetryPolicy::new(5, Duration::from_millis(1000))
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for name in [
                "LISTEN",
                "LOG_FORMAT",
                "PORKBUN_API_URL",
                "UPSTREAM_TIMEOUT_SECS",
                "UPSTREAM_MAX_RETRIES",
                "UPSTREAM_BACKOFF_MS",
                "RECORD_TTL",
                "SHUTDOWN_GRACE_SECS",
            ] {
                env::remove_var(name);
            }
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "[::]:8000");
        assert_eq!(config.provider_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.upstream_max_retries, 5);
        assert_eq!(config.record_ttl, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_and_bad_numbers() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("UPSTREAM_MAX_RETRIES", "2");
            env::set_var("RECORD_TTL", "3600");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.upstream_max_retries, 2);
        assert_eq!(config.record_ttl, 3600);

        unsafe {
            env::set_var("UPSTREAM_TIMEOUT_SECS", "ten");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("UPSTREAM_MAX_RETRIES");
            env::remove_var("RECORD_TTL");
            env::remove_var("UPSTREAM_TIMEOUT_SECS");
        }
    }
}
