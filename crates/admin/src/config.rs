//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CATALOG_HOST` - Bind address (default: 127.0.0.1)
//! - `CATALOG_PORT` - Listen port (default: 3002)
//! - `CATALOG_BASE_URL` - Public origin used in special login links
//!   (default: `http://localhost:3002`)
//! - `CATALOG_SEED_FILE` - YAML seed to load instead of the built-in one
//! - `CATALOG_LOG_JSON` - Emit JSON logs when set to anything but `0`/`false`
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate, 0.0 to 1.0 (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3002";
const DEFAULT_BASE_URL: &str = "http://localhost:3002";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public origin, without a trailing slash
    pub base_url: String,
    /// Seed file replacing the built-in seed
    pub seed_file: Option<PathBuf>,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<SecretString>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("base_url", &self.base_url)
            .field("seed_file", &self.seed_file)
            .field("log_json", &self.log_json)
            .field(
                "sentry_dsn",
                &self.sentry_dsn.as_ref().map(|_| "[REDACTED]"),
            )
            .field("sentry_environment", &self.sentry_environment)
            .field("sentry_sample_rate", &self.sentry_sample_rate)
            .field("sentry_traces_sample_rate", &self.sentry_traces_sample_rate)
            .finish()
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get_or_default =
            |key: &str, default: &str| get_optional(key).unwrap_or_else(|| default.to_string());

        let host = get_or_default("CATALOG_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| invalid("CATALOG_HOST", e))?;
        let port = get_or_default("CATALOG_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| invalid("CATALOG_PORT", e))?;
        let base_url = parse_base_url(&get_or_default("CATALOG_BASE_URL", DEFAULT_BASE_URL))?;
        let seed_file = get_optional("CATALOG_SEED_FILE").map(PathBuf::from);
        let log_json = get_optional("CATALOG_LOG_JSON")
            .is_some_and(|v| !matches!(v.trim(), "0" | "false" | "no"));

        let sentry_dsn = get_optional("SENTRY_DSN").map(SecretString::from);
        let sentry_environment = get_optional("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = parse_rate(get_optional("SENTRY_SAMPLE_RATE"), 1.0);
        let sentry_traces_sample_rate = parse_rate(get_optional("SENTRY_TRACES_SAMPLE_RATE"), 0.1);

        Ok(Self {
            host,
            port,
            base_url,
            seed_file,
            log_json,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the panel is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

/// Validate the base URL and strip any trailing slash.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| invalid("CATALOG_BASE_URL", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("CATALOG_BASE_URL", "must be an http or https URL"));
    }
    if url.host_str().is_none() {
        return Err(invalid("CATALOG_BASE_URL", "must have a host"));
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

/// Parse a sample rate, clamped to 0.0..=1.0.
fn parse_rate(raw: Option<String>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|r| r.is_finite())
        .map_or(default, |r| r.clamp(0.0, 1.0))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3002");
        assert_eq!(config.base_url, "http://localhost:3002");
        assert!(config.seed_file.is_none());
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
        assert!(!config.is_secure());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("CATALOG_HOST", "0.0.0.0"),
            ("CATALOG_PORT", "8080"),
            ("CATALOG_BASE_URL", "https://catalog.example.com/"),
            ("CATALOG_SEED_FILE", "/etc/catalog/seed.yaml"),
            ("CATALOG_LOG_JSON", "1"),
            ("SENTRY_DSN", "https://key@sentry.example.com/1"),
            ("SENTRY_SAMPLE_RATE", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_url, "https://catalog.example.com");
        assert!(config.is_secure());
        assert!(config.log_json);
        assert_eq!(
            config.seed_file.as_deref(),
            Some(std::path::Path::new("/etc/catalog/seed.yaml"))
        );
        assert_eq!(
            config.sentry_dsn.as_ref().unwrap().expose_secret(),
            "https://key@sentry.example.com/1"
        );
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("CATALOG_PORT", "http")]),
            Err(ConfigError::InvalidEnvVar(key, _)) if key == "CATALOG_PORT"
        ));
        assert!(config(&[("CATALOG_HOST", "localhost")]).is_err());
        assert!(config(&[("CATALOG_BASE_URL", "ftp://files.example.com")]).is_err());
        assert!(config(&[("CATALOG_BASE_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_log_json_false_values() {
        assert!(!config(&[("CATALOG_LOG_JSON", "false")]).unwrap().log_json);
        assert!(!config(&[("CATALOG_LOG_JSON", "0")]).unwrap().log_json);
    }

    #[test]
    fn test_debug_redacts_dsn() {
        let config = config(&[("SENTRY_DSN", "https://secretkey@sentry.example.com/1")]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secretkey"));
        assert!(debug.contains("[REDACTED]"));
    }
}
