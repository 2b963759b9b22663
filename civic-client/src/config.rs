//! Client configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `CIVIC_API_URL` | `http://localhost:8000/api` | masters backend base URL |
//! | `CIVIC_API_TOKEN` | unset | bearer token |
//! | `CIVIC_TIMEOUT_SECS` | `30` | request timeout |
//! | `CIVIC_TELEMETRY_URL` | tracker endpoint | vehicle telemetry endpoint |
//! | `CIVIC_TELEMETRY_PROVIDER` | `BLUEPLANET` | `providerName` query value |
//! | `CIVIC_TELEMETRY_FCODE` | `VAM` | `fcode` query value |

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TELEMETRY_URL: &str =
    "https://api.vamosys.com/mobile/getGrpDataForTrustedClients";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Vehicle tracker endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub url: String,
    pub provider: String,
    pub fcode: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TELEMETRY_URL.to_string(),
            provider: "BLUEPLANET".to_string(),
            fcode: "VAM".to_string(),
        }
    }
}

/// Client configuration for the masters backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    pub telemetry: TelemetryConfig,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            telemetry: TelemetryConfig::default(),
        }
    }

    /// Load from `CIVIC_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = TelemetryConfig::default();
        Self {
            base_url: lookup("CIVIC_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into()),
            token: lookup("CIVIC_API_TOKEN").filter(|t| !t.trim().is_empty()),
            timeout: lookup("CIVIC_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            telemetry: TelemetryConfig {
                url: lookup("CIVIC_TELEMETRY_URL").unwrap_or(defaults.url),
                provider: lookup("CIVIC_TELEMETRY_PROVIDER").unwrap_or(defaults.provider),
                fcode: lookup("CIVIC_TELEMETRY_FCODE").unwrap_or(defaults.fcode),
            },
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Reject settings no request could succeed with
    pub fn validate(&self) -> ClientResult<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.timeout == 0 {
            return Err(ClientError::Config("timeout must be at least 1 second".into()));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
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
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.timeout, 30);
        assert_eq!(config.telemetry, TelemetryConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CIVIC_API_URL", "https://masters.example.org/api"),
            ("CIVIC_API_TOKEN", "abc"),
            ("CIVIC_TIMEOUT_SECS", "5"),
            ("CIVIC_TELEMETRY_FCODE", "XYZ"),
        ]));
        assert_eq!(config.base_url, "https://masters.example.org/api");
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, 5);
        assert_eq!(config.telemetry.fcode, "XYZ");
        assert_eq!(config.telemetry.provider, "BLUEPLANET");
    }

    #[test]
    fn test_unparsable_timeout_and_blank_token_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CIVIC_TIMEOUT_SECS", "soon"),
            ("CIVIC_API_TOKEN", "  "),
        ]));
        assert_eq!(config.timeout, 30);
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClientConfig::new("localhost:8000").validate().is_err());
        assert!(ClientConfig::default().with_timeout(0).validate().is_err());
    }
}
