//! Request pipeline configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use unilink_core::{Error, Result};
use url::Url;

use crate::RetryConfig;

/// Default backend endpoint used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct ApiConfig {
    /// Base endpoint every request path is joined onto
    #[cfg_attr(
        feature = "config",
        arg(long = "api-url", env = "REACT_APP_API_URL", default_value = DEFAULT_API_URL)
    )]
    #[serde(default = "default_api_url")]
    pub api_url: Url,

    /// HTTP request timeout in seconds
    #[cfg_attr(
        feature = "config",
        arg(long = "http-timeout", env = "HTTP_TIMEOUT", default_value = "30")
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,

    /// User-Agent header to send with requests
    #[cfg_attr(
        feature = "config",
        arg(long = "http-user-agent", env = "HTTP_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Retry attempts for idempotent GET requests (0 disables retries)
    #[cfg_attr(
        feature = "config",
        arg(long = "http-get-retries", env = "HTTP_GET_RETRIES", default_value = "0")
    )]
    #[serde(default)]
    pub get_retries: u32,
}

fn default_api_url() -> Url {
    Url::parse(DEFAULT_API_URL).expect("default API URL is valid")
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            http_timeout: default_timeout_secs(),
            user_agent: None,
            get_retries: 0,
        }
    }
}

impl ApiConfig {
    /// Create a new configuration for the given base endpoint.
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            ..Self::default()
        }
    }

    /// Parse a base endpoint and create a configuration for it.
    pub fn from_url(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url).map_err(|e| {
            Error::configuration()
                .with_message(format!("invalid API URL `{api_url}`"))
                .with_source(e)
        })?;
        Ok(Self::new(api_url))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        match self.api_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::configuration()
                    .with_message(format!("unsupported API URL scheme `{scheme}`")));
            }
        }

        if self.api_url.cannot_be_a_base() {
            return Err(Error::configuration().with_message("API URL cannot be a base URL"));
        }

        Ok(())
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }

    /// Returns the effective user agent, using default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("unilink/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Returns the retry policy applied to GET requests.
    pub fn retry_config(&self) -> RetryConfig {
        if self.get_retries == 0 {
            RetryConfig::no_retry()
        } else {
            RetryConfig::new(self.get_retries, Duration::from_millis(100))
        }
    }

    /// Set the base endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http_timeout = timeout_secs;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the number of GET retries.
    #[must_use]
    pub fn with_get_retries(mut self, retries: u32) -> Self {
        self.get_retries = retries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url.as_str(), "http://localhost:5000/api");
        assert_eq!(config.http_timeout, 30);
        assert!(config.user_agent.is_none());
        assert_eq!(config.get_retries, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ApiConfig::default()
            .with_timeout(120)
            .with_user_agent("custom-agent/1.0")
            .with_get_retries(2);

        assert_eq!(config.http_timeout, 120);
        assert_eq!(config.user_agent.as_deref(), Some("custom-agent/1.0"));
        assert_eq!(config.retry_config().max_attempts, 2);
    }

    #[test]
    fn test_effective_timeout_uses_default_when_zero() {
        let config = ApiConfig::default().with_timeout(0);
        assert_eq!(
            config.effective_timeout(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_effective_user_agent_uses_default_when_none() {
        let config = ApiConfig::default();
        assert!(config.effective_user_agent().starts_with("unilink/"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = ApiConfig::from_url("ftp://example.com/api").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_url_rejects_garbage() {
        assert!(ApiConfig::from_url("not a url").is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
