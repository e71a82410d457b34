//! Configuration types for the 2Performant API client.
//!
//! # Overview
//!
//! - [`ApiConfig`]: immutable settings fixed when a client is constructed
//! - [`ApiConfigBuilder`]: builder for [`ApiConfig`]
//! - [`BaseUrl`]: a validated API base URL
//!
//! Caller-supplied values are merged over built-in defaults, with the caller
//! winning on every collision.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use tperformant_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.2performant.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .header("X-Trace", "abc")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, DEFAULT_BASE_URL};

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::ConfigError;

/// Library version from Cargo.toml.
pub const WRAPPER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timeout applied when none (or zero) is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Route suffix appended to every endpoint.
pub const ROUTE_SUFFIX: &str = ".json";

/// Client configuration.
///
/// `ApiConfig` is `Clone`, `Send` and `Sync`. There is no process-wide
/// instance: every [`TPerformantApi`](crate::TPerformantApi) owns its own copy.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: BaseUrl,
    timeout: Duration,
    headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ApiConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the caller-supplied header overrides.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the user agent identifying this library.
    #[must_use]
    pub fn user_agent(&self) -> String {
        let prefix = self
            .user_agent_prefix
            .as_deref()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        format!("{prefix}TP-Rust-API:tperformant_api-v{WRAPPER_VERSION}")
    }

    /// Returns the headers sent with every request: the built-in defaults
    /// with the configured overrides applied on top.
    #[must_use]
    pub fn default_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.user_agent());
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        for (key, value) in &self.headers {
            // Header names are case-insensitive; drop a default spelled differently.
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
            headers.insert(key.clone(), value.clone());
        }
        headers
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            headers: HashMap::new(),
            user_agent_prefix: None,
        }
    }
}

// Verify ApiConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiConfig>();
};

/// Builder for [`ApiConfig`].
///
/// # Defaults
///
/// - `base_url`: `https://api.2performant.com`
/// - `timeout`: 5 seconds (also used when zero is given)
/// - `headers`: none beyond `User-Agent` and `Content-Type`
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
    user_agent_prefix: Option<String>,
}

impl ApiConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the request timeout. Zero means "use the default".
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header override.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds several header overrides at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if a header override has an
    /// invalid name or value.
    pub fn build(self) -> Result<ApiConfig, ConfigError> {
        for (name, value) in &self.headers {
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        }

        let timeout = self
            .timeout
            .filter(|timeout| !timeout.is_zero())
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(ApiConfig {
            base_url: self.base_url.unwrap_or_default(),
            timeout,
            headers: self.headers,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_defaults() {
        let config = ApiConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.headers().is_empty());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = ApiConfig::builder()
            .timeout(Duration::ZERO)
            .build()
            .unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_headers_contain_user_agent_and_content_type() {
        let config = ApiConfig::default();
        let headers = config.default_headers();

        assert!(headers["User-Agent"].starts_with("TP-Rust-API:tperformant_api-v"));
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_caller_headers_win_over_defaults() {
        let config = ApiConfig::builder()
            .header("content-type", "application/vnd.api+json")
            .header("X-Extra", "1")
            .build()
            .unwrap();
        let headers = config.default_headers();

        assert!(!headers.contains_key("Content-Type"));
        assert_eq!(headers["content-type"], "application/vnd.api+json");
        assert_eq!(headers["X-Extra"], "1");
        assert!(headers.contains_key("User-Agent"));
    }

    #[test]
    fn test_user_agent_prefix() {
        let config = ApiConfig::builder()
            .user_agent_prefix("MyShop/2.0")
            .build()
            .unwrap();
        assert!(config.user_agent().starts_with("MyShop/2.0 | TP-Rust-API"));
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let result = ApiConfig::builder().header("bad header", "x").build();
        assert!(matches!(result, Err(ConfigError::InvalidHeader { name, .. }) if name == "bad header"));
    }
}
