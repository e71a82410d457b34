//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use reqwest::Url;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.2performant.com";

/// A validated API base URL.
///
/// Accepts absolute `http`/`https` URLs with a host. A trailing slash is
/// trimmed so routes (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use tperformant_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.2performant.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.2performant.com");
/// assert_eq!(url.host(), "api.2performant.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    raw: String,
    parsed: Url,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value does not parse, is
    /// not `http`/`https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let parsed = Url::parse(&trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(invalid());
        }

        Ok(Self {
            raw: trimmed,
            parsed,
        })
    }

    /// Returns the host name (without port).
    #[must_use]
    pub fn host(&self) -> &str {
        self.parsed.host_str().unwrap_or_default()
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.parsed
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            raw: DEFAULT_BASE_URL.to_string(),
            parsed: Url::parse(DEFAULT_BASE_URL).expect("default base URL is a valid URL"),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
