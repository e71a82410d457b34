//! Quicklink generation.
//!
//! A quicklink is a click-tracking URL on the event host that redirects to a
//! destination on the advertiser's site. Building one is a pure string
//! transform; no request is sent.

use super::TPerformantApi;
use crate::clients::HttpTransport;
use crate::error::ConfigError;
use crate::models::{Affiliate, Program};

/// Anything that identifies an affiliate or a program in tracking links.
///
/// Implemented for raw codes (`&str`, `String`) and for the entities that
/// carry one.
pub trait UniqueCode {
    /// Returns the code.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] for an entity loaded without its
    /// `unique_code`.
    fn unique_code(&self) -> Result<&str, ConfigError>;
}

impl UniqueCode for str {
    fn unique_code(&self) -> Result<&str, ConfigError> {
        Ok(self)
    }
}

impl UniqueCode for String {
    fn unique_code(&self) -> Result<&str, ConfigError> {
        Ok(self)
    }
}

impl UniqueCode for Affiliate {
    fn unique_code(&self) -> Result<&str, ConfigError> {
        self.unique_code.as_deref().ok_or(ConfigError::MissingField {
            entity: "affiliate",
            field: "unique_code",
        })
    }
}

impl UniqueCode for Program {
    fn unique_code(&self) -> Result<&str, ConfigError> {
        self.unique_code.as_deref().ok_or(ConfigError::MissingField {
            entity: "program",
            field: "unique_code",
        })
    }
}

impl<T: UniqueCode + ?Sized> UniqueCode for &T {
    fn unique_code(&self) -> Result<&str, ConfigError> {
        (**self).unique_code()
    }
}

impl<T: HttpTransport> TPerformantApi<T> {
    /// Builds a quicklink for `affiliate` in `program` redirecting to `url`.
    ///
    /// The event host is the API host with its `api` label replaced by
    /// `event` (`api.2performant.com` becomes `event.2performant.com`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if an entity has no unique code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tperformant_api::{ApiConfig, TPerformantApi};
    ///
    /// let api = TPerformantApi::new(&ApiConfig::default()).unwrap();
    /// let link = api.quicklink("https://shop.example/x?y=1", "AFF1", "PROG1").unwrap();
    /// assert_eq!(
    ///     link,
    ///     "https://event.2performant.com/events/click?ad_type=quicklink&aff_code=AFF1&unique=PROG1&redirect_to=https%3A%2F%2Fshop.example%2Fx%3Fy%3D1"
    /// );
    /// ```
    pub fn quicklink(
        &self,
        url: &str,
        affiliate: impl UniqueCode,
        program: impl UniqueCode,
    ) -> Result<String, ConfigError> {
        Ok(format!(
            "{}/events/click?ad_type=quicklink&aff_code={}&unique={}&redirect_to={}",
            event_host(self.base_url().url()),
            urlencoding::encode(affiliate.unique_code()?),
            urlencoding::encode(program.unique_code()?),
            urlencoding::encode(url),
        ))
    }
}

/// Rewrites the API base URL to the event host.
///
/// Replaces the last `api` label in front of the registrable domain. Hosts
/// without one are returned unchanged.
fn event_host(base: &reqwest::Url) -> String {
    let mut url = base.clone();
    if let Some(host) = base.host_str() {
        let mut labels: Vec<&str> = host.split('.').collect();
        let subdomains = labels.len().saturating_sub(2);
        if let Some(index) = labels[..subdomains].iter().rposition(|label| *label == "api") {
            labels[index] = "event";
            let rewritten = labels.join(".");
            if url.set_host(Some(&rewritten)).is_err() {
                url = base.clone();
            }
        }
    }
    url.as_str().trim_end_matches('/').to_string()
}
