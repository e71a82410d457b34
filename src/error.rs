//! Configuration error types for the 2Performant API client.
//!
//! Validated constructors ([`BaseUrl::new`](crate::BaseUrl::new),
//! [`AuthCredentials::new`](crate::AuthCredentials::new), the config builder)
//! return `Result<T, ConfigError>` so bad input is rejected before any request
//! is built.
//!
//! # Example
//!
//! ```rust
//! use tperformant_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client or its credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute `http`/`https` URL with a host.
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL such as 'https://api.2performant.com'.")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
    },

    /// One of the three authentication tokens is empty.
    #[error("Authentication token '{field}' cannot be empty.")]
    EmptyCredential {
        /// Which token was empty (`access-token`, `client` or `uid`).
        field: &'static str,
    },

    /// A follow-up call was made from an entity that carries no credentials.
    #[error("The {entity} was not loaded with credentials; fetch it through an authenticated call first.")]
    MissingCredentials {
        /// The entity the call was made from.
        entity: &'static str,
    },

    /// A follow-up call needs a field the entity was loaded without.
    #[error("The {entity} has no '{field}'; it cannot be used for this call.")]
    MissingField {
        /// The entity the call was made from.
        entity: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A header name or value supplied in the configuration is unusable.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to initialise the HTTP transport: {reason}")]
    TransportInit {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_message_mentions_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nowhere"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_empty_credential_message_names_field() {
        let error = ConfigError::EmptyCredential { field: "uid" };
        assert_eq!(error.to_string(), "Authentication token 'uid' cannot be empty.");
    }

    #[test]
    fn test_missing_field_message_names_entity_and_field() {
        let error = ConfigError::MissingField {
            entity: "product feed",
            field: "id",
        };
        assert_eq!(
            error.to_string(),
            "The product feed has no 'id'; it cannot be used for this call."
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCredential { field: "client" };
        let _: &dyn std::error::Error = &error;
    }
}
