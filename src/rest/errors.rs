//! The error taxonomy of the request pipeline.
//!
//! Every failure surfaces as an [`ApiError`] variant; nothing is retried by
//! the library. Callers decide what to do by matching on the variant:
//!
//! - [`ApiError::Connection`] / [`ApiError::Transfer`]: the request never got
//!   a response. Safe to retry ([`ApiError::is_retryable`]).
//! - [`ApiError::Server`]: the API failed (5xx). Terminal.
//! - [`ApiError::Client`]: the API rejected the request (4xx), with the
//!   field-level validation messages from the body.
//! - [`ApiError::Protocol`]: the response could not be understood.
//! - [`ApiError::UnknownEntity`]: no entity type is registered for the key.
//! - [`ApiError::InvalidField`]: a filter/sort used an unknown field; raised
//!   before anything is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! match api.affiliate_programs(&auth, None, None).await {
//!     Ok(programs) => println!("{} programs", programs.len()),
//!     Err(ApiError::Client { errors, .. }) => {
//!         for (field, messages) in errors {
//!             println!("{field}: {messages:?}");
//!         }
//!     }
//!     Err(e) if e.is_retryable() => println!("try again later: {e}"),
//!     Err(e) => println!("giving up: {e}"),
//! }
//! ```

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::clients::{HttpResponse, TransportError};
use crate::error::ConfigError;
use crate::filters::FilterError;

/// Errors returned by API calls.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The API could not be reached.
    #[error("Connection error {message} on {url}")]
    Connection {
        /// Description of the failure.
        message: String,
        /// The request URL.
        url: String,
    },

    /// The transfer failed after the connection was made.
    #[error("Transfer error {message} on {url}")]
    Transfer {
        /// Description of the failure.
        message: String,
        /// The request URL.
        url: String,
    },

    /// The API answered with a 5xx status.
    #[error("API server error ({code} {reason}) on {url}")]
    Server {
        /// The HTTP status code.
        code: u16,
        /// The status reason phrase.
        reason: String,
        /// The request URL.
        url: String,
    },

    /// The API rejected the request with a 4xx status.
    #[error("API client error ({code}) on {url}: {errors:?}")]
    Client {
        /// The HTTP status code.
        code: u16,
        /// Validation messages by field; messages not tied to a field are
        /// filed under `base`.
        errors: HashMap<String, Vec<String>>,
        /// The request URL.
        url: String,
    },

    /// The response did not match the API contract.
    #[error("Malformed API response from {url}: {reason}")]
    Protocol {
        /// What was wrong with the response.
        reason: String,
        /// The request URL.
        url: String,
    },

    /// No entity type could be resolved for a response key.
    #[error("No entity type is registered for '{key}'")]
    UnknownEntity {
        /// The expected key (or discriminator) that failed to resolve.
        key: String,
    },

    /// A typed call received a different entity type or cardinality than it
    /// asked for.
    #[error("Expected {expected} but the response contained {found}")]
    UnexpectedEntity {
        /// What the call expected.
        expected: String,
        /// What was found.
        found: String,
    },

    /// A filter or sort used a field outside its whitelist.
    #[error(transparent)]
    InvalidField(#[from] FilterError),

    /// The client or credentials were misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Builds the error for a transport failure.
    #[must_use]
    pub fn from_transport(error: TransportError) -> Self {
        match error {
            TransportError::Network { message, url } => Self::Connection { message, url },
            TransportError::Transfer { message, url } => Self::Transfer { message, url },
        }
    }

    /// Builds the error for a 5xx response.
    #[must_use]
    pub fn server(response: &HttpResponse, url: &str) -> Self {
        Self::Server {
            code: response.code,
            reason: response.reason_phrase().to_string(),
            url: url.to_string(),
        }
    }

    /// Builds the error for a 4xx response from its decoded body.
    #[must_use]
    pub fn client(code: u16, body: &Value, url: &str) -> Self {
        Self::Client {
            code,
            errors: parse_validation_errors(body),
            url: url.to_string(),
        }
    }

    /// Returns `true` for failures where the request never got a response.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Transfer { .. })
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { code, .. } | Self::Client { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the request URL, if the error is tied to a request.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Connection { url, .. }
            | Self::Transfer { url, .. }
            | Self::Server { url, .. }
            | Self::Client { url, .. }
            | Self::Protocol { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::from_transport(error)
    }
}

/// Parses validation errors from a 4xx body.
///
/// Accepted shapes:
/// ```json
/// {"errors": {"amount": ["must be greater than 0"]}}
/// {"errors": ["Invalid login credentials. Please try again."]}
/// {"errors": "Not authorized"}
/// {"error": "You need to sign in or sign up before continuing."}
/// ```
/// Messages not tied to a field are filed under `base`.
fn parse_validation_errors(body: &Value) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();

    if let Some(errors) = body.get("errors") {
        match errors {
            // Object format: {"field": ["error1", "error2"]}
            Value::Object(map) => {
                for (field, messages) in map {
                    let msgs: Vec<String> = match messages {
                        Value::Array(arr) => arr.iter().map(message_text).collect(),
                        Value::String(s) => vec![s.clone()],
                        _ => vec![messages.to_string()],
                    };
                    result.insert(field.clone(), msgs);
                }
            }
            // Array format: ["error1", "error2"]
            Value::Array(arr) => {
                let msgs: Vec<String> = arr.iter().map(message_text).collect();
                if !msgs.is_empty() {
                    result.insert("base".to_string(), msgs);
                }
            }
            Value::String(s) => {
                result.insert("base".to_string(), vec![s.clone()]);
            }
            _ => {}
        }
    }

    if let Some(Value::String(error)) = body.get("error") {
        result.entry("base".to_string()).or_default().push(error.clone());
    }

    result
}

fn message_text(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), ToString::to_string)
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
