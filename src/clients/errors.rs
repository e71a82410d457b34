//! Transport-level error types.
//!
//! The transport reports only failures where no usable HTTP response was
//! obtained. Every response that arrives, including 4xx and 5xx ones, is
//! returned as an ordinary [`HttpResponse`](crate::clients::HttpResponse) and
//! classified later by the response mapper.

use thiserror::Error;

/// Errors raised by an [`HttpTransport`](crate::clients::HttpTransport).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response was received (DNS, connect or timeout failure).
    #[error("Connection error {message} on {url}")]
    Network {
        /// Description of the failure.
        message: String,
        /// The URL that was being requested.
        url: String,
    },

    /// The exchange started but could not be completed.
    #[error("Transfer error {message} on {url}")]
    Transfer {
        /// Description of the failure.
        message: String,
        /// The URL that was being requested.
        url: String,
    },
}

impl TransportError {
    /// Classifies a `reqwest` error.
    ///
    /// Connect and timeout failures are network errors; everything else
    /// (malformed request, interrupted body, redirect loop) is a transfer error.
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error, url: &str) -> Self {
        let url = error
            .url()
            .map_or_else(|| url.to_string(), ToString::to_string);
        let message = error.to_string();

        if error.is_connect() || error.is_timeout() {
            Self::Network { message, url }
        } else {
            Self::Transfer { message, url }
        }
    }

    /// Returns the URL that was being requested.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Transfer { url, .. } => url,
        }
    }
}
