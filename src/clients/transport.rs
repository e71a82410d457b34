//! The HTTP transport seam.
//!
//! [`HttpTransport`] is the only capability the request pipeline needs from an
//! HTTP library: send a request, get back status, headers and body. The
//! default implementation is [`ReqwestTransport`]; tests and embedders can
//! supply their own.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::error::ConfigError;

/// Sends a single request and returns the response.
///
/// Implementations must return 4xx and 5xx responses as `Ok`; only failures
/// where no response is available are errors.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if no response was received and
    /// [`TransportError::Transfer`] if the exchange could not be completed.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`HttpTransport`] backed by `reqwest` with rustls.
///
/// Connection pooling and the request timeout are handled by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the TLS backend cannot be
    /// initialised.
    pub fn new(timeout: Duration) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::TransportInit {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, &request.url))?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::from_reqwest(&e, &request.url))?;

        Ok(HttpResponse::new(code, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_with_timeout() {
        assert!(ReqwestTransport::new(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let transport = ReqwestTransport::new(Duration::from_secs(2)).unwrap();
        // Port 9 (discard) on localhost is closed in test environments.
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:9/users/validate_token.json".to_string(),
            headers: HashMap::new(),
            body: None,
        };

        let result = transport.send(&request).await;
        assert!(matches!(result, Err(TransportError::Network { .. })));
    }
}
