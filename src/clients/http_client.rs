//! Request building and dispatch.
//!
//! [`HttpClient`] turns a route, a parameter object and optional credentials
//! into an [`HttpRequest`] and hands it to the transport. It holds only state
//! fixed at construction: the base URL and the default headers.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::auth::AuthCredentials;
use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::query::build_query;
use crate::clients::transport::HttpTransport;
use crate::config::{ApiConfig, BaseUrl, ROUTE_SUFFIX};

/// Builds requests against the configured base URL and sends them.
///
/// # Example
///
/// ```rust
/// use tperformant_api::clients::{HttpClient, HttpMethod, ReqwestTransport};
/// use tperformant_api::ApiConfig;
/// use serde_json::{json, Map};
///
/// let config = ApiConfig::default();
/// let transport = ReqwestTransport::new(config.timeout()).unwrap();
/// let client = HttpClient::new(&config, transport);
///
/// let params = json!({"page": 1}).as_object().cloned().unwrap();
/// let request = client.build_request(HttpMethod::Get, "/affiliate/programs", &params, None);
/// assert_eq!(request.url, "https://api.2performant.com/affiliate/programs.json?page=1");
/// assert!(request.body.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient<T> {
    transport: T,
    base_url: BaseUrl,
    default_headers: HashMap<String, String>,
}

impl<T: HttpTransport> HttpClient<T> {
    /// Creates a client from configuration and a transport.
    #[must_use]
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            transport,
            base_url: config.base_url().clone(),
            default_headers: config.default_headers(),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the headers applied to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the full URL for a route, without query string.
    #[must_use]
    pub fn url_for(&self, route: &str) -> String {
        let separator = if route.starts_with('/') { "" } else { "/" };
        format!("{}{separator}{route}{ROUTE_SUFFIX}", self.base_url)
    }

    /// Builds a request.
    ///
    /// For GET the parameters are encoded in the query string and the body
    /// is empty; for every other method they are serialized as the JSON body
    /// and the URL carries no query string. Credentials, when given, add the
    /// `access-token`, `client` and `uid` headers.
    #[must_use]
    pub fn build_request(
        &self,
        method: HttpMethod,
        route: &str,
        params: &Map<String, Value>,
        auth: Option<&AuthCredentials>,
    ) -> HttpRequest {
        let mut url = self.url_for(route);
        let mut body = None;

        if method.has_body() {
            body = Some(Value::Object(params.clone()).to_string());
        } else {
            let query = build_query(params);
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
        }

        let mut headers = self.default_headers.clone();
        if let Some(auth) = auth {
            for (name, value) in auth.headers() {
                headers.insert(name.to_string(), value.to_string());
            }
        }

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Sends a built request through the transport.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`TransportError`]. HTTP error statuses are
    /// not errors at this layer.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        tracing::debug!(url = %request.url, status = response.code, "received response");
        Ok(response)
    }
}
