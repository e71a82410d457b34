//! The 2Performant API client.
//!
//! [`TPerformantApi`] is the entry point: one method per API operation, each
//! a fixed composition of the filter/sort parameters, the request builder,
//! one round-trip through the transport and the response mapper.
//!
//! There is no global instance. Construct a client once and pass it (or
//! clones of it) to whatever needs it.
//!
//! # Example
//!
//! ```rust,ignore
//! use tperformant_api::{ApiConfig, TPerformantApi};
//! use tperformant_api::filters::AffiliateProgramFilter;
//!
//! let api = TPerformantApi::new(&ApiConfig::default())?;
//!
//! let user = api.sign_in("affiliate@example.com", "secret").await?;
//! let auth = user.credentials().expect("sign-in returns credentials").clone();
//!
//! let filter = AffiliateProgramFilter::new().with("query", "fashion")?.page(2);
//! let programs = api.affiliate_programs(&auth, Some(&filter), None).await?;
//! for program in programs.iter() {
//!     println!("{:?}", program.name);
//! }
//! ```

use std::fmt;

use serde_json::{json, Map, Value};

use crate::auth::AuthCredentials;
use crate::clients::{HttpClient, HttpMethod, HttpTransport, ReqwestTransport};
use crate::config::{ApiConfig, BaseUrl};
use crate::error::ConfigError;
use crate::filters::{collection_params, QueryParams};
use crate::models::{Model, User};
use crate::rest::{map_response, ApiError, ApiResponse, Payload};

mod advertiser;
mod affiliate;
mod quicklink;

pub use advertiser::{CommissionAmount, DEFAULT_CURRENCY};
pub use quicklink::UniqueCode;

/// Client for the 2Performant API.
///
/// Holds only state fixed at construction (base URL, default headers, the
/// transport), so it is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct TPerformantApi<T = ReqwestTransport> {
    client: HttpClient<T>,
}

impl TPerformantApi<ReqwestTransport> {
    /// Creates a client using the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TransportInit`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> TPerformantApi<T> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(config: &ApiConfig, transport: T) -> Self {
        Self {
            client: HttpClient::new(config, transport),
        }
    }

    /// Returns the base URL every route is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.client.base_url()
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient<T> {
        &self.client
    }

    /// Signs in with e-mail and password.
    ///
    /// The returned [`User`] carries the credentials for every other call
    /// ([`User::credentials`]).
    ///
    /// # Errors
    ///
    /// Wrong credentials are reported as [`ApiError::Client`] with the
    /// message under `base`.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<ApiResponse<User>, ApiError> {
        let params = object(json!({
            "user": {
                "email": email,
                "password": password,
            }
        }));
        self.fetch_one(HttpMethod::Post, "/users/sign_in", params, "user", None, None)
            .await
    }

    /// Checks a set of credentials and returns the user they belong to.
    ///
    /// # Errors
    ///
    /// Expired or revoked credentials are reported as [`ApiError::Client`].
    pub async fn validate_token(&self, auth: &AuthCredentials) -> Result<ApiResponse<User>, ApiError> {
        self.fetch_one(
            HttpMethod::Get,
            "/users/validate_token",
            Map::new(),
            "user",
            Some(auth),
            None,
        )
        .await
    }

    /// Sends a request and maps the entities found under `expected`.
    ///
    /// For GET, `params` become the query string; otherwise the JSON body.
    /// `override_key` names the entity type to use when neither the payload
    /// nor `expected` identify one.
    ///
    /// # Errors
    ///
    /// Every failure is reported as an [`ApiError`]; nothing is retried.
    pub async fn request(
        &self,
        method: HttpMethod,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<Payload>, ApiError> {
        let request = self.client.build_request(method, route, &params, auth);
        let response = self.client.send(&request).await?;
        map_response(response, &request.url, expected, auth, override_key)
    }

    /// Sends a GET request. See [`TPerformantApi::request`].
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn get(
        &self,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<Payload>, ApiError> {
        self.request(HttpMethod::Get, route, params, expected, auth, override_key)
            .await
    }

    /// Sends a POST request. See [`TPerformantApi::request`].
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn post(
        &self,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<Payload>, ApiError> {
        self.request(HttpMethod::Post, route, params, expected, auth, override_key)
            .await
    }

    /// Sends a PUT request. See [`TPerformantApi::request`].
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn put(
        &self,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<Payload>, ApiError> {
        self.request(HttpMethod::Put, route, params, expected, auth, override_key)
            .await
    }

    /// Sends a DELETE request. See [`TPerformantApi::request`].
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn delete(
        &self,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<Payload>, ApiError> {
        self.request(HttpMethod::Delete, route, params, expected, auth, override_key)
            .await
    }

    async fn fetch_one<M: Model>(
        &self,
        method: HttpMethod,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: Option<&AuthCredentials>,
        override_key: Option<&str>,
    ) -> Result<ApiResponse<M>, ApiError> {
        self.request(method, route, params, expected, auth, override_key)
            .await?
            .try_map(Payload::into_one)
    }

    async fn fetch_many<M: Model>(
        &self,
        route: &str,
        params: Map<String, Value>,
        expected: &str,
        auth: &AuthCredentials,
    ) -> Result<ApiResponse<Vec<M>>, ApiError> {
        self.get(route, params, expected, Some(auth), None)
            .await?
            .try_map(Payload::into_many)
    }
}

/// Builds the parameters of a filtered, sorted collection request.
fn list_params<F: QueryParams, S: QueryParams>(
    filter: Option<&F>,
    sort: Option<&S>,
) -> Map<String, Value> {
    collection_params(
        filter.map(|f| f as &dyn QueryParams),
        sort.map(|s| s as &dyn QueryParams),
    )
}

/// Joins a route prefix and an id, slug or code, percent-encoding the latter
/// as one path segment.
fn member(prefix: &str, id: impl fmt::Display) -> String {
    format!("{prefix}/{}", urlencoding::encode(&id.to_string()))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

// Verify TPerformantApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TPerformantApi>();
};
