//! HTTP plumbing for the 2Performant API.
//!
//! # Overview
//!
//! - [`HttpClient`]: builds requests from route, params and credentials, and
//!   dispatches them
//! - [`HttpRequest`]: the request descriptor (method, URL, headers, body)
//! - [`HttpResponse`]: status, headers and raw body as received
//! - [`HttpTransport`]: the send-one-request capability, with
//!   [`ReqwestTransport`] as the default implementation
//! - [`TransportError`]: failures where no response was obtained
//!
//! No retries happen at this layer. Every request is sent exactly once and
//! every received response, whatever its status, is returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
mod transport;

pub use errors::TransportError;
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
pub use query::{build_query, flatten_params};
pub use transport::{HttpTransport, ReqwestTransport};
