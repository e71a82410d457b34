//! Response mapping for the 2Performant API.
//!
//! This module turns raw HTTP responses into typed results:
//!
//! - **[`ApiError`]**: the error taxonomy every call reports through
//! - **[`EntityKind`]**: the registry of response keys and the entity types
//!   they map to, checked for completeness at compile time
//! - **[`map_response`]**: status classification and entity mapping
//! - **[`ApiResponse<T>`]**: a Deref-based wrapper carrying the HTTP metadata
//! - **[`Payload`]**: one entity or an ordered list of them
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use tperformant_api::clients::HttpResponse;
//! use tperformant_api::models::Program;
//! use tperformant_api::rest::map_response;
//!
//! let body = r#"{"programs": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]}"#;
//! let response = HttpResponse::new(200, HashMap::new(), body);
//!
//! let mapped = map_response(response, "https://api.2performant.com/affiliate/programs.json", "programs", None, None)
//!     .unwrap();
//! assert_eq!(mapped.len(), 2);
//!
//! let programs: Vec<Program> = mapped.into_inner().into_many().unwrap();
//! assert_eq!(programs[1].name.as_deref(), Some("B"));
//! ```

mod errors;
mod mapper;
mod registry;
mod response;

pub use errors::ApiError;
pub use mapper::map_response;
pub use registry::{resolve, resolve_expected, EntityKind, DISCRIMINATOR};
pub use response::{ApiResponse, Payload};
