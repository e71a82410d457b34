//! Authentication types for the 2Performant API.
//!
//! The API authenticates with three opaque tokens issued at sign-in. They are
//! held by [`AuthCredentials`] and sent as the `access-token`, `client` and
//! `uid` headers on every authenticated request.
//!
//! # Example
//!
//! ```rust
//! use tperformant_api::AuthCredentials;
//!
//! let auth = AuthCredentials::new("secret-token", "secret-client", "me@example.com").unwrap();
//! assert_eq!(auth.uid(), "me@example.com");
//!
//! // Tokens never leak through Debug output
//! let debug = format!("{auth:?}");
//! assert!(!debug.contains("secret-token"));
//! assert!(!debug.contains("secret-client"));
//! ```

mod credentials;

pub use credentials::{AuthCredentials, ACCESS_TOKEN_HEADER, CLIENT_HEADER, UID_HEADER};
