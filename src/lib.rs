//! # 2Performant API Rust Client
//!
//! A typed client for the 2Performant affiliate network API: sign-in,
//! programs, commissions, affiliates, banners, product feeds and promotions,
//! plus quicklink generation.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - Validated credentials ([`AuthCredentials`]) obtained from sign-in
//! - Whitelisted filter and sort builders per collection ([`filters`])
//! - Typed entities ([`models`]) resolved through an explicit registry
//!   ([`EntityKind`])
//! - A single error type ([`ApiError`]) that tells retryable transport
//!   failures apart from terminal API errors
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use tperformant_api::{ApiConfig, BaseUrl};
//!
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("https://api.2performant.com").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .user_agent_prefix("my-dashboard/1.2")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.timeout(), Duration::from_secs(10));
//! ```
//!
//! ## Signing In and Making Requests
//!
//! ```rust,ignore
//! use tperformant_api::{ApiConfig, ApiError, TPerformantApi};
//! use tperformant_api::filters::{AffiliateCommissionFilter, AffiliateCommissionSort, SortDirection};
//!
//! let api = TPerformantApi::new(&ApiConfig::default())?;
//!
//! let user = api.sign_in("affiliate@example.com", "secret").await?;
//! let auth = user.credentials().cloned().expect("sign-in returns credentials");
//!
//! let filter = AffiliateCommissionFilter::new().with("status", "accepted")?;
//! let sort = AffiliateCommissionSort::new().with("date", SortDirection::Desc)?;
//!
//! match api.affiliate_commissions(&auth, Some(&filter), Some(&sort)).await {
//!     Ok(commissions) => {
//!         for commission in commissions.iter() {
//!             println!("{:?} {:?}", commission.amount, commission.currency);
//!         }
//!     }
//!     Err(e) if e.is_retryable() => eprintln!("network trouble: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```
//!
//! ## Quicklinks
//!
//! ```rust
//! use tperformant_api::{ApiConfig, TPerformantApi};
//!
//! let api = TPerformantApi::new(&ApiConfig::default()).unwrap();
//! let link = api.quicklink("https://shop.example/sale", "a1b2c3", "p9q8r7").unwrap();
//! assert!(link.starts_with("https://event.2performant.com/events/click?ad_type=quicklink"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the client is constructed explicitly and passed around
//! - **Fail-fast validation**: bad URLs, empty tokens and unknown filter fields
//!   are rejected before any request is sent
//! - **No hidden retries**: each call is exactly one round-trip
//! - **Thread-safe**: all public types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod rest;

// Re-export public types at crate root for convenience
pub use api::{CommissionAmount, TPerformantApi, UniqueCode};
pub use auth::AuthCredentials;
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;
pub use filters::{FilterError, SortDirection};
pub use rest::{ApiError, ApiResponse, EntityKind, Payload};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    TransportError,
};
