//! The authenticated user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;

/// A 2Performant account, as returned by sign-in and token validation.
///
/// The user carries the credentials from the response headers; pass
/// [`User::credentials`] to every authenticated call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// "affiliate" or "advertiser".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl User {
    /// Returns the credentials for subsequent authenticated calls.
    #[must_use]
    pub fn credentials(&self) -> Option<&AuthCredentials> {
        self.auth.as_deref()
    }

    /// Returns `true` for advertiser accounts.
    #[must_use]
    pub fn is_advertiser(&self) -> bool {
        self.role.as_deref() == Some("advertiser")
    }

    /// Returns `true` for affiliate accounts.
    #[must_use]
    pub fn is_affiliate(&self) -> bool {
        self.role.as_deref() == Some("affiliate")
    }
}

flat_model!(User, User);
