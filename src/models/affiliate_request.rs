//! Affiliate requests to join a program.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;

/// An affiliate's request to join a program, and its current status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AffiliateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// "pending", "accepted", "rejected" or "suspended".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,

    /// The affiliate's user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// The advertiser's reason for the current status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl AffiliateRequest {
    /// Returns `true` once the advertiser has accepted the request.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status.as_deref() == Some("accepted")
    }
}

flat_model!(AffiliateRequest, AffiliateRequest);
