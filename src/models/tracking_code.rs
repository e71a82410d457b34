//! Advertiser tracking code settings.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;

/// The tracking snippets and conversion settings of an advertiser's program.
///
/// The API returns this under the `campaign` key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrackingCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_unique: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_leads: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sales: Option<bool>,

    /// Snippet to place on the lead confirmation page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_code: Option<String>,

    /// Snippet to place on the order confirmation page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

flat_model!(TrackingCode, TrackingCode);
