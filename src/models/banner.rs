//! Banners.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;

/// A banner an affiliate can place on their site.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Banner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,

    /// "image", "flash", "html", ...
    #[serde(rename = "banner_type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Where the banner links to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl Banner {
    /// Returns the dimensions as `WIDTHxHEIGHT`, when both are known.
    #[must_use]
    pub fn dimensions(&self) -> Option<String> {
        Some(format!("{}x{}", self.width?, self.height?))
    }
}

flat_model!(Banner, Banner);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_banner_type_and_dimensions() {
        let banner: Banner = serde_json::from_value(json!({
            "id": 1,
            "banner_type": "image",
            "width": 300,
            "height": 250
        }))
        .unwrap();
        assert_eq!(banner.kind.as_deref(), Some("image"));
        assert_eq!(banner.dimensions().as_deref(), Some("300x250"));
    }

    #[test]
    fn test_dimensions_need_both_sides() {
        let banner = Banner {
            width: Some(728),
            ..Default::default()
        };
        assert_eq!(banner.dimensions(), None);
    }
}
