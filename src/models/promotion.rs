//! Advertiser promotions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;

/// A time-limited promotion announced by an advertiser.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Promotion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_page_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_end: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl Promotion {
    /// Returns `true` if the promotion runs at `now`.
    ///
    /// Missing bounds are treated as open.
    #[must_use]
    pub fn is_running_at(&self, now: DateTime<Utc>) -> bool {
        self.promotion_start.map_or(true, |start| start <= now)
            && self.promotion_end.map_or(true, |end| now <= end)
    }
}

flat_model!(Promotion, Promotion);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_running_window() {
        let promotion: Promotion = serde_json::from_value(json!({
            "id": 4,
            "promotion_start": "2017-06-01T00:00:00Z",
            "promotion_end": "2017-06-30T23:59:59Z"
        }))
        .unwrap();

        let inside = "2017-06-15T10:00:00Z".parse().unwrap();
        let after = "2017-07-01T00:00:00Z".parse().unwrap();
        assert!(promotion.is_running_at(inside));
        assert!(!promotion.is_running_at(after));
    }
}
