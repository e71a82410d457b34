//! Affiliates, as seen by themselves and by advertisers.
//!
//! The advertiser endpoints return the same affiliate attributes plus
//! per-program statistics and custom terms. Those live in
//! [`AdvertiserAffiliateStats`], composed into [`Affiliate`] as an optional
//! extension that is present only when the response carried any of them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::AuthCredentials;
use crate::models::Model;
use crate::rest::EntityKind;

/// An affiliate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Affiliate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The code identifying the affiliate in tracking links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub websites: Option<Vec<String>>,

    /// Statistics and custom terms, present on advertiser endpoints.
    #[serde(flatten)]
    pub advertiser_stats: Option<AdvertiserAffiliateStats>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

/// An affiliate's performance and terms within the advertiser's program.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AdvertiserAffiliateStats {
    /// Relationship status: "accepted", "pending", "suspended", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicks: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_count: Option<u64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub sales_amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions_count: Option<u64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub commissions_amount: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub cost_per_sale: Option<f64>,

    /// Whether the affiliate has terms other than the program defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_commission: Option<bool>,

    /// Cookie lifetime in days, when customized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_cookie_life: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_conditions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_commission_conditions: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub commission_lead_amount: Option<f64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub commission_sale_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_affiliate_recruited: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_affiliate_recruited: Option<bool>,
}

impl AdvertiserAffiliateStats {
    /// Returns `true` when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Affiliate {
    /// Returns `true` when the advertiser-side extension is present.
    #[must_use]
    pub const fn has_advertiser_stats(&self) -> bool {
        self.advertiser_stats.is_some()
    }
}

impl Model for Affiliate {
    const KIND: EntityKind = EntityKind::Affiliate;

    fn hydrate(&mut self, auth: Option<&Arc<AuthCredentials>>) {
        self.auth = auth.cloned();
        // A flattened extension deserializes to an all-empty value when none
        // of its fields are present.
        if self
            .advertiser_stats
            .as_ref()
            .is_some_and(AdvertiserAffiliateStats::is_empty)
        {
            self.advertiser_stats = None;
        }
    }

    fn auth(&self) -> Option<&Arc<AuthCredentials>> {
        self.auth.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::build;
    use serde_json::json;

    #[test]
    fn test_plain_affiliate_has_no_extension() {
        let affiliate: Affiliate = build(
            json!({"id": 1, "login": "john", "unique_code": "aff123"}),
            None,
        )
        .unwrap();

        assert_eq!(affiliate.login.as_deref(), Some("john"));
        assert!(!affiliate.has_advertiser_stats());
    }

    #[test]
    fn test_advertiser_fields_select_extension() {
        let affiliate: Affiliate = build(
            json!({
                "id": 1,
                "login": "john",
                "status": "accepted",
                "clicks": 1200,
                "sales_count": 14,
                "commission_sale_rate": 7.5,
                "custom_commission": true
            }),
            None,
        )
        .unwrap();

        let stats = affiliate.advertiser_stats.as_ref().unwrap();
        assert_eq!(stats.status.as_deref(), Some("accepted"));
        assert_eq!(stats.clicks, Some(1200));
        assert_eq!(stats.sales_count, Some(14));
        assert_eq!(stats.custom_commission, Some(true));
    }

    #[test]
    fn test_extension_serializes_flat() {
        let affiliate: Affiliate =
            build(json!({"id": 1, "clicks": 3, "status": "pending"}), None).unwrap();
        assert_eq!(
            serde_json::to_value(&affiliate).unwrap(),
            json!({"id": 1, "clicks": 3, "status": "pending"})
        );
    }
}
