//! Commissions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TPerformantApi;
use crate::auth::AuthCredentials;
use crate::clients::HttpTransport;
use crate::error::ConfigError;
use crate::models::{require_auth, Affiliate, Model, Program};
use crate::rest::{ApiError, ApiResponse, EntityKind};

/// A commission earned by an affiliate in a program.
///
/// Responses embed the affiliate and the program; both are hydrated with the
/// same credentials as the commission.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Commission {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The affiliate's user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub amount: Option<f64>,

    /// ISO 4217 currency of `amount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// "pending", "accepted", "rejected" or "paid".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// "sale", "lead" or "manual".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The reason given for the latest status change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<Affiliate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl Commission {
    /// Accepts this commission, as its advertiser.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the commission carries no credentials
    /// or no id, otherwise the errors of
    /// [`TPerformantApi::accept_advertiser_commission`].
    pub async fn accept<T: HttpTransport>(
        &self,
        api: &TPerformantApi<T>,
        reason: Option<&str>,
    ) -> Result<ApiResponse<Self>, ApiError> {
        let (auth, id) = self.followup_target()?;
        api.accept_advertiser_commission(auth, id, reason).await
    }

    /// Rejects this commission, as its advertiser.
    ///
    /// # Errors
    ///
    /// Same as [`Commission::accept`].
    pub async fn reject<T: HttpTransport>(
        &self,
        api: &TPerformantApi<T>,
        reason: &str,
    ) -> Result<ApiResponse<Self>, ApiError> {
        let (auth, id) = self.followup_target()?;
        api.reject_advertiser_commission(auth, id, reason).await
    }

    fn followup_target(&self) -> Result<(&AuthCredentials, u64), ConfigError> {
        let auth = require_auth(self.auth.as_ref(), "commission")?;
        let id = self.id.ok_or(ConfigError::MissingField {
            entity: "commission",
            field: "id",
        })?;
        Ok((auth, id))
    }
}

impl Model for Commission {
    const KIND: EntityKind = EntityKind::Commission;

    fn hydrate(&mut self, auth: Option<&Arc<AuthCredentials>>) {
        self.auth = auth.cloned();
        if let Some(affiliate) = self.affiliate.as_mut() {
            affiliate.hydrate(auth);
        }
        if let Some(program) = self.program.as_mut() {
            program.hydrate(auth);
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
    fn test_nested_entities_are_hydrated() {
        let auth = Arc::new(AuthCredentials::new("a", "c", "adv@shop.ro").unwrap());
        let commission: Commission = build(
            json!({
                "id": 501,
                "amount": 12.5,
                "currency": "RON",
                "status": "pending",
                "created_at": "2017-05-01T12:00:00Z",
                "affiliate": {"id": 7, "login": "john", "status": "accepted", "clicks": 40},
                "program": {"id": 3, "name": "Shop"}
            }),
            Some(&auth),
        )
        .unwrap();

        let affiliate = commission.affiliate.as_ref().unwrap();
        assert_eq!(affiliate.login.as_deref(), Some("john"));
        assert!(affiliate.has_advertiser_stats());
        assert!(affiliate.auth().is_some());
        assert_eq!(commission.program.as_ref().unwrap().auth().map(|a| a.uid()), Some("adv@shop.ro"));
    }

    #[test]
    fn test_followup_without_auth_is_config_error() {
        let commission: Commission = build(json!({"id": 1}), None).unwrap();
        assert_eq!(
            commission.followup_target().unwrap_err(),
            ConfigError::MissingCredentials {
                entity: "commission"
            }
        );
    }

    #[test]
    fn test_followup_without_id_is_config_error() {
        let auth = Arc::new(AuthCredentials::new("a", "c", "u").unwrap());
        let commission: Commission = build(json!({"amount": 1.0}), Some(&auth)).unwrap();
        assert!(matches!(
            commission.followup_target(),
            Err(ConfigError::MissingField { field: "id", .. })
        ));
    }
}
