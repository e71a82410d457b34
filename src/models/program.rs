//! Affiliate programs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TPerformantApi;
use crate::auth::AuthCredentials;
use crate::clients::HttpTransport;
use crate::error::ConfigError;
use crate::models::{require_auth, AffiliateRequest, Model};
use crate::rest::{ApiError, ApiResponse, EntityKind};

/// An affiliate program run by an advertiser.
///
/// Returned by both the advertiser and the affiliate program endpoints.
/// When fetched as an affiliate, `affrequest` carries the caller's request to
/// join the program.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Program {
    /// The unique identifier of the program.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// URL-friendly identifier; accepted wherever an id is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The advertiser's shop URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_url: Option<String>,

    /// The base URL quicklinks may point into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Program description (HTML).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The code identifying the program in tracking links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_code: Option<String>,

    /// Program status: "active", "paused", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Advertiser user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Cookie lifetime in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_life: Option<u32>,

    /// Terms of service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos: Option<String>,

    /// ISO 4217 currency of commissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Share of commissions accepted, in percent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub approval_rate: Option<f64>,

    /// Average days until commissions are paid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_payment_time: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_leads: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sales: Option<bool>,

    /// Fixed commission per lead.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub default_lead_commission_amount: Option<f64>,

    /// Commission rate per sale, in percent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub default_sale_commission_rate: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_feeds_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banners_count: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProgramCategory>,

    /// When the program went live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_at: Option<DateTime<Utc>>,

    /// The calling affiliate's request to join, when fetched as an affiliate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affrequest: Option<AffiliateRequest>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

/// The category a program is listed under.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProgramCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Program {
    /// Fetches the calling affiliate's request to join this program.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] (as [`ApiError::Config`])
    /// if the program was not loaded through an authenticated call, and
    /// [`ConfigError::MissingField`] if it has neither id nor slug. Otherwise
    /// the errors of [`TPerformantApi::affiliate_request`].
    pub async fn affiliate_request<T: HttpTransport>(
        &self,
        api: &TPerformantApi<T>,
    ) -> Result<ApiResponse<AffiliateRequest>, ApiError> {
        let auth = require_auth(self.auth.as_ref(), "program")?;
        let id = self
            .id
            .map(|id| id.to_string())
            .or_else(|| self.slug.clone())
            .ok_or(ConfigError::MissingField {
                entity: "program",
                field: "id",
            })?;
        api.affiliate_request(auth, &id).await
    }
}

impl Model for Program {
    const KIND: EntityKind = EntityKind::Program;

    fn hydrate(&mut self, auth: Option<&Arc<AuthCredentials>>) {
        self.auth = auth.cloned();
        if let Some(request) = self.affrequest.as_mut() {
            request.hydrate(auth);
        }
    }

    fn auth(&self) -> Option<&Arc<AuthCredentials>> {
        self.auth.as_ref()
    }
}
