//! Operations available to advertisers.
//!
//! Commission and affiliate routes act on the advertiser's own program, which
//! the API addresses as `default`.

use std::fmt;

use serde_json::{json, Map, Value};

use super::{list_params, member, object, TPerformantApi};
use crate::auth::AuthCredentials;
use crate::clients::{HttpMethod, HttpTransport};
use crate::filters::{
    AdvertiserAffiliateFilter, AdvertiserAffiliateSort, AdvertiserCommissionFilter,
    AdvertiserCommissionSort, AdvertiserProgramFilter, AdvertiserProgramSort,
};
use crate::models::{Affiliate, Commission, Program, TrackingCode};
use crate::rest::{ApiError, ApiResponse};

const PROGRAMS: &str = "/advertiser/programs";
const COMMISSIONS: &str = "/advertiser/programs/default/commissions";
const AFFILIATES: &str = "/advertiser/programs/default/affiliates";
const TRACKING_CODE: &str = "/advertiser/programs/default/tracking_code";

/// Currency used for commission amounts given without one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// A commission amount, optionally in a currency other than EUR.
///
/// # Example
///
/// ```rust
/// use tperformant_api::api::CommissionAmount;
///
/// let eur = CommissionAmount::from(12.5);
/// assert_eq!(eur.currency(), "EUR");
///
/// let ron = CommissionAmount::new(60.0, "RON");
/// assert_eq!(ron.currency(), "RON");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionAmount {
    amount: f64,
    currency: Option<String>,
}

impl CommissionAmount {
    /// Creates an amount in the given currency.
    #[must_use]
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: Some(currency.into()),
        }
    }

    /// Returns the amount, in [`currency`](Self::currency).
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency code, [`DEFAULT_CURRENCY`] when none or an empty
    /// one was given.
    #[must_use]
    pub fn currency(&self) -> &str {
        match self.currency.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => DEFAULT_CURRENCY,
        }
    }
}

impl From<f64> for CommissionAmount {
    fn from(amount: f64) -> Self {
        Self {
            amount,
            currency: None,
        }
    }
}

impl<T: HttpTransport> TPerformantApi<T> {
    /// Lists the advertiser's programs.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_programs(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AdvertiserProgramFilter>,
        sort: Option<&AdvertiserProgramSort>,
    ) -> Result<ApiResponse<Vec<Program>>, ApiError> {
        self.fetch_many(PROGRAMS, list_params(filter, sort), "programs", auth)
            .await
    }

    /// Fetches one of the advertiser's programs by id or slug.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_program(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
    ) -> Result<ApiResponse<Program>, ApiError> {
        self.fetch_one(
            HttpMethod::Get,
            &member(PROGRAMS, id),
            Map::new(),
            "program",
            Some(auth),
            None,
        )
        .await
    }

    /// Lists the commissions of the advertiser's program.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_commissions(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AdvertiserCommissionFilter>,
        sort: Option<&AdvertiserCommissionSort>,
    ) -> Result<ApiResponse<Vec<Commission>>, ApiError> {
        self.fetch_many(COMMISSIONS, list_params(filter, sort), "commissions", auth)
            .await
    }

    /// Fetches one commission.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_commission(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        self.fetch_one(
            HttpMethod::Get,
            &member(COMMISSIONS, id),
            Map::new(),
            "commission",
            Some(auth),
            None,
        )
        .await
    }

    /// Creates a manual commission for an affiliate, in EUR.
    ///
    /// # Errors
    ///
    /// Rejected amounts or unknown affiliates are reported as
    /// [`ApiError::Client`].
    pub async fn create_advertiser_commission(
        &self,
        auth: &AuthCredentials,
        affiliate_id: u64,
        amount: f64,
        description: &str,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        let params = object(json!({
            "commission": {
                "user_id": affiliate_id,
                "amount": amount,
                "description": description,
            }
        }));
        self.fetch_one(HttpMethod::Post, COMMISSIONS, params, "commission", Some(auth), None)
            .await
    }

    /// Changes a commission's amount.
    ///
    /// Plain numbers are taken as EUR. The description is only sent when
    /// given and non-empty.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn edit_advertiser_commission(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
        reason: &str,
        amount: impl Into<CommissionAmount>,
        description: Option<&str>,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        let amount = amount.into();
        let mut commission = Map::new();
        commission.insert("reason".to_string(), Value::from(reason));
        commission.insert("amount".to_string(), Value::from(amount.amount()));
        commission.insert("currency_code".to_string(), Value::from(amount.currency()));
        if let Some(description) = description.filter(|d| !d.is_empty()) {
            commission.insert("description".to_string(), Value::from(description));
        }

        let mut params = Map::new();
        params.insert("commission".to_string(), Value::Object(commission));

        self.fetch_one(
            HttpMethod::Put,
            &member(COMMISSIONS, id),
            params,
            "commission",
            Some(auth),
            None,
        )
        .await
    }

    /// Accepts a commission. The reason defaults to empty.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn accept_advertiser_commission(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
        reason: Option<&str>,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        self.change_commission_status(auth, id, "accept", reason.unwrap_or_default())
            .await
    }

    /// Rejects a commission.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn reject_advertiser_commission(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
        reason: &str,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        self.change_commission_status(auth, id, "reject", reason)
            .await
    }

    async fn change_commission_status(
        &self,
        auth: &AuthCredentials,
        id: impl fmt::Display,
        action: &str,
        reason: &str,
    ) -> Result<ApiResponse<Commission>, ApiError> {
        let params = object(json!({
            "commission": {
                "current_reason": reason,
            }
        }));
        let route = format!("{}/{action}", member(COMMISSIONS, id));
        self.fetch_one(HttpMethod::Put, &route, params, "commission", Some(auth), None)
            .await
    }

    /// Lists the affiliates of the advertiser's program, with their stats.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_affiliates(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AdvertiserAffiliateFilter>,
        sort: Option<&AdvertiserAffiliateSort>,
    ) -> Result<ApiResponse<Vec<Affiliate>>, ApiError> {
        self.fetch_many(AFFILIATES, list_params(filter, sort), "affiliates", auth)
            .await
    }

    /// Fetches one affiliate by unique code.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_affiliate(
        &self,
        auth: &AuthCredentials,
        code: &str,
    ) -> Result<ApiResponse<Affiliate>, ApiError> {
        self.fetch_one(
            HttpMethod::Get,
            &member(AFFILIATES, code),
            Map::new(),
            "affiliate",
            Some(auth),
            None,
        )
        .await
    }

    /// Fetches the tracking code settings of the advertiser's program.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn advertiser_tracking_code(
        &self,
        auth: &AuthCredentials,
    ) -> Result<ApiResponse<TrackingCode>, ApiError> {
        self.fetch_one(
            HttpMethod::Get,
            TRACKING_CODE,
            Map::new(),
            "campaign",
            Some(auth),
            Some("tracking_code"),
        )
        .await
    }
}
