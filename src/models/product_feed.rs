//! Product feeds and their products.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::TPerformantApi;
use crate::auth::AuthCredentials;
use crate::clients::HttpTransport;
use crate::error::ConfigError;
use crate::filters::{AffiliateProductFilter, AffiliateProductSort};
use crate::models::require_auth;
use crate::rest::{ApiError, ApiResponse};

/// A product feed published by an advertiser.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductFeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

impl ProductFeed {
    /// Lists the feed's products.
    ///
    /// Uses the credentials the feed was fetched with.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the feed carries no credentials or no
    /// id, otherwise the errors of [`TPerformantApi::affiliate_products`].
    pub async fn products<T: HttpTransport>(
        &self,
        api: &TPerformantApi<T>,
        filter: Option<&AffiliateProductFilter>,
        sort: Option<&AffiliateProductSort>,
    ) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        let auth = require_auth(self.auth.as_ref(), "product feed")?;
        let id = self.id.ok_or(ConfigError::MissingField {
            entity: "product feed",
            field: "id",
        })?;
        api.affiliate_products(auth, id, filter, sort).await
    }
}

flat_model!(ProductFeed, ProductFeed);

/// A product from a feed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_feed_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub price: Option<f64>,

    /// Price before discount, when discounted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::models::decimal::deserialize"
    )]
    pub old_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The product page on the advertiser's site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    auth: Option<Arc<AuthCredentials>>,
}

flat_model!(Product, Product);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::build;
    use serde_json::json;

    #[test]
    fn test_product_fields() {
        let product: Product = build(
            json!({
                "id": 77,
                "title": "Sneakers",
                "price": 249.99,
                "old_price": 299.0,
                "image_urls": ["https://img/1.jpg", "https://img/2.jpg"]
            }),
            None,
        )
        .unwrap();

        assert_eq!(product.price, Some(249.99));
        assert_eq!(product.image_urls.as_ref().map(Vec::len), Some(2));
    }
}
