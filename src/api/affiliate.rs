//! Operations available to affiliates.

use std::fmt;

use serde_json::Map;

use super::{list_params, member, TPerformantApi};
use crate::auth::AuthCredentials;
use crate::clients::{HttpMethod, HttpTransport};
use crate::filters::{
    AffiliateAdvertiserPromotionFilter, AffiliateAdvertiserPromotionSort, AffiliateBannerFilter,
    AffiliateBannerSort, AffiliateCommissionFilter, AffiliateCommissionSort,
    AffiliateProductFeedFilter, AffiliateProductFeedSort, AffiliateProductFilter,
    AffiliateProductSort, AffiliateProgramFilter, AffiliateProgramSort,
};
use crate::models::{
    AffiliateRequest, Banner, Commission, Product, ProductFeed, Program, Promotion,
};
use crate::rest::{ApiError, ApiResponse};

const PROGRAMS: &str = "/affiliate/programs";
const COMMISSIONS: &str = "/affiliate/commissions";
const PRODUCT_FEEDS: &str = "/affiliate/product_feeds";
const BANNERS: &str = "/affiliate/banners";
const PROMOTIONS: &str = "/affiliate/advertiser_promotions";

impl<T: HttpTransport> TPerformantApi<T> {
    /// Lists the programs available to the affiliate.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_programs(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AffiliateProgramFilter>,
        sort: Option<&AffiliateProgramSort>,
    ) -> Result<ApiResponse<Vec<Program>>, ApiError> {
        self.fetch_many(PROGRAMS, list_params(filter, sort), "programs", auth)
            .await
    }

    /// Fetches one program by id or slug.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_program(
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

    /// Fetches the affiliate's request to join a program.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_request(
        &self,
        auth: &AuthCredentials,
        program_id: impl fmt::Display,
    ) -> Result<ApiResponse<AffiliateRequest>, ApiError> {
        let route = format!("{}/me", member(PROGRAMS, program_id));
        self.fetch_one(HttpMethod::Get, &route, Map::new(), "affrequest", Some(auth), None)
            .await
    }

    /// Lists the affiliate's commissions.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_commissions(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AffiliateCommissionFilter>,
        sort: Option<&AffiliateCommissionSort>,
    ) -> Result<ApiResponse<Vec<Commission>>, ApiError> {
        self.fetch_many(COMMISSIONS, list_params(filter, sort), "commissions", auth)
            .await
    }

    /// Lists the product feeds available to the affiliate.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_product_feeds(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AffiliateProductFeedFilter>,
        sort: Option<&AffiliateProductFeedSort>,
    ) -> Result<ApiResponse<Vec<ProductFeed>>, ApiError> {
        self.fetch_many(PRODUCT_FEEDS, list_params(filter, sort), "product_feeds", auth)
            .await
    }

    /// Lists the products of a feed.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_products(
        &self,
        auth: &AuthCredentials,
        feed_id: impl fmt::Display,
        filter: Option<&AffiliateProductFilter>,
        sort: Option<&AffiliateProductSort>,
    ) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        let route = format!("{}/products", member(PRODUCT_FEEDS, feed_id));
        self.fetch_many(&route, list_params(filter, sort), "products", auth)
            .await
    }

    /// Lists the banners available to the affiliate.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_banners(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AffiliateBannerFilter>,
        sort: Option<&AffiliateBannerSort>,
    ) -> Result<ApiResponse<Vec<Banner>>, ApiError> {
        self.fetch_many(BANNERS, list_params(filter, sort), "banners", auth)
            .await
    }

    /// Lists advertiser promotions.
    ///
    /// # Errors
    ///
    /// See [`TPerformantApi::request`].
    pub async fn affiliate_promotions(
        &self,
        auth: &AuthCredentials,
        filter: Option<&AffiliateAdvertiserPromotionFilter>,
        sort: Option<&AffiliateAdvertiserPromotionSort>,
    ) -> Result<ApiResponse<Vec<Promotion>>, ApiError> {
        self.fetch_many(PROMOTIONS, list_params(filter, sort), "advertiser_promotions", auth)
            .await
    }
}
