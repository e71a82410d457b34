//! Integration tests for filter and sort validation.

use serde_json::{json, Value};
use tperformant_api::filters::{
    collection_params, AdvertiserCommissionFilter, AdvertiserCommissionSort,
    AffiliateBannerFilter, AffiliateProductFilter, QueryParams, SortDirection,
};
use tperformant_api::ApiError;

#[test]
fn test_params_contain_only_supplied_fields() {
    let filter = AffiliateProductFilter::from_pairs([("brand", "Nike"), ("minPrice", "100")]).unwrap();

    let params = filter.to_params();

    assert_eq!(params.len(), 2);
    assert_eq!(params["brand"], "Nike");
    assert_eq!(params["price_min"], "100");
}

#[test]
fn test_unknown_field_lists_the_allowed_ones() {
    let error = AffiliateBannerFilter::new().with("color", "red").unwrap_err();

    assert_eq!(error.field, "color");
    assert_eq!(error.allowed, vec!["query", "program", "dimensions", "type"]);

    let api_error = ApiError::from(error);
    assert!(matches!(api_error, ApiError::InvalidField(_)));
    assert!(api_error.to_string().contains("color"));
}

#[test]
fn test_collection_params_scope_filter_and_sort() {
    let filter = AdvertiserCommissionFilter::new()
        .with("affiliate", "17")
        .unwrap()
        .per_page(50);
    let sort = AdvertiserCommissionSort::new()
        .with("amount", SortDirection::Asc)
        .unwrap();

    let params = collection_params(
        Some(&filter as &dyn QueryParams),
        Some(&sort as &dyn QueryParams),
    );

    assert_eq!(
        Value::Object(params),
        json!({
            "filter": {"affiliate_id": "17"},
            "perpage": 50,
            "sort": {"amount": "asc"}
        })
    );
}

#[test]
fn test_empty_filter_adds_nothing() {
    let filter = AdvertiserCommissionFilter::new();
    assert!(filter.is_empty());
    assert!(collection_params(Some(&filter as &dyn QueryParams), None).is_empty());
}
