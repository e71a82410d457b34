//! Integration tests for quicklink generation.

use serde_json::json;
use tperformant_api::models::{Affiliate, Program};
use tperformant_api::{ApiConfig, BaseUrl, ConfigError, TPerformantApi};

fn api_at(base: &str) -> TPerformantApi {
    let config = ApiConfig::builder()
        .base_url(BaseUrl::new(base).unwrap())
        .build()
        .unwrap();
    TPerformantApi::new(&config).unwrap()
}

#[test]
fn test_production_quicklink() {
    let api = TPerformantApi::new(&ApiConfig::default()).unwrap();

    let link = api
        .quicklink("https://shop.example/x?y=1", "AFF1", "PROG1")
        .unwrap();

    assert_eq!(
        link,
        "https://event.2performant.com/events/click?ad_type=quicklink&aff_code=AFF1&unique=PROG1&redirect_to=https%3A%2F%2Fshop.example%2Fx%3Fy%3D1"
    );
}

#[test]
fn test_staging_host_is_rewritten() {
    let link = api_at("https://api.staging.2performant.com")
        .quicklink("https://shop.example/", "a", "p")
        .unwrap();

    assert!(link.starts_with("https://event.staging.2performant.com/events/click?"));
}

#[test]
fn test_codes_are_taken_from_entities() {
    let affiliate: Affiliate = serde_json::from_value(json!({"id": 1, "unique_code": "aff code"})).unwrap();
    let program: Program = serde_json::from_value(json!({"id": 2, "unique_code": "prog&1"})).unwrap();

    let link = api_at("https://api.2performant.com")
        .quicklink("https://shop.example/p", &affiliate, &program)
        .unwrap();

    assert!(link.contains("aff_code=aff%20code"));
    assert!(link.contains("unique=prog%261"));
}

#[test]
fn test_entity_without_code_is_rejected() {
    let program: Program = serde_json::from_value(json!({"id": 2})).unwrap();

    let error = api_at("https://api.2performant.com")
        .quicklink("https://shop.example/p", "AFF1", &program)
        .unwrap_err();

    assert_eq!(
        error,
        ConfigError::MissingField {
            entity: "program",
            field: "unique_code"
        }
    );
}
