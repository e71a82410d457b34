//! Integration tests for response classification and entity mapping.

mod common;

use std::collections::HashMap;

use common::{credential_headers, credentials};
use serde_json::{json, Value};
use tperformant_api::models::{Affiliate, Commission, Entity, Program};
use tperformant_api::rest::map_response;
use tperformant_api::{ApiError, EntityKind, HttpResponse, Payload};

const URL: &str = "https://api.2performant.com/affiliate/programs.json";

fn response(code: u16, body: &Value) -> HttpResponse {
    HttpResponse::new(code, HashMap::new(), body.to_string())
}

// ============================================================================
// Error classification
// ============================================================================

#[test]
fn test_unprocessable_entity_carries_field_errors() {
    let body = json!({"errors": {"amount": ["must be greater than 0", "is not a number"]}});

    let error = map_response(response(422, &body), URL, "commission", None, None).unwrap_err();

    let ApiError::Client { code, errors, url } = error else {
        panic!("expected a client error");
    };
    assert_eq!(code, 422);
    assert_eq!(url, URL);
    assert_eq!(
        errors["amount"],
        vec!["must be greater than 0".to_string(), "is not a number".to_string()]
    );
}

#[test]
fn test_unauthorized_message_is_filed_under_base() {
    let body = json!({"errors": ["Invalid login credentials. Please try again."]});

    let error = map_response(response(401, &body), URL, "user", None, None).unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(!error.is_retryable());
    let ApiError::Client { errors, .. } = error else {
        panic!("expected a client error");
    };
    assert_eq!(errors["base"], vec!["Invalid login credentials. Please try again.".to_string()]);
}

#[test]
fn test_server_error_ignores_body() {
    for body in ["", "<html>oops</html>", r#"{"programs": []}"#] {
        let raw = HttpResponse::new(500, HashMap::new(), body);
        let error = map_response(raw, URL, "programs", None, None).unwrap_err();

        assert!(
            matches!(&error, ApiError::Server { code: 500, url, .. } if url == URL),
            "body {body:?} gave {error:?}"
        );
        assert!(error.to_string().contains(URL));
    }
}

#[test]
fn test_invalid_json_is_protocol_error() {
    let raw = HttpResponse::new(200, HashMap::new(), "not json");
    let error = map_response(raw, URL, "programs", None, None).unwrap_err();
    assert!(matches!(error, ApiError::Protocol { .. }));
}

#[test]
fn test_missing_key_is_protocol_error() {
    let error =
        map_response(response(200, &json!({"banners": []})), URL, "programs", None, None).unwrap_err();
    let ApiError::Protocol { reason, .. } = error else {
        panic!("expected a protocol error");
    };
    assert!(reason.contains("programs"));
}

#[test]
fn test_redirect_status_is_protocol_error() {
    let error =
        map_response(response(302, &json!({})), URL, "programs", None, None).unwrap_err();
    assert!(matches!(error, ApiError::Protocol { .. }));
}

#[test]
fn test_unregistered_key_is_unknown_entity() {
    let error = map_response(
        response(200, &json!({"widgets": [{"id": 1}]})),
        URL,
        "widgets",
        None,
        None,
    )
    .unwrap_err();
    assert_eq!(
        error,
        ApiError::UnknownEntity {
            key: "widgets".to_string()
        }
    );
}

#[test]
fn test_empty_list_under_unregistered_key_is_unknown_entity() {
    let body = json!({"widgets": []});

    let error = map_response(response(200, &body), URL, "widgets", None, None).unwrap_err();
    assert_eq!(
        error,
        ApiError::UnknownEntity {
            key: "widgets".to_string()
        }
    );

    // A registered key or an override types the empty list.
    let mapped = map_response(response(200, &body), URL, "widgets", None, Some("banner")).unwrap();
    assert!(mapped.is_empty());
    let mapped =
        map_response(response(200, &json!({"banners": []})), URL, "banners", None, None).unwrap();
    assert!(mapped.is_empty());
}

// ============================================================================
// Mapping
// ============================================================================

#[test]
fn test_list_keeps_response_order() {
    let items: Vec<Value> = (1..=5).map(|id| json!({"id": id, "name": format!("P{id}")})).collect();
    let body = json!({ "programs": items });

    let mapped = map_response(response(200, &body), URL, "programs", None, None).unwrap();

    assert_eq!(mapped.status(), 200);
    assert_eq!(mapped.url(), URL);
    let programs = mapped.into_inner().into_many::<Program>().unwrap();
    let ids: Vec<u64> = programs.iter().filter_map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_list_maps_to_empty_payload() {
    let mapped =
        map_response(response(200, &json!({"programs": []})), URL, "programs", None, None).unwrap();
    assert!(mapped.is_empty());
    assert!(matches!(mapped.data(), Payload::Many(items) if items.is_empty()));
}

#[test]
fn test_single_object_maps_to_one() {
    let body = json!({"commission": {"id": 8, "amount": 3.5, "status": "pending"}});

    let mapped = map_response(response(200, &body), URL, "commission", None, None).unwrap();

    let commission: Commission = mapped.into_inner().into_one().unwrap();
    assert_eq!(commission.id, Some(8));
    assert_eq!(commission.status.as_deref(), Some("pending"));
}

#[test]
fn test_discriminator_selects_type_per_object() {
    let body = json!({"items": [
        {"resource_type": "program", "id": 1},
        {"resource_type": "banner", "id": 2},
        {"resource_type": "nonsense", "id": 3}
    ]});

    // "items" is unregistered, so the override covers the last element.
    let mapped =
        map_response(response(200, &body), URL, "items", None, Some("product")).unwrap();

    let kinds: Vec<EntityKind> = mapped.iter().map(Entity::kind).collect();
    assert_eq!(
        kinds,
        vec![EntityKind::Program, EntityKind::Banner, EntityKind::Product]
    );
}

#[test]
fn test_cardinality_mismatch_is_unexpected_entity() {
    let mapped =
        map_response(response(200, &json!({"programs": []})), URL, "programs", None, None).unwrap();
    let error = mapped.into_inner().into_one::<Program>().unwrap_err();
    assert!(matches!(error, ApiError::UnexpectedEntity { .. }));
}

#[test]
fn test_entities_carry_passed_credentials() {
    let auth = credentials();
    let body = json!({"programs": [{"id": 1}, {"id": 2}]});

    let mapped = map_response(response(200, &body), URL, "programs", Some(&auth), None).unwrap();

    for entity in mapped.iter() {
        assert_eq!(entity.auth().map(|a| a.access_token()), Some("access-123"));
    }
}

#[test]
fn test_header_credentials_win_over_passed_ones() {
    let raw = HttpResponse::new(
        200,
        credential_headers("rotated-token"),
        json!({"user": {"id": 4, "email": "user@example.com"}}).to_string(),
    );

    let mapped = map_response(raw, URL, "user", Some(&credentials()), None).unwrap();

    let entity = mapped.iter().next().unwrap();
    assert_eq!(entity.auth().map(|a| a.access_token()), Some("rotated-token"));
}

#[test]
fn test_serialized_entities_map_back_to_equal_entities() {
    let body = json!({"programs": [
        {
            "id": 12,
            "slug": "fashion-days",
            "name": "Fashion Days",
            "approval_rate": 87.5,
            "activated_at": "2016-03-01T09:30:00Z",
            "category": {"id": 4, "name": "Fashion"}
        },
        {"id": 13, "name": "Gadgets", "enable_sales": true}
    ]});

    assert_remaps_to_equal("programs", &body);
}

fn assert_remaps_to_equal(key: &str, body: &Value) {
    let first = map_response(response(200, body), URL, key, None, None).unwrap();

    let reserialized: Vec<Value> = first.iter().map(Entity::to_json).collect();
    let again = map_response(
        response(200, &json!({ key: reserialized })),
        URL,
        key,
        None,
        None,
    )
    .unwrap();

    assert_eq!(first.data(), again.data());
}

#[test]
fn test_affiliate_with_advertiser_stats_maps_back_to_equal() {
    let body = json!({"affiliates": [
        {
            "id": 7,
            "login": "john",
            "unique_code": "aff123",
            "status": "accepted",
            "clicks": 1200,
            "sales_amount": "1520.40",
            "commission_sale_rate": 7.5,
            "custom_commission": true
        },
        {"id": 8, "login": "jane"}
    ]});

    assert_remaps_to_equal("affiliates", &body);

    let mapped = map_response(response(200, &body), URL, "affiliates", None, None).unwrap();
    let affiliates = mapped.into_inner().into_many::<Affiliate>().unwrap();
    let stats = affiliates[0].advertiser_stats.as_ref().unwrap();
    assert_eq!(stats.sales_amount, Some(1520.4));
    assert!(affiliates[1].advertiser_stats.is_none());
}

#[test]
fn test_commission_with_nested_entities_maps_back_to_equal() {
    let body = json!({"commissions": [{
        "id": 501,
        "amount": 12.5,
        "currency": "RON",
        "status": "pending",
        "created_at": "2017-05-01T12:00:00Z",
        "affiliate": {"id": 7, "login": "john", "status": "accepted", "clicks": 40},
        "program": {"id": 3, "name": "Shop", "affrequest": {"id": 99, "status": "accepted"}}
    }]});

    assert_remaps_to_equal("commissions", &body);
}

#[test]
fn test_string_decimals_are_accepted() {
    let body = json!({"commissions": [
        {"id": 1, "amount": "12.50"},
        {"id": 2, "amount": 3}
    ]});

    let mapped = map_response(response(200, &body), URL, "commissions", None, None).unwrap();

    let amounts: Vec<Option<f64>> = mapped
        .into_inner()
        .into_many::<Commission>()
        .unwrap()
        .iter()
        .map(|c| c.amount)
        .collect();
    assert_eq!(amounts, vec![Some(12.5), Some(3.0)]);
}
