//! Query-string encoding for GET parameters.
//!
//! Parameters are a JSON object. Nested objects and arrays are flattened with
//! bracket notation (`filter[status]=active`, `ids[0]=4`), booleans become
//! `1`/`0` and nulls are dropped. Keys and values are percent-encoded.

use serde_json::{Map, Value};

/// Flattens `params` into ordered `(key, value)` pairs, unencoded.
#[must_use]
pub fn flatten_params(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten_value(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_value(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(format!("{key}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (inner, item) in map {
                flatten_value(format!("{key}[{inner}]"), item, pairs);
            }
        }
    }
}

/// Encodes `params` as a query string (without the leading `?`).
#[must_use]
pub fn build_query(params: &Map<String, Value>) -> String {
    flatten_params(params)
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
