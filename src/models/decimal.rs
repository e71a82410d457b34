//! Decimal attributes sent either as JSON numbers or as strings.
//!
//! Used as `#[serde(default, deserialize_with = "decimal::deserialize")]` on
//! `Option<f64>` fields. `null` and blank strings read as `None`.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Decimal {
    Number(f64),
    Text(String),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Decimal>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Decimal::Number(value)) => Ok(Some(value)),
        Some(Decimal::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid decimal '{text}'")))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "super::deserialize")]
        price: Option<f64>,
    }

    fn price(value: serde_json::Value) -> Option<f64> {
        serde_json::from_value::<Priced>(value).unwrap().price
    }

    #[test]
    fn test_numbers_and_strings_are_accepted() {
        assert_eq!(price(json!({"price": 12.5})), Some(12.5));
        assert_eq!(price(json!({"price": 7})), Some(7.0));
        assert_eq!(price(json!({"price": "12.50"})), Some(12.5));
        assert_eq!(price(json!({"price": " 3 "})), Some(3.0));
    }

    #[test]
    fn test_missing_null_and_blank_are_none() {
        assert_eq!(price(json!({})), None);
        assert_eq!(price(json!({"price": null})), None);
        assert_eq!(price(json!({"price": ""})), None);
    }

    #[test]
    fn test_non_numeric_string_is_rejected() {
        assert!(serde_json::from_value::<Priced>(json!({"price": "cheap"})).is_err());
    }
}
