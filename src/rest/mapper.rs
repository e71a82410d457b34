//! Response classification and entity mapping.
//!
//! [`map_response`] turns one HTTP response into either typed entities or a
//! classified [`ApiError`]:
//!
//! 1. Status 500 and above is a [`ApiError::Server`], whatever the body says.
//! 2. The body is decoded as JSON (an empty body counts as `{}`); anything
//!    else is a [`ApiError::Protocol`].
//! 3. Status 400..=499 is a [`ApiError::Client`] with the validation errors
//!    found in the body.
//! 4. On success the value under the expected key is mapped: a list to
//!    [`Payload::Many`] in response order, an object to [`Payload::One`].
//!
//! Each object's type is resolved from its `resource_type` discriminator when
//! that names a registered key, else from the expected key, else from the
//! override key. When none resolve the call fails with
//! [`ApiError::UnknownEntity`]; so does an empty list under a key that
//! neither the registry nor the override resolves.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::auth::AuthCredentials;
use crate::clients::HttpResponse;
use crate::models::Entity;
use crate::rest::registry::{resolve, resolve_expected, EntityKind};
use crate::rest::{ApiError, ApiResponse, Payload};

/// Maps a response to the entities under `expected`.
///
/// `auth` is attached to every mapped entity so model methods can issue
/// follow-up calls. When the response headers carry a full set of
/// credentials (sign-in, token validation) those are attached instead.
///
/// # Errors
///
/// See the module documentation for the classification order.
pub fn map_response(
    response: HttpResponse,
    url: &str,
    expected: &str,
    auth: Option<&AuthCredentials>,
    override_key: Option<&str>,
) -> Result<ApiResponse<Payload>, ApiError> {
    if response.is_server_error() {
        tracing::warn!(status = response.code, url = %url, "API server error");
        return Err(ApiError::server(&response, url));
    }

    let body = decode_body(&response.body, url)?;

    if response.is_client_error() {
        tracing::debug!(status = response.code, url = %url, "API rejected request");
        return Err(ApiError::client(response.code, &body, url));
    }

    if !response.is_ok() {
        return Err(ApiError::Protocol {
            reason: format!("unexpected status {}", response.code),
            url: url.to_string(),
        });
    }

    let Value::Object(mut body) = body else {
        return Err(ApiError::Protocol {
            reason: "response body is not a JSON object".to_string(),
            url: url.to_string(),
        });
    };

    let slot = body.remove(expected).ok_or_else(|| ApiError::Protocol {
        reason: format!("response has no '{expected}' key"),
        url: url.to_string(),
    })?;

    let credentials = AuthCredentials::from_headers(&response.headers)
        .or_else(|| auth.cloned())
        .map(Arc::new);
    let mapper = EntityMapper {
        fallback: resolve_expected(expected, override_key),
        expected,
        auth: credentials.as_ref(),
        url,
    };

    let payload = match slot {
        // With no key-level kind, an empty list cannot be typed.
        Value::Array(items) if items.is_empty() && mapper.fallback.is_none() => {
            return Err(ApiError::UnknownEntity {
                key: expected.to_string(),
            })
        }
        Value::Array(items) => Payload::Many(
            items
                .into_iter()
                .map(|item| mapper.entity(item))
                .collect::<Result<_, _>>()?,
        ),
        item @ Value::Object(_) => Payload::One(mapper.entity(item)?),
        other => {
            return Err(ApiError::Protocol {
                reason: format!("'{expected}' holds {}, not an object or list", type_name(&other)),
                url: url.to_string(),
            })
        }
    };

    Ok(ApiResponse::new(payload, response.code, url.to_string(), response.headers))
}

fn decode_body(body: &str, url: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Protocol {
        reason: format!("invalid JSON: {e}"),
        url: url.to_string(),
    })
}

struct EntityMapper<'a> {
    fallback: Option<EntityKind>,
    expected: &'a str,
    auth: Option<&'a Arc<AuthCredentials>>,
    url: &'a str,
}

impl EntityMapper<'_> {
    fn entity(&self, value: Value) -> Result<Entity, ApiError> {
        let Value::Object(object) = &value else {
            return Err(ApiError::Protocol {
                reason: format!(
                    "'{}' contains {}, not an object",
                    self.expected,
                    type_name(&value)
                ),
                url: self.url.to_string(),
            });
        };

        let kind = resolve(object, self.fallback).ok_or_else(|| ApiError::UnknownEntity {
            key: self.expected.to_string(),
        })?;

        Entity::from_json(kind, value, self.auth).map_err(|e| ApiError::Protocol {
            reason: format!("invalid {kind}: {e}"),
            url: self.url.to_string(),
        })
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
