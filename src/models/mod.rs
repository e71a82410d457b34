//! Typed entities returned by the 2Performant API.
//!
//! Every entity is a plain attribute bag: all fields are optional because the
//! API omits attributes depending on the caller's role and the endpoint. Each
//! entity type implements [`Model`], which ties it to its [`EntityKind`] and
//! lets the response mapper build it and hand it the credentials it was
//! fetched with.
//!
//! [`Entity`] is the tagged union over all of them, used where the type is
//! only known at runtime (the generic request methods).
//!
//! # Example
//!
//! ```rust
//! use tperformant_api::models::{Entity, Program};
//! use tperformant_api::EntityKind;
//! use serde_json::json;
//!
//! let entity = Entity::from_json(
//!     EntityKind::Program,
//!     json!({"id": 7, "name": "Shop", "unique_code": "c0ffee"}),
//!     None,
//! )
//! .unwrap();
//!
//! assert_eq!(entity.kind(), EntityKind::Program);
//! let program = Program::try_from(entity).unwrap();
//! assert_eq!(program.unique_code.as_deref(), Some("c0ffee"));
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthCredentials;
use crate::rest::EntityKind;

/// Implements [`Model`] for an entity struct with an `auth` field and no
/// nested entities.
macro_rules! flat_model {
    ($model:ty, $kind:ident) => {
        impl $crate::models::Model for $model {
            const KIND: $crate::rest::EntityKind = $crate::rest::EntityKind::$kind;

            fn hydrate(&mut self, auth: Option<&std::sync::Arc<$crate::auth::AuthCredentials>>) {
                self.auth = auth.cloned();
            }

            fn auth(&self) -> Option<&std::sync::Arc<$crate::auth::AuthCredentials>> {
                self.auth.as_ref()
            }
        }
    };
}
mod affiliate;
mod affiliate_request;
mod banner;
mod commission;
mod decimal;
mod product_feed;
mod program;
mod promotion;
mod tracking_code;
mod user;

pub use affiliate::{AdvertiserAffiliateStats, Affiliate};
pub use affiliate_request::AffiliateRequest;
pub use banner::Banner;
pub use commission::Commission;
pub use product_feed::{Product, ProductFeed};
pub use program::{Program, ProgramCategory};
pub use promotion::Promotion;
pub use tracking_code::TrackingCode;
pub use user::User;

/// An entity type the response mapper can build.
pub trait Model: Serialize + DeserializeOwned + Into<Entity> + TryFrom<Entity, Error = Entity> {
    /// The registry kind this type is built for.
    const KIND: EntityKind;

    /// Attaches the credentials the entity was fetched with, to itself and
    /// to any nested entities.
    fn hydrate(&mut self, auth: Option<&Arc<AuthCredentials>>);

    /// Returns the credentials the entity was fetched with.
    fn auth(&self) -> Option<&Arc<AuthCredentials>>;
}

/// Deserializes and hydrates one entity.
pub(crate) fn build<M: Model>(
    value: Value,
    auth: Option<&Arc<AuthCredentials>>,
) -> Result<M, serde_json::Error> {
    let mut model: M = serde_json::from_value(value)?;
    model.hydrate(auth);
    Ok(model)
}

/// Returns the entity's credentials, or the error for a follow-up call made
/// without them.
pub(crate) fn require_auth<'a>(
    auth: Option<&'a Arc<AuthCredentials>>,
    entity: &'static str,
) -> Result<&'a AuthCredentials, crate::error::ConfigError> {
    auth.map(Arc::as_ref)
        .ok_or(crate::error::ConfigError::MissingCredentials { entity })
}

macro_rules! entities {
    ($($variant:ident => $model:ty),+ $(,)?) => {
        /// Any entity the API returns.
        #[derive(Debug, Clone, PartialEq)]
        #[allow(clippy::large_enum_variant)]
        pub enum Entity {
            $(
                #[doc = concat!("A [`", stringify!($model), "`].")]
                $variant($model),
            )+
        }

        impl Entity {
            /// Builds an entity of the given kind from a JSON object.
            ///
            /// # Errors
            ///
            /// Returns the deserialization error if the object does not fit the
            /// entity's shape.
            pub fn from_json(
                kind: EntityKind,
                value: Value,
                auth: Option<&Arc<AuthCredentials>>,
            ) -> Result<Self, serde_json::Error> {
                match kind {
                    $(EntityKind::$variant => build::<$model>(value, auth).map(Self::$variant),)+
                }
            }

            /// Returns the entity's kind.
            #[must_use]
            pub const fn kind(&self) -> EntityKind {
                match self {
                    $(Self::$variant(_) => EntityKind::$variant,)+
                }
            }

            /// Serializes the entity's known fields, nested entities included.
            ///
            /// Mapping the result again under the entity's key yields an equal
            /// entity.
            #[must_use]
            pub fn to_json(&self) -> Value {
                let value = match self {
                    $(Self::$variant(model) => serde_json::to_value(model),)+
                };
                value.unwrap_or(Value::Null)
            }

            /// Returns the credentials the entity was fetched with.
            #[must_use]
            pub fn auth(&self) -> Option<&Arc<AuthCredentials>> {
                match self {
                    $(Self::$variant(model) => model.auth(),)+
                }
            }
        }

        $(
            impl From<$model> for Entity {
                fn from(model: $model) -> Self {
                    Self::$variant(model)
                }
            }

            impl TryFrom<Entity> for $model {
                type Error = Entity;

                fn try_from(entity: Entity) -> Result<Self, Self::Error> {
                    match entity {
                        Entity::$variant(model) => Ok(model),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

entities! {
    Program => Program,
    Commission => Commission,
    Affiliate => Affiliate,
    ProductFeed => ProductFeed,
    Product => Product,
    Banner => Banner,
    Promotion => Promotion,
    TrackingCode => TrackingCode,
    User => User,
    AffiliateRequest => AffiliateRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_builds_requested_kind() {
        let entity = Entity::from_json(EntityKind::Banner, json!({"id": 3, "title": "Top"}), None)
            .unwrap();
        assert_eq!(entity.kind(), EntityKind::Banner);
        let banner = Banner::try_from(entity).unwrap();
        assert_eq!(banner.id, Some(3));
    }

    #[test]
    fn test_try_from_wrong_variant_returns_entity() {
        let entity = Entity::from_json(EntityKind::User, json!({"id": 1}), None).unwrap();
        let err = Program::try_from(entity).unwrap_err();
        assert_eq!(err.kind(), EntityKind::User);
    }

    #[test]
    fn test_hydrate_attaches_auth() {
        let auth = Arc::new(AuthCredentials::new("a", "c", "u@x.ro").unwrap());
        let entity =
            Entity::from_json(EntityKind::ProductFeed, json!({"id": 9}), Some(&auth)).unwrap();
        assert_eq!(entity.auth().map(|a| a.uid()), Some("u@x.ro"));
    }

    #[test]
    fn test_shape_mismatch_is_error() {
        assert!(Entity::from_json(EntityKind::Program, json!({"id": "not-a-number"}), None).is_err());
    }

    #[test]
    fn test_require_auth() {
        assert!(require_auth(None, "commission").is_err());
    }
}
