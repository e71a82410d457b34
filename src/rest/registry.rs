//! The entity registry.
//!
//! Maps response keys and `resource_type` discriminators to [`EntityKind`].
//! The table is a `static` and is checked at compile time: every kind has at
//! least one key and no key is registered twice.

use std::fmt;

use serde_json::{Map, Value};

/// Name of the discriminator field an object may carry to name its own type.
pub const DISCRIMINATOR: &str = "resource_type";

/// The entity types the API returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// An affiliate program.
    Program,
    /// A commission.
    Commission,
    /// An affiliate, optionally with advertiser-side statistics.
    Affiliate,
    /// A product feed.
    ProductFeed,
    /// A product from a feed.
    Product,
    /// A banner.
    Banner,
    /// An advertiser promotion.
    Promotion,
    /// An advertiser's tracking code settings.
    TrackingCode,
    /// An authenticated user.
    User,
    /// An affiliate's request to join a program.
    AffiliateRequest,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Program,
        Self::Commission,
        Self::Affiliate,
        Self::ProductFeed,
        Self::Product,
        Self::Banner,
        Self::Promotion,
        Self::TrackingCode,
        Self::User,
        Self::AffiliateRequest,
    ];

    /// Returns the kind's singular response key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Commission => "commission",
            Self::Affiliate => "affiliate",
            Self::ProductFeed => "product_feed",
            Self::Product => "product",
            Self::Banner => "banner",
            Self::Promotion => "advertiser_promotion",
            Self::TrackingCode => "tracking_code",
            Self::User => "user",
            Self::AffiliateRequest => "affrequest",
        }
    }

    /// Resolves a response key or discriminator value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, kind)| *kind)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key to kind table, singular and plural forms.
static REGISTRY: &[(&str, EntityKind)] = &[
    ("program", EntityKind::Program),
    ("programs", EntityKind::Program),
    ("commission", EntityKind::Commission),
    ("commissions", EntityKind::Commission),
    ("affiliate", EntityKind::Affiliate),
    ("affiliates", EntityKind::Affiliate),
    ("product_feed", EntityKind::ProductFeed),
    ("product_feeds", EntityKind::ProductFeed),
    ("product", EntityKind::Product),
    ("products", EntityKind::Product),
    ("banner", EntityKind::Banner),
    ("banners", EntityKind::Banner),
    ("advertiser_promotion", EntityKind::Promotion),
    ("advertiser_promotions", EntityKind::Promotion),
    ("promotion", EntityKind::Promotion),
    ("promotions", EntityKind::Promotion),
    ("tracking_code", EntityKind::TrackingCode),
    ("user", EntityKind::User),
    ("users", EntityKind::User),
    ("affrequest", EntityKind::AffiliateRequest),
    ("affrequests", EntityKind::AffiliateRequest),
];

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn registry_is_complete(table: &[(&str, EntityKind)]) -> bool {
    let mut k = 0;
    while k < EntityKind::ALL.len() {
        let kind = EntityKind::ALL[k];
        let mut found = false;
        let mut i = 0;
        while i < table.len() {
            if table[i].1 as u8 == kind as u8 && str_eq(table[i].0, kind.key()) {
                found = true;
            }
            i += 1;
        }
        if !found {
            return false;
        }
        k += 1;
    }
    true
}

const fn registry_is_unique(table: &[(&str, EntityKind)]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if str_eq(table[i].0, table[j].0) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    registry_is_complete(REGISTRY),
    "every entity kind must be registered under its singular key"
);
const _: () = assert!(registry_is_unique(REGISTRY), "entity keys must be unique");

/// Resolves the kind of one response object.
///
/// A `resource_type` naming a registered key wins; otherwise `fallback` (the
/// kind resolved from the expected key or the override) applies.
#[must_use]
pub fn resolve(object: &Map<String, Value>, fallback: Option<EntityKind>) -> Option<EntityKind> {
    object
        .get(DISCRIMINATOR)
        .and_then(Value::as_str)
        .and_then(EntityKind::from_key)
        .or(fallback)
}

/// Resolves the fallback kind for a response: the expected key when it is
/// registered, else the override.
#[must_use]
pub fn resolve_expected(expected: &str, override_key: Option<&str>) -> Option<EntityKind> {
    EntityKind::from_key(expected).or_else(|| override_key.and_then(EntityKind::from_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_singular_and_plural_keys_resolve_to_same_kind() {
        assert_eq!(EntityKind::from_key("program"), Some(EntityKind::Program));
        assert_eq!(EntityKind::from_key("programs"), Some(EntityKind::Program));
        assert_eq!(
            EntityKind::from_key("advertiser_promotions"),
            Some(EntityKind::Promotion)
        );
        assert_eq!(EntityKind::from_key("affrequest"), Some(EntityKind::AffiliateRequest));
    }

    #[test]
    fn test_every_kind_resolves_from_its_own_key() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_unregistered_key_does_not_resolve() {
        assert_eq!(EntityKind::from_key("campaign"), None);
        assert_eq!(EntityKind::from_key(""), None);
    }

    #[test]
    fn test_discriminator_wins_over_fallback() {
        let object = json!({"id": 1, "resource_type": "banner"});
        let object = object.as_object().unwrap();
        assert_eq!(resolve(object, Some(EntityKind::Program)), Some(EntityKind::Banner));
    }

    #[test]
    fn test_unknown_discriminator_is_ignored() {
        let object = json!({"id": 1, "resource_type": "Widget"});
        let object = object.as_object().unwrap();
        assert_eq!(resolve(object, Some(EntityKind::Program)), Some(EntityKind::Program));
        assert_eq!(resolve(object, None), None);
    }

    #[test]
    fn test_expected_key_before_override() {
        assert_eq!(
            resolve_expected("campaign", Some("tracking_code")),
            Some(EntityKind::TrackingCode)
        );
        assert_eq!(resolve_expected("user", Some("tracking_code")), Some(EntityKind::User));
        assert_eq!(resolve_expected("campaign", None), None);
    }
}
