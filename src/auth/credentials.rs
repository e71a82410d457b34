//! The authentication token container.

use std::collections::HashMap;
use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Header carrying the access token.
pub const ACCESS_TOKEN_HEADER: &str = "access-token";
/// Header carrying the client token.
pub const CLIENT_HEADER: &str = "client";
/// Header carrying the user id.
pub const UID_HEADER: &str = "uid";

/// The three tokens identifying an authenticated user.
///
/// Credentials are immutable once obtained. The library never persists them;
/// they are `Serialize`/`Deserialize` so callers can store them themselves.
/// Deserialization applies the same checks as [`AuthCredentials::new`].
///
/// # Security
///
/// The `Debug` implementation masks the access and client tokens.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AuthCredentials {
    access_token: String,
    client_token: String,
    uid: String,
}

impl AuthCredentials {
    /// Creates a new set of credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if any token is empty.
    pub fn new(
        access_token: impl Into<String>,
        client_token: impl Into<String>,
        uid: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let access_token = access_token.into();
        let client_token = client_token.into();
        let uid = uid.into();

        if access_token.is_empty() {
            return Err(ConfigError::EmptyCredential {
                field: ACCESS_TOKEN_HEADER,
            });
        }
        if client_token.is_empty() {
            return Err(ConfigError::EmptyCredential {
                field: CLIENT_HEADER,
            });
        }
        if uid.is_empty() {
            return Err(ConfigError::EmptyCredential { field: UID_HEADER });
        }

        Ok(Self {
            access_token,
            client_token,
            uid,
        })
    }

    /// Extracts credentials from response headers.
    ///
    /// Header names are expected lower-cased, as produced by the transport.
    /// Returns `None` unless all three tokens are present and non-empty.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        let first = |name: &str| {
            headers
                .get(name)
                .and_then(|values| values.first())
                .map(String::as_str)
        };

        Self::new(
            first(ACCESS_TOKEN_HEADER)?,
            first(CLIENT_HEADER)?,
            first(UID_HEADER)?,
        )
        .ok()
    }

    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the client token.
    #[must_use]
    pub fn client_token(&self) -> &str {
        &self.client_token
    }

    /// Returns the user id (the account e-mail).
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the authentication headers for a request.
    #[must_use]
    pub fn headers(&self) -> [(&'static str, &str); 3] {
        [
            (ACCESS_TOKEN_HEADER, self.access_token.as_str()),
            (CLIENT_HEADER, self.client_token.as_str()),
            (UID_HEADER, self.uid.as_str()),
        ]
    }
}

#[derive(Deserialize)]
struct StoredCredentials {
    access_token: String,
    client_token: String,
    uid: String,
}

impl<'de> Deserialize<'de> for AuthCredentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = StoredCredentials::deserialize(deserializer)?;
        Self::new(stored.access_token, stored.client_token, stored.uid).map_err(de::Error::custom)
    }
}

impl fmt::Debug for AuthCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCredentials")
            .field("access_token", &"*****")
            .field("client_token", &"*****")
            .field("uid", &self.uid)
            .finish()
    }
}

// Verify AuthCredentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthCredentials>();
};
