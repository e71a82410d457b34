//! Response wrapper for mapped API calls.
//!
//! [`ApiResponse<T>`] combines the mapped data with the metadata of the HTTP
//! response it came from (status code, request URL and headers). It
//! implements `Deref<Target = T>`, so a response can be used like its data:
//!
//! ```rust,ignore
//! let response = api.get("/affiliate/programs", Map::new(), "programs", Some(&auth), None).await?;
//! println!("status {}", response.status());
//!
//! // Payload methods via Deref
//! for entity in response.iter() {
//!     println!("{:?}", entity.kind());
//! }
//!
//! let programs: Vec<Program> = response.into_inner().into_many()?;
//! ```

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::models::{Entity, Model};
use crate::rest::ApiError;

/// A mapped response together with its HTTP metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    data: T,
    status: u16,
    url: String,
    headers: HashMap<String, Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Creates a response wrapper.
    #[must_use]
    pub const fn new(
        data: T,
        status: u16,
        url: String,
        headers: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            data,
            status,
            url,
            headers,
        }
    }

    /// Consumes the response and returns the inner data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns a reference to the inner data.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the request URL, query string included.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the response headers, names lower-cased.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// Transforms the data, keeping the metadata.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `f`.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<ApiResponse<U>, E> {
        Ok(ApiResponse {
            data: f(self.data)?,
            status: self.status,
            url: self.url,
            headers: self.headers,
        })
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// The entities found under the expected key.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The key held a single object.
    One(Entity),
    /// The key held a list; order is the response order.
    Many(Vec<Entity>),
}

impl Payload {
    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(entities) => entities.len(),
        }
    }

    /// Returns `true` for an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the entities.
    pub fn iter(&self) -> slice::Iter<'_, Entity> {
        match self {
            Self::One(entity) => slice::from_ref(entity).iter(),
            Self::Many(entities) => entities.iter(),
        }
    }

    /// Returns the single entity as `M`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedEntity`] if the payload is a list or holds
    /// another entity type.
    pub fn into_one<M: Model>(self) -> Result<M, ApiError> {
        match self {
            Self::One(entity) => M::try_from(entity).map_err(|other| unexpected::<M>(&other)),
            Self::Many(entities) => Err(ApiError::UnexpectedEntity {
                expected: format!("one {}", M::KIND),
                found: format!("a list of {}", entities.len()),
            }),
        }
    }

    /// Returns the list of entities as `M`, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedEntity`] if the payload is a single
    /// entity or any element is another entity type.
    pub fn into_many<M: Model>(self) -> Result<Vec<M>, ApiError> {
        match self {
            Self::Many(entities) => entities
                .into_iter()
                .map(|entity| M::try_from(entity).map_err(|other| unexpected::<M>(&other)))
                .collect(),
            Self::One(entity) => Err(ApiError::UnexpectedEntity {
                expected: format!("a list of {}", M::KIND),
                found: format!("one {}", entity.kind()),
            }),
        }
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a Entity;
    type IntoIter = slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn unexpected<M: Model>(found: &Entity) -> ApiError {
    ApiError::UnexpectedEntity {
        expected: M::KIND.to_string(),
        found: found.kind().to_string(),
    }
}
