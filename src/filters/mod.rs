//! Result filtering and sorting for collection endpoints.
//!
//! Every filterable collection declares a whitelist of logical field names and
//! the query-parameter names they map to on the wire. [`Filter`] and [`Sort`]
//! validate against that whitelist as fields are added, so an unknown field is
//! rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use tperformant_api::filters::{AdvertiserAffiliateFilter, AdvertiserAffiliateSort, SortDirection};
//!
//! let filter = AdvertiserAffiliateFilter::from_pairs([("recruited", "true"), ("status", "accepted")]).unwrap();
//! let params = filter.to_params();
//! assert_eq!(params["affiliate_is_recruited"], "true");
//!
//! let sort = AdvertiserAffiliateSort::new().with("conversions", SortDirection::Desc).unwrap();
//! assert_eq!(sort.to_params()["conversions_count"], "desc");
//!
//! // Unknown fields fail fast
//! assert!(AdvertiserAffiliateFilter::new().with("colour", "red").is_err());
//! ```

mod fields;

pub use fields::*;

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};
use thiserror::Error;

/// Query-parameter scope for filter values (`filter[<wire>]`).
pub const FILTER_SCOPE: &str = "filter";
/// Query-parameter scope for sort directions (`sort[<wire>]`).
pub const SORT_SCOPE: &str = "sort";

/// Raised when a filter or sort is given a field outside its whitelist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown field '{field}' for {set}. Allowed fields: {}", .allowed.join(", "))]
pub struct FilterError {
    /// The rejected logical field name.
    pub field: String,
    /// The whitelist it was checked against.
    pub set: &'static str,
    /// The logical field names that are accepted.
    pub allowed: Vec<&'static str>,
}

/// A whitelist of logical field names and their wire names.
pub trait FieldSet {
    /// Human-readable name used in error messages.
    const NAME: &'static str;

    /// `(logical name, wire name)` pairs.
    const FIELDS: &'static [(&'static str, &'static str)];

    /// Looks up the wire name for a logical field.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `field` is not whitelisted.
    fn wire_name(field: &str) -> Result<&'static str, FilterError> {
        Self::FIELDS
            .iter()
            .find(|(logical, _)| *logical == field)
            .map(|(_, wire)| *wire)
            .ok_or_else(|| FilterError {
                field: field.to_string(),
                set: Self::NAME,
                allowed: Self::FIELDS.iter().map(|(logical, _)| *logical).collect(),
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Returns the wire value (`asc` or `desc`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that contributes parameters to a collection request.
pub trait QueryParams {
    /// Merges this value's parameters into a request parameter object.
    fn apply_to(&self, params: &mut Map<String, Value>);
}

/// A validated set of filter values for one collection.
pub struct Filter<F> {
    values: BTreeMap<&'static str, String>,
    page: Option<u32>,
    per_page: Option<u32>,
    fields: PhantomData<F>,
}

impl<F: FieldSet> Filter<F> {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            page: None,
            per_page: None,
            fields: PhantomData,
        }
    }

    /// Creates a filter from `(logical field, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] on the first field outside the whitelist.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::new();
        for (field, value) in pairs {
            filter.set(field.as_ref(), value)?;
        }
        Ok(filter)
    }

    /// Sets a field, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `field` is not whitelisted.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FilterError> {
        let wire = F::wire_name(field)?;
        self.values.insert(wire, value.into());
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `field` is not whitelisted.
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Result<Self, FilterError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Requests a result page (1-based).
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Returns the filter values keyed by wire name.
    #[must_use]
    pub fn to_params(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(wire, value)| ((*wire).to_string(), value.clone()))
            .collect()
    }

    /// Returns `true` if no field, page or page size is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.page.is_none() && self.per_page.is_none()
    }
}

impl<F: FieldSet> QueryParams for Filter<F> {
    fn apply_to(&self, params: &mut Map<String, Value>) {
        if !self.values.is_empty() {
            let scoped: Map<String, Value> = self
                .to_params()
                .into_iter()
                .map(|(wire, value)| (wire, Value::String(value)))
                .collect();
            params.insert(FILTER_SCOPE.to_string(), Value::Object(scoped));
        }
        if let Some(page) = self.page {
            params.insert("page".to_string(), Value::from(page));
        }
        if let Some(per_page) = self.per_page {
            params.insert("perpage".to_string(), Value::from(per_page));
        }
    }
}

impl<F: FieldSet> Default for Filter<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Clone for Filter<F> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            page: self.page,
            per_page: self.per_page,
            fields: PhantomData,
        }
    }
}

impl<F: FieldSet> fmt::Debug for Filter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("set", &F::NAME)
            .field("values", &self.values)
            .field("page", &self.page)
            .field("per_page", &self.per_page)
            .finish()
    }
}

/// A validated set of sort directions for one collection.
pub struct Sort<S> {
    values: BTreeMap<&'static str, SortDirection>,
    fields: PhantomData<S>,
}

impl<S: FieldSet> Sort<S> {
    /// Creates an empty sort.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            fields: PhantomData,
        }
    }

    /// Creates a sort from `(logical field, direction)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] on the first field outside the whitelist.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, SortDirection)>,
        K: AsRef<str>,
    {
        let mut sort = Self::new();
        for (field, direction) in pairs {
            sort.set(field.as_ref(), direction)?;
        }
        Ok(sort)
    }

    /// Sets the direction for a field.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `field` is not whitelisted.
    pub fn set(&mut self, field: &str, direction: SortDirection) -> Result<(), FilterError> {
        let wire = S::wire_name(field)?;
        self.values.insert(wire, direction);
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] if `field` is not whitelisted.
    pub fn with(mut self, field: &str, direction: SortDirection) -> Result<Self, FilterError> {
        self.set(field, direction)?;
        Ok(self)
    }

    /// Returns the sort directions keyed by wire name.
    #[must_use]
    pub fn to_params(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(wire, direction)| ((*wire).to_string(), direction.as_str().to_string()))
            .collect()
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: FieldSet> QueryParams for Sort<S> {
    fn apply_to(&self, params: &mut Map<String, Value>) {
        if self.values.is_empty() {
            return;
        }
        let scoped: Map<String, Value> = self
            .to_params()
            .into_iter()
            .map(|(wire, direction)| (wire, Value::String(direction)))
            .collect();
        params.insert(SORT_SCOPE.to_string(), Value::Object(scoped));
    }
}

impl<S: FieldSet> Default for Sort<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for Sort<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            fields: PhantomData,
        }
    }
}

impl<S: FieldSet> fmt::Debug for Sort<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sort")
            .field("set", &S::NAME)
            .field("values", &self.values)
            .finish()
    }
}

/// Builds the parameter object for a collection request.
#[must_use]
pub fn collection_params(
    filter: Option<&dyn QueryParams>,
    sort: Option<&dyn QueryParams>,
) -> Map<String, Value> {
    let mut params = Map::new();
    if let Some(filter) = filter {
        filter.apply_to(&mut params);
    }
    if let Some(sort) = sort {
        sort.apply_to(&mut params);
    }
    params
}
