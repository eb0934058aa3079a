//! Live resource objects and the generic action engine.
//!
//! A resource type is a zero-sized marker implementing [`ResourceType`]. It
//! names the type, lists its documented fields and declares its path table.
//! Everything else (building URLs, filtering parameters, unwrapping the
//! `data` envelope, refreshing state) lives in [`Resource`] and is shared by
//! every type.
//!
//! # Implementing a Resource Type
//!
//! ```rust
//! use asana_api::clients::HttpMethod;
//! use asana_api::rest::{ResourceOperation, ResourcePath, ResourceType};
//!
//! pub struct Tag;
//!
//! impl ResourceType for Tag {
//!     const NAME: &'static str = "tag";
//!     const PLURAL: &'static str = "tags";
//!     const FIELDS: &'static [&'static str] = &["gid", "resource_type", "name", "color"];
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["gid"], "tags/{gid}"),
//!         ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["gid"], "tags/{gid}"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["gid"], "tags/{gid}"),
//!     ];
//! }
//!
//! assert_eq!(Tag::DEFAULT_PAGE_SIZE, 20);
//! ```
//!
//! Type-specific action methods are then written as inherent methods on
//! `Tag` (constructors and lists) and on `Resource<'_, Tag>` (instance
//! operations), each delegating to the generic helpers below.

use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{HttpError, HttpMethod, HttpResponse, Transport};
use crate::rest::response::{first_record, Page};
use crate::rest::{
    build_path, filter_params, get_path, required, Collection, Options, Params, Record,
    ResourceError, ResourceOperation, ResourceRef,
};

/// Describes one kind of Asana resource.
pub trait ResourceType: Send + Sync + 'static {
    /// Singular name, matching the server's `resource_type` (e.g., "section").
    const NAME: &'static str;

    /// Plural name used when logging list traffic (e.g., "sections").
    const PLURAL: &'static str;

    /// Documented fields. Records may carry more or fewer.
    const FIELDS: &'static [&'static str];

    /// Path table used by the generic engine.
    const PATHS: &'static [crate::rest::ResourcePath];

    /// Page size sent as `limit` when a list call does not choose one.
    const DEFAULT_PAGE_SIZE: u32 = 20;
}

/// One server entity plus the client that fetched it.
///
/// Attributes are exactly the keys of the record the server returned. The
/// record is replaced as a whole by [`refresh`](Self::refresh), never merged.
///
/// Two resources are equal when both carry the same `gid` and resource type,
/// whatever else their records hold.
pub struct Resource<'c, T: ResourceType> {
    record: Record,
    client: &'c dyn Transport,
    _type: PhantomData<T>,
}

impl<'c, T: ResourceType> Resource<'c, T> {
    /// Wraps a record.
    #[must_use]
    pub fn new(record: Record, client: &'c dyn Transport) -> Self {
        Self {
            record,
            client,
            _type: PhantomData,
        }
    }

    /// Returns the identifier, if the record carries one.
    #[must_use]
    pub fn gid(&self) -> Option<&str> {
        self.record.gid()
    }

    /// Returns the record's `resource_type`, falling back to the declared
    /// type name.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        self.record.resource_type().unwrap_or(T::NAME)
    }

    /// Returns the raw value of an attribute.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    /// Returns `true` if the record carries the attribute.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.record.contains_key(field)
    }

    /// Deserializes an attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldAbsent`] if the record lacks the field,
    /// or [`ResourceError::MalformedResponse`] if its value has the wrong
    /// shape.
    pub fn field<V: DeserializeOwned>(&self, field: &str) -> Result<V, ResourceError> {
        let value = self.record.get(field).ok_or_else(|| ResourceError::FieldAbsent {
            resource: T::NAME,
            field: field.to_string(),
        })?;

        serde_json::from_value(value.clone()).map_err(|e| ResourceError::MalformedResponse {
            resource: T::NAME,
            reason: format!("field '{field}': {e}"),
        })
    }

    /// Reads an attribute holding a compact reference such as `{"gid": "..."}`.
    ///
    /// # Errors
    ///
    /// See [`field`](Self::field).
    pub fn reference(&self, field: &str) -> Result<ResourceRef, ResourceError> {
        self.field(field)
    }

    /// Reads an ISO 8601 timestamp attribute.
    ///
    /// # Errors
    ///
    /// See [`field`](Self::field).
    pub fn timestamp(&self, field: &str) -> Result<DateTime<Utc>, ResourceError> {
        self.field(field)
    }

    /// Returns attribute names that are not among the documented fields.
    #[must_use]
    pub fn extra_fields(&self) -> Vec<&str> {
        self.record
            .keys()
            .filter(|key| !T::FIELDS.contains(key))
            .collect()
    }

    /// Returns the backing record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Consumes the object and returns its record.
    #[must_use]
    pub fn into_record(self) -> Record {
        self.record
    }

    /// Returns the client this object talks through.
    #[must_use]
    pub fn client(&self) -> &'c dyn Transport {
        self.client
    }

    /// Replaces the whole record.
    ///
    /// Fields missing from `record` disappear. Applying the same record twice
    /// leaves the same state as applying it once.
    pub fn refresh(&mut self, record: Record) -> &mut Self {
        self.record = record;
        self
    }

    /// Re-fetches the record by `gid` and refreshes in place.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the object has no `gid`, or any
    /// transport or parsing error.
    pub async fn reload(&mut self, options: &Options) -> Result<&mut Self, ResourceError> {
        let gid = required("gid", self.gid())?.to_string();
        let (method, path) = resolve::<T>(ResourceOperation::Find, &[("gid", gid.as_str())])?;

        let response = send(self.client, method, &path, &Params::new(), options).await?;
        let record = first_record(&response, T::NAME)?;
        Ok(self.refresh(record))
    }

    /// Creates a record under a parent and wraps the result.
    ///
    /// `ids` fill the create path (e.g., `[("project", "999")]`); `body` is
    /// filtered before sending.
    ///
    /// # Errors
    ///
    /// Returns a transport, parsing or path resolution error.
    pub async fn create(
        client: &'c dyn Transport,
        ids: &[(&str, &str)],
        body: &Params,
        options: &Options,
    ) -> Result<Self, ResourceError> {
        let (method, path) = resolve::<T>(ResourceOperation::Create, ids)?;
        let body = filter_params(body);

        let response = send(client, method, &path, &body, options).await?;
        let record = first_record(&response, T::NAME)?;
        Ok(Self::new(record, client))
    }

    /// Fetches a record by `gid`.
    ///
    /// # Errors
    ///
    /// Returns a transport, parsing or path resolution error.
    pub async fn find(
        client: &'c dyn Transport,
        gid: &str,
        options: &Options,
    ) -> Result<Self, ResourceError> {
        let (method, path) = resolve::<T>(ResourceOperation::Find, &[("gid", gid)])?;

        let response = send(client, method, &path, &Params::new(), options).await?;
        let record = first_record(&response, T::NAME)?;
        Ok(Self::new(record, client))
    }

    /// Lists records and returns a lazy [`Collection`].
    ///
    /// `per_page` is sent as `limit`. Without it, a `limit` already in
    /// `params` is kept, and otherwise [`ResourceType::DEFAULT_PAGE_SIZE`] is
    /// used. Only the first page is fetched here; later pages are always
    /// requested with GET.
    ///
    /// # Errors
    ///
    /// Returns a transport, parsing or path resolution error.
    pub async fn list(
        client: &'c dyn Transport,
        ids: &[(&str, &str)],
        params: &Params,
        per_page: Option<u32>,
        options: &Options,
    ) -> Result<Collection<'c, T>, ResourceError> {
        let (method, path) = resolve::<T>(ResourceOperation::List, ids)?;

        let mut query = params.clone();
        match per_page {
            Some(limit) => query.insert("limit", limit),
            None if query.get("limit").is_some_and(|v| !v.is_null()) => {}
            None => query.insert("limit", T::DEFAULT_PAGE_SIZE),
        }
        let query = filter_params(&query);

        tracing::debug!(resources = T::PLURAL, path = %path, "Listing first page");
        let response = send(client, method, &path, &query, options).await?;
        let page = Page::from_response(&response, T::NAME)?;
        Ok(Collection::new(client, path, query, options.clone(), page))
    }

    /// Sends a sparse update and refreshes from the returned record.
    ///
    /// Only the fields in `body` that survive filtering are sent. Edits made
    /// by others since this object was fetched are not detected; the server
    /// applies the last write per field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the object has no `gid`, or any
    /// transport or parsing error. On error the object is left unchanged.
    pub async fn update_fields(
        &mut self,
        body: &Params,
        options: &Options,
    ) -> Result<&mut Self, ResourceError> {
        let gid = required("gid", self.gid())?.to_string();
        let (method, path) = resolve::<T>(ResourceOperation::Update, &[("gid", gid.as_str())])?;
        let body = filter_params(body);

        let response = send(self.client, method, &path, &body, options).await?;
        let record = first_record(&response, T::NAME)?;
        Ok(self.refresh(record))
    }

    /// Deletes the record on the server.
    ///
    /// Returns `true` on success. The response body is not parsed, and
    /// server-side preconditions surface as transport errors.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the object has no `gid`, or the
    /// transport error.
    pub async fn delete(&self) -> Result<bool, ResourceError> {
        let gid = required("gid", self.gid())?;
        let (method, path) = resolve::<T>(ResourceOperation::Delete, &[("gid", gid)])?;

        send(self.client, method, &path, &Params::new(), &Options::new()).await?;
        tracing::debug!(resource = T::NAME, gid, "Deleted");
        Ok(true)
    }

    /// Issues a relationship action and returns `true` on success.
    ///
    /// `ids` fill the action's path and the request uses the method that
    /// path declares. The filtered `body` is sent as is and the response
    /// body is not parsed.
    ///
    /// # Errors
    ///
    /// Returns a transport or path resolution error.
    pub async fn action(
        client: &'c dyn Transport,
        name: &'static str,
        ids: &[(&str, &str)],
        body: &Params,
        options: &Options,
    ) -> Result<bool, ResourceError> {
        let (method, path) = resolve::<T>(ResourceOperation::Action(name), ids)?;
        let body = filter_params(body);

        send(client, method, &path, &body, options).await?;
        Ok(true)
    }
}

/// Resolves the path for an operation, returning its method and URL.
fn resolve<T: ResourceType>(
    operation: ResourceOperation,
    ids: &[(&str, &str)],
) -> Result<(HttpMethod, String), ResourceError> {
    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(T::PATHS, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: T::NAME,
            operation: operation.as_str(),
        },
    )?;

    Ok((path.http_method, build_path(path.template, ids)))
}

/// Sends through the transport method matching `method`.
///
/// DELETE carries no body, so `params` is dropped for it.
async fn send(
    client: &dyn Transport,
    method: HttpMethod,
    path: &str,
    params: &Params,
    options: &Options,
) -> Result<HttpResponse, HttpError> {
    match method {
        HttpMethod::Get => client.get(path, params, options).await,
        HttpMethod::Post => client.post(path, params, options).await,
        HttpMethod::Put => client.put(path, params, options).await,
        HttpMethod::Delete => client.delete(path, options).await,
    }
}

impl<T: ResourceType> fmt::Debug for Resource<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("type", &T::NAME)
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl<T: ResourceType> PartialEq for Resource<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.gid(), other.gid()) {
            (Some(a), Some(b)) => a == b && self.resource_type() == other.resource_type(),
            _ => false,
        }
    }
}
