//! Resource-specific error types for REST API operations.
//!
//! # Error Taxonomy
//!
//! - [`ResourceError::Config`]: a mandatory argument was omitted; raised
//!   before any request is sent
//! - [`ResourceError::Http`]: the transport failed (network error, non-2xx
//!   status, unreadable body); propagated unchanged
//! - [`ResourceError::MalformedResponse`]: the response could not be
//!   unwrapped into a record or a page
//! - [`ResourceError::FieldAbsent`]: a typed accessor asked for a field the
//!   record does not carry
//! - [`ResourceError::PathResolutionFailed`]: the resource type has no path
//!   for the requested operation
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::rest::ResourceError;
//!
//! match Section::find_by_id(&client, "123", &Options::new()).await {
//!     Ok(section) => println!("Found: {:?}", section.name()),
//!     Err(ResourceError::Http(e)) if e.status() == Some(404) => println!("No such section"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::error::ConfigError;

/// Error type for REST resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A mandatory argument was not supplied.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The transport failed to complete the request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body does not have the expected shape.
    #[error("Malformed {resource} response: {reason}")]
    MalformedResponse {
        /// The resource type name (e.g., "section").
        resource: &'static str,
        /// What was wrong with the body.
        reason: String,
    },

    /// A typed accessor asked for a field the record does not carry.
    #[error("{resource} record has no field '{field}'")]
    FieldAbsent {
        /// The resource type name.
        resource: &'static str,
        /// The requested field.
        field: String,
    },

    /// No path is configured for the operation.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// The resource type name.
        resource: &'static str,
        /// The operation being attempted (e.g., "update", "delete").
        operation: &'static str,
    },
}

impl ResourceError {
    /// Returns `true` for errors raised before any request was sent.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::PathResolutionFailed { .. })
    }

    /// Returns the HTTP status code if the server answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
