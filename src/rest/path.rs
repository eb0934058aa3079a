//! Path building infrastructure for REST resources.
//!
//! Each resource type declares a table of [`ResourcePath`]s. An action method
//! asks [`get_path`] for the entry matching its operation and the identifiers
//! it holds, then interpolates those identifiers with [`build_path`].
//!
//! # Path Resolution
//!
//! Several paths may serve the same operation. Sections, for example, are
//! listed through their project (`projects/{project}/sections`). When more
//! than one path matches, the one using the most identifiers wins.
//!
//! # Example
//!
//! ```rust
//! use asana_api::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//! use asana_api::clients::HttpMethod;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(
//!         HttpMethod::Get,
//!         ResourceOperation::List,
//!         &["project"],
//!         "projects/{project}/sections",
//!     ),
//!     ResourcePath::new(
//!         HttpMethod::Post,
//!         ResourceOperation::Action("addTask"),
//!         &["gid"],
//!         "sections/{gid}/addTask",
//!     ),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Action("addTask"), &["gid"]).unwrap();
//! let url = build_path(path.template, &[("gid", "1331")]);
//! assert_eq!(url, "sections/1331/addTask");
//! ```

use crate::clients::HttpMethod;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch a single record by id (`GET /<resources>/{gid}`).
    Find,
    /// List records under a parent (`GET /<parents>/{parent}/<resources>`).
    List,
    /// Create a record under a parent (`POST /<parents>/{parent}/<resources>`).
    Create,
    /// Sparse update (`PUT /<resources>/{gid}`).
    Update,
    /// Delete (`DELETE /<resources>/{gid}`).
    Delete,
    /// A named relationship action, such as `addTask` or `insert`.
    Action(&'static str),
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::List => "list",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Action(name) => *name,
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{name}` placeholders, for example
/// `projects/{project}/sections/insert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method requests on this path are sent with.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Identifiers interpolated into the template.
    pub ids: &'static [&'static str],
    /// The URL template with `{name}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of identifiers this path needs.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required identifiers are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose identifiers are all available, the
/// one with the most identifiers is returned.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating identifiers.
///
/// Values are percent-encoded so an identifier can never introduce an extra
/// path segment.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
