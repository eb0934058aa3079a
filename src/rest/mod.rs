//! Resource and collection infrastructure for the Asana REST API.
//!
//! This module turns Asana's JSON envelopes into live objects:
//!
//! - **[`Resource`]**: one server record plus the client that fetched it,
//!   refreshed in place after updates
//! - **[`Collection`]**: a lazy, forward-only sequence driven by
//!   `next_page.offset` continuation tokens
//! - **[`ResourceType`]**: the per-type descriptor (name, fields, path table)
//!   that the generic engine is configured with
//! - **[`filter_params`] and [`required`]**: request shaping applied before
//!   any network call
//! - **[`ResourceError`]**: errors for resource operations
//!
//! Concrete types such as [`resources::Section`] live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::{AsanaClient, AsanaConfig, AccessToken};
//! use asana_api::rest::Options;
//! use asana_api::rest::resources::{Section, SectionList, SectionUpdate};
//!
//! let client = AsanaClient::new(&config)?;
//!
//! let mut sections = Section::find_by_project(
//!     &client,
//!     SectionList { project: Some("999".into()), ..Default::default() },
//!     &Options::new(),
//! )
//! .await?;
//!
//! while let Some(section) = sections.next().await {
//!     let mut section = section?;
//!     if section.name() == Some("Todo") {
//!         section
//!             .update(SectionUpdate { name: Some("Backlog".into()), ..Default::default() }, &Options::new())
//!             .await?;
//!     }
//! }
//! ```

mod collection;
mod errors;
mod params;
mod path;
mod record;
mod resource;
pub mod response;

pub mod resources;

#[cfg(test)]
pub(crate) mod testing;

pub use collection::Collection;
pub use errors::ResourceError;
pub use params::{filter_params, required, Options, Params};
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use record::{Record, ResourceRef};
pub use resource::{Resource, ResourceType};
pub use response::Page;
