//! Asana resource types.
//!
//! Each type is a marker implementing [`ResourceType`](crate::rest::ResourceType)
//! plus the action methods Asana exposes for it.
//!
//! ## Section
//!
//! Sections subdivide a project.
//!
//! ```rust,ignore
//! use asana_api::rest::Options;
//! use asana_api::rest::resources::{Section, SectionList};
//!
//! let section = Section::find_by_id(&client, "1331", &Options::new()).await?;
//! let sections = Section::find_by_project(
//!     &client,
//!     SectionList { project: Some("999".into()), per_page: Some(50), ..Default::default() },
//!     &Options::new(),
//! )
//! .await?
//! .collect_all()
//! .await?;
//! ```
//!
//! ## Project
//!
//! ```rust,ignore
//! use asana_api::rest::resources::{Project, ProjectList};
//!
//! let active = Project::find_by_workspace(
//!     &client,
//!     ProjectList { workspace: Some("1".into()), archived: Some(false), ..Default::default() },
//!     &Options::new(),
//! )
//! .await?;
//! ```

mod project;
mod section;

pub use project::{Project, ProjectCreate, ProjectList, ProjectUpdate};
pub use section::{AddTask, InsertInProject, Section, SectionCreate, SectionList, SectionUpdate};
