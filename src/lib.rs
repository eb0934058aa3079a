//! # Asana API Rust SDK
//!
//! A typed binding for the Asana REST API. Server records become live
//! resource objects, paginated lists become lazy collections, and every
//! request is shaped and validated before it leaves the process.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`AsanaConfig`] and [`AsanaConfigBuilder`]
//! - Validated newtypes for credentials and the API base URL
//! - An async HTTP client with retry logic and `Retry-After` handling
//! - Resource objects ([`rest::Resource`]) and lazy paginated collections
//!   ([`rest::Collection`])
//! - Section and project action methods in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use asana_api::{AsanaConfig, AccessToken};
//!
//! let config = AsanaConfig::builder()
//!     .access_token(AccessToken::new("1/1234:abcd").unwrap())
//!     .max_tries(3)
//!     .enable("new_goal_memberships")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Working With Sections
//!
//! ```rust,ignore
//! use asana_api::{AsanaClient, AsanaConfig, AccessToken};
//! use asana_api::rest::Options;
//! use asana_api::rest::resources::{AddTask, InsertInProject, Section, SectionCreate, SectionList};
//!
//! let client = AsanaClient::new(&config)?;
//!
//! let section = Section::create_in_project(
//!     &client,
//!     SectionCreate { project: Some("999".into()), name: Some("Todo".into()), ..Default::default() },
//!     &Options::new(),
//! )
//! .await?;
//!
//! section
//!     .add_task(AddTask { task: Some("1234".into()), ..Default::default() }, &Options::new())
//!     .await?;
//!
//! section
//!     .insert_in_project(
//!         InsertInProject { project: Some("999".into()), before_section: Some("86".into()), ..Default::default() },
//!         &Options::new(),
//!     )
//!     .await?;
//!
//! let all = Section::find_by_project(
//!     &client,
//!     SectionList { project: Some("999".into()), ..Default::default() },
//!     &Options::new().fields(&["name"]),
//! )
//! .await?
//! .collect_all()
//! .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes validate on construction and missing
//!   arguments are reported before any request is sent
//! - **Thread-safe**: clients and errors are `Send + Sync`
//! - **Async-first**: designed for the Tokio runtime
//! - **No logging setup**: the SDK emits `tracing` events and leaves
//!   subscribers to the application

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AsanaConfig, AsanaConfigBuilder, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    AsanaClient, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    Transport,
};

// Re-export the resource layer's core types
pub use rest::{Collection, Options, Params, Resource, ResourceError};
