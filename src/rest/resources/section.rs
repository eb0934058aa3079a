//! Section resource implementation.
//!
//! A section is a subdivision of a project: a column on a board or a header
//! in a list. Sections belong to exactly one project and hold tasks.
//!
//! # Example
//!
//! ```rust,ignore
//! use asana_api::rest::Options;
//! use asana_api::rest::resources::{AddTask, Section, SectionCreate, SectionUpdate};
//!
//! let mut section = Section::create_in_project(
//!     &client,
//!     SectionCreate {
//!         project: Some("999".into()),
//!         name: Some("Todo".into()),
//!         ..Default::default()
//!     },
//!     &Options::new(),
//! )
//! .await?;
//!
//! section
//!     .add_task(AddTask { task: Some("1234".into()), ..Default::default() }, &Options::new())
//!     .await?;
//!
//! section
//!     .update(SectionUpdate { name: Some("Doing".into()), ..Default::default() }, &Options::new())
//!     .await?;
//! ```

use chrono::{DateTime, Utc};

use crate::clients::{HttpMethod, Transport};
use crate::rest::{
    required, Collection, Options, Params, Resource, ResourceError, ResourceOperation,
    ResourcePath, ResourceRef, ResourceType,
};

/// Marker type for sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section;

impl ResourceType for Section {
    const NAME: &'static str = "section";
    const PLURAL: &'static str = "sections";
    const FIELDS: &'static [&'static str] = &[
        "gid",
        "resource_type",
        "name",
        "created_at",
        "project",
        "projects",
    ];
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["gid"],
            "sections/{gid}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["project"],
            "projects/{project}/sections",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["project"],
            "projects/{project}/sections",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["gid"],
            "sections/{gid}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["gid"],
            "sections/{gid}",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("addTask"),
            &["gid"],
            "sections/{gid}/addTask",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Action("insert"),
            &["project"],
            "projects/{project}/sections/insert",
        ),
    ];
}

/// Arguments for [`Section::create_in_project`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionCreate {
    /// Project to create the section in. Required.
    pub project: Option<String>,
    /// Section name. Required.
    pub name: Option<String>,
    /// Existing section to place the new one before.
    pub insert_before: Option<String>,
    /// Existing section to place the new one after.
    pub insert_after: Option<String>,
    /// Any other body fields.
    pub data: Params,
}

/// Arguments for [`Section::find_by_project`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionList {
    /// Project whose sections to list. Required.
    pub project: Option<String>,
    /// Page size; defaults to 20.
    pub per_page: Option<u32>,
    /// Any other query parameters.
    pub data: Params,
}

/// Arguments for `Resource<Section>::update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionUpdate {
    /// New name.
    pub name: Option<String>,
    /// Move before this section.
    pub insert_before: Option<String>,
    /// Move after this section.
    pub insert_after: Option<String>,
    /// Any other body fields.
    pub data: Params,
}

/// Arguments for `Resource<Section>::add_task`.
///
/// `insert_before` and `insert_after` name tasks already in the section and
/// are meant to be used one at a time. Both are forwarded if both are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTask {
    /// Task to add. Required.
    pub task: Option<String>,
    /// Place the task before this task.
    pub insert_before: Option<String>,
    /// Place the task after this task.
    pub insert_after: Option<String>,
    /// Any other body fields.
    pub data: Params,
}

/// Arguments for `Resource<Section>::insert_in_project`.
///
/// `before_section` and `after_section` are meant to be used one at a time.
/// Both are forwarded if both are set; the server decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertInProject {
    /// Project that holds the section. Required.
    pub project: Option<String>,
    /// Move before this section.
    pub before_section: Option<String>,
    /// Move after this section.
    pub after_section: Option<String>,
    /// Any other body fields.
    pub data: Params,
}

impl Section {
    /// Creates a section in a project.
    ///
    /// `POST /projects/{project}/sections`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] without sending anything if
    /// `project` or `name` is missing.
    pub async fn create_in_project<'c>(
        client: &'c dyn Transport,
        params: SectionCreate,
        options: &Options,
    ) -> Result<Resource<'c, Self>, ResourceError> {
        let project = required("project", params.project)?;
        let name = required("name", params.name)?;

        let mut body = params.data;
        body.insert("name", name);
        body.insert("insert_before", params.insert_before);
        body.insert("insert_after", params.insert_after);

        Resource::create(client, &[("project", project.as_str())], &body, options).await
    }

    /// Fetches a section by id.
    ///
    /// `GET /sections/{id}`
    ///
    /// # Errors
    ///
    /// Returns the transport error, for instance a 404 when no such section
    /// exists.
    pub async fn find_by_id<'c>(
        client: &'c dyn Transport,
        id: &str,
        options: &Options,
    ) -> Result<Resource<'c, Self>, ResourceError> {
        Resource::find(client, id, options).await
    }

    /// Lists the sections of a project.
    ///
    /// `GET /projects/{project}/sections`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] without sending anything if
    /// `project` is missing.
    pub async fn find_by_project<'c>(
        client: &'c dyn Transport,
        params: SectionList,
        options: &Options,
    ) -> Result<Collection<'c, Self>, ResourceError> {
        let project = required("project", params.project)?;

        Resource::list(
            client,
            &[("project", project.as_str())],
            &params.data,
            params.per_page,
            options,
        )
        .await
    }
}

impl<'c> Resource<'c, Section> {
    /// Returns the section name, if present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(serde_json::Value::as_str)
    }

    /// Returns the project this section belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldAbsent`] if the record has no project.
    pub fn project(&self) -> Result<ResourceRef, ResourceError> {
        self.reference("project")
    }

    /// Returns the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::FieldAbsent`] if the record has no
    /// `created_at`.
    pub fn created_at(&self) -> Result<DateTime<Utc>, ResourceError> {
        self.timestamp("created_at")
    }

    /// Renames or moves the section and refreshes it from the response.
    ///
    /// `PUT /sections/{gid}`. Only the fields that are set are sent. Edits
    /// made by others since this section was fetched are not detected.
    ///
    /// # Errors
    ///
    /// Returns any transport or parsing error; the section is unchanged.
    pub async fn update(
        &mut self,
        params: SectionUpdate,
        options: &Options,
    ) -> Result<&mut Self, ResourceError> {
        let mut body = params.data;
        body.insert("name", params.name);
        body.insert("insert_before", params.insert_before);
        body.insert("insert_after", params.insert_after);

        self.update_fields(&body, options).await
    }

    /// Adds a task to this section, removing it from other sections of the
    /// same project.
    ///
    /// `POST /sections/{gid}/addTask`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] without sending anything if `task`
    /// is missing.
    pub async fn add_task(&self, params: AddTask, options: &Options) -> Result<bool, ResourceError> {
        let task = required("task", params.task)?;
        let gid = required("gid", self.gid())?;

        let mut body = params.data;
        body.insert("task", task);
        body.insert("insert_before", params.insert_before);
        body.insert("insert_after", params.insert_after);

        Resource::<Section>::action(self.client(), "addTask", &[("gid", gid)], &body, options).await
    }

    /// Moves this section relative to another section of the project.
    ///
    /// `POST /projects/{project}/sections/insert`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] without sending anything if
    /// `project` is missing.
    pub async fn insert_in_project(
        &self,
        params: InsertInProject,
        options: &Options,
    ) -> Result<bool, ResourceError> {
        let project = required("project", params.project)?;
        let gid = required("gid", self.gid())?;

        let mut body = params.data;
        body.insert("section", gid);
        body.insert("before_section", params.before_section);
        body.insert("after_section", params.after_section);

        Resource::<Section>::action(
            self.client(),
            "insert",
            &[("project", project.as_str())],
            &body,
            options,
        )
        .await
    }
}
