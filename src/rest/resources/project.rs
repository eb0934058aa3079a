//! Project resource implementation.

use crate::clients::{HttpMethod, Transport};
use crate::rest::resources::{Section, SectionList};
use crate::rest::{
    required, Collection, Options, Params, Resource, ResourceError, ResourceOperation,
    ResourcePath, ResourceRef, ResourceType,
};

/// Marker type for projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project;

impl ResourceType for Project {
    const NAME: &'static str = "project";
    const PLURAL: &'static str = "projects";
    const FIELDS: &'static [&'static str] = &[
        "gid",
        "resource_type",
        "name",
        "archived",
        "color",
        "created_at",
        "modified_at",
        "notes",
        "owner",
        "public",
        "team",
        "workspace",
    ];
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["gid"],
            "projects/{gid}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::List,
            &["workspace"],
            "workspaces/{workspace}/projects",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["workspace"],
            "workspaces/{workspace}/projects",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["gid"],
            "projects/{gid}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["gid"],
            "projects/{gid}",
        ),
    ];
}

/// Arguments for [`Project::create_in_workspace`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCreate {
    /// Workspace to create the project in. Required.
    pub workspace: Option<String>,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
    /// Any other body fields, such as `team` or `public`.
    pub data: Params,
}

/// Arguments for [`Project::find_by_workspace`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectList {
    /// Workspace whose projects to list. Required.
    pub workspace: Option<String>,
    /// Only archived (`true`) or only active (`false`) projects.
    pub archived: Option<bool>,
    pub per_page: Option<u32>,
    pub data: Params,
}

/// Arguments for `Resource<Project>::update`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub color: Option<String>,
    pub archived: Option<bool>,
    pub data: Params,
}

impl Project {
    /// `GET /projects/{id}`
    ///
    /// # Errors
    ///
    /// Returns any transport or parsing error.
    pub async fn find_by_id<'c>(
        client: &'c dyn Transport,
        id: &str,
        options: &Options,
    ) -> Result<Resource<'c, Self>, ResourceError> {
        Resource::find(client, id, options).await
    }

    /// Lists the projects of a workspace.
    ///
    /// `GET /workspaces/{workspace}/projects`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if `workspace` is missing.
    pub async fn find_by_workspace<'c>(
        client: &'c dyn Transport,
        params: ProjectList,
        options: &Options,
    ) -> Result<Collection<'c, Self>, ResourceError> {
        let workspace = required("workspace", params.workspace)?;

        let mut query = params.data;
        query.insert("archived", params.archived);

        Resource::list(
            client,
            &[("workspace", workspace.as_str())],
            &query,
            params.per_page,
            options,
        )
        .await
    }

    /// Creates a project in a workspace.
    ///
    /// `POST /workspaces/{workspace}/projects`
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if `workspace` is missing.
    pub async fn create_in_workspace<'c>(
        client: &'c dyn Transport,
        params: ProjectCreate,
        options: &Options,
    ) -> Result<Resource<'c, Self>, ResourceError> {
        let workspace = required("workspace", params.workspace)?;

        let mut body = params.data;
        body.insert("name", params.name);
        body.insert("notes", params.notes);
        body.insert("color", params.color);

        Resource::create(client, &[("workspace", workspace.as_str())], &body, options).await
    }
}

impl<'c> Resource<'c, Project> {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(serde_json::Value::as_str)
    }

    /// Returns `true` if the record says the project is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.get("archived")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    /// # Errors
    ///
    /// Returns [`ResourceError::FieldAbsent`] if the record has no workspace.
    pub fn workspace(&self) -> Result<ResourceRef, ResourceError> {
        self.reference("workspace")
    }

    /// Sparse update, refreshed in place from the response.
    ///
    /// `PUT /projects/{gid}`. Edits made by others since this project was
    /// fetched are not detected.
    ///
    /// # Errors
    ///
    /// Returns any transport or parsing error; the project is unchanged.
    pub async fn update(
        &mut self,
        params: ProjectUpdate,
        options: &Options,
    ) -> Result<&mut Self, ResourceError> {
        let mut body = params.data;
        body.insert("name", params.name);
        body.insert("notes", params.notes);
        body.insert("color", params.color);
        body.insert("archived", params.archived);

        self.update_fields(&body, options).await
    }

    /// Lists this project's sections.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the project has no `gid`.
    pub async fn sections(
        &self,
        per_page: Option<u32>,
        options: &Options,
    ) -> Result<Collection<'c, Section>, ResourceError> {
        let gid = required("gid", self.gid())?;

        Section::find_by_project(
            self.client(),
            SectionList {
                project: Some(gid.to_string()),
                per_page,
                ..Default::default()
            },
            options,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testing::StubTransport;
    use crate::rest::Record;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_by_workspace_keeps_archived_false() {
        let stub = StubTransport::new();
        stub.respond(json!({"data": [{"gid": "9", "name": "Roadmap"}]}));

        let projects = Project::find_by_workspace(
            &stub,
            ProjectList {
                workspace: Some("1".into()),
                archived: Some(false),
                ..Default::default()
            },
            &Options::new(),
        )
        .await
        .unwrap()
        .collect_all()
        .await
        .unwrap();

        assert_eq!(projects[0].name(), Some("Roadmap"));
        let calls = stub.calls();
        assert_eq!(calls[0].path, "workspaces/1/projects");
        assert_eq!(
            calls[0].params,
            Params::new().with("archived", false).with("limit", 20)
        );
    }

    #[tokio::test]
    async fn test_create_in_workspace_requires_workspace() {
        let stub = StubTransport::new();

        let result = Project::create_in_workspace(&stub, ProjectCreate::default(), &Options::new()).await;

        assert!(result.unwrap_err().to_string().contains("'workspace'"));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_create_in_workspace_posts_to_workspace() {
        let stub = StubTransport::new();
        stub.respond(json!({"data": {"gid": "9", "name": "Roadmap", "workspace": {"gid": "1"}}}));

        let project = Project::create_in_workspace(
            &stub,
            ProjectCreate {
                workspace: Some("1".into()),
                name: Some("Roadmap".into()),
                ..Default::default()
            },
            &Options::new(),
        )
        .await
        .unwrap();

        assert_eq!(project.workspace().unwrap().gid, "1");
        assert!(!project.is_archived());
        assert_eq!(stub.calls()[0].body, Some(Params::new().with("name", "Roadmap")));
    }

    #[tokio::test]
    async fn test_update_archives() {
        let stub = StubTransport::new();
        stub.respond(json!({"data": {"gid": "9", "archived": true}}));
        let mut project: Resource<'_, Project> =
            Resource::new(Record::try_from(json!({"gid": "9"})).unwrap(), &stub);

        project
            .update(
                ProjectUpdate {
                    archived: Some(true),
                    ..Default::default()
                },
                &Options::new(),
            )
            .await
            .unwrap();

        assert!(project.is_archived());
        assert_eq!(stub.calls()[0].path, "projects/9");
        assert_eq!(stub.calls()[0].body, Some(Params::new().with("archived", true)));
    }

    #[tokio::test]
    async fn test_sections_lists_through_the_same_client() {
        let stub = StubTransport::new();
        stub.respond(json!({"data": [{"gid": "1", "resource_type": "section"}]}));
        let project: Resource<'_, Project> =
            Resource::new(Record::try_from(json!({"gid": "9"})).unwrap(), &stub);

        let sections = project
            .sections(Some(50), &Options::new())
            .await
            .unwrap()
            .collect_all()
            .await
            .unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].resource_type(), "section");
        let calls = stub.calls();
        assert_eq!(calls[0].path, "projects/9/sections");
        assert_eq!(calls[0].params.get("limit"), Some(&json!(50)));
    }

    #[tokio::test]
    async fn test_delete_uses_project_path() {
        let stub = StubTransport::new();
        let project: Resource<'_, Project> =
            Resource::new(Record::try_from(json!({"gid": "9"})).unwrap(), &stub);

        assert!(project.delete().await.unwrap());
        assert_eq!(stub.calls()[0].path, "projects/9");
    }
}
