//! Collaborative projects.

use serde_json::json;
use unilink_core::Result;
use unilink_core::types::{NewProject, Project, ProjectFilter};
use unilink_reqwest::ApiClient;

use crate::TRACING_TARGET_PROJECT;

/// Wraps the `/projects` resource family.
#[derive(Debug, Clone)]
pub struct ProjectService {
    client: ApiClient,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists projects matching the filter.
    pub async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>> {
        self.client.get_with_query("/projects", filter).await
    }

    /// Fetches a single project.
    pub async fn get(&self, id: &str) -> Result<Project> {
        self.client.get(&format!("/projects/{id}")).await
    }

    /// Creates a project owned by the authenticated account.
    pub async fn create(&self, project: &NewProject) -> Result<Project> {
        self.client.post("/projects", project).await
    }

    /// Joins a project and returns its updated state.
    pub async fn join(&self, id: &str) -> Result<Project> {
        let project: Project = self
            .client
            .post(&format!("/projects/{id}/join"), &json!({}))
            .await?;
        tracing::info!(
            target: TRACING_TARGET_PROJECT,
            project_id = %project.id,
            members = project.members.len(),
            "Joined project"
        );
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use unilink_reqwest::{ApiConfig, MemoryTokenStore};
    use unilink_test::MockBackend;

    use super::*;

    fn service(backend: &MockBackend) -> ProjectService {
        let client =
            ApiClient::new(ApiConfig::new(backend.url()), MemoryTokenStore::with_token("t"))
                .unwrap();
        ProjectService::new(client)
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let backend = MockBackend::start().await.unwrap();
        let projects = service(&backend)
            .list(&ProjectFilter::default())
            .await
            .unwrap();
        assert_eq!(projects.len(), 2);

        let project = service(&backend).get("p-1").await.unwrap();
        assert_eq!(project.title, "Campus Marketplace");
        assert_eq!(project.tech_stack, vec!["Rust", "React"]);
    }

    #[tokio::test]
    async fn test_join_adds_member() {
        let backend = MockBackend::start().await.unwrap();
        let project = service(&backend).join("p-1").await.unwrap();
        assert!(project.members.iter().any(|m| m == "u-1"));

        let request = backend.last_request().unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.authorization.as_deref(), Some("Bearer t"));
    }

    #[tokio::test]
    async fn test_join_missing_project() {
        let backend = MockBackend::start().await.unwrap();
        let err = service(&backend).join("p-404").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
