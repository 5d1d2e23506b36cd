//! REST client for the remote `/projects` collection.
//!
//! ```text
//! GET    /projects        -> list
//! POST   /projects        -> create
//! GET    /projects/{id}   -> get
//! PUT    /projects/{id}   -> update
//! DELETE /projects/{id}   -> delete
//! ```

use async_trait::async_trait;
use tarefas_core::filter::ProjectFilter;
use tarefas_core::project::{Project, ProjectDraft};
use tarefas_core::types::ProjectId;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::resource::ProjectResource;

/// HTTP client for a single remote instance.
pub struct HttpProjectApi {
    client: reqwest::Client,
    api_url: String,
    /// `{api_url}/projects`; item URLs append one encoded segment to it.
    collection: reqwest::Url,
}

impl HttpProjectApi {
    /// Build a client from configuration, applying the request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Self::with_client(client, config.api_url.clone())
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    ///
    /// * `api_url` - Base HTTP URL without a trailing slash, e.g.
    ///   `http://host:8000`.
    pub fn with_client(client: reqwest::Client, api_url: String) -> Result<Self, ClientError> {
        let invalid = || ClientError::Network(format!("invalid API URL {api_url:?}"));
        let mut collection = reqwest::Url::parse(&api_url).map_err(|_| invalid())?;
        collection
            .path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .push("projects");
        Ok(Self {
            client,
            api_url,
            collection,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn collection_url(&self) -> reqwest::Url {
        self.collection.clone()
    }

    /// URL of a single record. The id is pushed as one percent-encoded path
    /// segment, so `?`, `#` and `/` inside it never leave that segment.
    ///
    /// Ids that cannot be a path segment at all (empty, `.` or `..`) name no
    /// record and fail as not found without a request.
    fn item_url(&self, id: &ProjectId) -> Result<reqwest::Url, ClientError> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(ClientError::not_found(format!("project {:?} not found", id.as_str())));
        }
        let mut url = self.collection_url();
        url.path_segments_mut()
            .map_err(|()| ClientError::Network(format!("invalid API URL {:?}", self.api_url)))?
            .push(id.as_str());
        Ok(url)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ClientError::Remote`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), body = %body, "Remote rejected request");
            return Err(ClientError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ClientError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectResource for HttpProjectApi {
    /// The endpoint takes no query parameters, so the filter is applied to
    /// the fetched collection.
    async fn list(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>, ClientError> {
        let url = self.collection_url();
        tracing::debug!(method = "GET", url = %url, "Listing projects");

        let response = self.client.get(url).send().await?;
        let projects: Vec<Project> = Self::parse_response(response).await?;

        Ok(match filter {
            Some(filter) => filter.apply(projects),
            None => projects,
        })
    }

    async fn get(&self, id: &ProjectId) -> Result<Project, ClientError> {
        let url = self.item_url(id)?;
        tracing::debug!(method = "GET", url = %url, "Fetching project");

        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let url = self.collection_url();
        tracing::debug!(method = "POST", url = %url, name = %draft.name, "Creating project");

        let response = self.client.post(url).json(draft).send().await?;
        let project: Project = Self::parse_response(response).await?;

        tracing::info!(project_id = %project.id, prefix = %project.prefix, "Project created");
        Ok(project)
    }

    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let url = self.item_url(id)?;
        tracing::debug!(method = "PUT", url = %url, "Updating project");

        let response = self.client.put(url).json(draft).send().await?;
        let project: Project = Self::parse_response(response).await?;

        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ClientError> {
        let url = self.item_url(id)?;
        tracing::debug!(method = "DELETE", url = %url, "Deleting project");

        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await?;

        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }
}
