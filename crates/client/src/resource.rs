use std::sync::Arc;

use async_trait::async_trait;
use tarefas_core::filter::ProjectFilter;
use tarefas_core::project::{Project, ProjectDraft};
use tarefas_core::types::ProjectId;

use crate::error::ClientError;

/// Create/read/update/delete/list over the remote project collection.
///
/// Implementations are stateless from the caller's point of view and are
/// shared read-only between managers. Every call reaches the backing store;
/// retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ProjectResource: Send + Sync {
    /// List projects, optionally narrowed by `filter`.
    async fn list(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>, ClientError>;

    async fn get(&self, id: &ProjectId) -> Result<Project, ClientError>;

    /// Persist a new project. The returned record carries the assigned id.
    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ClientError>;

    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<Project, ClientError>;

    async fn delete(&self, id: &ProjectId) -> Result<(), ClientError>;
}

/// Shared handle passed to every state manager.
pub type SharedResource = Arc<dyn ProjectResource>;
