#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tarefas_client::error::ClientError;
use tarefas_client::memory::MemoryProjectStore;
use tarefas_client::resource::ProjectResource;
use tarefas_core::filter::ProjectFilter;
use tarefas_core::project::{Project, ProjectDraft};
use tarefas_core::types::ProjectId;
use tokio::sync::{Notify, Semaphore};

/// Resource wrapper that holds every call at a gate until the test releases
/// it, so intermediate manager states can be observed.
pub struct GatedResource {
    inner: Arc<MemoryProjectStore>,
    gate: Semaphore,
    entered: Notify,
}

impl GatedResource {
    pub fn new(inner: Arc<MemoryProjectStore>) -> Arc<Self> {
        Arc::new(Self {
            inner,
            gate: Semaphore::new(0),
            entered: Notify::new(),
        })
    }

    /// Wait until a call is parked at the gate.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let `n` parked (or future) calls through.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    async fn pass(&self) {
        self.entered.notify_one();
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

#[async_trait]
impl ProjectResource for GatedResource {
    async fn list(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>, ClientError> {
        self.pass().await;
        self.inner.list(filter).await
    }

    async fn get(&self, id: &ProjectId) -> Result<Project, ClientError> {
        self.pass().await;
        self.inner.get(id).await
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        self.pass().await;
        self.inner.create(draft).await
    }

    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<Project, ClientError> {
        self.pass().await;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ClientError> {
        self.pass().await;
        self.inner.delete(id).await
    }
}

pub fn fixture_store() -> Arc<MemoryProjectStore> {
    Arc::new(MemoryProjectStore::with_fixtures())
}
