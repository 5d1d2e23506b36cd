//! In-memory stand-in for the remote project collection.
//!
//! [`MemoryProjectStore`] behaves like the remote at the resource boundary:
//! it assigns identifiers and timestamps on create, answers missing ids
//! with a 404 [`ClientError::Remote`], and lists newest first. It also
//! supports queued failure injection so callers can exercise their error
//! paths.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tarefas_core::filter::ProjectFilter;
use tarefas_core::project::{Project, ProjectDraft, ProjectStatus};
use tarefas_core::types::ProjectId;
use tokio::sync::Mutex;

use crate::error::ClientError;
use crate::resource::ProjectResource;

/// Process-local project collection.
#[derive(Default)]
pub struct MemoryProjectStore {
    /// Newest first.
    projects: Mutex<Vec<Project>>,
    /// Failures returned, in order, by the next calls instead of touching
    /// the collection.
    failures: Mutex<VecDeque<ClientError>>,
    calls: AtomicUsize,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing records (kept in the given order).
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
            ..Self::default()
        }
    }

    /// Seed the store with the sample dashboard projects.
    pub fn with_fixtures() -> Self {
        Self::with_projects(fixtures())
    }

    /// Make the next call fail with `error`. Queued failures are consumed
    /// one per call.
    pub async fn fail_next(&self, error: ClientError) {
        self.failures.lock().await.push_back(error);
    }

    /// Number of resource calls received so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored records.
    pub async fn snapshot(&self) -> Vec<Project> {
        self.projects.lock().await.clone()
    }

    /// Count the call and pop an injected failure, if one is queued.
    async fn begin_call(&self, operation: &'static str) -> Result<(), ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failures.lock().await.pop_front() {
            Some(error) => {
                tracing::debug!(operation, error = %error, "Returning injected failure");
                Err(error)
            }
            None => Ok(()),
        }
    }
}

fn not_found(id: &ProjectId) -> ClientError {
    ClientError::not_found(format!("project {id} not found"))
}

fn description_of(draft: &ProjectDraft) -> Option<String> {
    if draft.description.is_empty() {
        None
    } else {
        Some(draft.description.clone())
    }
}

#[async_trait]
impl ProjectResource for MemoryProjectStore {
    async fn list(&self, filter: Option<&ProjectFilter>) -> Result<Vec<Project>, ClientError> {
        self.begin_call("list").await?;
        let projects = self.projects.lock().await.clone();
        Ok(match filter {
            Some(filter) => filter.apply(projects),
            None => projects,
        })
    }

    async fn get(&self, id: &ProjectId) -> Result<Project, ClientError> {
        self.begin_call("get").await?;
        self.projects
            .lock()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        self.begin_call("create").await?;
        let project = Project {
            id: ProjectId::new(uuid::Uuid::new_v4().to_string()),
            name: draft.name.clone(),
            description: description_of(draft),
            prefix: draft.prefix.clone(),
            status: draft.status,
            created_at: Some(Utc::now()),
            tasks_count: None,
            completed_tasks: None,
        };
        self.projects.lock().await.insert(0, project.clone());
        Ok(project)
    }

    async fn update(&self, id: &ProjectId, draft: &ProjectDraft) -> Result<Project, ClientError> {
        self.begin_call("update").await?;
        let mut projects = self.projects.lock().await;
        let project = projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| not_found(id))?;

        project.name = draft.name.clone();
        project.description = description_of(draft);
        project.prefix = draft.prefix.clone();
        project.status = draft.status;
        Ok(project.clone())
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ClientError> {
        self.begin_call("delete").await?;
        let mut projects = self.projects.lock().await;
        let before = projects.len();
        projects.retain(|p| &p.id != id);
        if projects.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Sample projects shown by the dashboard in demos.
pub fn fixtures() -> Vec<Project> {
    vec![
        sample(
            "fixture-web",
            "Website Redesign",
            "New marketing site and design system",
            "WEB",
            ProjectStatus::Active,
            20,
            Some((24, 18)),
        ),
        sample(
            "fixture-mob",
            "Mobile App",
            "Companion app for field teams",
            "MOB",
            ProjectStatus::Paused,
            14,
            Some((12, 3)),
        ),
        sample(
            "fixture-api",
            "Public API",
            "Versioned REST API for integrations",
            "API",
            ProjectStatus::Completed,
            6,
            None,
        ),
    ]
}

fn sample(
    id: &str,
    name: &str,
    description: &str,
    prefix: &str,
    status: ProjectStatus,
    day: u32,
    tasks: Option<(u32, u32)>,
) -> Project {
    Project {
        id: ProjectId::new(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        prefix: prefix.to_string(),
        status,
        created_at: Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).single(),
        tasks_count: tasks.map(|(total, _)| total),
        completed_tasks: tasks.map(|(_, done)| done),
    }
}
