//! Free-text filtering and aggregate counts over a project collection.
//!
//! Both are recomputed from the current items on every call; nothing here
//! caches.

use crate::project::{Project, ProjectStatus};

/// Whether `project` matches a free-text query.
///
/// The query matches when it is a case-insensitive substring of the name or
/// the prefix. The empty query matches everything.
pub fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    project.name.to_lowercase().contains(&needle) || project.prefix.to_lowercase().contains(&needle)
}

/// The subset of `items` matching `query`, in collection order.
pub fn filter_projects<'a>(items: &'a [Project], query: &str) -> Vec<&'a Project> {
    items.iter().filter(|p| matches_query(p, query)).collect()
}

/// Criteria accepted by a resource `list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Free-text query, see [`matches_query`].
    pub query: String,
    /// Restrict to a single status.
    pub status: Option<ProjectStatus>,
}

impl ProjectFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s) && matches_query(project, &self.query)
    }

    /// Keep only the matching projects.
    pub fn apply(&self, items: Vec<Project>) -> Vec<Project> {
        items.into_iter().filter(|p| self.matches(p)).collect()
    }
}

/// Aggregate counts shown above the project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub completed: usize,
}

impl ProjectStats {
    pub fn from_projects(items: &[Project]) -> Self {
        items.iter().fold(
            Self {
                total: items.len(),
                ..Self::default()
            },
            |mut stats, p| {
                match p.status {
                    ProjectStatus::Active => stats.active += 1,
                    ProjectStatus::Paused => stats.paused += 1,
                    ProjectStatus::Completed => stats.completed += 1,
                }
                stats
            },
        )
    }
}
