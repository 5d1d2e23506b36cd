//! Project list view state.
//!
//! Holds the fetched collection plus the local search query and view mode.
//! The collection is fetched once on mount; query and view-mode changes are
//! purely local and never hit the remote.

use tarefas_client::error::ClientError;
use tarefas_client::resource::SharedResource;
use tarefas_core::filter::{filter_projects, ProjectStats};
use tarefas_core::project::Project;
use tarefas_core::routes::Route;
use tarefas_core::types::ProjectId;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::session::unless_cancelled;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// What the list view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPresentation {
    Loading,
    /// The collection itself is empty.
    Empty,
    /// Records exist but none match the query.
    NoMatches,
    Items,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub query: String,
    pub view_mode: ViewMode,
    /// Last fetch failure. The collection is empty while this is set.
    pub error: Option<ClientError>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            query: String::new(),
            view_mode: ViewMode::default(),
            error: None,
        }
    }
}

impl ListState {
    /// Items matching the current query, in collection order.
    pub fn visible(&self) -> Vec<&Project> {
        filter_projects(&self.items, &self.query)
    }

    /// Status counters over the whole collection, ignoring the query.
    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.items)
    }

    pub fn presentation(&self) -> ListPresentation {
        if self.loading {
            ListPresentation::Loading
        } else if self.items.is_empty() {
            ListPresentation::Empty
        } else if self.visible().is_empty() {
            ListPresentation::NoMatches
        } else {
            ListPresentation::Items
        }
    }
}

pub struct ProjectListManager {
    resource: SharedResource,
    state: watch::Sender<ListState>,
    cancel: CancellationToken,
    mounted: bool,
}

impl ProjectListManager {
    pub fn new(resource: SharedResource, cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(ListState::default());
        Self {
            resource,
            state,
            cancel,
            mounted: false,
        }
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.subscribe()
    }

    /// Tear the manager down. In-flight fetches are abandoned.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Initial fetch. Only the first call reaches the remote.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.fetch().await;
    }

    /// Re-fetch the collection, e.g. after returning from a form.
    pub async fn refresh(&mut self) {
        self.fetch().await;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        if self.cancel.is_cancelled() {
            return;
        }
        let query = query.into();
        self.state.send_modify(|state| state.query = query);
    }

    /// Switch between grid and list rendering. Never re-fetches.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.send_if_modified(|state| {
            let changed = state.view_mode != mode;
            state.view_mode = mode;
            changed
        });
    }

    /// Detail route for a listed project; `None` when the id cannot be routed.
    pub fn open(&self, id: &ProjectId) -> Option<Route> {
        Route::project_detail(id)
            .inspect_err(|e| tracing::warn!(error = %e, "Cannot open project"))
            .ok()
    }

    pub fn new_project(&self) -> Route {
        Route::NewProject
    }

    // ---- private helpers ----

    async fn fetch(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        self.state.send_modify(|state| state.loading = true);

        let Some(result) = unless_cancelled(&self.cancel, self.resource.list(None)).await else {
            tracing::debug!("List fetch abandoned after teardown");
            return;
        };

        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Projects loaded");
                self.state.send_modify(|state| {
                    state.items = items;
                    state.loading = false;
                    state.error = None;
                });
            }
            Err(error) => {
                tracing::warn!(error = %error, "Failed to load projects");
                self.state.send_modify(|state| {
                    state.items.clear();
                    state.loading = false;
                    state.error = Some(error);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tarefas_client::memory::MemoryProjectStore;

    use super::*;

    fn manager(store: &Arc<MemoryProjectStore>) -> ProjectListManager {
        ProjectListManager::new(store.clone(), CancellationToken::new())
    }

    #[tokio::test]
    async fn starts_loading_then_shows_items() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        assert_eq!(list.state().presentation(), ListPresentation::Loading);

        list.mount().await;
        let state = list.state();
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.presentation(), ListPresentation::Items);
    }

    #[tokio::test]
    async fn mount_fetches_once() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        list.mount().await;
        list.mount().await;
        assert_eq!(store.call_count(), 1);

        list.refresh().await;
        assert_eq!(store.call_count(), 2);
    }

    #[tokio::test]
    async fn query_filters_locally() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        list.mount().await;

        list.set_query("API");
        let state = list.state();
        let visible: Vec<&str> = state.visible().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(visible, vec!["Public API"]);

        list.set_query("nothing like this");
        assert_eq!(list.state().presentation(), ListPresentation::NoMatches);
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn view_mode_never_refetches() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        list.mount().await;

        list.set_view_mode(ViewMode::List);
        list.set_view_mode(ViewMode::Grid);
        list.set_view_mode(ViewMode::List);
        assert_eq!(list.state().view_mode, ViewMode::List);
        assert_eq!(store.call_count(), 1);
    }

    #[tokio::test]
    async fn stats_ignore_query() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        list.mount().await;
        list.set_query("mobile");

        let stats = list.state().stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.paused, 1);
        assert_eq!(stats.completed, 1);
    }

    #[tokio::test]
    async fn failure_yields_empty_collection() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        store.fail_next(ClientError::Network("refused".into())).await;
        let mut list = manager(&store);
        list.mount().await;

        let state = list.state();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(state.error, Some(ClientError::Network("refused".into())));
        assert_eq!(state.presentation(), ListPresentation::Empty);
    }

    #[tokio::test]
    async fn torn_down_manager_does_not_fetch() {
        let store = Arc::new(MemoryProjectStore::with_fixtures());
        let mut list = manager(&store);
        list.teardown();
        list.mount().await;

        assert_eq!(store.call_count(), 0);
        assert_eq!(list.state().presentation(), ListPresentation::Loading);
    }

    #[test]
    fn navigation_intents() {
        let store = Arc::new(MemoryProjectStore::new());
        let list = manager(&store);
        let id = ProjectId::new("p1");
        assert_eq!(list.open(&id), Some(Route::ProjectDetail(id)));
        assert_eq!(list.new_project(), Route::NewProject);
        assert_eq!(list.open(&ProjectId::new("new")), None);
    }
}
