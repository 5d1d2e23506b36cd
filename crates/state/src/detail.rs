//! Single-project view state.
//!
//! ```text
//! Loading -> Found { Idle }
//!         -> NotFound              (404)
//!         -> LoadFailed            (any other failure, retryable)
//!
//! Found { Idle } -> ConfirmingDelete -> Pending -> Deleted (only back to list)
//!                        |                 |
//!                        +-> Idle          +-> Idle (failure, error shown)
//! ```
//!
//! While a delete is pending every action is disabled.

use tarefas_client::error::ClientError;
use tarefas_client::resource::SharedResource;
use tarefas_core::presentation::StatusBadge;
use tarefas_core::project::Project;
use tarefas_core::routes::Route;
use tarefas_core::types::ProjectId;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::session::unless_cancelled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Idle,
    /// Delete requested, waiting for the user to confirm.
    ConfirmingDelete,
    /// Delete request in flight.
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Found {
        project: Project,
        action: DetailAction,
        /// Last failed action on the loaded record.
        error: Option<ClientError>,
    },
    NotFound,
    LoadFailed(ClientError),
    /// The record was removed by this view. Terminal.
    Deleted,
}

/// Which controls are enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailActions {
    pub back_to_list: bool,
    pub edit: bool,
    pub delete: bool,
    pub retry: bool,
}

impl DetailState {
    pub fn project(&self) -> Option<&Project> {
        match self {
            DetailState::Found { project, .. } => Some(project),
            _ => None,
        }
    }

    pub fn badge(&self) -> Option<StatusBadge> {
        self.project().map(|p| p.status.badge())
    }

    pub fn action(&self) -> Option<DetailAction> {
        match self {
            DetailState::Found { action, .. } => Some(*action),
            _ => None,
        }
    }

    pub fn actions(&self) -> DetailActions {
        match self {
            DetailState::Loading | DetailState::NotFound | DetailState::Deleted => DetailActions {
                back_to_list: true,
                ..DetailActions::default()
            },
            DetailState::LoadFailed(_) => DetailActions {
                back_to_list: true,
                retry: true,
                ..DetailActions::default()
            },
            DetailState::Found { action, .. } => match action {
                DetailAction::Idle => DetailActions {
                    back_to_list: true,
                    edit: true,
                    delete: true,
                    retry: false,
                },
                DetailAction::ConfirmingDelete => DetailActions {
                    back_to_list: true,
                    delete: true,
                    ..DetailActions::default()
                },
                DetailAction::Pending => DetailActions::default(),
            },
        }
    }
}

/// Result of [`ProjectDetailManager::confirm_delete`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted { next: Route },
    Failed(ClientError),
    /// No confirmed delete was waiting, nothing was sent.
    Ignored,
    /// The manager was torn down before the response arrived.
    Discarded,
}

pub struct ProjectDetailManager {
    id: ProjectId,
    resource: SharedResource,
    state: watch::Sender<DetailState>,
    cancel: CancellationToken,
}

impl ProjectDetailManager {
    pub fn new(resource: SharedResource, id: ProjectId, cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(DetailState::Loading);
        Self {
            id,
            resource,
            state,
            cancel,
        }
    }

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Fetch the record. Only acts while `Loading`.
    pub async fn load(&mut self) {
        if self.cancel.is_cancelled() || *self.state.borrow() != DetailState::Loading {
            return;
        }

        let Some(result) = unless_cancelled(&self.cancel, self.resource.get(&self.id)).await else {
            tracing::debug!(project_id = %self.id, "Detail load abandoned after teardown");
            return;
        };

        let next = match result {
            Ok(project) => DetailState::Found {
                project,
                action: DetailAction::Idle,
                error: None,
            },
            Err(error) if error.is_not_found() => {
                tracing::info!(project_id = %self.id, "Project not found");
                DetailState::NotFound
            }
            Err(error) => {
                tracing::warn!(project_id = %self.id, error = %error, "Failed to load project");
                DetailState::LoadFailed(error)
            }
        };
        self.state.send_replace(next);
    }

    /// Retry after a load failure.
    pub async fn retry(&mut self) {
        let retried = self.state.send_if_modified(|state| {
            if matches!(state, DetailState::LoadFailed(_)) {
                *state = DetailState::Loading;
                true
            } else {
                false
            }
        });
        if retried {
            self.load().await;
        }
    }

    pub fn edit(&self) -> Option<Route> {
        if !self.state().actions().edit {
            return None;
        }
        Route::edit_project(&self.id)
            .inspect_err(|e| tracing::warn!(error = %e, "Cannot edit project"))
            .ok()
    }

    pub fn back_to_list(&self) -> Option<Route> {
        self.state().actions().back_to_list.then_some(Route::Projects)
    }

    /// Ask for delete confirmation.
    pub fn request_delete(&mut self) -> bool {
        self.transition_action(DetailAction::Idle, DetailAction::ConfirmingDelete)
    }

    pub fn cancel_delete(&mut self) -> bool {
        self.transition_action(DetailAction::ConfirmingDelete, DetailAction::Idle)
    }

    /// Send the confirmed delete.
    pub async fn confirm_delete(&mut self) -> DeleteOutcome {
        if self.cancel.is_cancelled() {
            return DeleteOutcome::Discarded;
        }
        if !self.transition_action(DetailAction::ConfirmingDelete, DetailAction::Pending) {
            return DeleteOutcome::Ignored;
        }
        self.state.send_modify(|state| {
            if let DetailState::Found { error, .. } = state {
                *error = None;
            }
        });

        let Some(result) = unless_cancelled(&self.cancel, self.resource.delete(&self.id)).await
        else {
            tracing::debug!(project_id = %self.id, "Delete abandoned after teardown");
            return DeleteOutcome::Discarded;
        };

        match result {
            Ok(()) => {
                tracing::info!(project_id = %self.id, "Project deleted");
                self.state.send_replace(DetailState::Deleted);
                DeleteOutcome::Deleted {
                    next: Route::Projects,
                }
            }
            Err(failure) => {
                tracing::warn!(project_id = %self.id, error = %failure, "Failed to delete project");
                self.state.send_modify(|state| {
                    if let DetailState::Found { action, error, .. } = state {
                        *action = DetailAction::Idle;
                        *error = Some(failure.clone());
                    }
                });
                DeleteOutcome::Failed(failure)
            }
        }
    }

    // ---- private helpers ----

    fn transition_action(&mut self, from: DetailAction, to: DetailAction) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        self.state.send_if_modified(|state| match state {
            DetailState::Found { action, .. } if *action == from => {
                *action = to;
                true
            }
            _ => false,
        })
    }
}
