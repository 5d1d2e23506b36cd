//! Create/edit form state.
//!
//! ```text
//! create:  Editing -> Submitting -> Succeeded
//!                         |
//!                         +-> Editing (failure, fields kept)
//!
//! edit:    Loading -> Editing -> Submitting -> Succeeded
//!             |
//!             +-> Unavailable (record could not be loaded)
//! ```
//!
//! Only `Editing` accepts field changes or a submit. A second submit while
//! one is in flight is ignored, so at most one request per form is
//! outstanding.

use tarefas_client::error::ClientError;
use tarefas_client::resource::SharedResource;
use tarefas_core::error::CoreError;
use tarefas_core::project::{Project, ProjectDraft, ProjectStatus};
use tarefas_core::routes::Route;
use tarefas_core::types::ProjectId;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::session::unless_cancelled;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProjectId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fetching the record being edited.
    Loading,
    Editing,
    Submitting,
    Succeeded,
    /// The record to edit could not be loaded; only leaving is possible.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub phase: FormPhase,
    pub draft: ProjectDraft,
    /// Last load or submit failure.
    pub error: Option<ClientError>,
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.draft.is_submittable()
    }
}

/// Result of [`ProjectFormManager::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Persisted; the caller should navigate to `next`.
    Saved { project: Project, next: Route },
    /// Rejected locally, nothing was sent.
    Invalid(CoreError),
    /// The remote call failed; the draft is preserved.
    Failed(ClientError),
    /// Not in the `Editing` phase, nothing was sent.
    Ignored,
    /// The manager was torn down before the response arrived.
    Discarded,
}

pub struct ProjectFormManager {
    resource: SharedResource,
    state: watch::Sender<FormState>,
    cancel: CancellationToken,
}

impl ProjectFormManager {
    /// Form for a new project, editable immediately with default fields.
    pub fn create(resource: SharedResource, cancel: CancellationToken) -> Self {
        Self::with_state(
            resource,
            cancel,
            FormState {
                mode: FormMode::Create,
                phase: FormPhase::Editing,
                draft: ProjectDraft::default(),
                error: None,
            },
        )
    }

    /// Form for an existing project. Starts in `Loading`; call
    /// [`load`](Self::load) to populate it.
    pub fn edit(resource: SharedResource, id: ProjectId, cancel: CancellationToken) -> Self {
        Self::with_state(
            resource,
            cancel,
            FormState {
                mode: FormMode::Edit(id),
                phase: FormPhase::Loading,
                draft: ProjectDraft::default(),
                error: None,
            },
        )
    }

    fn with_state(resource: SharedResource, cancel: CancellationToken, initial: FormState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            resource,
            state,
            cancel,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Populate an edit form from the remote record.
    ///
    /// No-op for create forms or once loading has finished.
    pub async fn load(&mut self) {
        let id = {
            let state = self.state.borrow();
            match (&state.mode, state.phase) {
                (FormMode::Edit(id), FormPhase::Loading) => id.clone(),
                _ => return,
            }
        };
        if self.cancel.is_cancelled() {
            return;
        }

        let Some(result) = unless_cancelled(&self.cancel, self.resource.get(&id)).await else {
            tracing::debug!(project_id = %id, "Form load abandoned after teardown");
            return;
        };

        match result {
            Ok(project) => {
                tracing::debug!(project_id = %id, "Loaded project into form");
                let draft = ProjectDraft::from(&project);
                self.state.send_modify(|state| {
                    state.draft = draft;
                    state.phase = FormPhase::Editing;
                    state.error = None;
                });
            }
            Err(error) => {
                tracing::warn!(project_id = %id, error = %error, "Failed to load project for editing");
                self.state.send_modify(|state| {
                    state.phase = FormPhase::Unavailable;
                    state.error = Some(error);
                });
            }
        }
    }

    // ---- field updates ----

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        self.edit_draft(|draft| {
            draft.name = name;
            true
        })
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        let description = description.into();
        self.edit_draft(|draft| {
            draft.description = description;
            true
        })
    }

    pub fn set_status(&mut self, status: ProjectStatus) -> bool {
        self.edit_draft(|draft| {
            draft.status = status;
            true
        })
    }

    /// Apply prefix input. Non-letters or over-long input are rejected and
    /// the previous prefix is kept.
    pub fn set_prefix(&mut self, input: &str) -> bool {
        self.edit_draft(|draft| draft.apply_prefix_input(input))
    }

    /// Validate and persist the draft.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.cancel.is_cancelled() {
            return SubmitOutcome::Discarded;
        }

        let (mode, draft) = {
            let state = self.state.borrow();
            if state.phase != FormPhase::Editing {
                return SubmitOutcome::Ignored;
            }
            (state.mode.clone(), state.draft.clone())
        };

        if let Err(error) = draft.validate() {
            tracing::debug!(error = %error, "Draft rejected");
            return SubmitOutcome::Invalid(error);
        }

        self.state.send_modify(|state| {
            state.phase = FormPhase::Submitting;
            state.error = None;
        });

        let request = async {
            match &mode {
                FormMode::Create => self.resource.create(&draft).await,
                FormMode::Edit(id) => self.resource.update(id, &draft).await,
            }
        };
        let Some(result) = unless_cancelled(&self.cancel, request).await else {
            tracing::debug!("Form submission abandoned after teardown");
            return SubmitOutcome::Discarded;
        };

        match result {
            Ok(project) => {
                tracing::info!(project_id = %project.id, prefix = %project.prefix, "Project saved");
                self.state.send_modify(|state| state.phase = FormPhase::Succeeded);
                SubmitOutcome::Saved {
                    project,
                    next: Route::Projects,
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Failed to save project");
                self.state.send_modify(|state| {
                    state.phase = FormPhase::Editing;
                    state.error = Some(error.clone());
                });
                SubmitOutcome::Failed(error)
            }
        }
    }

    /// Leave the form without saving.
    pub fn back_to_list(&self) -> Route {
        Route::Projects
    }

    // ---- private helpers ----

    /// Apply `change` to the draft while editing. The closure reports whether
    /// the input was accepted.
    fn edit_draft(&mut self, change: impl FnOnce(&mut ProjectDraft) -> bool) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        let mut accepted = false;
        self.state.send_if_modified(|state| {
            if state.phase != FormPhase::Editing {
                return false;
            }
            accepted = change(&mut state.draft);
            accepted
        });
        accepted
    }
}
