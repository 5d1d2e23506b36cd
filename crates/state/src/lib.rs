//! Client-side state managers for the project views.
//!
//! Each manager owns its state exclusively and talks to the remote only
//! through a shared [`ProjectResource`](tarefas_client::resource::ProjectResource):
//!
//! - [`form::ProjectFormManager`] -- create/edit draft, validation, submission.
//! - [`list::ProjectListManager`] -- collection, query, view mode, aggregates.
//! - [`detail::ProjectDetailManager`] -- single record, status badge, guarded
//!   edit/delete actions.
//!
//! Managers never navigate; they hand back [`Route`](tarefas_core::routes::Route)
//! intents for a [`navigation::Navigator`] to act on. Every manager is bound to
//! a cancellation token from a [`session::Session`] so that responses arriving
//! after teardown are dropped instead of applied.

pub mod detail;
pub mod error;
pub mod form;
pub mod list;
pub mod navigation;
pub mod session;
pub mod ui_settings;
