//! Command execution: one manager per command, driven to completion.

use std::io::Write;

use anyhow::{anyhow, bail};
use tarefas_client::resource::SharedResource;
use tarefas_core::types::ProjectId;
use tarefas_state::detail::{DeleteOutcome, DetailState, ProjectDetailManager};
use tarefas_state::error::{user_message, validation_message, OPERATION_FAILED};
use tarefas_state::form::{FormPhase, ProjectFormManager, SubmitOutcome};
use tarefas_state::list::ProjectListManager;
use tarefas_state::navigation::Navigator;
use tarefas_state::session::Session;

use crate::args::{Command, FieldArgs, USAGE};
use crate::render;

/// Everything a command needs besides its arguments.
pub struct RunContext<'a, W: Write> {
    pub resource: SharedResource,
    pub session: &'a Session,
    pub navigator: &'a mut dyn Navigator,
    pub out: &'a mut W,
}

pub async fn run<W: Write>(command: Command, mut ctx: RunContext<'_, W>) -> anyhow::Result<()> {
    match command {
        Command::Help => {
            writeln!(ctx.out, "{USAGE}")?;
            Ok(())
        }
        Command::List { query, view } => {
            let mut list = ProjectListManager::new(ctx.resource, ctx.session.scope());
            list.set_view_mode(view);
            if let Some(query) = query {
                list.set_query(query);
            }
            list.mount().await;

            let state = list.state();
            render::list(ctx.out, &state)?;
            match state.error {
                Some(error) => Err(anyhow!(error).context(OPERATION_FAILED)),
                None => Ok(()),
            }
        }
        Command::Show { id } => {
            let mut detail = ProjectDetailManager::new(ctx.resource, id.clone(), ctx.session.scope());
            detail.load().await;
            let state = detail.state();
            render::detail(ctx.out, &state)?;
            ensure_loaded(&id, state)
        }
        Command::New(fields) => {
            let form = ProjectFormManager::create(ctx.resource, ctx.session.scope());
            submit(form, fields, ctx.navigator, ctx.out).await
        }
        Command::Edit { id, fields } => {
            let mut form = ProjectFormManager::edit(ctx.resource, id.clone(), ctx.session.scope());
            form.load().await;
            let state = form.state();
            if state.phase == FormPhase::Unavailable {
                ctx.navigator.go_to(form.back_to_list());
                return Err(match state.error {
                    Some(error) if error.is_not_found() => anyhow!("Project {id} not found"),
                    Some(error) => anyhow!(error).context(OPERATION_FAILED),
                    None => anyhow!(OPERATION_FAILED),
                });
            }
            submit(form, fields, ctx.navigator, ctx.out).await
        }
        Command::Delete { id, confirmed } => {
            let mut detail = ProjectDetailManager::new(ctx.resource, id.clone(), ctx.session.scope());
            detail.load().await;
            ensure_loaded(&id, detail.state())?;

            if !detail.request_delete() {
                bail!("Project {id} cannot be deleted right now");
            }
            if !confirmed {
                detail.cancel_delete();
                writeln!(ctx.out, "Re-run with --yes to delete project {id}.")?;
                return Ok(());
            }

            match detail.confirm_delete().await {
                DeleteOutcome::Deleted { next } => {
                    writeln!(ctx.out, "Deleted project {id}.")?;
                    ctx.navigator.go_to(next);
                    Ok(())
                }
                DeleteOutcome::Failed(error) => Err(anyhow!(error).context(OPERATION_FAILED)),
                DeleteOutcome::Ignored => bail!("Delete was not confirmed"),
                DeleteOutcome::Discarded => bail!("Interrupted"),
            }
        }
    }
}

// ---- private helpers ----

fn ensure_loaded(id: &ProjectId, state: DetailState) -> anyhow::Result<()> {
    match state {
        DetailState::Found { .. } => Ok(()),
        DetailState::NotFound | DetailState::Deleted => bail!("Project {id} not found"),
        DetailState::LoadFailed(error) => Err(anyhow!(error).context(OPERATION_FAILED)),
        DetailState::Loading => bail!("Interrupted"),
    }
}

async fn submit<W: Write>(
    mut form: ProjectFormManager,
    fields: FieldArgs,
    navigator: &mut dyn Navigator,
    out: &mut W,
) -> anyhow::Result<()> {
    if let Some(name) = fields.name {
        form.set_name(name);
    }
    if let Some(description) = fields.description {
        form.set_description(description);
    }
    if let Some(status) = fields.status {
        form.set_status(status);
    }
    if let Some(prefix) = fields.prefix {
        if !form.set_prefix(&prefix) {
            bail!("Prefix must be at most 5 letters, got {prefix:?}");
        }
    }

    match form.submit().await {
        SubmitOutcome::Saved { project, next } => {
            writeln!(
                out,
                "Saved {} [{}] ({})",
                project.name,
                project.prefix,
                project.id
            )?;
            navigator.go_to(next);
            Ok(())
        }
        SubmitOutcome::Invalid(error) => {
            let message = validation_message(&error);
            Err(anyhow!(error).context(message))
        }
        SubmitOutcome::Failed(error) => {
            let message = user_message(&error);
            Err(anyhow!(error).context(message))
        }
        SubmitOutcome::Ignored => bail!("The form is not editable"),
        SubmitOutcome::Discarded => bail!("Interrupted"),
    }
}
