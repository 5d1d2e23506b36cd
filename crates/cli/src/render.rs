//! Plain-text rendering of manager state.

use std::io::{self, Write};

use tarefas_core::presentation::{BadgeTone, StatusBadge};
use tarefas_core::project::Project;
use tarefas_state::detail::DetailState;
use tarefas_state::error::user_message;
use tarefas_state::list::{ListPresentation, ListState, ViewMode};

pub fn list<W: Write>(out: &mut W, state: &ListState) -> io::Result<()> {
    let stats = state.stats();
    writeln!(
        out,
        "{} projects: {} active, {} paused, {} completed",
        stats.total, stats.active, stats.paused, stats.completed
    )?;
    if let Some(error) = &state.error {
        writeln!(out, "! {}", user_message(error))?;
    }

    match state.presentation() {
        ListPresentation::Loading => writeln!(out, "Loading projects..."),
        ListPresentation::Empty => writeln!(out, "No projects yet. Create one with `tarefas new`."),
        ListPresentation::NoMatches => {
            writeln!(out, "No projects match \"{}\".", state.query)
        }
        ListPresentation::Items => {
            for project in state.visible() {
                match state.view_mode {
                    ViewMode::List => row(out, project)?,
                    ViewMode::Grid => card(out, project)?,
                }
            }
            Ok(())
        }
    }
}

pub fn detail<W: Write>(out: &mut W, state: &DetailState) -> io::Result<()> {
    match state {
        DetailState::Loading => writeln!(out, "Loading project..."),
        DetailState::NotFound => writeln!(out, "Project not found."),
        DetailState::Deleted => writeln!(out, "Project deleted."),
        DetailState::LoadFailed(error) => writeln!(out, "! {}", user_message(error)),
        DetailState::Found { project, error, .. } => {
            writeln!(out, "{}  [{}]", project.name, badge(project.status.badge()))?;
            writeln!(out, "  id:       {}", project.id)?;
            writeln!(out, "  prefix:   {}", project.prefix)?;
            if let Some(created_at) = project.created_at {
                writeln!(out, "  created:  {}", created_at.format("%Y-%m-%d %H:%M"))?;
            }
            if let Some(total) = project.tasks_count {
                writeln!(
                    out,
                    "  tasks:    {}/{} ({}%)",
                    project.completed_tasks.unwrap_or(0),
                    total,
                    project.progress_percent()
                )?;
            }
            writeln!(
                out,
                "  {}",
                project.description_text().unwrap_or("No description")
            )?;
            if let Some(error) = error {
                writeln!(out, "! {}", user_message(error))?;
            }
            Ok(())
        }
    }
}

pub fn badge(badge: StatusBadge) -> String {
    let marker = match badge.tone {
        BadgeTone::Success => '+',
        BadgeTone::Warning => '~',
        BadgeTone::Info => '*',
    };
    format!("{marker} {}", badge.label)
}

// ---- private helpers ----

fn row<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
    writeln!(
        out,
        "{:<6} {:<30} {:<12} {}",
        project.short_code(),
        project.name,
        badge(project.status.badge()),
        project.id
    )
}

fn card<W: Write>(out: &mut W, project: &Project) -> io::Result<()> {
    writeln!(out, "[{}] {}", project.short_code(), project.name)?;
    writeln!(out, "    {}", badge(project.status.badge()))?;
    if let Some(description) = project.description_text() {
        writeln!(out, "    {description}")?;
    }
    if project.tasks_count.is_some() {
        writeln!(out, "    progress {}%", project.progress_percent())?;
    }
    writeln!(out, "    id {}", project.id)
}
