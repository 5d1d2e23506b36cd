//! Command-line parsing.
//!
//! ```text
//! tarefas list [QUERY] [--list]
//! tarefas show <ID>
//! tarefas new --name NAME --prefix PREFIX [--description TEXT] [--status STATUS]
//! tarefas edit <ID> [--name NAME] [--prefix PREFIX] [--description TEXT] [--status STATUS]
//! tarefas delete <ID> [--yes]
//! ```

use tarefas_core::error::CoreError;
use tarefas_core::project::ProjectStatus;
use tarefas_core::types::ProjectId;
use tarefas_state::list::ViewMode;

pub const USAGE: &str = "\
Usage:
  tarefas list [QUERY] [--list]
  tarefas show <ID>
  tarefas new --name NAME --prefix PREFIX [--description TEXT] [--status STATUS]
  tarefas edit <ID> [--name NAME] [--prefix PREFIX] [--description TEXT] [--status STATUS]
  tarefas delete <ID> [--yes]

STATUS is one of: active, paused, completed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        query: Option<String>,
        view: ViewMode,
    },
    Show {
        id: ProjectId,
    },
    New(FieldArgs),
    Edit {
        id: ProjectId,
        fields: FieldArgs,
    },
    Delete {
        id: ProjectId,
        confirmed: bool,
    },
    Help,
}

/// Field values given on the command line. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldArgs {
    pub name: Option<String>,
    pub description: Option<String>,
    pub prefix: Option<String>,
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing command")]
    MissingCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("`{0}` requires a project id")]
    MissingId(&'static str),

    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("unexpected argument: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

/// Parse arguments, excluding the program name.
pub fn parse<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = args.next().ok_or(ArgsError::MissingCommand)?;
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "list" => parse_list(rest),
        "show" => {
            let (id, rest) = split_id("show", rest)?;
            reject_extra(rest)?;
            Ok(Command::Show { id })
        }
        "new" => Ok(Command::New(parse_fields(rest)?)),
        "edit" => {
            let (id, rest) = split_id("edit", rest)?;
            Ok(Command::Edit {
                id,
                fields: parse_fields(rest)?,
            })
        }
        "delete" => {
            let (id, rest) = split_id("delete", rest)?;
            let mut confirmed = false;
            for arg in rest {
                match arg.as_str() {
                    "--yes" | "-y" => confirmed = true,
                    _ => return Err(ArgsError::Unexpected(arg)),
                }
            }
            Ok(Command::Delete { id, confirmed })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        _ => Err(ArgsError::UnknownCommand(command)),
    }
}

// ---- private helpers ----

fn parse_list(rest: Vec<String>) -> Result<Command, ArgsError> {
    let mut query = None;
    let mut view = ViewMode::Grid;
    for arg in rest {
        match arg.as_str() {
            "--list" => view = ViewMode::List,
            "--grid" => view = ViewMode::Grid,
            _ if arg.starts_with("--") => return Err(ArgsError::Unexpected(arg)),
            _ if query.is_none() => query = Some(arg),
            _ => return Err(ArgsError::Unexpected(arg)),
        }
    }
    Ok(Command::List { query, view })
}

fn split_id(command: &'static str, rest: Vec<String>) -> Result<(ProjectId, Vec<String>), ArgsError> {
    let mut rest = rest.into_iter();
    match rest.next() {
        Some(id) if !id.starts_with("--") => Ok((ProjectId::new(id), rest.collect())),
        _ => Err(ArgsError::MissingId(command)),
    }
}

fn reject_extra(rest: Vec<String>) -> Result<(), ArgsError> {
    match rest.into_iter().next() {
        Some(arg) => Err(ArgsError::Unexpected(arg)),
        None => Ok(()),
    }
}

fn parse_fields(rest: Vec<String>) -> Result<FieldArgs, ArgsError> {
    let mut fields = FieldArgs::default();
    let mut rest = rest.into_iter();
    while let Some(flag) = rest.next() {
        let slot = match flag.as_str() {
            "--name" => &mut fields.name,
            "--description" => &mut fields.description,
            "--prefix" => &mut fields.prefix,
            "--status" => {
                let value = rest.next().ok_or_else(|| ArgsError::MissingValue(flag.clone()))?;
                fields.status = Some(value.parse()?);
                continue;
            }
            _ => return Err(ArgsError::Unexpected(flag)),
        };
        *slot = Some(rest.next().ok_or(ArgsError::MissingValue(flag))?);
    }
    Ok(fields)
}
