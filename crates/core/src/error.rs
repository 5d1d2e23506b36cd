/// Domain-level errors raised by pure rules in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown project status: {0}")]
    UnknownStatus(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Project id {0:?} cannot appear in a route")]
    UnroutableId(String),
}
