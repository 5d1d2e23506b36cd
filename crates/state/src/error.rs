use tarefas_client::error::ClientError;
use tarefas_core::error::CoreError;

/// Text shown for any failed resource call.
pub const OPERATION_FAILED: &str = "Operation failed. Please try again.";

/// Text shown when a form is submitted before it is complete.
pub const FORM_INCOMPLETE: &str = "Fill in the project name and prefix.";

/// User-facing message for a resource failure.
///
/// Failure subtypes are not distinguished here; the detail view handles
/// "not found" and "unreachable" on its own.
pub fn user_message(_error: &ClientError) -> &'static str {
    OPERATION_FAILED
}

/// User-facing message for a rejected draft.
pub fn validation_message(_error: &CoreError) -> &'static str {
    FORM_INCOMPLETE
}
