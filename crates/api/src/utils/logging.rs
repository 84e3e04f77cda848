use std::time::Duration;

use eventreg_domain::EventRegError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"wizard::next_step"`).
/// * `error_type` - Stable error label when the command failed.
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn log_command_execution(
    command: &str,
    error_type: Option<&str>,
    elapsed: Duration,
    success: bool,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, error_type, duration_ms, "command_execution_failure");
    }
}

/// Convert an `EventRegError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &EventRegError) -> &'static str {
    match error {
        EventRegError::Database(_) => "database",
        EventRegError::Config(_) => "config",
        EventRegError::Serialization(_) => "serialization",
        EventRegError::NotFound(_) => "not_found",
        EventRegError::InvalidInput(_) => "invalid_input",
        EventRegError::Duplicate(_) => "duplicate",
        EventRegError::InvalidTransition(_) => "invalid_transition",
        EventRegError::Internal(_) => "internal",
    }
}
