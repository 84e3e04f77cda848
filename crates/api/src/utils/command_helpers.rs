//! Command execution helpers
//!
//! Times a command, logs its outcome and converts the domain error into the
//! `String` the frontend receives.

use std::future::Future;
use std::time::Instant;

use eventreg_domain::Result as DomainResult;

use crate::utils::logging::{error_label, log_command_execution};

/// Execute a command with automatic timing and logging.
pub async fn execute_logged<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;

    let error_type = result.as_ref().err().map(error_label);
    log_command_execution(command_name, error_type, start.elapsed(), result.is_ok());

    result
}

/// [`execute_logged`] with the error flattened to its display string.
pub async fn execute_with_string_error<F, Fut, T>(
    command_name: &str,
    command_fn: F,
) -> Result<T, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    execute_logged(command_name, command_fn).await.map_err(|e| e.to_string())
}
