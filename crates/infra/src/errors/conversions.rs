//! Conversions from external infrastructure errors into domain errors.

use eventreg_domain::EventRegError;
use rusqlite::Error as SqlError;
use thiserror::Error;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(#[from] pub EventRegError);

impl From<InfraError> for EventRegError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

trait IntoEventRegError {
    fn into_eventreg(self) -> EventRegError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for SqlError {
    fn into_eventreg(self) -> EventRegError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        EventRegError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        EventRegError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        EventRegError::Duplicate("unique constraint violation".into())
                    }
                    (ErrorCode::NotADatabase, _) => {
                        EventRegError::Database("file is not a database".into())
                    }
                    _ => EventRegError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => EventRegError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                EventRegError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                EventRegError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => EventRegError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => EventRegError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        Self(value.into_eventreg())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for r2d2::Error {
    fn into_eventreg(self) -> EventRegError {
        EventRegError::Database(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        Self(value.into_eventreg())
    }
}

/* -------------------------------------------------------------------------- */
/* JoinError → EventRegError */
/* -------------------------------------------------------------------------- */

impl IntoEventRegError for JoinError {
    fn into_eventreg(self) -> EventRegError {
        if self.is_cancelled() {
            EventRegError::Internal("blocking task cancelled".into())
        } else {
            EventRegError::Internal(format!("blocking task failed: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        Self(value.into_eventreg())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};

    use super::*;

    #[test]
    fn infra_error_displays_as_domain_error() {
        let domain = EventRegError::NotFound("registration abc".into());
        let wrapped = InfraError::from(domain.clone());

        assert_eq!(wrapped.to_string(), domain.to_string());
        let boxed: Box<dyn std::error::Error> = Box::new(wrapped);
        assert!(boxed.to_string().contains("registration abc"));
    }

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: EventRegError = InfraError::from(err).into();
        assert!(matches!(mapped, EventRegError::Database(msg) if msg.contains("busy")));
    }

    #[test]
    fn unique_violation_maps_to_duplicate() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::ConstraintViolation, extended_code: 1555 },
            None,
        );
        let mapped: EventRegError = InfraError::from(err).into();
        assert!(matches!(mapped, EventRegError::Duplicate(_)));
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let mapped: EventRegError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(mapped, EventRegError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn panicking_task_maps_to_internal() {
        let join_err = tokio::task::spawn_blocking(|| panic!("boom")).await.unwrap_err();
        let mapped: EventRegError = InfraError::from(join_err).into();
        assert!(matches!(mapped, EventRegError::Internal(_)));
    }
}
