//! SQLite-backed registration snapshot store.
//!
//! Implements the `RegistrationStore` port. Each saved state is written as a
//! versioned JSON envelope. All database operations run in `spawn_blocking`
//! to avoid blocking the async runtime.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use eventreg_core::RegistrationStore;
use eventreg_domain::{
    EventRegError, RegistrationSnapshot, RegistrationState, Result, SavedRegistration,
    SnapshotToken,
};
use rusqlite::{params, OptionalExtension};
use tokio::task;
use tracing::{debug, warn};

use super::manager::{map_sql_error, DbConnection, DbManager};
use crate::errors::InfraError;

/// SQLite-backed registration store.
pub struct SqliteRegistrationStore {
    db: Arc<DbManager>,
}

impl SqliteRegistrationStore {
    /// Create a new store with the given database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationStore for SqliteRegistrationStore {
    async fn save(&self, state: &RegistrationState) -> Result<SnapshotToken> {
        let db = Arc::clone(&self.db);
        let token = SnapshotToken::generate();
        let snapshot = RegistrationSnapshot::capture(state.clone());

        let stored = token.clone();
        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            write_snapshot(&conn, &stored, &snapshot, WriteMode::Insert)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)??;

        debug!(token = %token, "registration saved");
        Ok(token)
    }

    async fn load(&self, token: &SnapshotToken) -> Result<RegistrationState> {
        let db = Arc::clone(&self.db);
        let token = token.clone();

        task::spawn_blocking(move || -> Result<RegistrationState> {
            let conn = db.get_connection()?;
            let payload = query_payload(&conn, &token)?
                .ok_or_else(|| EventRegError::NotFound(format!("registration {token}")))?;
            decode_snapshot(&payload, &token)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, token: &SnapshotToken, state: &RegistrationState) -> Result<()> {
        let db = Arc::clone(&self.db);
        let token = token.clone();
        let snapshot = RegistrationSnapshot::capture(state.clone());

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            let changed = write_snapshot(&conn, &token, &snapshot, WriteMode::Update)?;
            if changed == 0 {
                return Err(EventRegError::NotFound(format!("registration {token}")));
            }
            debug!(token = %token, "registration updated");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, token: &SnapshotToken) -> Result<()> {
        let db = Arc::clone(&self.db);
        let token = token.clone();

        task::spawn_blocking(move || -> Result<()> {
            let conn = db.get_connection()?;
            let removed = conn
                .execute("DELETE FROM registration_snapshots WHERE token = ?1", params![token.as_str()])
                .map_err(map_sql_error)?;
            debug!(token = %token, removed, "registration deleted");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list(&self) -> Result<Vec<SavedRegistration>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> Result<Vec<SavedRegistration>> {
            let conn = db.get_connection()?;
            query_saved(&conn)
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

enum WriteMode {
    Insert,
    Update,
}

fn write_snapshot(
    conn: &DbConnection,
    token: &SnapshotToken,
    snapshot: &RegistrationSnapshot,
    mode: WriteMode,
) -> Result<usize> {
    let payload = serde_json::to_string(snapshot)?;
    let step = snapshot.state.step.to_string();
    let submitted = i64::from(snapshot.state.submitted);
    let saved_at = snapshot.saved_at.timestamp();

    let sql = match mode {
        WriteMode::Insert => {
            "INSERT INTO registration_snapshots (token, version, payload, step, submitted, saved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
        }
        WriteMode::Update => {
            "UPDATE registration_snapshots
             SET version = ?2, payload = ?3, step = ?4, submitted = ?5, saved_at = ?6
             WHERE token = ?1"
        }
    };

    conn.execute(sql, params![token.as_str(), snapshot.version, payload, step, submitted, saved_at])
        .map_err(map_sql_error)
}

fn query_payload(conn: &DbConnection, token: &SnapshotToken) -> Result<Option<String>> {
    conn.query_row(
        "SELECT payload FROM registration_snapshots WHERE token = ?1",
        params![token.as_str()],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .map_err(map_sql_error)
}

fn query_saved(conn: &DbConnection) -> Result<Vec<SavedRegistration>> {
    let mut stmt = conn
        .prepare(
            "SELECT token, step, submitted, saved_at
             FROM registration_snapshots
             ORDER BY saved_at DESC, token DESC",
        )
        .map_err(map_sql_error)?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(map_sql_error)?;

    let mut saved = Vec::new();
    for row in rows {
        let (token, step, submitted, saved_at) = row.map_err(map_sql_error)?;
        saved.push(SavedRegistration {
            token: SnapshotToken::from(token),
            step: step.parse().unwrap_or_default(),
            submitted: submitted != 0,
            saved_at: DateTime::from_timestamp(saved_at, 0).unwrap_or_default(),
        });
    }
    Ok(saved)
}

fn decode_snapshot(payload: &str, token: &SnapshotToken) -> Result<RegistrationState> {
    let snapshot: RegistrationSnapshot = serde_json::from_str(payload)?;
    if !snapshot.is_supported() {
        warn!(token = %token, version = snapshot.version, "snapshot written by a newer schema");
        return Err(EventRegError::Serialization(format!(
            "unsupported snapshot version {}",
            snapshot.version
        )));
    }
    Ok(snapshot.state)
}

// ============================================================================
// Error Mapping
// ============================================================================

fn map_join_error(err: task::JoinError) -> EventRegError {
    EventRegError::from(InfraError::from(err))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use eventreg_domain::StepId;
    use tempfile::TempDir;

    use super::*;

    async fn setup() -> (SqliteRegistrationStore, Arc<DbManager>, TempDir) {
        let dir = TempDir::new().expect("temp dir created");
        let db = Arc::new(DbManager::new(dir.path().join("eventreg.db"), 2).expect("manager"));
        db.run_migrations().expect("migrations run");
        (SqliteRegistrationStore::new(Arc::clone(&db)), db, dir)
    }

    fn sample_state() -> RegistrationState {
        let mut state = RegistrationState { step: StepId::Meals, ..RegistrationState::default() };
        state.personal_info.first_name = "Anna".into();
        state
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn save_then_load_returns_same_state() {
        let (store, _db, _dir) = setup().await;
        let state = sample_state();

        let token = store.save(&state).await.expect("saved");
        let loaded = store.load(&token).await.expect("loaded");
        assert_eq!(loaded, state);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn unknown_token_is_not_found() {
        let (store, _db, _dir) = setup().await;
        let err = store.load(&SnapshotToken::from("missing".to_string())).await.unwrap_err();
        assert!(matches!(err, EventRegError::NotFound(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_removes_snapshot() {
        let (store, _db, _dir) = setup().await;
        let token = store.save(&sample_state()).await.unwrap();
        store.delete(&token).await.unwrap();
        assert!(matches!(store.load(&token).await, Err(EventRegError::NotFound(_))));
        store.delete(&token).await.expect("deleting twice is fine");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_overwrites_existing_token_only() {
        let (store, _db, _dir) = setup().await;
        let token = store.save(&sample_state()).await.unwrap();

        let mut changed = sample_state();
        changed.step = StepId::Summary;
        changed.submitted = true;
        store.update(&token, &changed).await.unwrap();
        assert_eq!(store.load(&token).await.unwrap(), changed);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].step, StepId::Summary);
        assert!(listed[0].submitted);

        let missing = SnapshotToken::from("nope".to_string());
        assert!(matches!(store.update(&missing, &changed).await, Err(EventRegError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn newer_snapshot_version_is_rejected() {
        let (store, db, _dir) = setup().await;
        let token = store.save(&sample_state()).await.unwrap();

        let conn = db.get_connection().unwrap();
        let payload: String = conn
            .query_row(
                "SELECT payload FROM registration_snapshots WHERE token = ?1",
                params![token.as_str()],
                |row| row.get(0),
            )
            .unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        value["version"] = serde_json::json!(99);
        conn.execute(
            "UPDATE registration_snapshots SET payload = ?2 WHERE token = ?1",
            params![token.as_str(), value.to_string()],
        )
        .unwrap();
        drop(conn);

        let err = store.load(&token).await.unwrap_err();
        assert!(matches!(err, EventRegError::Serialization(msg) if msg.contains("99")));
    }
}
