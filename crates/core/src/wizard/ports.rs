//! Port interfaces for wizard persistence
//!
//! Implemented in `eventreg-infra` (SQLite, in-memory).

use async_trait::async_trait;
use eventreg_domain::{RegistrationState, Result, SavedRegistration, SnapshotToken};

/// Trait for saving and resuming in-progress registrations
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Persist `state` and return a token that loads it back
    async fn save(&self, state: &RegistrationState) -> Result<SnapshotToken>;

    /// Load a previously saved state; `NotFound` when the token is unknown
    async fn load(&self, token: &SnapshotToken) -> Result<RegistrationState>;

    /// Overwrite the state saved under `token`; `NotFound` when unknown
    async fn update(&self, token: &SnapshotToken, state: &RegistrationState) -> Result<()>;

    /// Forget a saved state
    async fn delete(&self, token: &SnapshotToken) -> Result<()>;

    /// Saved registrations, newest first
    async fn list(&self) -> Result<Vec<SavedRegistration>>;
}
