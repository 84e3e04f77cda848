//! In-memory registration store.
//!
//! Keeps snapshots in a process-local map. Used by the headless binary when
//! no database is wanted and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use eventreg_core::RegistrationStore;
use eventreg_domain::{
    EventRegError, RegistrationSnapshot, RegistrationState, Result, SavedRegistration,
    SnapshotToken,
};
use parking_lot::RwLock;

#[derive(Default)]
pub struct InMemoryRegistrationStore {
    snapshots: RwLock<HashMap<SnapshotToken, RegistrationSnapshot>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.read().is_empty()
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn save(&self, state: &RegistrationState) -> Result<SnapshotToken> {
        let token = SnapshotToken::generate();
        self.snapshots.write().insert(token.clone(), RegistrationSnapshot::capture(state.clone()));
        Ok(token)
    }

    async fn load(&self, token: &SnapshotToken) -> Result<RegistrationState> {
        self.snapshots
            .read()
            .get(token)
            .map(|snapshot| snapshot.state.clone())
            .ok_or_else(|| EventRegError::NotFound(format!("registration {token}")))
    }

    async fn update(&self, token: &SnapshotToken, state: &RegistrationState) -> Result<()> {
        let mut snapshots = self.snapshots.write();
        let slot = snapshots
            .get_mut(token)
            .ok_or_else(|| EventRegError::NotFound(format!("registration {token}")))?;
        *slot = RegistrationSnapshot::capture(state.clone());
        Ok(())
    }

    async fn delete(&self, token: &SnapshotToken) -> Result<()> {
        self.snapshots.write().remove(token);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SavedRegistration>> {
        let mut saved: Vec<_> = self
            .snapshots
            .read()
            .iter()
            .map(|(token, snapshot)| SavedRegistration::describe(token.clone(), snapshot))
            .collect();
        saved.sort_by(|a, b| {
            b.saved_at.cmp(&a.saved_at).then_with(|| b.token.as_str().cmp(a.token.as_str()))
        });
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use eventreg_domain::StepId;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn round_trips_and_forgets() {
        let store = InMemoryRegistrationStore::new();
        let state = RegistrationState { step: StepId::Cost, ..RegistrationState::default() };

        let token = store.save(&state).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load(&token).await.unwrap(), state);

        store.delete(&token).await.unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.load(&token).await, Err(EventRegError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn every_save_gets_a_new_token() {
        let store = InMemoryRegistrationStore::new();
        let state = RegistrationState::default();
        let first = store.save(&state).await.unwrap();
        let second = store.save(&state).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn update_and_list_track_latest_state() {
        let store = InMemoryRegistrationStore::new();
        let token = store.save(&RegistrationState::default()).await.unwrap();

        let later = RegistrationState { step: StepId::Summary, submitted: true, ..RegistrationState::default() };
        store.update(&token, &later).await.unwrap();
        assert_eq!(store.load(&token).await.unwrap(), later);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].token, token);
        assert_eq!(listed[0].step, StepId::Summary);
        assert!(listed[0].submitted);

        let unknown = SnapshotToken::from("missing".to_string());
        assert!(matches!(store.update(&unknown, &later).await, Err(EventRegError::NotFound(_))));
    }
}
