//! Shared fixtures for core integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use eventreg_core::RegistrationStore;
use eventreg_domain::{
    Category, CostDistribution, EventRegError, PersonalInfo, RegistrationSnapshot,
    RegistrationState, Result, SavedRegistration, SnapshotToken, SponsorCompany,
};
use tokio::sync::Mutex;

/// In-process store backed by a map; stands in for the SQLite store.
#[derive(Default)]
pub struct FakeStore {
    saved: Mutex<HashMap<SnapshotToken, RegistrationState>>,
}

impl FakeStore {
    pub async fn len(&self) -> usize {
        self.saved.lock().await.len()
    }
}

#[async_trait]
impl RegistrationStore for FakeStore {
    async fn save(&self, state: &RegistrationState) -> Result<SnapshotToken> {
        let token = SnapshotToken::generate();
        self.saved.lock().await.insert(token.clone(), state.clone());
        Ok(token)
    }

    async fn load(&self, token: &SnapshotToken) -> Result<RegistrationState> {
        self.saved
            .lock()
            .await
            .get(token)
            .cloned()
            .ok_or_else(|| EventRegError::NotFound(format!("registration {token}")))
    }

    async fn update(&self, token: &SnapshotToken, state: &RegistrationState) -> Result<()> {
        let mut saved = self.saved.lock().await;
        let slot = saved
            .get_mut(token)
            .ok_or_else(|| EventRegError::NotFound(format!("registration {token}")))?;
        *slot = state.clone();
        Ok(())
    }

    async fn delete(&self, token: &SnapshotToken) -> Result<()> {
        self.saved.lock().await.remove(token);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SavedRegistration>> {
        Ok(self
            .saved
            .lock()
            .await
            .iter()
            .map(|(token, state)| {
                SavedRegistration::describe(token.clone(), &RegistrationSnapshot::capture(state.clone()))
            })
            .collect())
    }
}

pub fn sponsor(id: &str, coverage: [u32; 3]) -> CostDistribution {
    let [accommodation, meals, programs] = coverage;
    CostDistribution::for_sponsor(SponsorCompany::new(id, id))
        .with_coverage(Category::Accommodation, accommodation)
        .with_coverage(Category::Meals, meals)
        .with_coverage(Category::Programs, programs)
}

pub fn registrant() -> PersonalInfo {
    PersonalInfo {
        first_name: "Péter".into(),
        last_name: "Tóth".into(),
        email: "peter.toth@example.hu".into(),
        phone: "+36 20 555 0101".into(),
        company: Some("ABC Kft.".into()),
        ..PersonalInfo::default()
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, d).unwrap()
}
