//! Wizard state and its persisted envelope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use super::registration::{PersonalInfo, SelectedAccommodation, SelectedMeal, SelectedProgram};
use super::sponsor::CostDistribution;
use crate::constants::SNAPSHOT_SCHEMA_VERSION;

/* -------------------------------------------------------------------------- */
/* Steps */
/* -------------------------------------------------------------------------- */

/// Fixed, linear sequence of wizard pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum StepId {
    #[default]
    Personal,
    Accommodation,
    Meals,
    Programs,
    Cost,
    Summary,
}

crate::impl_domain_status_conversions!(StepId {
    Personal => "personal",
    Accommodation => "accommodation",
    Meals => "meals",
    Programs => "programs",
    Cost => "cost",
    Summary => "summary",
});

impl StepId {
    /// All steps in wizard order.
    pub const ALL: [Self; 6] =
        [Self::Personal, Self::Accommodation, Self::Meals, Self::Programs, Self::Cost, Self::Summary];

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Page title shown in the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Személyes adatok",
            Self::Accommodation => "Szállás",
            Self::Meals => "Étkezés",
            Self::Programs => "Programok",
            Self::Cost => "Költségmegosztás",
            Self::Summary => "Összegzés",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Personal => "Adja meg a regisztrációhoz szükséges személyes adatait",
            Self::Accommodation => "Válasszon szállást és szobatípust",
            Self::Meals => "Válassza ki az étkezéseket a tartózkodásra",
            Self::Programs => "Válasszon kiegészítő programokat",
            Self::Cost => "Ossza meg a költségeket szponzorokkal",
            Self::Summary => "Foglalja össze a rendelést és küldje el",
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Registration State */
/* -------------------------------------------------------------------------- */

/// Complete wizard state, owned by a single controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RegistrationState {
    #[serde(default)]
    pub step: StepId,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub accommodation: Option<SelectedAccommodation>,
    #[serde(default)]
    pub meals: Vec<SelectedMeal>,
    #[serde(default)]
    pub programs: Vec<SelectedProgram>,
    #[serde(default)]
    pub cost_distribution: Vec<CostDistribution>,
    #[serde(default)]
    pub submitted: bool,
}

/* -------------------------------------------------------------------------- */
/* Snapshots */
/* -------------------------------------------------------------------------- */

/// Opaque handle returned by a store's `save`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotToken(String);

impl SnapshotToken {
    /// Fresh, time-ordered token.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SnapshotToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for SnapshotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Versioned envelope written by registration stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RegistrationSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub state: RegistrationState,
}

impl RegistrationSnapshot {
    /// Wrap `state` with the current schema version and timestamp.
    pub fn capture(state: RegistrationState) -> Self {
        Self { version: SNAPSHOT_SCHEMA_VERSION, saved_at: Utc::now(), state }
    }

    /// Whether this build can read the snapshot.
    pub fn is_supported(&self) -> bool {
        self.version <= SNAPSHOT_SCHEMA_VERSION
    }
}

/// Listing entry for one saved registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SavedRegistration {
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    pub token: SnapshotToken,
    pub step: StepId,
    pub submitted: bool,
    pub saved_at: DateTime<Utc>,
}

impl SavedRegistration {
    /// Listing entry for `snapshot` stored under `token`.
    pub fn describe(token: SnapshotToken, snapshot: &RegistrationSnapshot) -> Self {
        Self {
            token,
            step: snapshot.state.step,
            submitted: snapshot.state.submitted,
            saved_at: snapshot.saved_at,
        }
    }
}
