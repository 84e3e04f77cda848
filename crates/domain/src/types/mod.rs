//! Domain types and models
//!
//! Wire names are camelCase because the wizard frontend reads and writes
//! these records directly.

pub mod cost;
pub mod registration;
pub mod sponsor;
pub mod wizard;

pub use cost::{AmountBreakdown, CategoryTotals, CostOverview, CostSplitSummary};
pub use registration::{
    AccommodationOption, BedType, MealLineItem, MealOption, MealType, PersonalInfo,
    ProgramOption, RoomType, SelectedAccommodation, SelectedMeal, SelectedProgram,
};
pub use sponsor::{Category, Contributions, CostDistribution, SponsorCompany};
pub use wizard::{
    RegistrationSnapshot, RegistrationState, SavedRegistration, SnapshotToken, StepId,
};

#[cfg(all(test, feature = "ts-gen"))]
mod bindings_tests {
    use super::*;

    fn has_bindings<T: ts_rs::TS>() {}

    #[test]
    fn every_wire_record_has_bindings() {
        has_bindings::<PersonalInfo>();
        has_bindings::<BedType>();
        has_bindings::<RoomType>();
        has_bindings::<AccommodationOption>();
        has_bindings::<SelectedAccommodation>();
        has_bindings::<MealType>();
        has_bindings::<MealOption>();
        has_bindings::<MealLineItem>();
        has_bindings::<SelectedMeal>();
        has_bindings::<ProgramOption>();
        has_bindings::<SelectedProgram>();
        has_bindings::<Category>();
        has_bindings::<Contributions>();
        has_bindings::<SponsorCompany>();
        has_bindings::<CostDistribution>();
        has_bindings::<StepId>();
        has_bindings::<RegistrationState>();
        has_bindings::<RegistrationSnapshot>();
        has_bindings::<SavedRegistration>();
        has_bindings::<CategoryTotals>();
        has_bindings::<AmountBreakdown>();
        has_bindings::<CostSplitSummary>();
        has_bindings::<CostOverview>();
    }
}
