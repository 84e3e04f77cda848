//! # EventReg Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The cost-distribution engine (coverage, aggregation, contributions,
//!   overall split)
//! - Upstream pricing of accommodation, meals and programs
//! - Sponsor roster operations
//! - The registration wizard state machine and its persistence port
//!
//! ## Architecture Principles
//! - Only depends on `eventreg-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod catalog;
pub mod cost;
pub mod pricing;
pub mod sponsors;
pub mod wizard;

// Re-export specific items to avoid ambiguity
pub use cost::{
    calculate_amount, calculate_amount_with_policy, calculate_total_per_sponsor, cost_overview,
    coverage_overflow, summarize_split, sync_contributions, sync_contributions_with_policy,
    update_sponsor_contributions, update_sponsor_contributions_with_policy,
};
pub use pricing::category_totals;
pub use wizard::ports::RegistrationStore;
pub use wizard::{RegistrationWizard, WizardSettings};
