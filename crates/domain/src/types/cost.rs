//! Cost-sharing value types
//!
//! Everything here is derived and transient: recomputed from the current
//! selections and coverage on every read, never persisted.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::sponsor::Category;

/* -------------------------------------------------------------------------- */
/* Category Totals */
/* -------------------------------------------------------------------------- */

/// Per-category currency totals computed from the registrant's selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CategoryTotals {
    pub accommodation: f64,
    pub meals: f64,
    pub programs: f64,
}

impl CategoryTotals {
    pub fn new(accommodation: f64, meals: f64, programs: f64) -> Self {
        Self { accommodation, meals, programs }
    }

    /// Total for one category.
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Accommodation => self.accommodation,
            Category::Meals => self.meals,
            Category::Programs => self.programs,
        }
    }

    /// Sum over all three categories.
    pub fn sum(&self) -> f64 {
        self.accommodation + self.meals + self.programs
    }
}

/* -------------------------------------------------------------------------- */
/* Breakdowns */
/* -------------------------------------------------------------------------- */

/// How one category's total splits between sponsors and the registrant.
///
/// # Field Invariants
/// - `amount_for_sponsors` is positionally aligned with the distributions it
///   was computed from
/// - `amount_for_self >= 0`
/// - `percentage_for_self` is in `[0, 100]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AmountBreakdown {
    pub amount_for_sponsors: Vec<f64>,
    pub amount_for_self: f64,
    pub percentage_for_self: u32,
}

impl AmountBreakdown {
    /// Sponsor amount at `index`, `0` when the index is out of range.
    pub fn sponsor_amount(&self, index: usize) -> f64 {
        self.amount_for_sponsors.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of all sponsor amounts.
    pub fn covered_by_sponsors(&self) -> f64 {
        self.amount_for_sponsors.iter().sum()
    }
}

/// Registrant-vs-sponsors split over all categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CostSplitSummary {
    pub total_cost: f64,
    /// Part of `total_cost` not left to the registrant.
    pub total_covered: f64,
    pub total_for_self: f64,
    pub percentage_for_self: u32,
    /// Display-only complement of `percentage_for_self`.
    pub sponsor_percentage: u32,
}

/// Everything the cost-sharing and summary steps render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CostOverview {
    pub totals: CategoryTotals,
    pub accommodation: AmountBreakdown,
    pub meals: AmountBreakdown,
    pub programs: AmountBreakdown,
    pub total_per_sponsor: Vec<f64>,
    pub split: CostSplitSummary,
}

impl CostOverview {
    /// Breakdown for one category.
    pub fn breakdown(&self, category: Category) -> &AmountBreakdown {
        match category {
            Category::Accommodation => &self.accommodation,
            Category::Meals => &self.meals,
            Category::Programs => &self.programs,
        }
    }
}
