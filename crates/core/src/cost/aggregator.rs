//! Per-sponsor aggregation across the three categories.

use eventreg_domain::{AmountBreakdown, CostDistribution};

/// Total each sponsor pays over accommodation, meals and programs.
///
/// The output has one entry per distribution, in order. A breakdown that is
/// shorter than `distributions` contributes `0` for the missing indices.
pub fn calculate_total_per_sponsor(
    distributions: &[CostDistribution],
    accommodation: &AmountBreakdown,
    meals: &AmountBreakdown,
    programs: &AmountBreakdown,
) -> Vec<f64> {
    (0..distributions.len())
        .map(|index| {
            accommodation.sponsor_amount(index)
                + meals.sponsor_amount(index)
                + programs.sponsor_amount(index)
        })
        .collect()
}
