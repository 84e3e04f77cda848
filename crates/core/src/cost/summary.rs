//! Overall registrant-vs-sponsors split and the composed cost overview.

use eventreg_domain::constants::MAX_COVERAGE_PERCENT;
use eventreg_domain::{
    AmountBreakdown, Category, CategoryTotals, CostDistribution, CostOverview, CostSplitSummary,
    CoveragePolicy,
};
use tracing::debug;

use super::{
    calculate_amount_with_policy, calculate_total_per_sponsor, rounded_percentage, sanitize_total,
};

/// Combine the three category breakdowns into one split.
///
/// `percentage_for_self` is `100` when nothing costs anything;
/// `sponsor_percentage` is its complement, for display only.
pub fn summarize_split(
    totals: &CategoryTotals,
    accommodation: &AmountBreakdown,
    meals: &AmountBreakdown,
    programs: &AmountBreakdown,
) -> CostSplitSummary {
    let total_cost: f64 = Category::ALL.iter().map(|&category| sanitize_total(totals.get(category))).sum();
    let total_for_self =
        accommodation.amount_for_self + meals.amount_for_self + programs.amount_for_self;
    let percentage_for_self = rounded_percentage(total_for_self, total_cost);

    CostSplitSummary {
        total_cost,
        total_covered: (total_cost - total_for_self).max(0.0),
        total_for_self,
        percentage_for_self,
        sponsor_percentage: MAX_COVERAGE_PERCENT.saturating_sub(percentage_for_self),
    }
}

/// Everything the cost-sharing step renders, computed in one pass.
pub fn cost_overview(
    distributions: &[CostDistribution],
    totals: &CategoryTotals,
    policy: CoveragePolicy,
) -> CostOverview {
    let breakdown = |category: Category| {
        calculate_amount_with_policy(distributions, category, totals.get(category), policy)
    };

    let accommodation = breakdown(Category::Accommodation);
    let meals = breakdown(Category::Meals);
    let programs = breakdown(Category::Programs);
    let total_per_sponsor =
        calculate_total_per_sponsor(distributions, &accommodation, &meals, &programs);
    let split = summarize_split(totals, &accommodation, &meals, &programs);

    debug!(
        sponsors = distributions.len(),
        total_cost = split.total_cost,
        total_for_self = split.total_for_self,
        percentage_for_self = split.percentage_for_self,
        "cost overview computed"
    );

    CostOverview { totals: *totals, accommodation, meals, programs, total_per_sponsor, split }
}

#[cfg(test)]
mod tests {
    use eventreg_domain::SponsorCompany;

    use super::*;
    use crate::cost::calculate_amount;

    #[test]
    fn half_covered_accommodation_leaves_sixty_two_percent() {
        let dists = vec![CostDistribution::for_sponsor(SponsorCompany::new("comp1", "ABC Kft."))
            .with_coverage(Category::Accommodation, 50)];
        let totals = CategoryTotals::new(100_000.0, 20_000.0, 10_000.0);

        let overview = cost_overview(&dists, &totals, CoveragePolicy::AsEntered);

        assert_eq!(overview.total_per_sponsor, vec![50_000.0]);
        assert_eq!(overview.split.total_cost, 130_000.0);
        assert_eq!(overview.split.total_for_self, 80_000.0);
        assert_eq!(overview.split.total_covered, 50_000.0);
        assert_eq!(overview.split.percentage_for_self, 62);
        assert_eq!(overview.split.sponsor_percentage, 38);
    }

    #[test]
    fn nothing_to_pay_is_fully_self_covered() {
        let totals = CategoryTotals::default();
        let empty = calculate_amount(&[], Category::Meals, 0.0);
        let split = summarize_split(&totals, &empty, &empty, &empty);

        assert_eq!(split.total_cost, 0.0);
        assert_eq!(split.percentage_for_self, 100);
        assert_eq!(split.sponsor_percentage, 0);
        assert_eq!(split.total_covered, 0.0);
    }

    #[test]
    fn over_coverage_never_produces_negative_percentages() {
        let dists = vec![
            CostDistribution::default()
                .with_coverage(Category::Accommodation, 100)
                .with_coverage(Category::Meals, 100)
                .with_coverage(Category::Programs, 100),
            CostDistribution::default().with_coverage(Category::Meals, 70),
        ];
        let totals = CategoryTotals::new(10.0, 10.0, 10.0);
        let overview = cost_overview(&dists, &totals, CoveragePolicy::AsEntered);

        assert_eq!(overview.split.total_for_self, 0.0);
        assert_eq!(overview.split.percentage_for_self, 0);
        assert_eq!(overview.split.sponsor_percentage, 100);
        assert_eq!(overview.split.total_covered, 30.0);
    }

    #[test]
    fn overview_exposes_breakdowns_by_category() {
        let dists = vec![CostDistribution::default().with_coverage(Category::Programs, 20)];
        let totals = CategoryTotals::new(0.0, 0.0, 5_000.0);
        let overview = cost_overview(&dists, &totals, CoveragePolicy::AsEntered);

        assert_eq!(overview.breakdown(Category::Programs).amount_for_sponsors, vec![1_000.0]);
        assert_eq!(overview.breakdown(Category::Accommodation).percentage_for_self, 100);
        assert_eq!(overview.totals, totals);
    }
}
