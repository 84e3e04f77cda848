//! Coverage calculator: one category's split between sponsors and the
//! registrant.

use eventreg_domain::constants::{FULL_SELF_PERCENTAGE, MAX_COVERAGE_PERCENT};
use eventreg_domain::{AmountBreakdown, Category, CostDistribution, CoveragePolicy};
use tracing::{debug, trace};

use super::{rounded_percentage, sanitize_total, share_of};

/// Split `category_total` between the sponsors in `distributions` and the
/// registrant, each sponsor paying exactly its entered share.
///
/// `amount_for_sponsors[i]` belongs to `distributions[i]`. When the sponsors
/// collectively cover more than 100% the registrant's residual is clamped to
/// zero while the sponsor amounts are left as entered; see
/// [`calculate_amount_with_policy`] for the alternative.
///
/// With no distributions, or a total that is zero, negative or not finite,
/// the result is the degenerate "fully self-covered" breakdown: every
/// sponsor amount is `0`, the residual is the (sanitized) total and the
/// registrant's percentage is `100`.
pub fn calculate_amount(
    distributions: &[CostDistribution],
    category: Category,
    category_total: f64,
) -> AmountBreakdown {
    calculate_amount_with_policy(distributions, category, category_total, CoveragePolicy::AsEntered)
}

/// [`calculate_amount`] with an explicit over-coverage policy.
///
/// Under [`CoveragePolicy::Proportional`], when the summed coverage exceeds
/// 100% every sponsor amount is scaled by `100 / sum`, so the sponsors
/// together pay exactly the total. Below 100% both policies agree.
pub fn calculate_amount_with_policy(
    distributions: &[CostDistribution],
    category: Category,
    category_total: f64,
    policy: CoveragePolicy,
) -> AmountBreakdown {
    let total = sanitize_total(category_total);

    if distributions.is_empty() || total <= 0.0 {
        trace!(%category, sponsors = distributions.len(), "degenerate category total");
        return AmountBreakdown {
            amount_for_sponsors: vec![0.0; distributions.len()],
            amount_for_self: total,
            percentage_for_self: FULL_SELF_PERCENTAGE,
        };
    }

    let overflow = coverage_overflow(distributions, category);
    let scale = coverage_scale(overflow, policy);

    let amount_for_sponsors: Vec<f64> = distributions
        .iter()
        .map(|dist| share_of(dist.coverage(category), total) * scale)
        .collect();

    let covered: f64 = amount_for_sponsors.iter().sum();
    let amount_for_self = (total - covered).max(0.0);
    let percentage_for_self = rounded_percentage(amount_for_self, total);

    if let Some(sum) = overflow {
        debug!(%category, coverage_sum = sum, ?policy, "sponsor coverage exceeds 100%");
    }
    trace!(%category, total, covered, amount_for_self, percentage_for_self, "category split");

    AmountBreakdown { amount_for_sponsors, amount_for_self, percentage_for_self }
}

/// Factor applied to every sponsor share for a category whose summed
/// coverage is `overflow`.
pub(crate) fn coverage_scale(overflow: Option<u32>, policy: CoveragePolicy) -> f64 {
    match (policy, overflow) {
        (CoveragePolicy::Proportional, Some(sum)) => f64::from(MAX_COVERAGE_PERCENT) / f64::from(sum),
        _ => 1.0,
    }
}

/// Summed coverage for `category` when it exceeds 100%, `None` otherwise.
pub fn coverage_overflow(distributions: &[CostDistribution], category: Category) -> Option<u32> {
    let sum = distributions
        .iter()
        .fold(0_u32, |acc, dist| acc.saturating_add(dist.coverage(category)));
    (sum > MAX_COVERAGE_PERCENT).then_some(sum)
}

#[cfg(test)]
mod tests {
    use eventreg_domain::SponsorCompany;

    use super::*;

    fn sponsor(name: &str, category: Category, percent: u32) -> CostDistribution {
        CostDistribution::for_sponsor(SponsorCompany::new(name, name)).with_coverage(category, percent)
    }

    #[test]
    fn empty_list_with_zero_total_is_fully_self_covered() {
        let result = calculate_amount(&[], Category::Accommodation, 0.0);
        assert_eq!(
            result,
            AmountBreakdown {
                amount_for_sponsors: vec![],
                amount_for_self: 0.0,
                percentage_for_self: 100
            }
        );
    }

    #[test]
    fn empty_list_keeps_the_total_as_self_cost() {
        let result = calculate_amount(&[], Category::Meals, 12_000.0);
        assert!(result.amount_for_sponsors.is_empty());
        assert_eq!(result.amount_for_self, 12_000.0);
        assert_eq!(result.percentage_for_self, 100);
    }

    #[test]
    fn zero_total_keeps_sponsor_slots_aligned() {
        let dists = vec![sponsor("a", Category::Programs, 40), sponsor("b", Category::Programs, 60)];
        let result = calculate_amount(&dists, Category::Programs, 0.0);
        assert_eq!(result.amount_for_sponsors, vec![0.0, 0.0]);
        assert_eq!(result.amount_for_self, 0.0);
        assert_eq!(result.percentage_for_self, 100);
    }

    #[test]
    fn negative_total_never_yields_negative_self_cost() {
        let result = calculate_amount(&[sponsor("a", Category::Meals, 10)], Category::Meals, -500.0);
        assert_eq!(result.amount_for_self, 0.0);
        assert_eq!(result.percentage_for_self, 100);
    }

    #[test]
    fn two_sponsors_share_meals() {
        let dists = vec![sponsor("A", Category::Meals, 30), sponsor("B", Category::Meals, 20)];
        let result = calculate_amount(&dists, Category::Meals, 10_000.0);

        assert_eq!(result.amount_for_sponsors, vec![3_000.0, 2_000.0]);
        assert_eq!(result.amount_for_self, 5_000.0);
        assert_eq!(result.percentage_for_self, 50);
    }

    #[test]
    fn other_categories_do_not_leak_in() {
        let dists = vec![sponsor("A", Category::Meals, 80)];
        let result = calculate_amount(&dists, Category::Accommodation, 100_000.0);
        assert_eq!(result.amount_for_sponsors, vec![0.0]);
        assert_eq!(result.amount_for_self, 100_000.0);
    }

    #[test]
    fn over_coverage_clamps_self_cost_at_zero() {
        let dists = vec![sponsor("A", Category::Accommodation, 150)];
        let result = calculate_amount(&dists, Category::Accommodation, 1_000.0);

        assert_eq!(result.amount_for_sponsors, vec![1_500.0]);
        assert_eq!(result.amount_for_self, 0.0);
        assert_eq!(result.percentage_for_self, 0);
    }

    #[test]
    fn proportional_policy_scales_overflow_down() {
        let dists = vec![sponsor("A", Category::Meals, 90), sponsor("B", Category::Meals, 60)];
        let result = calculate_amount_with_policy(
            &dists,
            Category::Meals,
            15_000.0,
            CoveragePolicy::Proportional,
        );

        assert!((result.amount_for_sponsors[0] - 9_000.0).abs() < 1e-6);
        assert!((result.amount_for_sponsors[1] - 6_000.0).abs() < 1e-6);
        assert!((result.covered_by_sponsors() - 15_000.0).abs() < 1e-6);
        assert!(result.amount_for_self < 1e-6);
        assert_eq!(result.percentage_for_self, 0);
    }

    #[test]
    fn policies_agree_below_full_coverage() {
        let dists = vec![sponsor("A", Category::Programs, 25), sponsor("B", Category::Programs, 35)];
        let as_entered = calculate_amount(&dists, Category::Programs, 8_500.0);
        let proportional = calculate_amount_with_policy(
            &dists,
            Category::Programs,
            8_500.0,
            CoveragePolicy::Proportional,
        );
        assert_eq!(as_entered, proportional);
    }

    #[test]
    fn overflow_is_reported_only_above_one_hundred() {
        let full = vec![sponsor("A", Category::Meals, 60), sponsor("B", Category::Meals, 40)];
        assert_eq!(coverage_overflow(&full, Category::Meals), None);

        let over = vec![sponsor("A", Category::Meals, 60), sponsor("B", Category::Meals, 45)];
        assert_eq!(coverage_overflow(&over, Category::Meals), Some(105));
    }

    #[test]
    fn distribution_without_sponsor_still_counts() {
        let dists = vec![CostDistribution::default().with_coverage(Category::Meals, 50)];
        let result = calculate_amount(&dists, Category::Meals, 4_000.0);
        assert_eq!(result.amount_for_sponsors, vec![2_000.0]);
    }
}
