//! Contribution synchronizer
//!
//! Keeps each sponsor's cached [`Contributions`] in step with the current
//! coverage and category totals, so views can show a sponsor's running total
//! without recomputing the breakdowns.

use eventreg_domain::{Category, CategoryTotals, Contributions, CostDistribution, CoveragePolicy};
use tracing::debug;

use super::calculator::{coverage_overflow, coverage_scale};
use super::{sanitize_total, share_of};

/// New list whose sponsors carry contributions recomputed from `totals`.
///
/// Only `sponsor_company.contributions` changes; every other field is
/// copied. Distributions without a sponsor pass through unchanged. The
/// result depends only on the inputs, so calling it again with the same
/// inputs yields an equal list.
pub fn update_sponsor_contributions(
    distributions: &[CostDistribution],
    totals: &CategoryTotals,
) -> Vec<CostDistribution> {
    update_sponsor_contributions_with_policy(distributions, totals, CoveragePolicy::AsEntered)
}

/// [`update_sponsor_contributions`] with an explicit over-coverage policy.
///
/// Under [`CoveragePolicy::Proportional`] a category covered above 100% is
/// scaled the same way the calculator scales it, so cached totals match
/// the overview.
pub fn update_sponsor_contributions_with_policy(
    distributions: &[CostDistribution],
    totals: &CategoryTotals,
    policy: CoveragePolicy,
) -> Vec<CostDistribution> {
    let scales = Category::ALL
        .map(|category| coverage_scale(coverage_overflow(distributions, category), policy));

    distributions
        .iter()
        .map(|dist| {
            let mut updated = dist.clone();
            if let Some(company) = updated.sponsor_company.as_mut() {
                company.contributions = contributions_for(dist, totals, &scales);
            }
            updated
        })
        .collect()
}

/// Write fresh as-entered contributions into `distributions` only when
/// they differ.
///
/// Returns `true` when something was written. Callers that react to state
/// changes must commit through this guard, otherwise a write triggers a
/// recompute which triggers another write.
pub fn sync_contributions(distributions: &mut [CostDistribution], totals: &CategoryTotals) -> bool {
    sync_contributions_with_policy(distributions, totals, CoveragePolicy::AsEntered)
}

/// [`sync_contributions`] under `policy`.
pub fn sync_contributions_with_policy(
    distributions: &mut [CostDistribution],
    totals: &CategoryTotals,
    policy: CoveragePolicy,
) -> bool {
    let updated = update_sponsor_contributions_with_policy(distributions, totals, policy);
    if updated.as_slice() == &*distributions {
        return false;
    }

    debug!(sponsors = updated.len(), ?policy, "sponsor contributions refreshed");
    distributions.clone_from_slice(&updated);
    true
}

/// `scales` is indexed like [`Category::ALL`].
fn contributions_for(
    dist: &CostDistribution,
    totals: &CategoryTotals,
    scales: &[f64; 3],
) -> Contributions {
    let amount = |index: usize| {
        let category = Category::ALL[index];
        share_of(dist.coverage(category), sanitize_total(totals.get(category))) * scales[index]
    };

    let accommodation = amount(0);
    let meals = amount(1);
    let programs = amount(2);

    Contributions { accommodation, meals, programs, total: accommodation + meals + programs }
}

#[cfg(test)]
mod tests {
    use eventreg_domain::SponsorCompany;

    use super::*;

    fn sample() -> Vec<CostDistribution> {
        vec![
            CostDistribution::for_sponsor(
                SponsorCompany::new("comp1", "ABC Kft.").with_contact("Kiss János", "janos.kiss@abc.hu"),
            )
            .with_coverage(Category::Accommodation, 50)
            .with_coverage(Category::Meals, 10),
            CostDistribution::default().with_coverage(Category::Programs, 100),
        ]
    }

    #[test]
    fn recomputes_cached_contributions() {
        let totals = CategoryTotals::new(100_000.0, 20_000.0, 10_000.0);
        let updated = update_sponsor_contributions(&sample(), &totals);

        let company = updated[0].sponsor_company.as_ref().unwrap();
        assert_eq!(
            company.contributions,
            Contributions { accommodation: 50_000.0, meals: 2_000.0, programs: 0.0, total: 52_000.0 }
        );
        assert_eq!(company.contact_person.as_deref(), Some("Kiss János"));
        assert_eq!(updated[0].accommodation_coverage, 50);
    }

    #[test]
    fn sponsorless_distribution_passes_through() {
        let input = sample();
        let updated = update_sponsor_contributions(&input, &CategoryTotals::new(1.0, 1.0, 1.0));
        assert_eq!(updated[1], input[1]);
    }

    #[test]
    fn input_is_not_mutated() {
        let input = sample();
        let before = input.clone();
        let _ = update_sponsor_contributions(&input, &CategoryTotals::new(9.0, 9.0, 9.0));
        assert_eq!(input, before);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let totals = CategoryTotals::new(45_000.0, 13_000.0, 8_500.0);
        let first = update_sponsor_contributions(&sample(), &totals);
        let second = update_sponsor_contributions(&sample(), &totals);
        assert_eq!(first, second);
        assert_eq!(update_sponsor_contributions(&first, &totals), first);
    }

    #[test]
    fn sync_writes_once_then_settles() {
        let totals = CategoryTotals::new(100_000.0, 20_000.0, 10_000.0);
        let mut state = sample();

        assert!(sync_contributions(&mut state, &totals));
        assert!(!sync_contributions(&mut state, &totals));

        let changed = CategoryTotals::new(120_000.0, 20_000.0, 10_000.0);
        assert!(sync_contributions(&mut state, &changed));
        let company = state[0].sponsor_company.as_ref().unwrap();
        assert_eq!(company.contributions.accommodation, 60_000.0);
    }

    #[test]
    fn proportional_policy_scales_overcovered_category() {
        let dists = vec![
            CostDistribution::for_sponsor(SponsorCompany::new("comp1", "ABC Kft."))
                .with_coverage(Category::Programs, 100)
                .with_coverage(Category::Meals, 40),
            CostDistribution::for_sponsor(SponsorCompany::new("comp2", "XYZ Zrt."))
                .with_coverage(Category::Programs, 100),
        ];
        let totals = CategoryTotals::new(0.0, 10_000.0, 12_000.0);

        let scaled = update_sponsor_contributions_with_policy(&dists, &totals, CoveragePolicy::Proportional);
        let first = scaled[0].sponsor_company.as_ref().unwrap().contributions;
        assert_eq!(first.programs, 6_000.0);
        assert_eq!(first.meals, 4_000.0);
        assert_eq!(first.total, 10_000.0);

        let as_entered = update_sponsor_contributions(&dists, &totals);
        assert_eq!(as_entered[1].sponsor_company.as_ref().unwrap().contributions.programs, 12_000.0);
    }
}
