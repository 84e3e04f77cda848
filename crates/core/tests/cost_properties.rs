//! Cost engine properties and worked scenarios.

mod support;

use eventreg_core::{
    calculate_amount, calculate_amount_with_policy, calculate_total_per_sponsor, cost_overview,
    update_sponsor_contributions,
};
use eventreg_domain::{AmountBreakdown, Category, CategoryTotals, CostDistribution, CoveragePolicy};
use support::sponsor;

const EPSILON: f64 = 1e-6;

fn roster(n: usize) -> Vec<CostDistribution> {
    (0..n)
        .map(|i| {
            let pct = u32::try_from(i * 7 % 30).unwrap();
            sponsor(&format!("s{i}"), [pct, pct / 2, 30 - pct])
        })
        .collect()
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn breakdowns_align_with_distributions() {
    for n in 0..6 {
        let dists = roster(n);
        for total in [0.0, -10.0, f64::NAN, 42_000.0] {
            for category in Category::ALL {
                let result = calculate_amount(&dists, category, total);
                assert_eq!(result.amount_for_sponsors.len(), n, "n={n} total={total}");
            }
        }

        let breakdown = calculate_amount(&dists, Category::Meals, 1_000.0);
        let per_sponsor = calculate_total_per_sponsor(&dists, &breakdown, &breakdown, &breakdown);
        assert_eq!(per_sponsor.len(), n);
    }
}

#[test]
fn empty_zero_total_is_fully_self_covered() {
    assert_eq!(
        calculate_amount(&[], Category::Accommodation, 0.0),
        AmountBreakdown { amount_for_sponsors: vec![], amount_for_self: 0.0, percentage_for_self: 100 }
    );
}

#[test]
fn over_full_coverage_clamps_residual() {
    let result = calculate_amount(&[sponsor("a", [150, 0, 0])], Category::Accommodation, 1_000.0);
    assert_eq!(result.amount_for_self, 0.0);
    assert!(result.amount_for_self >= 0.0);
}

// ============================================================================
// Conservation
// ============================================================================

#[test]
fn amounts_add_up_when_coverage_fits() {
    let cases: [(&[u32], f64); 5] = [
        (&[0], 999.99),
        (&[33, 33, 33], 100_000.0),
        (&[50, 50], 7_777.0),
        (&[5, 10, 15, 20], 123_456.78),
        (&[100], 0.01),
    ];

    for (coverages, total) in cases {
        let dists: Vec<_> =
            coverages.iter().map(|&pct| sponsor("s", [0, pct, 0])).collect();
        for policy in [CoveragePolicy::AsEntered, CoveragePolicy::Proportional] {
            let result = calculate_amount_with_policy(&dists, Category::Meals, total, policy);
            let sum = result.covered_by_sponsors() + result.amount_for_self;
            assert!((sum - total).abs() < EPSILON, "{coverages:?} {total} {policy:?}");
        }
    }
}

#[test]
fn proportional_policy_conserves_even_when_overflowing() {
    let dists = vec![sponsor("a", [80, 0, 0]), sponsor("b", [70, 0, 0])];
    let result =
        calculate_amount_with_policy(&dists, Category::Accommodation, 30_000.0, CoveragePolicy::Proportional);
    assert!((result.covered_by_sponsors() - 30_000.0).abs() < EPSILON);
    assert!(result.amount_for_self.abs() < EPSILON);

    let as_entered = calculate_amount(&dists, Category::Accommodation, 30_000.0);
    assert_eq!(as_entered.amount_for_sponsors, vec![24_000.0, 21_000.0]);
    assert_eq!(as_entered.amount_for_self, 0.0);
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn per_sponsor_totals_sum_categories() {
    let dists = vec![CostDistribution::default(), CostDistribution::default()];
    let with = |amounts: Vec<f64>| AmountBreakdown {
        amount_for_sponsors: amounts,
        ..AmountBreakdown::default()
    };
    let totals = calculate_total_per_sponsor(
        &dists,
        &with(vec![100.0, 200.0]),
        &with(vec![50.0, 0.0]),
        &with(vec![0.0, 300.0]),
    );
    assert_eq!(totals, vec![150.0, 500.0]);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn single_sponsor_half_accommodation() {
    let dists = vec![sponsor("comp1", [50, 0, 0])];
    let overview = cost_overview(
        &dists,
        &CategoryTotals::new(100_000.0, 20_000.0, 10_000.0),
        CoveragePolicy::AsEntered,
    );

    assert_eq!(overview.total_per_sponsor, vec![50_000.0]);
    assert_eq!(overview.split.total_for_self, 80_000.0);
    assert_eq!(overview.split.percentage_for_self, 62);
}

#[test]
fn two_sponsors_split_meals() {
    let dists = vec![sponsor("A", [0, 30, 0]), sponsor("B", [0, 20, 0])];
    let result = calculate_amount(&dists, Category::Meals, 10_000.0);
    assert_eq!(result.amount_for_sponsors, vec![3_000.0, 2_000.0]);
    assert_eq!(result.amount_for_self, 5_000.0);
    assert_eq!(result.percentage_for_self, 50);
}

#[test]
fn contribution_refresh_is_deterministic() {
    let dists = vec![sponsor("A", [25, 40, 10]), CostDistribution::default(), sponsor("B", [5, 0, 90])];
    let totals = CategoryTotals::new(90_000.0, 26_000.0, 17_500.0);

    let first = update_sponsor_contributions(&dists, &totals);
    let second = update_sponsor_contributions(&dists, &totals);
    assert_eq!(first, second);

    let a = first[0].sponsor_company.as_ref().unwrap().contributions;
    assert_eq!(a.accommodation, 22_500.0);
    assert_eq!(a.meals, 10_400.0);
    assert_eq!(a.programs, 1_750.0);
    assert_eq!(a.total, 34_650.0);
}
