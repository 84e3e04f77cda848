//! Cost-distribution engine
//!
//! Pure functions that split category totals between sponsors and the
//! registrant. None of them fail: malformed input degrades to zero or to the
//! "fully self-covered" default instead of an error, so a cost summary can
//! always be rendered.

pub mod aggregator;
pub mod calculator;
pub mod contributions;
pub mod summary;

pub use aggregator::calculate_total_per_sponsor;
pub use calculator::{calculate_amount, calculate_amount_with_policy, coverage_overflow};
pub use contributions::{
    sync_contributions, sync_contributions_with_policy, update_sponsor_contributions,
    update_sponsor_contributions_with_policy,
};
pub use summary::{cost_overview, summarize_split};

use eventreg_domain::constants::{FULL_SELF_PERCENTAGE, MAX_COVERAGE_PERCENT};

/// Non-finite and negative totals count as nothing to pay for.
pub(crate) fn sanitize_total(total: f64) -> f64 {
    if total.is_finite() && total > 0.0 {
        total
    } else {
        0.0
    }
}

/// `percent`% of `total`.
pub(crate) fn share_of(percent: u32, total: f64) -> f64 {
    f64::from(percent) * total / 100.0
}

/// `part / whole` as a rounded percentage in `[0, 100]`; `100` when `whole`
/// is not positive.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn rounded_percentage(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || !whole.is_finite() {
        return FULL_SELF_PERCENTAGE;
    }
    let percent = (part / whole * 100.0).round();
    if percent.is_nan() {
        return FULL_SELF_PERCENTAGE;
    }
    percent.clamp(0.0, f64::from(MAX_COVERAGE_PERCENT)) as u32
}
