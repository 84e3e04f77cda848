//! Sponsor roster operations
//!
//! Add, remove and re-weight sponsors on a list of [`CostDistribution`]s.
//! Coverage values entered here are clamped and snapped; the cost engine
//! itself still accepts whatever ends up in the list.

use eventreg_domain::constants::{
    MAX_COVERAGE_PERCENT, MIN_COVERAGE_PERCENT, NEW_SPONSOR_ID_PREFIX,
};
use eventreg_domain::{Category, CostDistribution, EventRegError, Result, SponsorCompany};
use tracing::debug;
use uuid::Uuid;

/// Append a catalog company with zero coverage.
pub fn add_predefined(
    distributions: &mut Vec<CostDistribution>,
    company: SponsorCompany,
) -> Result<()> {
    ensure_unique(distributions, &company.id, &company.name)?;
    debug!(sponsor_id = %company.id, "sponsor added");
    distributions.push(CostDistribution::for_sponsor(company));
    Ok(())
}

/// Append an ad-hoc company named `name` and return it.
pub fn add_new(distributions: &mut Vec<CostDistribution>, name: &str) -> Result<SponsorCompany> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EventRegError::InvalidInput("sponsor name must not be empty".into()));
    }

    let company = SponsorCompany::new(format!("{NEW_SPONSOR_ID_PREFIX}{}", Uuid::new_v4()), name);
    add_predefined(distributions, company.clone())?;
    Ok(company)
}

/// Remove the distribution at `index`, returning it.
pub fn remove(distributions: &mut Vec<CostDistribution>, index: usize) -> Result<CostDistribution> {
    if index >= distributions.len() {
        return Err(out_of_range(index, distributions.len()));
    }
    let removed = distributions.remove(index);
    debug!(index, sponsor = ?removed.sponsor_name(), "sponsor removed");
    Ok(removed)
}

/// Set one coverage percentage, clamped to `[0, 100]` and snapped to `step`.
///
/// Returns the value actually stored.
pub fn set_coverage(
    distributions: &mut [CostDistribution],
    index: usize,
    category: Category,
    value: i64,
    step: u32,
) -> Result<u32> {
    let len = distributions.len();
    let dist = distributions.get_mut(index).ok_or_else(|| out_of_range(index, len))?;

    let percent = snap_to_step(clamp_percent(value), step);
    *dist.coverage_mut(category) = percent;
    Ok(percent)
}

/// Catalog companies that are not on the list yet.
pub fn available_sponsors(
    catalog: &[SponsorCompany],
    distributions: &[CostDistribution],
) -> Vec<SponsorCompany> {
    catalog
        .iter()
        .filter(|company| ensure_unique(distributions, &company.id, &company.name).is_ok())
        .cloned()
        .collect()
}

fn ensure_unique(distributions: &[CostDistribution], id: &str, name: &str) -> Result<()> {
    let wanted = normalize(name);
    let taken = distributions
        .iter()
        .filter_map(|dist| dist.sponsor_company.as_ref())
        .any(|existing| existing.id == id || normalize(&existing.name) == wanted);

    if taken {
        return Err(EventRegError::Duplicate(format!("sponsor '{}' already added", name.trim())));
    }
    Ok(())
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn out_of_range(index: usize, len: usize) -> EventRegError {
    EventRegError::NotFound(format!("no sponsor at index {index} (have {len})"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_percent(value: i64) -> u32 {
    value.clamp(i64::from(MIN_COVERAGE_PERCENT), i64::from(MAX_COVERAGE_PERCENT)) as u32
}

/// Nearest multiple of `step`, with 100 always a stop even when `step`
/// does not divide it. Ties round up.
fn snap_to_step(percent: u32, step: u32) -> u32 {
    if step <= 1 {
        return percent;
    }
    let snapped = (percent + step / 2) / step * step;
    if MAX_COVERAGE_PERCENT - percent <= percent.abs_diff(snapped) {
        return MAX_COVERAGE_PERCENT;
    }
    snapped.min(MAX_COVERAGE_PERCENT)
}
