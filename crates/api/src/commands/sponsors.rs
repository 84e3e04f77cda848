//! Sponsor roster commands

use eventreg_core::catalog;
use eventreg_domain::{Category, CostOverview, EventRegError, SponsorCompany};

use crate::utils::command_helpers::execute_with_string_error;
use crate::AppContext;

/// Add a predefined sponsor by catalog id.
pub async fn add_predefined_sponsor(
    ctx: &AppContext,
    sponsor_id: String,
) -> Result<SponsorCompany, String> {
    execute_with_string_error("sponsors::add_predefined", move || async move {
        let company = catalog::find_sponsor(&sponsor_id)
            .ok_or_else(|| EventRegError::NotFound(format!("sponsor {sponsor_id}")))?;
        ctx.wizard.lock().await.add_predefined_sponsor(company.clone())?;
        Ok(company)
    })
    .await
}

pub async fn add_new_sponsor(ctx: &AppContext, name: String) -> Result<SponsorCompany, String> {
    execute_with_string_error("sponsors::add_new", move || async move {
        ctx.wizard.lock().await.add_new_sponsor(&name)
    })
    .await
}

pub async fn remove_sponsor(ctx: &AppContext, index: usize) -> Result<CostOverview, String> {
    execute_with_string_error("sponsors::remove", move || async move {
        let mut wizard = ctx.wizard.lock().await;
        wizard.remove_sponsor(index)?;
        Ok(wizard.cost_overview())
    })
    .await
}

/// Set a coverage percentage; `category` is `"accommodation"`, `"meals"`
/// or `"programs"`. Returns the refreshed overview.
pub async fn set_sponsor_coverage(
    ctx: &AppContext,
    index: usize,
    category: String,
    value: i64,
) -> Result<CostOverview, String> {
    execute_with_string_error("sponsors::set_coverage", move || async move {
        let category = category.parse::<Category>().map_err(EventRegError::InvalidInput)?;
        let mut wizard = ctx.wizard.lock().await;
        wizard.set_coverage(index, category, value)?;
        Ok(wizard.cost_overview())
    })
    .await
}
