//! Wizard navigation, section updates and derived cost values

use chrono::NaiveDate;
use eventreg_core::{catalog, pricing};
use eventreg_domain::{
    CategoryTotals, CostOverview, EventRegError, PersonalInfo, RegistrationState,
    SelectedAccommodation, SelectedMeal, SelectedProgram, StepId,
};
use tracing::info;

use crate::utils::command_helpers::execute_with_string_error;
use crate::AppContext;

/* -------------------------------------------------------------------------- */
/* Navigation */
/* -------------------------------------------------------------------------- */

pub async fn get_registration_state(ctx: &AppContext) -> Result<RegistrationState, String> {
    execute_with_string_error("registration::get_state", move || async move {
        Ok(ctx.wizard.lock().await.snapshot())
    })
    .await
}

pub async fn next_step(ctx: &AppContext) -> Result<StepId, String> {
    execute_with_string_error("registration::next_step", move || async move {
        ctx.wizard.lock().await.next()
    })
    .await
}

pub async fn previous_step(ctx: &AppContext) -> Result<StepId, String> {
    execute_with_string_error("registration::previous_step", move || async move {
        ctx.wizard.lock().await.back()
    })
    .await
}

/// Jump back to a visited step, by its id (`"personal"`, `"meals"`, ...).
pub async fn go_to_step(ctx: &AppContext, step: String) -> Result<StepId, String> {
    execute_with_string_error("registration::go_to_step", move || async move {
        let target = step.parse::<StepId>().map_err(EventRegError::InvalidInput)?;
        ctx.wizard.lock().await.go_to(target)
    })
    .await
}

/* -------------------------------------------------------------------------- */
/* Section updates */
/* -------------------------------------------------------------------------- */

pub async fn update_personal_info(ctx: &AppContext, info: PersonalInfo) -> Result<(), String> {
    execute_with_string_error("registration::update_personal_info", move || async move {
        ctx.wizard.lock().await.update_personal_info(info);
        Ok(())
    })
    .await
}

pub async fn update_accommodation(
    ctx: &AppContext,
    accommodation: Option<SelectedAccommodation>,
) -> Result<CategoryTotals, String> {
    execute_with_string_error("registration::update_accommodation", move || async move {
        let mut wizard = ctx.wizard.lock().await;
        wizard.update_accommodation(accommodation);
        Ok(wizard.category_totals())
    })
    .await
}

pub async fn update_meals(
    ctx: &AppContext,
    meals: Vec<SelectedMeal>,
) -> Result<CategoryTotals, String> {
    execute_with_string_error("registration::update_meals", move || async move {
        let mut wizard = ctx.wizard.lock().await;
        wizard.update_meals(meals);
        Ok(wizard.category_totals())
    })
    .await
}

pub async fn update_programs(
    ctx: &AppContext,
    programs: Vec<SelectedProgram>,
) -> Result<CategoryTotals, String> {
    execute_with_string_error("registration::update_programs", move || async move {
        let mut wizard = ctx.wizard.lock().await;
        wizard.update_programs(programs);
        Ok(wizard.category_totals())
    })
    .await
}

/// Select or deselect a catalog program; returns whether it is now selected.
pub async fn toggle_program(ctx: &AppContext, program_id: String) -> Result<bool, String> {
    execute_with_string_error("registration::toggle_program", move || async move {
        let program = catalog::find_program(&program_id)
            .ok_or_else(|| EventRegError::NotFound(format!("program {program_id}")))?;
        Ok(ctx.wizard.lock().await.toggle_program(&program))
    })
    .await
}

/// Days of the current stay that meals can be ordered for.
pub async fn get_stay_days(ctx: &AppContext) -> Result<Vec<NaiveDate>, String> {
    execute_with_string_error("registration::get_stay_days", move || async move {
        let wizard = ctx.wizard.lock().await;
        Ok(wizard.state().accommodation.as_ref().map(pricing::stay_days).unwrap_or_default())
    })
    .await
}

/* -------------------------------------------------------------------------- */
/* Costs */
/* -------------------------------------------------------------------------- */

pub async fn get_category_totals(ctx: &AppContext) -> Result<CategoryTotals, String> {
    execute_with_string_error("registration::get_category_totals", move || async move {
        Ok(ctx.wizard.lock().await.category_totals())
    })
    .await
}

pub async fn get_cost_overview(ctx: &AppContext) -> Result<CostOverview, String> {
    execute_with_string_error("registration::get_cost_overview", move || async move {
        Ok(ctx.wizard.lock().await.cost_overview())
    })
    .await
}

/* -------------------------------------------------------------------------- */
/* Lifecycle */
/* -------------------------------------------------------------------------- */

/// Submit from the summary step; returns the final cost overview.
pub async fn submit_registration(ctx: &AppContext) -> Result<CostOverview, String> {
    execute_with_string_error("registration::submit", move || async move {
        let mut wizard = ctx.wizard.lock().await;
        wizard.submit()?;
        Ok(wizard.cost_overview())
    })
    .await
}

pub async fn reset_registration(ctx: &AppContext) -> Result<(), String> {
    execute_with_string_error("registration::reset", move || async move {
        ctx.wizard.lock().await.reset();
        info!("registration reset");
        Ok(())
    })
    .await
}
