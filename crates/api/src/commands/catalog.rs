//! Catalog lookups

use eventreg_core::{catalog, sponsors};
use eventreg_domain::{AccommodationOption, MealOption, ProgramOption, SponsorCompany};

use crate::utils::command_helpers::execute_with_string_error;
use crate::AppContext;

pub async fn get_accommodations() -> Result<Vec<AccommodationOption>, String> {
    execute_with_string_error("catalog::get_accommodations", move || async move {
        Ok(catalog::accommodations())
    })
    .await
}

pub async fn get_meal_options() -> Result<Vec<MealOption>, String> {
    execute_with_string_error("catalog::get_meal_options", move || async move { Ok(catalog::meal_options()) })
        .await
}

pub async fn get_programs() -> Result<Vec<ProgramOption>, String> {
    execute_with_string_error("catalog::get_programs", move || async move { Ok(catalog::programs()) }).await
}

/// Predefined sponsors not yet on the current registration.
pub async fn get_available_sponsors(ctx: &AppContext) -> Result<Vec<SponsorCompany>, String> {
    execute_with_string_error("catalog::get_available_sponsors", move || async move {
        let wizard = ctx.wizard.lock().await;
        Ok(sponsors::available_sponsors(
            &catalog::predefined_sponsors(),
            &wizard.state().cost_distribution,
        ))
    })
    .await
}
