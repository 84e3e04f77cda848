//! Category totals from the registrant's selections
//!
//! These feed the cost engine. The accommodation formula depends on the
//! configured [`AccommodationPricing`] policy.

use chrono::NaiveDate;
use eventreg_domain::{
    AccommodationPricing, CategoryTotals, RegistrationState, SelectedAccommodation, SelectedMeal,
    SelectedProgram,
};

/// Whole nights between two dates; `0` unless check-out is after check-in.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> u32 {
    u32::try_from((check_out - check_in).num_days()).unwrap_or(0)
}

/// Nights to bill: the cached count if set, otherwise derived from the dates.
pub fn effective_nights(selection: &SelectedAccommodation) -> u32 {
    if selection.number_of_nights > 0 {
        return selection.number_of_nights;
    }
    match (selection.check_in, selection.check_out) {
        (Some(check_in), Some(check_out)) => nights_between(check_in, check_out),
        _ => 0,
    }
}

/// Days meals can be ordered for: one per night starting at check-in, and
/// at least one day once both dates are known.
pub fn stay_days(selection: &SelectedAccommodation) -> Vec<NaiveDate> {
    let Some(check_in) = selection.check_in else {
        return Vec::new();
    };
    if selection.check_out.is_none() {
        return Vec::new();
    }

    let count = effective_nights(selection).max(1);
    check_in.iter_days().take(count as usize).collect()
}

/// Room price × nights, times guests under [`AccommodationPricing::PerGuest`].
///
/// Nothing selected, or no room type chosen, costs `0`.
pub fn accommodation_total(
    selection: Option<&SelectedAccommodation>,
    pricing: AccommodationPricing,
) -> f64 {
    let Some(selection) = selection else {
        return 0.0;
    };
    let Some(room) = selection.room_type.as_ref() else {
        return 0.0;
    };

    let base = room.price_per_night * f64::from(effective_nights(selection));
    match pricing {
        AccommodationPricing::PerRoom => base,
        AccommodationPricing::PerGuest => base * f64::from(selection.number_of_guests.max(1)),
    }
}

/// Σ price × quantity over every day's line items.
pub fn meals_total(meals: &[SelectedMeal]) -> f64 {
    meals
        .iter()
        .flat_map(|day| day.meals.iter())
        .map(|item| item.meal.price * f64::from(item.quantity))
        .sum()
}

/// Σ price over the selected programs.
pub fn programs_total(programs: &[SelectedProgram]) -> f64 {
    programs.iter().map(|program| program.price).sum()
}

/// All three category totals for the current state.
pub fn category_totals(state: &RegistrationState, pricing: AccommodationPricing) -> CategoryTotals {
    CategoryTotals {
        accommodation: accommodation_total(state.accommodation.as_ref(), pricing),
        meals: meals_total(&state.meals),
        programs: programs_total(&state.programs),
    }
}
