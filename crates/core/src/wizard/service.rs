//! Wizard controller - core business logic
//!
//! [`RegistrationWizard`] is the single owner of a [`RegistrationState`].
//! Every mutation goes through it so the cached sponsor contributions are
//! refreshed exactly once per change.

use eventreg_domain::constants::DEFAULT_COVERAGE_STEP;
use eventreg_domain::{
    AccommodationPricing, Category, CategoryTotals, CostOverview, CoveragePolicy, EventRegError,
    PersonalInfo, PricingConfig, ProgramOption, RegistrationState, Result, SelectedAccommodation,
    SelectedMeal, SelectedProgram, SponsorCompany, StepId,
};
use tracing::{debug, info};

use crate::cost::{cost_overview, sync_contributions_with_policy};
use crate::pricing::{category_totals, effective_nights, nights_between};
use crate::sponsors;

/// Policies the wizard prices and splits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardSettings {
    pub accommodation_pricing: AccommodationPricing,
    pub coverage_policy: CoveragePolicy,
    /// Coverage stepper granularity; `0` or `1` disables snapping.
    pub coverage_step: u32,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            accommodation_pricing: AccommodationPricing::default(),
            coverage_policy: CoveragePolicy::default(),
            coverage_step: DEFAULT_COVERAGE_STEP,
        }
    }
}

impl From<&PricingConfig> for WizardSettings {
    fn from(config: &PricingConfig) -> Self {
        Self {
            accommodation_pricing: config.accommodation_pricing,
            coverage_policy: config.coverage_policy,
            coverage_step: config.coverage_step,
        }
    }
}

/// Linear registration wizard
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard {
    state: RegistrationState,
    settings: WizardSettings,
}

impl RegistrationWizard {
    /// Fresh wizard at the first step
    pub fn new(settings: WizardSettings) -> Self {
        Self { state: RegistrationState::default(), settings }
    }

    /// Resume from an existing state
    pub fn with_state(settings: WizardSettings, state: RegistrationState) -> Self {
        let mut wizard = Self { state, settings };
        wizard.refresh_contributions();
        wizard
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn settings(&self) -> WizardSettings {
        self.settings
    }

    pub fn current_step(&self) -> StepId {
        self.state.step
    }

    /* ---------------------------------------------------------------------- */
    /* Navigation */
    /* ---------------------------------------------------------------------- */

    /// Validate the current step and advance.
    pub fn next(&mut self) -> Result<StepId> {
        let current = self.state.step;
        self.validate_step(current)?;

        let next = current.next().ok_or_else(|| {
            EventRegError::InvalidTransition(format!("'{current}' is the last step"))
        })?;
        self.state.step = next;
        debug!(from = %current, to = %next, "wizard advanced");
        Ok(next)
    }

    /// Go back one step.
    pub fn back(&mut self) -> Result<StepId> {
        let current = self.state.step;
        let previous = current.previous().ok_or_else(|| {
            EventRegError::InvalidTransition(format!("'{current}' is the first step"))
        })?;
        self.state.step = previous;
        debug!(from = %current, to = %previous, "wizard went back");
        Ok(previous)
    }

    /// Jump to an already visited step.
    pub fn go_to(&mut self, step: StepId) -> Result<StepId> {
        let current = self.state.step;
        if step > current {
            return Err(EventRegError::InvalidTransition(format!(
                "cannot skip ahead from '{current}' to '{step}'"
            )));
        }
        self.state.step = step;
        Ok(step)
    }

    /// Presence checks for `step`; later steps have none.
    pub fn validate_step(&self, step: StepId) -> Result<()> {
        match step {
            StepId::Personal => {
                let missing = self.state.personal_info.missing_fields();
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(EventRegError::InvalidInput(format!(
                        "missing personal details: {}",
                        missing.join(", ")
                    )))
                }
            }
            StepId::Accommodation => match self.state.accommodation.as_ref() {
                None => Ok(()),
                Some(selection) if selection.room_type.is_none() => {
                    Err(EventRegError::InvalidInput("no room type selected".into()))
                }
                Some(selection) if effective_nights(selection) == 0 => {
                    Err(EventRegError::InvalidInput("stay must be at least one night".into()))
                }
                Some(_) => Ok(()),
            },
            StepId::Meals | StepId::Programs | StepId::Cost | StepId::Summary => Ok(()),
        }
    }

    /* ---------------------------------------------------------------------- */
    /* Section updaters */
    /* ---------------------------------------------------------------------- */

    pub fn update_personal_info(&mut self, personal_info: PersonalInfo) {
        self.state.personal_info = personal_info;
    }

    /// Replace the accommodation choice; the night count is re-derived from
    /// the dates when both are set.
    pub fn update_accommodation(&mut self, accommodation: Option<SelectedAccommodation>) {
        self.state.accommodation = accommodation.map(|mut selection| {
            if let (Some(check_in), Some(check_out)) = (selection.check_in, selection.check_out) {
                selection.number_of_nights = nights_between(check_in, check_out);
            }
            selection
        });
        self.refresh_contributions();
    }

    pub fn update_meals(&mut self, meals: Vec<SelectedMeal>) {
        self.state.meals = meals;
        self.refresh_contributions();
    }

    pub fn update_programs(&mut self, programs: Vec<SelectedProgram>) {
        self.state.programs = programs;
        self.refresh_contributions();
    }

    /// Select `program`, or deselect it if already selected. Returns whether
    /// it is selected afterwards.
    pub fn toggle_program(&mut self, program: &ProgramOption) -> bool {
        let selected = if let Some(pos) = self.state.programs.iter().position(|p| p.id == program.id)
        {
            self.state.programs.remove(pos);
            false
        } else {
            self.state.programs.push(SelectedProgram::from(program));
            true
        };
        self.refresh_contributions();
        selected
    }

    /* ---------------------------------------------------------------------- */
    /* Sponsors */
    /* ---------------------------------------------------------------------- */

    pub fn add_predefined_sponsor(&mut self, company: SponsorCompany) -> Result<()> {
        sponsors::add_predefined(&mut self.state.cost_distribution, company)?;
        self.refresh_contributions();
        Ok(())
    }

    pub fn add_new_sponsor(&mut self, name: &str) -> Result<SponsorCompany> {
        let company = sponsors::add_new(&mut self.state.cost_distribution, name)?;
        self.refresh_contributions();
        Ok(company)
    }

    pub fn remove_sponsor(&mut self, index: usize) -> Result<()> {
        sponsors::remove(&mut self.state.cost_distribution, index)?;
        self.refresh_contributions();
        Ok(())
    }

    /// Set one coverage value using the configured step; returns the stored
    /// percentage.
    pub fn set_coverage(&mut self, index: usize, category: Category, value: i64) -> Result<u32> {
        let stored = sponsors::set_coverage(
            &mut self.state.cost_distribution,
            index,
            category,
            value,
            self.settings.coverage_step,
        )?;
        self.refresh_contributions();
        Ok(stored)
    }

    /* ---------------------------------------------------------------------- */
    /* Derived values */
    /* ---------------------------------------------------------------------- */

    pub fn category_totals(&self) -> CategoryTotals {
        category_totals(&self.state, self.settings.accommodation_pricing)
    }

    pub fn cost_overview(&self) -> CostOverview {
        cost_overview(
            &self.state.cost_distribution,
            &self.category_totals(),
            self.settings.coverage_policy,
        )
    }

    /* ---------------------------------------------------------------------- */
    /* Lifecycle */
    /* ---------------------------------------------------------------------- */

    /// Mark the registration as submitted; only valid on the summary step.
    pub fn submit(&mut self) -> Result<()> {
        if self.state.step != StepId::Summary {
            return Err(EventRegError::InvalidTransition(format!(
                "cannot submit from '{}'",
                self.state.step
            )));
        }
        if self.state.submitted {
            return Err(EventRegError::InvalidTransition("registration already submitted".into()));
        }

        self.state.submitted = true;
        let overview = self.cost_overview();
        info!(
            total_cost = overview.split.total_cost,
            total_for_self = overview.split.total_for_self,
            sponsors = self.state.cost_distribution.len(),
            "registration submitted"
        );
        Ok(())
    }

    /// Discard everything and return to the first step.
    pub fn reset(&mut self) {
        self.state = RegistrationState::default();
    }

    pub fn snapshot(&self) -> RegistrationState {
        self.state.clone()
    }

    /// Replace the whole state, e.g. after loading a saved registration.
    pub fn restore(&mut self, state: RegistrationState) {
        self.state = state;
        self.refresh_contributions();
    }

    fn refresh_contributions(&mut self) {
        let totals = self.category_totals();
        sync_contributions_with_policy(
            &mut self.state.cost_distribution,
            &totals,
            self.settings.coverage_policy,
        );
    }
}
