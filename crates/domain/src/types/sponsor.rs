//! Sponsors and their per-category coverage

use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/* -------------------------------------------------------------------------- */
/* Category */
/* -------------------------------------------------------------------------- */

/// One of the three independent cost buckets a sponsor can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum Category {
    Accommodation,
    Meals,
    Programs,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 3] = [Self::Accommodation, Self::Meals, Self::Programs];
}

crate::impl_domain_status_conversions!(Category {
    Accommodation => "accommodation",
    Meals => "meals",
    Programs => "programs",
});

/* -------------------------------------------------------------------------- */
/* Sponsor Company */
/* -------------------------------------------------------------------------- */

/// Cached per-category amounts a sponsor pays.
///
/// Derived from coverage percentages and category totals; never
/// authoritative. Rewritten by the contribution synchronizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Contributions {
    #[serde(default)]
    pub accommodation: f64,
    #[serde(default)]
    pub meals: f64,
    #[serde(default)]
    pub programs: f64,
    #[serde(default)]
    pub total: f64,
}

/// A company paying part of the registrant's costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SponsorCompany {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub contributions: Contributions,
}

impl SponsorCompany {
    /// Sponsor with only identity set and zero contributions.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact_person: None,
            email: None,
            contributions: Contributions::default(),
        }
    }

    /// Attach contact details.
    pub fn with_contact(mut self, person: impl Into<String>, email: impl Into<String>) -> Self {
        self.contact_person = Some(person.into());
        self.email = Some(email.into());
        self
    }
}

/* -------------------------------------------------------------------------- */
/* Cost Distribution */
/* -------------------------------------------------------------------------- */

/// Pairing of one sponsor with its three coverage percentages.
///
/// Percentages are meant to lie in `[0, 100]`, but nothing upstream enforces
/// that, so values above 100 are representable. Decoding is lenient: a
/// missing, null, negative or non-numeric coverage becomes `0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CostDistribution {
    #[serde(default)]
    pub sponsor_company: Option<SponsorCompany>,
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub accommodation_coverage: u32,
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub meals_coverage: u32,
    #[serde(default, deserialize_with = "lenient_percentage")]
    pub programs_coverage: u32,
}

impl CostDistribution {
    /// New distribution for `sponsor` with zero coverage everywhere.
    pub fn for_sponsor(sponsor: SponsorCompany) -> Self {
        Self { sponsor_company: Some(sponsor), ..Self::default() }
    }

    /// Coverage percentage for one category.
    pub fn coverage(&self, category: Category) -> u32 {
        match category {
            Category::Accommodation => self.accommodation_coverage,
            Category::Meals => self.meals_coverage,
            Category::Programs => self.programs_coverage,
        }
    }

    /// Mutable coverage slot for one category.
    pub fn coverage_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Accommodation => &mut self.accommodation_coverage,
            Category::Meals => &mut self.meals_coverage,
            Category::Programs => &mut self.programs_coverage,
        }
    }

    /// Builder-style coverage setter, no clamping.
    #[must_use]
    pub fn with_coverage(mut self, category: Category, percent: u32) -> Self {
        *self.coverage_mut(category) = percent;
        self
    }

    /// Sponsor display name, if a sponsor is attached.
    pub fn sponsor_name(&self) -> Option<&str> {
        self.sponsor_company.as_ref().map(|company| company.name.as_str())
    }
}

fn lenient_percentage<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(serde_json::Value::as_f64).map_or(0, percent_from_f64))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_from_f64(raw: f64) -> u32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    raw.round().min(f64::from(u32::MAX)) as u32
}
