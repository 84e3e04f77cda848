//! Registration inputs: personal data, catalog entries and the registrant's
//! selections from each wizard step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/* -------------------------------------------------------------------------- */
/* Personal Info */
/* -------------------------------------------------------------------------- */

/// Registrant contact data collected on the first step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct PersonalInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

impl PersonalInfo {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/* -------------------------------------------------------------------------- */
/* Accommodation */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum BedType {
    Single,
    Double,
    Multiple,
}

/// Bookable room category of one accommodation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub price_per_night: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub available: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_type: Option<BedType>,
}

/// Hotel offered for the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AccommodationOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
}

/// The registrant's accommodation choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SelectedAccommodation {
    #[serde(default)]
    pub accommodation: Option<AccommodationOption>,
    #[serde(default)]
    pub room_type: Option<RoomType>,
    #[serde(default = "default_guests")]
    pub number_of_guests: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveDate>,
    /// Cached night count; `0` means "derive from the dates".
    #[serde(default)]
    pub number_of_nights: u32,
}

impl SelectedAccommodation {
    /// Selection of `room` in `accommodation` for one guest, dates unset.
    pub fn new(accommodation: AccommodationOption, room: RoomType) -> Self {
        Self {
            accommodation: Some(accommodation),
            room_type: Some(room),
            number_of_guests: default_guests(),
            check_in: None,
            check_out: None,
            number_of_nights: 0,
        }
    }
}

fn default_guests() -> u32 {
    1
}

/* -------------------------------------------------------------------------- */
/* Meals */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Gala,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MealOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub meal_type: MealType,
}

/// One meal ordered `quantity` times on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MealLineItem {
    pub meal: MealOption,
    #[serde(default)]
    pub quantity: u32,
}

/// Meals ordered for one day of the stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SelectedMeal {
    pub date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<MealLineItem>,
}

/* -------------------------------------------------------------------------- */
/* Programs */
/* -------------------------------------------------------------------------- */

/// Optional side program (tour, workshop) with its own price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProgramOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration: String,
    pub price: f64,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub available: u32,
}

/// A program the registrant signed up for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SelectedProgram {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl From<&ProgramOption> for SelectedProgram {
    fn from(program: &ProgramOption) -> Self {
        Self {
            id: program.id.clone(),
            name: program.name.clone(),
            price: program.price,
            date: Some(program.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_reports_blank_required_values() {
        let info = PersonalInfo {
            first_name: "Anna".into(),
            last_name: "  ".into(),
            email: "anna@example.hu".into(),
            ..PersonalInfo::default()
        };
        assert_eq!(info.missing_fields(), vec!["lastName", "phone"]);
    }

    #[test]
    fn accommodation_selection_accepts_sparse_payload() {
        let raw = r#"{ "roomType": { "id": "room1", "name": "Egyágyas szoba", "capacity": 1, "pricePerNight": 35000 } }"#;
        let selected: SelectedAccommodation = serde_json::from_str(raw).unwrap();

        assert_eq!(selected.number_of_guests, 1);
        assert_eq!(selected.number_of_nights, 0);
        assert!(selected.accommodation.is_none());
        assert_eq!(selected.room_type.unwrap().price_per_night, 35_000.0);
    }

    #[test]
    fn meal_type_uses_type_key() {
        let raw = r#"{ "id": "meal4", "name": "Gálavacsora", "price": 18000, "type": "gala" }"#;
        let meal: MealOption = serde_json::from_str(raw).unwrap();
        assert_eq!(meal.meal_type, MealType::Gala);
    }
}
