//! Built-in event catalog: hotels, meals, programs and known sponsors.

use chrono::NaiveDate;
use eventreg_domain::{
    AccommodationOption, BedType, MealOption, MealType, ProgramOption, RoomType, SponsorCompany,
};

/* -------------------------------------------------------------------------- */
/* Accommodations */
/* -------------------------------------------------------------------------- */

fn room(
    id: &str,
    name: &str,
    capacity: u32,
    price_per_night: f64,
    description: &str,
    available: u32,
    bed_type: BedType,
) -> RoomType {
    RoomType {
        id: id.to_string(),
        name: name.to_string(),
        capacity,
        price_per_night,
        description: description.to_string(),
        available,
        bed_type: Some(bed_type),
    }
}

/// Hotels offered for the event with their room types.
pub fn accommodations() -> Vec<AccommodationOption> {
    vec![
        AccommodationOption {
            id: "acc1".into(),
            name: "Grand Hotel".into(),
            address: "Budapest, Andrássy út 100".into(),
            description: "Luxus szálloda a belvárosban".into(),
            room_types: vec![
                room("room1", "Egyágyas szoba", 1, 35_000.0, "Kényelmes szoba egy személyre", 10, BedType::Single),
                room("room2", "Kétágyas szoba", 2, 45_000.0, "Tágas szoba két főre", 8, BedType::Double),
                room("room3", "Lakosztály", 4, 85_000.0, "Luxus lakosztály kilátással", 3, BedType::Multiple),
            ],
        },
        AccommodationOption {
            id: "acc2".into(),
            name: "Park Inn".into(),
            address: "Budapest, Váci út 50".into(),
            description: "Modern szálloda zöld környezetben".into(),
            room_types: vec![
                room("room4", "Standard szoba", 2, 32_000.0, "Kényelmes szoba egy vagy két főre", 15, BedType::Double),
                room("room5", "Superior szoba", 2, 39_000.0, "Superior szoba panorámával", 12, BedType::Double),
                room("room6", "Családi szoba", 4, 65_000.0, "Tágas szoba családok számára", 5, BedType::Multiple),
            ],
        },
        AccommodationOption {
            id: "acc3".into(),
            name: "City Boutique".into(),
            address: "Budapest, Király utca 25".into(),
            description: "Elegáns boutique hotel a városközpontban".into(),
            room_types: vec![
                room("room7", "Design szoba", 2, 42_000.0, "Modern design szoba pároknak", 8, BedType::Double),
                room("room8", "Deluxe szoba", 2, 52_000.0, "Tágas deluxe szoba francia ággyal", 6, BedType::Double),
                room("room9", "Penthouse", 4, 95_000.0, "Exkluzív tetőtéri lakosztály", 2, BedType::Multiple),
            ],
        },
    ]
}

/// Look up a hotel and one of its rooms by id.
pub fn find_room(accommodation_id: &str, room_id: &str) -> Option<(AccommodationOption, RoomType)> {
    let accommodation = accommodations().into_iter().find(|acc| acc.id == accommodation_id)?;
    let room = accommodation.room_types.iter().find(|room| room.id == room_id)?.clone();
    Some((accommodation, room))
}

/* -------------------------------------------------------------------------- */
/* Meals */
/* -------------------------------------------------------------------------- */

/// Meals orderable for each day of the stay.
pub fn meal_options() -> Vec<MealOption> {
    [
        ("meal1", "Reggeli", "Kontinentális reggeli", 4_500.0, MealType::Breakfast),
        ("meal2", "Ebéd", "Háromfogásos ebéd", 6_500.0, MealType::Lunch),
        ("meal3", "Vacsora", "Büfévacsora", 7_500.0, MealType::Dinner),
        ("meal4", "Gálavacsora", "Exkluzív fogadás és gálavacsora", 18_000.0, MealType::Gala),
    ]
    .into_iter()
    .map(|(id, name, description, price, meal_type)| MealOption {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        meal_type,
    })
    .collect()
}

pub fn find_meal(meal_id: &str) -> Option<MealOption> {
    meal_options().into_iter().find(|meal| meal.id == meal_id)
}

/* -------------------------------------------------------------------------- */
/* Programs */
/* -------------------------------------------------------------------------- */

/// Optional side programs during the event week.
pub fn programs() -> Vec<ProgramOption> {
    [
        ("prog1", "Színházi előadás", "Exkluzív színházi előadás a város híres színházában", 15, "2 óra", 12_000.0, 50, 22),
        ("prog2", "Borkóstoló", "Prémium borok kóstolója helyi borászok vezetésével", 16, "1.5 óra", 8_500.0, 30, 12),
        ("prog3", "Városnéző túra", "Vezetett séta a város legszebb helyein", 17, "3 óra", 5_000.0, 25, 8),
        ("prog4", "Szakmai workshop", "Interaktív szakmai műhelymunka nemzetközi előadókkal", 16, "4 óra", 15_000.0, 40, 15),
        ("prog5", "Grill vacsora", "Szabadtéri grill vacsora élő zenével", 17, "3 óra", 9_500.0, 60, 28),
        ("prog6", "Koncert", "Exkluzív koncert a helyi zenekarral", 18, "2 óra", 7_500.0, 80, 35),
    ]
    .into_iter()
    .map(|(id, name, description, day, duration, price, capacity, available)| ProgramOption {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        date: event_day(day),
        duration: duration.into(),
        price,
        capacity,
        available,
    })
    .collect()
}

pub fn find_program(program_id: &str) -> Option<ProgramOption> {
    programs().into_iter().find(|program| program.id == program_id)
}

// Event week is 2023-09-15..=2023-09-18; every day passed in is valid.
fn event_day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 9, day).unwrap_or_default()
}

/* -------------------------------------------------------------------------- */
/* Sponsors */
/* -------------------------------------------------------------------------- */

/// Companies the registrant can pick without entering details.
pub fn predefined_sponsors() -> Vec<SponsorCompany> {
    vec![
        SponsorCompany::new("comp1", "ABC Kft.").with_contact("Kiss János", "janos.kiss@abc.hu"),
        SponsorCompany::new("comp2", "XYZ Zrt.").with_contact("Nagy Béla", "bela.nagy@xyz.hu"),
        SponsorCompany::new("comp3", "Innovatív Rt.")
            .with_contact("Szabó Anna", "anna.szabo@innovativ.hu"),
    ]
}

pub fn find_sponsor(sponsor_id: &str) -> Option<SponsorCompany> {
    predefined_sponsors().into_iter().find(|sponsor| sponsor.id == sponsor_id)
}
