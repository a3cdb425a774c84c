// Test fixtures - reusable test data
// Provides consistent dates, items and stores across test files
#![allow(dead_code)]

use chrono::NaiveDate;
use slot_calendar::models::slot::ItemRef;
use slot_calendar::services::grouping::GroupingEngine;
use slot_calendar::services::slot_store::SlotStore;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Oct 7 2024
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 7).unwrap()
    }

    /// Thursday, Oct 10 2024
    pub fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 10).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Dec 31, 2025 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }
}

/// Sample bookable items
pub mod items {
    use super::*;

    pub fn haircut() -> ItemRef {
        ItemRef::new(1, "Haircut")
    }

    pub fn massage() -> ItemRef {
        ItemRef::new(2, "Massage")
    }

    /// Same label as `haircut`, created independently with its own id
    pub fn other_haircut() -> ItemRef {
        ItemRef::new(3, "Haircut")
    }
}

/// Assign `item` to every hour in `hours` on `day`
pub fn assign_hours(
    engine: &GroupingEngine,
    store: SlotStore,
    day: NaiveDate,
    hours: impl IntoIterator<Item = u8>,
    item: &ItemRef,
) -> SlotStore {
    hours
        .into_iter()
        .fold(store, |acc, hour| engine.assign(&acc, day, hour, item))
}

/// Haircut booked Monday 9:00-12:00
pub fn morning_haircut(engine: &GroupingEngine) -> SlotStore {
    assign_hours(engine, SlotStore::new(), dates::monday(), 9..12, &items::haircut())
}
