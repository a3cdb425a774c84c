// Date utility functions
// Month arithmetic shared by the view window and navigation

use chrono::{Datelike, Duration, NaiveDate};

/// Number of days in the given month, `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    // December never needs the next year, which may not exist
    if month == 12 {
        return Some(31);
    }
    let first_of_next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    Some((first_of_next - first).num_days() as u32)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move `current` by `delta_months`, clamping the day to the target month's length
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> Option<NaiveDate> {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    let max_day = days_in_month(new_year, new_month)?;
    NaiveDate::from_ymd_opt(new_year, new_month, current.day().min(max_day))
}

/// Start of the week containing `date`.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date.checked_sub_signed(Duration::days(offset)).unwrap_or(date)
}
