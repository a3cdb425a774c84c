//! View window generation and frame stepping.
//!
//! Pure date arithmetic: which dates a Day/Week/Month frame shows and how
//! the reference date moves when navigating. Windows are rebuilt on every
//! step, never edited in place.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::ui::ViewFrame;
use crate::utils::date::{days_in_month, first_of_month, shift_month_preserving_day, week_start};

/// Dates shown for `frame` around `reference`, weeks starting on Sunday
pub fn generate_view(reference: NaiveDate, frame: ViewFrame) -> Vec<NaiveDate> {
    generate_view_with(reference, frame, 0)
}

/// Like [`generate_view`] with a configurable week start (0 = Sunday)
pub fn generate_view_with(
    reference: NaiveDate,
    frame: ViewFrame,
    first_day_of_week: u8,
) -> Vec<NaiveDate> {
    let (first, len) = match frame {
        ViewFrame::Day => return vec![reference],
        ViewFrame::Week => (week_start(reference, first_day_of_week), 7),
        ViewFrame::Month => (
            first_of_month(reference),
            days_in_month(reference.year(), reference.month()).unwrap_or(0) as usize,
        ),
    };
    let window: Vec<NaiveDate> = (0..len as i64)
        .map_while(|offset| first.checked_add_signed(Duration::days(offset)))
        .collect();
    if window.len() < len {
        log::warn!(
            "{} window around {} cut to {} of {} days at the calendar limit",
            frame,
            reference,
            window.len(),
            len
        );
    }
    window
}

/// Reference date one frame away from `reference` in `direction`.
///
/// `direction` is a signed frame count; months keep the day of month,
/// clamped to the target month's length.
pub fn step_reference(reference: NaiveDate, frame: ViewFrame, direction: i32) -> NaiveDate {
    let stepped = match frame {
        ViewFrame::Day => reference.checked_add_signed(Duration::days(direction as i64)),
        ViewFrame::Week => reference.checked_add_signed(Duration::weeks(direction as i64)),
        ViewFrame::Month => shift_month_preserving_day(reference, direction),
    };
    stepped.unwrap_or_else(|| {
        log::warn!("Cannot step {} by {} {}", reference, direction, frame);
        reference
    })
}

/// Window one frame away from `window`. An empty window stays empty.
pub fn step_view(window: &[NaiveDate], frame: ViewFrame, direction: i32) -> Vec<NaiveDate> {
    step_view_with(window, frame, direction, 0)
}

pub fn step_view_with(
    window: &[NaiveDate],
    frame: ViewFrame,
    direction: i32,
    first_day_of_week: u8,
) -> Vec<NaiveDate> {
    let Some(&reference) = window.first() else {
        return Vec::new();
    };
    generate_view_with(
        step_reference(reference, frame, direction),
        frame,
        first_day_of_week,
    )
}
