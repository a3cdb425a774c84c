// Property-based tests for view window generation and navigation

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;
use slot_calendar::models::ui::ViewFrame;
use slot_calendar::services::date_window::{generate_view, step_view};
use test_case::test_case;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990..2100i32, 1..=12u32, 1..=31u32).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .or_else(|| NaiveDate::from_ymd_opt(y, m, 28))
            .unwrap()
    })
}

fn frame_strategy() -> impl Strategy<Value = ViewFrame> {
    prop_oneof![Just(ViewFrame::Day), Just(ViewFrame::Week), Just(ViewFrame::Month)]
}

proptest! {
    /// Property: a week window is 7 consecutive days starting on Sunday
    #[test]
    fn prop_week_is_sunday_first(date in date_strategy()) {
        let view = generate_view(date, ViewFrame::Week);
        prop_assert_eq!(view.len(), 7);
        prop_assert_eq!(view[0].weekday(), Weekday::Sun);
        prop_assert!(view.contains(&date));
    }

    /// Property: a month window covers exactly the reference date's month
    #[test]
    fn prop_month_covers_whole_month(date in date_strategy()) {
        let view = generate_view(date, ViewFrame::Month);
        prop_assert_eq!(view[0].day(), 1);
        prop_assert!(view.iter().all(|d| d.month() == date.month() && d.year() == date.year()));
        let after_last = view[view.len() - 1].succ_opt().unwrap();
        prop_assert_ne!(after_last.month(), date.month());
    }

    /// Property: stepping forward then back returns the same window
    #[test]
    fn prop_navigation_round_trip(date in date_strategy(), frame in frame_strategy()) {
        let window = generate_view(date, frame);
        let there = step_view(&window, frame, 1);
        let back = step_view(&there, frame, -1);
        prop_assert_eq!(back, window);
    }
}

#[test_case(2024, 1, 31)]
#[test_case(2024, 2, 29)]
#[test_case(2023, 2, 28)]
#[test_case(2024, 3, 31)]
#[test_case(2024, 4, 30)]
#[test_case(2024, 5, 31)]
#[test_case(2024, 6, 30)]
#[test_case(2024, 7, 31)]
#[test_case(2024, 8, 31)]
#[test_case(2024, 9, 30)]
#[test_case(2024, 10, 31)]
#[test_case(2024, 11, 30)]
#[test_case(2024, 12, 31)]
fn test_month_lengths(year: i32, month: u32, expected: usize) {
    let date = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
    assert_eq!(generate_view(date, ViewFrame::Month).len(), expected);
}
