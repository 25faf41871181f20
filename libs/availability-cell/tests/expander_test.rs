use chrono::{Datelike, NaiveDate, Weekday};

use availability_cell::{bookable_dates, time_options, BOOKING_HORIZON_DAYS};
use shared_utils::fixtures;

// 2026-03-01 is a Sunday, which keeps weekday arithmetic easy to eyeball.
fn sunday() -> NaiveDate {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(date.weekday(), Weekday::Sun);
    date
}

#[test]
fn single_monday_window_yields_monday_dates_only() {
    let slots = vec![fixtures::slot(1, "09:00", "10:00")];

    let dates = bookable_dates(&slots, sunday(), BOOKING_HORIZON_DAYS);

    assert!(!dates.is_empty());
    assert!(dates.iter().all(|d| d.weekday() == Weekday::Mon));
    // The window starts tomorrow, so the first hit is the very next Monday.
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
}

#[test]
fn window_starts_tomorrow_never_today() {
    let today = sunday();
    let slots = vec![fixtures::slot(0, "09:00", "10:00")];

    let dates = bookable_dates(&slots, today, BOOKING_HORIZON_DAYS);

    assert!(!dates.contains(&today));
    assert_eq!(dates[0], today + chrono::Duration::days(7));
}

#[test]
fn horizon_bounds_the_result() {
    // A slot on every weekday fills the whole horizon.
    let slots: Vec<_> = (0..7).map(|d| fixtures::slot(d, "08:00", "09:00")).collect();

    let dates = bookable_dates(&slots, sunday(), BOOKING_HORIZON_DAYS);

    assert_eq!(dates.len(), BOOKING_HORIZON_DAYS as usize);
    let last = *dates.last().unwrap();
    assert_eq!(last, sunday() + chrono::Duration::days(30));
}

#[test]
fn dates_are_chronological_and_duplicate_free() {
    // Two Monday windows still produce each Monday once.
    let slots = vec![
        fixtures::slot(1, "09:00", "10:00"),
        fixtures::slot(1, "14:00", "15:00"),
    ];

    let dates = bookable_dates(&slots, sunday(), BOOKING_HORIZON_DAYS);

    let mut sorted = dates.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(dates, sorted);
}

#[test]
fn no_slots_no_dates() {
    assert!(bookable_dates(&[], sunday(), BOOKING_HORIZON_DAYS).is_empty());
}

#[test]
fn times_step_half_hour_excluding_the_end() {
    let slots = vec![fixtures::slot(1, "09:00", "10:00")];
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert_eq!(time_options(&slots, monday), vec!["09:00", "09:30"]);
}

#[test]
fn times_keep_declaration_order_across_windows() {
    let slots = vec![
        fixtures::slot(1, "14:00", "15:00"),
        fixtures::slot(1, "09:00", "10:00"),
    ];
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert_eq!(
        time_options(&slots, monday),
        vec!["14:00", "14:30", "09:00", "09:30"]
    );
}

#[test]
fn overlapping_windows_repeat_their_times() {
    let slots = vec![
        fixtures::slot(1, "09:00", "10:00"),
        fixtures::slot(1, "09:30", "10:30"),
    ];
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert_eq!(
        time_options(&slots, monday),
        vec!["09:00", "09:30", "09:30", "10:00"]
    );
}

#[test]
fn half_hour_boundary_rolls_into_the_next_hour() {
    let slots = vec![fixtures::slot(1, "09:30", "11:00")];
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert_eq!(time_options(&slots, monday), vec!["09:30", "10:00", "10:30"]);
}

#[test]
fn malformed_window_contributes_nothing() {
    let slots = vec![
        fixtures::slot(1, "9am", "10am"),
        fixtures::slot(1, "13:00", "14:00"),
    ];
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    assert_eq!(time_options(&slots, monday), vec!["13:00", "13:30"]);
}

#[test]
fn wrong_weekday_yields_no_times() {
    let slots = vec![fixtures::slot(1, "09:00", "10:00")];
    let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();

    assert!(time_options(&slots, tuesday).is_empty());
}

#[test]
fn expansion_is_deterministic() {
    let slots = vec![
        fixtures::slot(1, "09:00", "12:00"),
        fixtures::slot(3, "08:00", "08:30"),
    ];
    let today = sunday();

    assert_eq!(
        bookable_dates(&slots, today, BOOKING_HORIZON_DAYS),
        bookable_dates(&slots, today, BOOKING_HORIZON_DAYS)
    );
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    assert_eq!(time_options(&slots, monday), time_options(&slots, monday));
}
