//! Expands weekly recurring windows into concrete bookable dates and times.
//!
//! Pure functions of (slots, reference date): no I/O, deterministic. Dates
//! use local-civil-time semantics; the caller supplies "today" and nothing
//! here touches timezones.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use shared_models::{weekday_index, AvailabilitySlot};

/// How far ahead a patient can book, in days. The window starts tomorrow.
pub const BOOKING_HORIZON_DAYS: u32 = 30;

/// Minutes between consecutive time options within a window.
const STEP_MINUTES: u32 = 30;

/// Dates within the next `horizon_days` (offsets 1..=horizon from `today`)
/// on which at least one weekly window falls. Chronological order; at most
/// `horizon_days` entries; empty when no slots exist.
pub fn bookable_dates(
    slots: &[AvailabilitySlot],
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<NaiveDate> {
    (1..=i64::from(horizon_days))
        .map(|offset| today + Duration::days(offset))
        .filter(|date| {
            let day = weekday_index(date.weekday());
            slots.iter().any(|slot| slot.day_of_week == day)
        })
        .collect()
}

/// Concrete "HH:MM" options for a chosen date. Windows matching the date's
/// weekday are expanded in declaration order, each stepping 30 minutes from
/// its start while strictly before its end (the end boundary is excluded).
/// Windows are not merged, sorted, or deduplicated, so overlapping windows
/// can produce out-of-order or repeated times. A window whose times fail to
/// parse contributes nothing.
pub fn time_options(slots: &[AvailabilitySlot], date: NaiveDate) -> Vec<String> {
    let day = weekday_index(date.weekday());
    let mut times = Vec::new();

    for slot in slots.iter().filter(|slot| slot.day_of_week == day) {
        let (start, end) = match (parse_hhmm(&slot.start_time), parse_hhmm(&slot.end_time)) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                warn!(
                    "Skipping availability slot {} with malformed times {}-{}",
                    slot.id, slot.start_time, slot.end_time
                );
                continue;
            }
        };

        let (mut hour, mut minute) = start;
        while (hour, minute) < end {
            times.push(format!("{:02}:{:02}", hour, minute));
            minute += STEP_MINUTES;
            if minute >= 60 {
                minute -= 60;
                hour += 1;
            }
        }
    }

    times
}

/// Strict "HH:MM" parse; anything else is rejected rather than guessed at.
pub fn parse_hhmm(value: &str) -> Option<(u32, u32)> {
    let (hour, minute) = value.split_once(':')?;
    if hour.len() != 2 || minute.len() != 2 {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}
