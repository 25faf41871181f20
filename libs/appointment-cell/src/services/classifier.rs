//! Two-way partition of the appointment list for the tabbed display.

use chrono::NaiveDateTime;

use shared_models::{Appointment, AppointmentStatus};

#[derive(Debug, Default)]
pub struct AppointmentBuckets {
    pub upcoming: Vec<Appointment>,
    pub past: Vec<Appointment>,
}

/// Upcoming iff the combined date+time is at or after `now` and the
/// appointment is not cancelled; everything else is past. Total: each
/// appointment lands in exactly one bucket.
pub fn partition(appointments: Vec<Appointment>, now: NaiveDateTime) -> AppointmentBuckets {
    let mut buckets = AppointmentBuckets::default();

    for appointment in appointments {
        if is_upcoming(&appointment, now) {
            buckets.upcoming.push(appointment);
        } else {
            buckets.past.push(appointment);
        }
    }

    buckets
}

pub fn is_upcoming(appointment: &Appointment, now: NaiveDateTime) -> bool {
    if appointment.status == AppointmentStatus::Cancelled {
        return false;
    }
    // An unparseable time cannot be compared against "now"; such entries sort
    // with the past bucket instead of blocking the screen.
    match appointment.starts_at() {
        Some(starts_at) => starts_at >= now,
        None => false,
    }
}
