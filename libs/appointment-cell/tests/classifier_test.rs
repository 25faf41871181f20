use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use appointment_cell::{allowed_actions, partition, AppointmentAction, MutationGuard};
use shared_models::{AppointmentStatus, UserType};
use shared_utils::fixtures;

fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(date.0, date.1, date.2)
        .unwrap()
        .and_hms_opt(time.0, time.1, 0)
        .unwrap()
}

#[test]
fn every_appointment_lands_in_exactly_one_bucket() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let appointments = vec![
        fixtures::appointment(date, "09:00", AppointmentStatus::Pending),
        fixtures::appointment(date, "10:00", AppointmentStatus::Cancelled),
        fixtures::appointment(date, "not-a-time", AppointmentStatus::Confirmed),
    ];
    let total = appointments.len();

    let buckets = partition(appointments, at((2026, 3, 1), (12, 0)));

    assert_eq!(buckets.upcoming.len() + buckets.past.len(), total);
}

#[test]
fn boundary_instant_is_still_upcoming() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let apt = fixtures::appointment(date, "09:00", AppointmentStatus::Confirmed);

    let exactly_now = at((2026, 3, 10), (9, 0));
    let buckets = partition(vec![apt.clone()], exactly_now);
    assert_eq!(buckets.upcoming.len(), 1);

    // One second later it tips into the past.
    let buckets = partition(vec![apt], exactly_now + chrono::Duration::seconds(1));
    assert_eq!(buckets.past.len(), 1);
}

#[test]
fn cancelled_tomorrow_is_past() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();
    let apt = fixtures::appointment(date, "09:00", AppointmentStatus::Cancelled);

    let buckets = partition(vec![apt], at((2026, 3, 10), (12, 0)));
    assert_eq!(buckets.past.len(), 1);
}

#[test]
fn unparseable_time_goes_to_past() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
    let apt = fixtures::appointment(date, "morning", AppointmentStatus::Pending);

    let buckets = partition(vec![apt], at((2026, 3, 10), (12, 0)));
    assert_eq!(buckets.past.len(), 1);
}

#[test]
fn professional_actions_follow_the_status_machine() {
    use AppointmentAction::*;
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let pending = fixtures::appointment(date, "09:00", AppointmentStatus::Pending);
    assert_eq!(
        allowed_actions(&pending, UserType::Professional),
        vec![Confirm, MarkCompleted, Cancel]
    );

    let confirmed = fixtures::appointment(date, "09:00", AppointmentStatus::Confirmed);
    assert_eq!(
        allowed_actions(&confirmed, UserType::Professional),
        vec![MarkCompleted, Cancel]
    );

    let completed = fixtures::appointment(date, "09:00", AppointmentStatus::Completed);
    assert!(allowed_actions(&completed, UserType::Professional).is_empty());
}

#[test]
fn patient_can_only_cancel_before_completion() {
    use AppointmentAction::*;
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    for status in [AppointmentStatus::Pending, AppointmentStatus::Confirmed] {
        let apt = fixtures::appointment(date, "09:00", status);
        assert_eq!(allowed_actions(&apt, UserType::Patient), vec![Cancel]);
    }
}

#[test]
fn completed_appointment_offers_dispute_and_review_independently() {
    use AppointmentAction::*;
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let mut apt = fixtures::appointment(date, "09:00", AppointmentStatus::Completed);

    // Inside the dispute window, not yet reviewed: both at once.
    apt.can_dispute = true;
    apt.has_review = false;
    assert_eq!(
        allowed_actions(&apt, UserType::Patient),
        vec![Dispute, SubmitReview]
    );

    apt.can_dispute = false;
    assert_eq!(allowed_actions(&apt, UserType::Patient), vec![SubmitReview]);

    apt.has_review = true;
    assert!(allowed_actions(&apt, UserType::Patient).is_empty());
}

#[test]
fn terminal_statuses_offer_nothing_to_anyone() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    for status in [
        AppointmentStatus::Cancelled,
        AppointmentStatus::Disputed,
        AppointmentStatus::PaidOut,
    ] {
        let apt = fixtures::appointment(date, "09:00", status);
        assert!(allowed_actions(&apt, UserType::Patient).is_empty());
        assert!(allowed_actions(&apt, UserType::Professional).is_empty());
    }
}

#[test]
fn guard_refuses_a_second_claim_until_release() {
    let guard = MutationGuard::new();
    let id = Uuid::new_v4();

    let permit = guard.begin(id).expect("first claim");
    assert!(guard.begin(id).is_none());

    // Different appointments are independent.
    assert!(guard.begin(Uuid::new_v4()).is_some());

    drop(permit);
    assert!(guard.begin(id).is_some());
}
