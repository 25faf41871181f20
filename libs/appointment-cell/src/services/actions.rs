//! Role-appropriate actions per appointment, derived from the server-owned
//! status. The match is exhaustive over the closed (role, status) space so a
//! new status variant forces this table to be revisited.

use shared_models::{Appointment, AppointmentStatus, UserType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Confirm,
    MarkCompleted,
    Cancel,
    /// Requires a reason text.
    Dispute,
    /// Requires a 1-5 rating; comment optional.
    SubmitReview,
}

pub fn allowed_actions(appointment: &Appointment, role: UserType) -> Vec<AppointmentAction> {
    use AppointmentAction::*;
    use AppointmentStatus::*;
    use UserType::*;

    match (role, appointment.status) {
        (Professional, Pending) => vec![Confirm, MarkCompleted, Cancel],
        (Professional, Confirmed) => vec![MarkCompleted, Cancel],
        (Patient, Pending | Confirmed) => vec![Cancel],
        (Patient, Completed) => {
            let mut actions = Vec::new();
            if appointment.can_dispute {
                actions.push(Dispute);
            }
            if !appointment.has_review {
                actions.push(SubmitReview);
            }
            actions
        }
        (Professional, Completed) => vec![],
        (_, Cancelled | Disputed | PaidOut) => vec![],
    }
}
