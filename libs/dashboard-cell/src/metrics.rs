use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use shared_models::{Appointment, AppointmentStatus};

/// Platform commission: the professional keeps 90% when the API has not yet
/// materialized `professional_amount`.
const PROFESSIONAL_SHARE: f64 = 0.9;

#[derive(Debug, Default)]
pub struct PatientSummary {
    /// Appointments still in play (neither cancelled nor already completed).
    pub scheduled: usize,
    pub completed: usize,
    /// Up to three scheduled appointments, list order, for the home card.
    pub preview: Vec<Appointment>,
}

#[derive(Debug, Default, PartialEq)]
pub struct ProfessionalSummary {
    /// Appointments happening today, cancellations excluded.
    pub today: usize,
    /// Distinct patients across the whole history.
    pub unique_patients: usize,
    /// Earnings for the current month over non-cancelled appointments.
    pub monthly_revenue: f64,
}

pub fn patient_summary(appointments: &[Appointment]) -> PatientSummary {
    let scheduled: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| {
            a.status != AppointmentStatus::Cancelled && a.status != AppointmentStatus::Completed
        })
        .collect();

    PatientSummary {
        scheduled: scheduled.len(),
        completed: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count(),
        preview: scheduled.into_iter().take(3).cloned().collect(),
    }
}

pub fn professional_summary(appointments: &[Appointment], today: NaiveDate) -> ProfessionalSummary {
    let mut patients: HashSet<Uuid> = HashSet::new();
    let mut today_count = 0;
    let mut monthly_revenue = 0.0;

    for appointment in appointments {
        patients.insert(appointment.patient_id);

        if appointment.status == AppointmentStatus::Cancelled {
            continue;
        }

        if appointment.date == today {
            today_count += 1;
        }

        if appointment.date.year() == today.year() && appointment.date.month() == today.month() {
            monthly_revenue += revenue(appointment);
        }
    }

    ProfessionalSummary {
        today: today_count,
        unique_patients: patients.len(),
        monthly_revenue,
    }
}

/// What the professional earns from one appointment. The API's own figure
/// wins; otherwise the gross price minus the platform share.
pub fn revenue(appointment: &Appointment) -> f64 {
    appointment
        .professional_amount
        .unwrap_or(appointment.price * PROFESSIONAL_SHARE)
}
