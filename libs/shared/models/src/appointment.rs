use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-owned state machine, observed but never enforced client-side:
/// pending -> confirmed -> completed -> {disputed | paid_out}, with
/// pending/confirmed -> cancelled. Closed enum so an unknown status is a
/// deserialization error instead of a silent "no actions" fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Disputed,
    PaidOut,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Disputed => write!(f, "disputed"),
            AppointmentStatus::PaidOut => write!(f, "paid_out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    Online,
    InPerson,
    Home,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Online => write!(f, "online"),
            AppointmentType::InPerson => write!(f, "in_person"),
            AppointmentType::Home => write!(f, "home"),
        }
    }
}

/// Embedded counterpart summary the list screens render (the professional as
/// seen by a patient, or the patient as seen by a professional).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySummary {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    /// Wire format is "HH:MM" or "HH:MM:SS" depending on the endpoint.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub price: f64,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
    /// Set by the server while the appointment is inside the 48h dispute
    /// window after completion.
    #[serde(default)]
    pub can_dispute: bool,
    #[serde(default)]
    pub has_review: bool,
    /// Server-computed net payout to the professional, when present.
    #[serde(default)]
    pub professional_amount: Option<f64>,
    #[serde(default)]
    pub patient: Option<PartySummary>,
    #[serde(default)]
    pub professional: Option<PartySummary>,
}

impl Appointment {
    /// Combined civil date+time of the appointment. Only the first five
    /// characters of `time` are significant; an unparseable time yields None.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let hhmm = self.time.get(0..5)?;
        let time = NaiveTime::parse_from_str(hhmm, "%H:%M").ok()?;
        Some(self.date.and_time(time))
    }

    /// "HH:MM" view of the wire time, as the screens display it.
    pub fn time_hhmm(&self) -> &str {
        self.time.get(0..5).unwrap_or(&self.time)
    }
}
