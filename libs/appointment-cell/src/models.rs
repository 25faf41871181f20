use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::{Appointment, AppointmentType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub professional_id: Uuid,
    pub date: NaiveDate,
    /// "HH:MM"
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub price: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReviewRequest {
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// `{ "appointments": [...] }` envelope of the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentsResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}
