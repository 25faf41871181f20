//! Pure dashboard metrics derived from the appointment list. Nothing here
//! talks to the network; callers fetch once and derive everything locally.

pub mod metrics;

pub use metrics::{patient_summary, professional_summary, PatientSummary, ProfessionalSummary};
