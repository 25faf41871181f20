use serde::{Deserialize, Serialize};

use shared_models::AvailabilitySlot;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub day_of_week: u8,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
}

/// `{ "availability": [...] }` envelope returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub availability: Vec<AvailabilitySlot>,
}
