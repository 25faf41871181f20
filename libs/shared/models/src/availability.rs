use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recurring weekly window during which a professional accepts bookings.
/// Several windows may exist for the same day; overlap is not validated
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
}

/// Maps chrono's weekday onto the wire convention (0 = Sunday).
pub fn weekday_index(weekday: Weekday) -> u8 {
    match weekday {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}
