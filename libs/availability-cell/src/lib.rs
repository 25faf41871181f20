pub mod models;
pub mod services;

pub use models::*;
pub use services::expander::{bookable_dates, time_options, BOOKING_HORIZON_DAYS};
pub use services::schedule::{group_by_day, ScheduleService};
