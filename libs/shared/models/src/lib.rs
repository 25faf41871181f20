pub mod appointment;
pub mod availability;
pub mod error;
pub mod professional;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, AppointmentType, PartySummary};
pub use availability::{weekday_index, AvailabilitySlot};
pub use error::{ApiError, ApiResult};
pub use professional::Professional;
pub use user::{Address, Banking, Pricing, User, UserType};
