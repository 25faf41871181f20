pub mod models;
pub mod services;

pub use models::*;
pub use services::actions::{allowed_actions, AppointmentAction};
pub use services::classifier::{partition, AppointmentBuckets};
pub use services::guard::{MutationGuard, MutationPermit};
pub use services::lifecycle::AppointmentService;
