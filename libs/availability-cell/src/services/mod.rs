pub mod expander;
pub mod schedule;
