pub mod actions;
pub mod classifier;
pub mod guard;
pub mod lifecycle;
