pub mod fixtures;
pub mod format;
pub mod masks;
