pub mod directory;
pub mod favorites;
