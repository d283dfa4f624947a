pub mod artifacts;
pub mod profile;
pub mod resume;
