pub mod donation;
pub mod well_known;
