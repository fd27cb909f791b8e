pub mod from;
pub mod into;
