pub mod client;
pub mod store;
