pub use tonic::{Code, Status};

mod macros;
pub mod well_known;
