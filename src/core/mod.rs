pub mod lecture;
pub mod report;

pub use crate::domain::ports::{Describe, FromDescription, FromVehicleSpec, Speak, Vehicle};
pub use crate::utils::error::Result;
