pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::fleet::FleetConfig;
pub use core::lecture::{default_fleet, Lecture, ReportFormat, Section};
pub use core::report::{print_vehicle_report, vehicle_report, write_json_report, VehicleSummary};
pub use domain::geometry::Circle;
pub use domain::model::{Animal, BankAccount, Book, Cat, Dog};
pub use domain::ports::{Describe, FromDescription, FromVehicleSpec, Speak, Vehicle};
pub use domain::shapes::Shape;
pub use domain::vehicles::{parse_vehicle_spec, BaseVehicle, Car, ElectricScooter};
pub use utils::error::{LectureError, Result};
