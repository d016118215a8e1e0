use crate::core::Vehicle;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSummary {
    pub kind: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: u64,
    pub info: String,
}

impl VehicleSummary {
    pub fn from_vehicle(vehicle: &dyn Vehicle) -> Self {
        Self {
            kind: vehicle.kind().to_string(),
            make: vehicle.make().to_string(),
            model: vehicle.model().to_string(),
            year: vehicle.year(),
            mileage: vehicle.mileage(),
            info: vehicle.get_info(),
        }
    }
}

pub fn vehicle_report(vehicles: &[Box<dyn Vehicle>]) -> Vec<String> {
    vehicles.iter().map(|v| v.get_info()).collect()
}

/// Writes each vehicle's info line in order. The first write error stops
/// the report.
pub fn print_vehicle_report<W: Write>(out: &mut W, vehicles: &[Box<dyn Vehicle>]) -> Result<()> {
    for vehicle in vehicles {
        writeln!(out, "{}", vehicle.get_info())?;
    }
    tracing::debug!("Reported {} vehicles", vehicles.len());
    Ok(())
}

pub fn write_json_report<W: Write>(out: &mut W, vehicles: &[Box<dyn Vehicle>]) -> Result<()> {
    let summaries: Vec<VehicleSummary> = vehicles
        .iter()
        .map(|v| VehicleSummary::from_vehicle(v.as_ref()))
        .collect();
    serde_json::to_writer_pretty(&mut *out, &summaries)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FromVehicleSpec;
    use crate::domain::vehicles::{BaseVehicle, Car, ElectricScooter};
    use std::io;

    fn fleet() -> Vec<Box<dyn Vehicle>> {
        vec![
            Box::new(Car::new("Toyota", "Corolla", 2020, 50)),
            Box::new(ElectricScooter::new("Xiaomi", "M365", 2022, 85.0)),
            Box::new(BaseVehicle::from_string("Honda-Civic-2018").unwrap()),
        ]
    }

    /// Accepts a fixed number of writes, then fails.
    struct FailingWriter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_lines_in_order() {
        let mut vehicles = fleet();
        for v in vehicles.iter_mut() {
            v.drive(100);
        }

        let mut out = Vec::new();
        print_vehicle_report(&mut out, &vehicles).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "2020 Toyota Corolla, Mileage: 100, Fuel Capacity: 50\n\
             2022 Xiaomi M365, Mileage: 100, Battery: 75.0%\n\
             2018 Honda Civic, Mileage: 100\n"
        );
        assert_eq!(vehicle_report(&vehicles).len(), 3);
    }

    #[test]
    fn test_report_write_failure_propagates() {
        let vehicles = fleet();
        let mut out = FailingWriter {
            remaining: 0,
            written: Vec::new(),
        };
        let err = print_vehicle_report(&mut out, &vehicles).unwrap_err();
        assert!(matches!(err, crate::utils::error::LectureError::IoError(_)));
        assert!(out.written.is_empty());
    }

    #[test]
    fn test_empty_report_writes_nothing() {
        let mut out = Vec::new();
        print_vehicle_report(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_report_contains_kinds() {
        let vehicles = fleet();
        let mut out = Vec::new();
        write_json_report(&mut out, &vehicles).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["kind"], "Car");
        assert_eq!(rows[1]["kind"], "ElectricScooter");
        assert_eq!(rows[2]["kind"], "Vehicle");
        assert_eq!(rows[2]["year"], 2018);
        assert_eq!(rows[2]["mileage"], 0);
    }
}
