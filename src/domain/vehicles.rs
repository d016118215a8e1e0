use crate::domain::ports::{FromVehicleSpec, Vehicle};
use crate::utils::error::{LectureError, Result};
use std::fmt;

/// Splits `"Make-Model-Year"` into its three fields.
///
/// Fails only when there are not exactly three fields or the year is not an
/// integer; empty make or model fields are kept as-is.
pub fn parse_vehicle_spec(spec: &str) -> Result<(String, String, i32)> {
    let parts: Vec<&str> = spec.split('-').collect();
    let [make, model, year] = parts.as_slice() else {
        return Err(LectureError::InvalidFormat {
            input: spec.to_string(),
            reason: format!("expected 'Make-Model-Year', found {} field(s)", parts.len()),
        });
    };

    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|source| LectureError::InvalidYear {
            input: spec.to_string(),
            source,
        })?;

    Ok((make.to_string(), model.to_string(), year))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    mileage: u64,
}

impl BaseVehicle {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            mileage: 0,
        }
    }
}

impl FromVehicleSpec for BaseVehicle {
    fn from_parts(make: String, model: String, year: i32) -> Self {
        Self::new(make, model, year)
    }
}

impl Vehicle for BaseVehicle {
    fn make(&self) -> &str {
        &self.make
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn mileage(&self) -> u64 {
        self.mileage
    }

    fn drive(&mut self, distance: i64) {
        if distance > 0 {
            self.mileage = self.mileage.saturating_add(distance.unsigned_abs());
        }
    }

    fn get_info(&self) -> String {
        format!(
            "{} {} {}, Mileage: {}",
            self.year, self.make, self.model, self.mileage
        )
    }
}

impl fmt::Display for BaseVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_info())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    base: BaseVehicle,
    pub fuel_capacity: u32,
}

impl Car {
    pub const VEHICLE_TYPE: &'static str = "Car";

    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        fuel_capacity: u32,
    ) -> Self {
        Self {
            base: BaseVehicle::new(make, model, year),
            fuel_capacity,
        }
    }

    pub fn from_spec(spec: &str, fuel_capacity: u32) -> Result<Self> {
        let (make, model, year) = parse_vehicle_spec(spec)?;
        Ok(Self::new(make, model, year, fuel_capacity))
    }
}

impl Vehicle for Car {
    fn make(&self) -> &str {
        self.base.make()
    }

    fn model(&self) -> &str {
        self.base.model()
    }

    fn year(&self) -> i32 {
        self.base.year()
    }

    fn mileage(&self) -> u64 {
        self.base.mileage()
    }

    fn drive(&mut self, distance: i64) {
        self.base.drive(distance);
    }

    fn get_info(&self) -> String {
        format!(
            "{}, Fuel Capacity: {}",
            self.base.get_info(),
            self.fuel_capacity
        )
    }

    fn kind(&self) -> &'static str {
        Self::VEHICLE_TYPE
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_info())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElectricScooter {
    base: BaseVehicle,
    battery_percentage: f64,
}

impl ElectricScooter {
    pub const VEHICLE_TYPE: &'static str = "ElectricScooter";
    /// Battery drained per unit of distance.
    pub const DRAIN_PER_UNIT: f64 = 0.1;
    pub const CHARGE_THRESHOLD: f64 = 20.0;

    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        battery_percentage: f64,
    ) -> Self {
        Self {
            base: BaseVehicle::new(make, model, year),
            battery_percentage: battery_percentage.max(0.0),
        }
    }

    pub fn from_spec(spec: &str, battery_percentage: f64) -> Result<Self> {
        let (make, model, year) = parse_vehicle_spec(spec)?;
        Ok(Self::new(make, model, year, battery_percentage))
    }

    pub fn battery_percentage(&self) -> f64 {
        self.battery_percentage
    }

    pub fn is_charging_required(&self) -> bool {
        Self::battery_needs_charge(self.battery_percentage)
    }

    /// Class-level form of the charge check; takes the level explicitly.
    pub fn battery_needs_charge(battery_percentage: f64) -> bool {
        battery_percentage < Self::CHARGE_THRESHOLD
    }
}

impl Vehicle for ElectricScooter {
    fn make(&self) -> &str {
        self.base.make()
    }

    fn model(&self) -> &str {
        self.base.model()
    }

    fn year(&self) -> i32 {
        self.base.year()
    }

    fn mileage(&self) -> u64 {
        self.base.mileage()
    }

    fn drive(&mut self, distance: i64) {
        if distance <= 0 {
            return;
        }
        self.base.drive(distance);
        self.battery_percentage =
            (self.battery_percentage - distance as f64 * Self::DRAIN_PER_UNIT).max(0.0);

        if self.is_charging_required() {
            tracing::debug!(
                make = %self.base.make,
                model = %self.base.model,
                battery = self.battery_percentage,
                "scooter battery low"
            );
        }
    }

    fn get_info(&self) -> String {
        format!(
            "{}, Battery: {:?}%",
            self.base.get_info(),
            self.battery_percentage
        )
    }

    fn kind(&self) -> &'static str {
        Self::VEHICLE_TYPE
    }
}

impl fmt::Display for ElectricScooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_info())
    }
}
