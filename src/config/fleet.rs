use crate::core::{FromVehicleSpec, Vehicle};
use crate::domain::vehicles::{parse_vehicle_spec, BaseVehicle, Car, ElectricScooter};
use crate::utils::error::{LectureError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_range, validate_required_field,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Vehicle,
    Car,
    Scooter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleEntry {
    pub kind: VehicleKind,
    /// `Make-Model-Year`
    pub spec: String,
    pub fuel_capacity: Option<u32>,
    pub battery_percentage: Option<f64>,
}

impl VehicleEntry {
    pub fn build(&self) -> Result<Box<dyn Vehicle>> {
        let vehicle: Box<dyn Vehicle> = match self.kind {
            VehicleKind::Vehicle => Box::new(BaseVehicle::from_string(&self.spec)?),
            VehicleKind::Car => {
                let fuel = validate_required_field("fuel_capacity", &self.fuel_capacity)?;
                Box::new(Car::from_spec(&self.spec, *fuel)?)
            }
            VehicleKind::Scooter => {
                let battery =
                    validate_required_field("battery_percentage", &self.battery_percentage)?;
                Box::new(ElectricScooter::from_spec(&self.spec, *battery)?)
            }
        };
        Ok(vehicle)
    }
}

/// Fleet used by the vehicle exercise, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetConfig {
    pub drive_distance: Option<i64>,
    #[serde(default)]
    pub vehicles: Vec<VehicleEntry>,
}

impl FleetConfig {
    /// 從 TOML 檔案載入車隊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LectureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析車隊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LectureError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLEET_YEAR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LectureError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn drive_distance(&self) -> Option<i64> {
        self.drive_distance
    }

    pub fn build_fleet(&self) -> Result<Vec<Box<dyn Vehicle>>> {
        self.vehicles.iter().map(VehicleEntry::build).collect()
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        if self.vehicles.is_empty() {
            return Err(LectureError::ConfigValidationError {
                field: "vehicles".to_string(),
                message: "fleet must contain at least one vehicle".to_string(),
            });
        }

        for (i, entry) in self.vehicles.iter().enumerate() {
            let field = format!("vehicles[{}]", i);
            validate_non_empty_string(&format!("{}.spec", field), &entry.spec)?;
            parse_vehicle_spec(&entry.spec)?;

            match entry.kind {
                VehicleKind::Car => {
                    validate_required_field(
                        &format!("{}.fuel_capacity", field),
                        &entry.fuel_capacity,
                    )?;
                }
                VehicleKind::Scooter => {
                    let battery = validate_required_field(
                        &format!("{}.battery_percentage", field),
                        &entry.battery_percentage,
                    )?;
                    validate_finite(&format!("{}.battery_percentage", field), *battery)?;
                    validate_range(
                        &format!("{}.battery_percentage", field),
                        *battery,
                        0.0,
                        100.0,
                    )?;
                }
                VehicleKind::Vehicle => {}
            }
        }

        Ok(())
    }
}
