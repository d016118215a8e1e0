use crate::utils::error::Result;

/// Anything that can make a sound.
pub trait Speak {
    fn name(&self) -> &str;

    /// Default sound for the family; variants override it.
    fn speak(&self) -> String {
        format!("{} makes a sound", self.name())
    }
}

pub trait Describe {
    fn describe(&self) -> String;
}

/// Named constructor that builds whichever type it is invoked through.
///
/// `from_description` is provided here and only calls `Self::from_name`, so
/// `Circle::from_description` yields a `Circle` and `Shape::from_description`
/// yields a `Shape`.
pub trait FromDescription: Sized {
    fn from_name(name: String) -> Self;

    fn from_description(desc: &str) -> Self {
        Self::from_name(desc.to_uppercase())
    }
}

/// Shared contract of the vehicle family.
pub trait Vehicle {
    fn make(&self) -> &str;
    fn model(&self) -> &str;
    fn year(&self) -> i32;
    fn mileage(&self) -> u64;

    /// Non-positive distances are ignored.
    fn drive(&mut self, distance: i64);

    fn get_info(&self) -> String;

    fn kind(&self) -> &'static str {
        "Vehicle"
    }
}

/// `"Make-Model-Year"` factory, resolved through the implementing type.
pub trait FromVehicleSpec: Sized {
    fn from_parts(make: String, model: String, year: i32) -> Self;

    fn from_string(spec: &str) -> Result<Self> {
        let (make, model, year) = crate::domain::vehicles::parse_vehicle_spec(spec)?;
        Ok(Self::from_parts(make, model, year))
    }
}
