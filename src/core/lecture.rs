use crate::core::report::{print_vehicle_report, write_json_report};
use crate::core::{Describe, FromDescription, FromVehicleSpec, Speak, Vehicle};
use crate::domain::geometry;
use crate::domain::model::{BankAccount, Book, Cat, Dog};
use crate::domain::shapes::{self, Shape};
use crate::domain::vehicles::{BaseVehicle, Car, ElectricScooter};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

pub const DEFAULT_DRIVE_DISTANCE: i64 = 100;

/// Lecture sections, in the order they are taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Classes,
    Encapsulation,
    Inheritance,
    Polymorphism,
    ClassMethods,
    SpecialMethods,
    Vehicles,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Classes,
        Section::Encapsulation,
        Section::Inheritance,
        Section::Polymorphism,
        Section::ClassMethods,
        Section::SpecialMethods,
        Section::Vehicles,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Classes => "Defining a Class and Creating Objects",
            Section::Encapsulation => "Encapsulation",
            Section::Inheritance => "Inheritance",
            Section::Polymorphism => "Polymorphism",
            Section::ClassMethods => "Class vs Static Methods",
            Section::SpecialMethods => "Special Methods",
            Section::Vehicles => "Vehicle Management System",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// The fleet driven in the vehicle exercise when none is configured.
pub fn default_fleet() -> Result<Vec<Box<dyn Vehicle>>> {
    Ok(vec![
        Box::new(Car::new("Toyota", "Corolla", 2020, 50)),
        Box::new(ElectricScooter::new("Xiaomi", "M365", 2022, 85.0)),
        Box::new(BaseVehicle::from_string("Honda-Civic-2018")?),
    ])
}

pub struct Lecture {
    sections: Vec<Section>,
    fleet: Vec<Box<dyn Vehicle>>,
    drive_distance: i64,
    report_format: ReportFormat,
}

impl Lecture {
    /// Empty `sections` means the whole lecture. Sections always run in
    /// lecture order, each at most once.
    pub fn new(sections: &[Section]) -> Result<Self> {
        let mut sections = if sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            sections.to_vec()
        };
        sections.sort();
        sections.dedup();

        Ok(Self {
            sections,
            fleet: default_fleet()?,
            drive_distance: DEFAULT_DRIVE_DISTANCE,
            report_format: ReportFormat::default(),
        })
    }

    pub fn with_fleet(mut self, fleet: Vec<Box<dyn Vehicle>>) -> Self {
        self.fleet = fleet;
        self
    }

    pub fn with_drive_distance(mut self, distance: i64) -> Self {
        self.drive_distance = distance;
        self
    }

    pub fn with_report_format(mut self, format: ReportFormat) -> Self {
        self.report_format = format;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn fleet(&self) -> &[Box<dyn Vehicle>] {
        &self.fleet
    }

    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        tracing::info!("Starting lecture with {} section(s)", self.sections.len());

        for section in self.sections.clone() {
            tracing::info!("📘 {}", section);
            self.run_section(section, out)?;
        }

        tracing::info!("✅ Lecture finished");
        Ok(())
    }

    fn run_section<W: Write>(&mut self, section: Section, out: &mut W) -> Result<()> {
        match section {
            Section::Classes => {
                let dog = Dog::new("Buddy", "Golden Retriever");
                writeln!(out, "{}", dog.bark())?;
            }
            Section::Encapsulation => {
                let mut acct = BankAccount::with_balance("Alice", 1000);
                acct.deposit(500);
                writeln!(out, "{}", acct.get_balance())?;
            }
            Section::Inheritance => {
                let cat = Cat::new("Whiskers");
                writeln!(out, "{}", cat.speak())?;
            }
            Section::Polymorphism => {
                let animals: Vec<Box<dyn Speak>> = vec![
                    Box::new(Dog::new("Rex", "Bulldog")),
                    Box::new(Cat::new("Whiskers")),
                ];
                for animal in &animals {
                    writeln!(out, "{}", animal.speak())?;
                }
            }
            Section::ClassMethods => {
                let c = geometry::Circle::from_diameter(10.0);
                writeln!(out, "{}", c.area())?;

                let shape = Shape::from_description("hexagon");
                let circle = shapes::Circle::from_description("donut");
                writeln!(out, "{}", shape.describe())?;
                writeln!(out, "{}", circle.describe())?;
            }
            Section::SpecialMethods => {
                let book = Book::new("1984", "George Orwell");
                writeln!(out, "{}", book)?;
            }
            Section::Vehicles => {
                tracing::debug!(
                    "Driving {} vehicle(s) {} unit(s) each",
                    self.fleet.len(),
                    self.drive_distance
                );
                for vehicle in self.fleet.iter_mut() {
                    vehicle.drive(self.drive_distance);
                }
                match self.report_format {
                    ReportFormat::Text => print_vehicle_report(out, &self.fleet)?,
                    ReportFormat::Json => write_json_report(out, &self.fleet)?,
                }
            }
        }
        Ok(())
    }
}
