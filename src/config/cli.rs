use crate::core::lecture::{ReportFormat, Section};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "oop-lecture")]
#[command(about = "Runs the object-oriented programming lecture demonstrations")]
pub struct CliConfig {
    /// Sections to run (default: all)
    #[arg(long = "section", value_enum, value_delimiter = ',')]
    pub sections: Vec<Section>,

    /// TOML file describing the fleet for the vehicle exercise
    #[arg(long)]
    pub fleet: Option<String>,

    /// Distance every vehicle drives before the report
    #[arg(long, allow_hyphen_values = true)]
    pub distance: Option<i64>,

    /// Print the vehicle report as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.fleet {
            validate_path("fleet", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["oop-lecture"]);
        assert!(config.sections.is_empty());
        assert!(config.fleet.is_none());
        assert_eq!(config.distance, None);
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_sections_and_flags() {
        let config = CliConfig::parse_from([
            "oop-lecture",
            "--section",
            "classes,class-methods",
            "--section",
            "vehicles",
            "--distance",
            "-5",
            "--json",
            "-v",
        ]);
        assert_eq!(
            config.sections,
            vec![Section::Classes, Section::ClassMethods, Section::Vehicles]
        );
        assert_eq!(config.distance, Some(-5));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_fleet_path_is_invalid() {
        let config = CliConfig::parse_from(["oop-lecture", "--fleet", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(CliConfig::try_parse_from(["oop-lecture", "--section", "metaclasses"]).is_err());
    }
}
