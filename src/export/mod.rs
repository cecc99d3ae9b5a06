//! Export functionality for BudgetPro
//!
//! Supports exporting a dashboard snapshot to:
//! - JSON: machine-readable, for other front ends
//! - YAML: human-readable

pub mod json;
pub mod yaml;

pub use json::{export_json, DashboardSnapshot, SNAPSHOT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::str::FromStr;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown export format: {}. Use json or yaml", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("YAML".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}
