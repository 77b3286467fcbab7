//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod config;
mod grade;
mod grade_many;
mod scenario;

pub use config::{run_config_init, run_config_path, run_config_schema, run_config_show};
pub use grade::{run_grade, GradeConfig};
pub use grade_many::{run_grade_many, BagOutcome};
pub use scenario::{run_scenario, ScenarioConfig};

use crate::config::{AppConfig, Validatable};
use anyhow::{bail, Result};
use std::path::Path;

/// Layer CLI overrides over the discovered config file and validate the result.
///
/// Validation errors abort the command; warnings are logged.
pub fn resolve_config(config_path: Option<&Path>, overrides: &AppConfig) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }
    for warning in config.warnings() {
        tracing::warn!("{warning}");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{FactorKind, GradingWeights};
    use tempfile::TempDir;

    #[test]
    fn test_resolve_config_merges_file_and_flags() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clubfit.yaml");
        std::fs::write(&path, "grading:\n  reference_year: 2020\nscenario:\n  max_changes: 3\n")
            .unwrap();

        let overrides = AppConfig::builder().reference_year(Some(2024)).build();
        let config = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.grading.reference_year, Some(2024));
        assert_eq!(config.scenario.max_changes, 3);
    }

    #[test]
    fn test_resolve_config_rejects_invalid_flags() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("none.yaml");
        let overrides = AppConfig::builder()
            .weights(GradingWeights::default().with(FactorKind::Age, -0.5))
            .build();
        let err = resolve_config(Some(&missing), &overrides).unwrap_err();
        assert!(err.to_string().contains("grading.weights.age"));
    }
}
