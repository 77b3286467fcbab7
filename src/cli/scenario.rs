//! Scenario command handler.
//!
//! Implements the `scenario` subcommand: apply a change list to a bag and
//! report how the grade moves.

use crate::config::AppConfig;
use crate::pipeline::{
    self, exit_codes, load_changes, output_scenario_report, parse_bag_with_context,
};
use crate::reports::ReportConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Scenario command configuration
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    pub bag_path: PathBuf,
    pub changes_path: PathBuf,
    pub app: AppConfig,
    /// Exit with [`exit_codes::THRESHOLD_NOT_MET`] when the overall score drops
    pub fail_on_decline: bool,
    pub quiet: bool,
}

/// Run the scenario command, returning the desired exit code.
pub fn run_scenario(config: ScenarioConfig) -> Result<i32> {
    let bag = parse_bag_with_context(&config.bag_path, config.quiet)?;
    let changes = load_changes(&config.changes_path)?;
    let result = pipeline::run_scenario(&config.app, &bag, &changes)?;

    let mut report_config = ReportConfig::for_bag(config.bag_path.display().to_string());
    report_config.metadata.changes_path = Some(config.changes_path.display().to_string());
    output_scenario_report(&config.app, &result, &report_config, config.quiet)?;

    if config.fail_on_decline && result.overall_delta < 0 {
        tracing::error!(
            "Scenario lowers the overall score by {}",
            result.overall_delta.unsigned_abs()
        );
        return Ok(exit_codes::THRESHOLD_NOT_MET);
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(dir: &TempDir, changes: &str, fail_on_decline: bool) -> ScenarioConfig {
        let bag_path = dir.path().join("bag.json");
        std::fs::write(
            &bag_path,
            r#"[
                {"id": "i5", "clubType": "5-Iron", "shaft_weight": 70},
                {"id": "i6", "clubType": "6-Iron", "shaft_weight": 60}
            ]"#,
        )
        .unwrap();
        let changes_path = dir.path().join("changes.json");
        std::fs::write(&changes_path, changes).unwrap();

        ScenarioConfig {
            bag_path,
            changes_path,
            app: AppConfig::builder()
                .reference_year(Some(2024))
                .output_file(Some(dir.path().join("scenario.json")))
                .build(),
            fail_on_decline,
            quiet: true,
        }
    }

    #[test]
    fn test_improving_scenario() {
        let tmp = TempDir::new().unwrap();
        let config = setup(
            &tmp,
            r#"[{"clubId": "i6", "replacement": {"shaft_weight": 72}}]"#,
            true,
        );
        assert_eq!(run_scenario(config).unwrap(), exit_codes::SUCCESS);

        let written: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(tmp.path().join("scenario.json")).unwrap(),
        )
        .unwrap();
        assert!(written["overall_delta"].as_i64().unwrap() > 0);
        assert!(written["metadata"]["changes_path"]
            .as_str()
            .unwrap()
            .ends_with("changes.json"));
    }

    #[test]
    fn test_declining_scenario_with_flag() {
        let tmp = TempDir::new().unwrap();
        let config = setup(
            &tmp,
            r#"[{"clubId": "i6", "replacement": {"shaft_weight": 30}}]"#,
            true,
        );
        assert_eq!(run_scenario(config).unwrap(), exit_codes::THRESHOLD_NOT_MET);
    }

    #[test]
    fn test_unknown_club_is_error() {
        let tmp = TempDir::new().unwrap();
        let config = setup(&tmp, r#"[{"action": "remove", "club_id": "w3"}]"#, false);
        let err = run_scenario(config).unwrap_err();
        assert!(format!("{err:#}").contains("w3"));
    }
}
