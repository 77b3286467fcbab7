//! Grade command handler.
//!
//! Implements the `grade` subcommand for grading a single bag.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, grade, output_grade_report, parse_bag_with_context};
use crate::reports::ReportConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Grade command configuration
#[derive(Debug, Clone)]
pub struct GradeConfig {
    pub bag_path: PathBuf,
    pub app: AppConfig,
    /// Exit with [`exit_codes::THRESHOLD_NOT_MET`] below this overall score
    pub min_score: Option<u32>,
    /// Cap on listed issues
    pub max_issues: Option<usize>,
    pub quiet: bool,
}

/// Run the grade command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_grade(config: GradeConfig) -> Result<i32> {
    let bag = parse_bag_with_context(&config.bag_path, config.quiet)?;
    let report = grade(&config.app, &bag)?;

    let report_config = ReportConfig {
        max_issues: config.max_issues,
        ..ReportConfig::for_bag(config.bag_path.display().to_string())
    };
    output_grade_report(&config.app, &report, &report_config, config.quiet)?;

    if let Some(threshold) = config.min_score {
        if report.overall_score < threshold {
            tracing::error!(
                "Overall score {} is below minimum threshold {}",
                report.overall_score,
                threshold
            );
            return Ok(exit_codes::THRESHOLD_NOT_MET);
        }
    }

    Ok(exit_codes::SUCCESS)
}
