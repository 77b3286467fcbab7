//! Report output stage.
//!
//! Resolves the output format and target, renders a grade or scenario report
//! and writes it out.

use crate::config::AppConfig;
use crate::grading::GradeReport;
use crate::reports::{create_reporter_with_options, ReportConfig};
use crate::scenario::ScenarioResult;
use anyhow::Result;

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};

/// Output a grade report to the configured destination.
pub fn output_grade_report(
    config: &AppConfig,
    report: &GradeReport,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let reporter =
        create_reporter_with_options(format, should_use_color(config.output.no_color, &target));
    let rendered = reporter.generate_grade_report(report, report_config)?;
    write_output(&rendered, &target, quiet)
}

/// Output a scenario comparison to the configured destination.
pub fn output_scenario_report(
    config: &AppConfig,
    result: &ScenarioResult,
    report_config: &ReportConfig,
    quiet: bool,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let reporter =
        create_reporter_with_options(format, should_use_color(config.output.no_color, &target));
    let rendered = reporter.generate_scenario_report(result, report_config)?;
    write_output(&rendered, &target, quiet)
}
