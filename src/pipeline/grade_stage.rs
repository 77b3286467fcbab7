//! Grading and scenario stages.
//!
//! These are the request-accepting layer around the engine: they run the
//! contract checks first and only then hand the clubs to the scorer.

use crate::config::AppConfig;
use crate::grading::GradeReport;
use crate::model::Bag;
use crate::scenario::{compare, validate_bag, validate_changes, ScenarioChange, ScenarioResult};
use anyhow::Result;

/// Grade a bag, rejecting an empty one.
pub fn grade(config: &AppConfig, bag: &Bag) -> Result<GradeReport> {
    validate_bag(bag.as_slice())?;
    let report = config.scorer().score_bag(bag);
    tracing::info!(
        "Graded {} clubs: {} ({})",
        report.club_count,
        report.overall_score,
        report.overall_grade
    );
    Ok(report)
}

/// Validate a change list and compare the projected bag against the baseline.
pub fn run_scenario(
    config: &AppConfig,
    bag: &Bag,
    changes: &[ScenarioChange],
) -> Result<ScenarioResult> {
    validate_changes(bag.as_slice(), changes, &config.scenario)?;
    let result = compare(&config.scorer(), bag.as_slice(), changes);
    tracing::info!(
        "Scenario with {} changes: {} -> {} ({:+})",
        changes.len(),
        result.current.overall_score,
        result.projected.overall_score,
        result.overall_delta
    );
    Ok(result)
}
