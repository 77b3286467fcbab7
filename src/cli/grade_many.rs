//! Batch grading handler.
//!
//! Implements the `grade-many` subcommand: every bag is loaded and graded
//! independently on the rayon pool, and the results are printed one line per
//! bag in the order given.

use crate::config::AppConfig;
use crate::grading::GradeReport;
use crate::pipeline::{exit_codes, grade, parse_bag_with_context, write_output, OutputTarget};
use crate::reports::ReportFormat;
use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Outcome of grading one bag in a batch
#[derive(Debug, Serialize)]
pub struct BagOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<GradeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BagOutcome {
    fn line(&self) -> String {
        match (&self.report, &self.error) {
            (Some(report), _) => format!(
                "{}: {} ({}) {} clubs, {} issues",
                self.path.display(),
                report.overall_score,
                report.overall_grade,
                report.club_count,
                report.issues.len()
            ),
            (None, Some(error)) => format!("{}: error: {error}", self.path.display()),
            (None, None) => format!("{}: not graded", self.path.display()),
        }
    }
}

/// Grade every bag in parallel.
///
/// A bag that fails to load is reported on its own line and turns the exit
/// code into [`exit_codes::ERROR`] without stopping the rest of the batch.
pub fn run_grade_many(
    bag_paths: &[PathBuf],
    app: &AppConfig,
    min_score: Option<u32>,
    quiet: bool,
) -> Result<i32> {
    tracing::info!("Grading {} bags", bag_paths.len());

    let outcomes: Vec<BagOutcome> = bag_paths
        .par_iter()
        .map(|path| {
            let graded = parse_bag_with_context(path, true).and_then(|bag| grade(app, &bag));
            match graded {
                Ok(report) => BagOutcome {
                    path: path.clone(),
                    report: Some(report),
                    error: None,
                },
                Err(e) => BagOutcome {
                    path: path.clone(),
                    report: None,
                    error: Some(format!("{e:#}")),
                },
            }
        })
        .collect();

    let target = OutputTarget::from_option(app.output.file.clone());
    let rendered = match crate::pipeline::auto_detect_format(app.output.format, &target) {
        ReportFormat::Json => serde_json::to_string_pretty(&outcomes)?,
        _ => {
            let mut text = String::new();
            for outcome in &outcomes {
                writeln!(text, "{}", outcome.line())?;
            }
            text.trim_end().to_string()
        }
    };
    write_output(&rendered, &target, quiet)?;

    if outcomes.iter().any(|o| o.error.is_some()) {
        return Ok(exit_codes::ERROR);
    }
    if let Some(threshold) = min_score {
        let below = outcomes
            .iter()
            .filter_map(|o| o.report.as_ref())
            .filter(|r| r.overall_score < threshold)
            .count();
        if below > 0 {
            tracing::error!("{below} bags scored below minimum threshold {threshold}");
            return Ok(exit_codes::THRESHOLD_NOT_MET);
        }
    }

    Ok(exit_codes::SUCCESS)
}
