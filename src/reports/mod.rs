//! Report generation for grades and scenarios.
//!
//! This module provides three output formats:
//! - Summary: Compact fixed-width text for the terminal
//! - JSON: Structured data for programmatic integration
//! - Markdown: Tables for fitting notes and tickets
//!
//! # Escaping
//!
//! Club types and issue text are free-form, so the `escape` module is used
//! for everything embedded in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::grading::GradeReport;
use crate::scenario::ScenarioResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a graded bag
    fn generate_grade_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for a scenario comparison
    fn generate_scenario_report(
        &self,
        result: &ScenarioResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a grade report to a writer
    fn write_grade_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_grade_report(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
