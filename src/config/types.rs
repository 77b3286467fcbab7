//! Configuration types for clubfit operations.

use crate::grading::{BagScorer, GradingContext, GradingWeights};
use crate::reports::ReportFormat;
use crate::scenario::ScenarioLimits;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Grading configuration (weights, reference year)
    pub grading: GradingConfig,
    /// Scenario request limits
    pub scenario: ScenarioLimits,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Scorer configured from the grading section.
    #[must_use]
    pub fn scorer(&self) -> BagScorer {
        BagScorer::new(self.grading.weights).with_context(self.grading.context())
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the factor weights.
    pub const fn weights(mut self, weights: GradingWeights) -> Self {
        self.config.grading.weights = weights;
        self
    }

    /// Pin the year clubs are aged against.
    pub const fn reference_year(mut self, year: Option<i32>) -> Self {
        self.config.grading.reference_year = year;
        self
    }

    /// Set the scenario change cap.
    pub const fn max_changes(mut self, max: usize) -> Self {
        self.config.scenario.max_changes = max;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Types
// ============================================================================

/// Grading configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GradingConfig {
    /// Factor weights; conventionally summing to 1.0
    pub weights: GradingWeights,
    /// Year clubs are aged against; defaults to the current year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

impl GradingConfig {
    /// Grading context for this configuration.
    #[must_use]
    pub fn context(&self) -> GradingContext {
        self.reference_year
            .map_or_else(GradingContext::default, GradingContext::for_year)
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}
