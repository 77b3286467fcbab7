//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::grading::GradeReport;
use crate::scenario::ScenarioResult;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
    /// Include generation timestamp in metadata
    timestamp: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: true,
            timestamp: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Leave out the timestamp so identical input gives identical output.
    #[must_use]
    pub const fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    fn metadata(&self, config: &ReportConfig) -> JsonReportMetadata {
        JsonReportMetadata {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            generated_at: if self.timestamp {
                config
                    .metadata
                    .generated_at
                    .clone()
                    .or_else(|| Some(Utc::now().to_rfc3339()))
            } else {
                None
            },
            bag_path: config.metadata.bag_path.clone(),
            changes_path: config.metadata.changes_path.clone(),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_grade_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonGradeReport {
            metadata: self.metadata(config),
            report,
        })
    }

    fn generate_scenario_report(
        &self,
        result: &ScenarioResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.render(&JsonScenarioReport {
            metadata: self.metadata(config),
            scenario: result,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonGradeReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    report: &'a GradeReport,
}

#[derive(Serialize)]
struct JsonScenarioReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    scenario: &'a ScenarioResult,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bag_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    changes_path: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{BagScorer, GradingContext};
    use crate::model::Club;
    use crate::scenario::{compare, ScenarioChange};

    fn scorer() -> BagScorer {
        BagScorer::default().with_context(GradingContext::for_year(2024))
    }

    #[test]
    fn test_grade_json_shape() {
        let report = scorer().score(&[Club::new("Driver")]);
        let json = JsonReporter::new()
            .generate_grade_report(&report, &ReportConfig::for_bag("bag.yaml"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], "clubfit");
        assert_eq!(value["metadata"]["bag_path"], "bag.yaml");
        assert_eq!(value["overall_score"], 75);
        assert_eq!(value["overall_grade"], "C");
        assert_eq!(value["component_scores"]["age"]["score"], 75);
        assert_eq!(value["component_scores"]["age"]["scorable"], false);
    }

    #[test]
    fn test_json_is_stable_without_timestamp() {
        let clubs = vec![Club::new("Driver"), Club::new("PW")];
        let reporter = JsonReporter::new().without_timestamp();
        let a = reporter
            .generate_grade_report(&scorer().score(&clubs), &ReportConfig::default())
            .unwrap();
        let b = reporter
            .generate_grade_report(&scorer().score(&clubs), &ReportConfig::default())
            .unwrap();
        assert_eq!(a, b);
        assert!(!a.contains("generated_at"));
    }

    #[test]
    fn test_scenario_json_shape() {
        let bag = vec![Club::new("Driver").with_id("d1")];
        let result = compare(&scorer(), &bag, &[ScenarioChange::remove("d1")]);
        let json = JsonReporter::new()
            .pretty(false)
            .generate_scenario_report(&result, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["overall_delta"], 0);
        assert_eq!(value["factor_changes"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["factor_changes"][0]["factor"], "age");
        assert_eq!(value["factor_changes"][0]["status"], "same");
        assert!(!json.contains('\n'));
    }
}
