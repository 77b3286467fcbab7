//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary on a terminal
    #[default]
    Auto,
    /// Compact text table
    Summary,
    /// Structured JSON output
    Json,
    /// Markdown tables
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// Resolve `auto` to a concrete format.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Auto => Self::Summary,
            other => other,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// List individual issues under the scores
    pub include_issues: bool,
    /// Cap on listed issues; the rest are counted
    pub max_issues: Option<usize>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            include_issues: true,
            max_issues: None,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Config carrying the path of the graded bag
    #[must_use]
    pub fn for_bag(path: impl Into<String>) -> Self {
        Self {
            metadata: ReportMetadata {
                bag_path: Some(path.into()),
                ..ReportMetadata::new()
            },
            ..Self::default()
        }
    }

    /// Issues to list, honoring `include_issues` and `max_issues`.
    #[must_use]
    pub fn visible_issues<'a>(&self, issues: &'a [String]) -> (&'a [String], usize) {
        if !self.include_issues {
            return (&[], issues.len());
        }
        let shown = self.max_issues.map_or(issues.len(), |m| m.min(issues.len()));
        (&issues[..shown], issues.len() - shown)
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Bag file path
    pub bag_path: Option<String>,
    /// Change list file path, for scenarios
    pub changes_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resolves_to_summary() {
        assert_eq!(ReportFormat::Auto.resolve(), ReportFormat::Summary);
        assert_eq!(ReportFormat::Json.resolve(), ReportFormat::Json);
    }

    #[test]
    fn test_format_serde_lowercase() {
        let format: ReportFormat = serde_yaml::from_str("markdown").unwrap();
        assert_eq!(format, ReportFormat::Markdown);
        assert_eq!(serde_json::to_string(&ReportFormat::Json).unwrap(), "\"json\"");
    }

    #[test]
    fn test_visible_issues() {
        let issues = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let config = ReportConfig {
            max_issues: Some(2),
            ..ReportConfig::default()
        };
        let (shown, hidden) = config.visible_issues(&issues);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 1);

        let silent = ReportConfig {
            include_issues: false,
            ..ReportConfig::default()
        };
        assert_eq!(silent.visible_issues(&issues), (&[][..], 3));
    }
}
