//! Markdown report generator.

use super::escape::{escape_markdown_list, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::grading::GradeReport;
use crate::scenario::{ChangeStatus, ScenarioResult};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_issues(
        md: &mut String,
        heading: &str,
        issues: &[String],
        config: &ReportConfig,
    ) -> std::fmt::Result {
        let (shown, hidden) = config.visible_issues(issues);
        if shown.is_empty() && hidden == 0 {
            return Ok(());
        }
        writeln!(md, "## {heading}\n")?;
        for issue in shown {
            writeln!(md, "- {}", escape_markdown_list(issue))?;
        }
        if hidden > 0 {
            writeln!(md, "- *... and {hidden} more*")?;
        }
        writeln!(md)
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_grade_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let title = config.title.as_deref().unwrap_or("Bag Fitness Report");

        writeln!(md, "# {title}\n")?;
        if let Some(path) = &config.metadata.bag_path {
            writeln!(md, "**Bag:** `{}`\n", escape_markdown_table(path))?;
        }
        writeln!(
            md,
            "**Overall:** {} ({}) across {} clubs\n",
            report.overall_score, report.overall_grade, report.club_count
        )?;

        writeln!(md, "## Factors\n")?;
        writeln!(md, "| Factor | Score | Grade | Scorable |")?;
        writeln!(md, "|--------|------:|-------|----------|")?;
        for (factor, component) in &report.component_scores {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                factor.label(),
                component.score,
                component.grade,
                if component.scorable { "yes" } else { "no" }
            )?;
        }
        writeln!(md)?;

        Self::write_issues(&mut md, "Issues", &report.issues, config)?;

        writeln!(md, "---\n*Generated by clubfit {}*", config.metadata.tool_version)?;
        Ok(md)
    }

    fn generate_scenario_report(
        &self,
        result: &ScenarioResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let title = config.title.as_deref().unwrap_or("Scenario Comparison");

        writeln!(md, "# {title}\n")?;
        writeln!(md, "{}\n", escape_markdown_list(&result.summary))?;
        writeln!(md, "| | Score | Grade |")?;
        writeln!(md, "|--|------:|-------|")?;
        writeln!(
            md,
            "| Current | {} | {} |",
            result.current.overall_score, result.current.overall_grade
        )?;
        writeln!(
            md,
            "| Projected | {} | {} |",
            result.projected.overall_score, result.projected.overall_grade
        )?;
        writeln!(md)?;

        writeln!(md, "## Factor Changes\n")?;
        writeln!(md, "| Factor | From | To | Delta | Status |")?;
        writeln!(md, "|--------|-----:|---:|------:|--------|")?;
        for change in &result.factor_changes {
            let status = match change.status {
                ChangeStatus::Improved => "**improved**",
                ChangeStatus::Declined => "**declined**",
                ChangeStatus::Same => "same",
            };
            writeln!(
                md,
                "| {} | {} ({}) | {} ({}) | {:+} | {} |",
                change.factor.label(),
                change.from_score,
                change.from_grade,
                change.to_score,
                change.to_grade,
                change.delta,
                status
            )?;
        }
        writeln!(md)?;

        Self::write_issues(&mut md, "Remaining Issues", &result.projected.issues, config)?;

        writeln!(md, "---\n*Generated by clubfit {}*", config.metadata.tool_version)?;
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
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
    fn test_grade_markdown_table() {
        let clubs = vec![
            Club {
                shaft_weight: Some(70.0),
                ..Club::new("5-Iron")
            },
            Club {
                shaft_weight: Some(60.0),
                ..Club::new("6-Iron")
            },
        ];
        let md = MarkdownReporter::new()
            .generate_grade_report(&scorer().score(&clubs), &ReportConfig::default())
            .unwrap();

        assert!(md.starts_with("# Bag Fitness Report"));
        assert!(md.contains("| weight progression | 80 | B- | yes |"));
        assert!(md.contains("| age | 75 | C | no |"));
        assert!(md.contains("## Issues"));
    }

    #[test]
    fn test_scenario_markdown() {
        let bag = vec![
            Club {
                shaft_weight: Some(70.0),
                ..Club::new("5-Iron").with_id("i5")
            },
            Club {
                shaft_weight: Some(60.0),
                ..Club::new("6-Iron").with_id("i6")
            },
        ];
        let changes = vec![ScenarioChange::replace(
            "i6",
            Club {
                shaft_weight: Some(72.0),
                ..Club::default()
            },
        )];
        let result = compare(&scorer(), &bag, &changes);
        let md = MarkdownReporter::new()
            .generate_scenario_report(&result, &ReportConfig::default())
            .unwrap();

        assert!(md.contains("| weight progression | 80 (B-) | 100 (A+) | +20 | **improved** |"));
        assert!(md.contains("| Current | 76 | C |"));
        assert!(md.contains("| Projected | 80 | B- |"));
        assert!(!md.contains("Remaining Issues"));
    }
}
