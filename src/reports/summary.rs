//! Summary report generator for shell output.
//!
//! Fixed-width text tables, optionally colored with ANSI escapes.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::grading::{GradeReport, LetterGrade};
use crate::scenario::{ChangeStatus, ScenarioResult};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn grade_color(grade: LetterGrade) -> &'static str {
    match grade {
        LetterGrade::APlus | LetterGrade::A | LetterGrade::AMinus => "green",
        LetterGrade::BPlus | LetterGrade::B | LetterGrade::BMinus => "cyan",
        LetterGrade::CPlus | LetterGrade::C | LetterGrade::CMinus => "yellow",
        _ => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn push_issues(&self, lines: &mut Vec<String>, issues: &[String], config: &ReportConfig) {
        let (shown, hidden) = config.visible_issues(issues);
        if shown.is_empty() && hidden == 0 {
            return;
        }
        lines.push(String::new());
        lines.push(self.color(&format!("Issues ({}):", issues.len()), "bold"));
        for issue in shown {
            lines.push(format!("  - {issue}"));
        }
        if hidden > 0 {
            lines.push(self.color(&format!("  ... and {hidden} more"), "dim"));
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_grade_report(
        &self,
        report: &GradeReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config.title.as_deref().unwrap_or("Bag Fitness Report");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(44).as_str(), "dim"));
        if let Some(path) = &config.metadata.bag_path {
            lines.push(format!("{}  {}", self.color("Bag:", "cyan"), path));
        }
        lines.push(format!(
            "{}  {} clubs",
            self.color("Size:", "cyan"),
            report.club_count
        ));
        lines.push(format!(
            "{}  {} ({})",
            self.color("Overall:", "cyan"),
            report.overall_score,
            self.color(report.overall_grade.letter(), grade_color(report.overall_grade))
        ));

        lines.push(String::new());
        lines.push(self.color(&format!("{:<24} {:>5}  {:<5}", "Factor", "Score", "Grade"), "bold"));
        for (factor, component) in &report.component_scores {
            let grade = format!("{:<5}", component.grade.letter());
            let note = if component.scorable {
                String::new()
            } else {
                self.color("  (not enough data)", "dim")
            };
            lines.push(format!(
                "{:<24} {:>5}  {}{}",
                factor.label(),
                component.score,
                self.color(&grade, grade_color(component.grade)),
                note
            ));
        }

        self.push_issues(&mut lines, &report.issues, config);

        Ok(lines.join("\n") + "\n")
    }

    fn generate_scenario_report(
        &self,
        result: &ScenarioResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        let title = config.title.as_deref().unwrap_or("Scenario Comparison");
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(44).as_str(), "dim"));
        if let Some(path) = &config.metadata.bag_path {
            lines.push(format!("{}  {}", self.color("Bag:", "cyan"), path));
        }
        if let Some(path) = &config.metadata.changes_path {
            lines.push(format!("{}  {}", self.color("Changes:", "cyan"), path));
        }

        let delta = format!("{:+}", result.overall_delta);
        let delta_color = match result.overall_delta {
            d if d > 0 => "green",
            d if d < 0 => "red",
            _ => "dim",
        };
        lines.push(format!(
            "{}  {} ({}) → {} ({})  {}",
            self.color("Overall:", "cyan"),
            result.current.overall_score,
            result.current.overall_grade,
            result.projected.overall_score,
            result.projected.overall_grade,
            self.color(&delta, delta_color)
        ));

        lines.push(String::new());
        lines.push(self.color(
            &format!("{:<24} {:>4}  {:>4}  {:>5}  {}", "Factor", "From", "To", "Delta", "Status"),
            "bold",
        ));
        for change in &result.factor_changes {
            let status_color = match change.status {
                ChangeStatus::Improved => "green",
                ChangeStatus::Declined => "red",
                ChangeStatus::Same => "dim",
            };
            lines.push(format!(
                "{:<24} {:>4}  {:>4}  {:>+5}  {}",
                change.factor.label(),
                change.from_score,
                change.to_score,
                change.delta,
                self.color(change.status.name(), status_color)
            ));
        }

        lines.push(String::new());
        lines.push(result.summary.clone());

        self.push_issues(&mut lines, &result.projected.issues, config);

        Ok(lines.join("\n") + "\n")
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
