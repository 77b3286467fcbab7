//! Baseline vs. virtual bag comparison.

use super::change::ScenarioChange;
use super::simulator::simulate;
use crate::grading::{BagScorer, FactorKind, GradeReport, LetterGrade};
use crate::model::Club;
use serde::{Deserialize, Serialize};

/// Factor deltas beyond this many points count as a change.
pub const CHANGE_THRESHOLD: i64 = 2;

/// Direction a factor moved between baseline and virtual bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Improved,
    Declined,
    Same,
}

impl ChangeStatus {
    #[must_use]
    pub const fn from_delta(delta: i64) -> Self {
        if delta > CHANGE_THRESHOLD {
            Self::Improved
        } else if delta < -CHANGE_THRESHOLD {
            Self::Declined
        } else {
            Self::Same
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Improved => "improved",
            Self::Declined => "declined",
            Self::Same => "same",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One factor's movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorChange {
    pub factor: FactorKind,
    pub from_score: u32,
    pub to_score: u32,
    pub from_grade: LetterGrade,
    pub to_grade: LetterGrade,
    pub delta: i64,
    pub status: ChangeStatus,
}

/// Headline of one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioGrade {
    pub overall_score: u32,
    pub overall_grade: LetterGrade,
    pub issues: Vec<String>,
}

impl From<&GradeReport> for ScenarioGrade {
    fn from(report: &GradeReport) -> Self {
        Self {
            overall_score: report.overall_score,
            overall_grade: report.overall_grade,
            issues: report.issues.clone(),
        }
    }
}

/// Outcome of a what-if scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ScenarioResult {
    pub current: ScenarioGrade,
    pub projected: ScenarioGrade,
    /// Projected minus current overall score
    pub overall_delta: i64,
    /// One entry per factor, in factor order
    pub factor_changes: Vec<FactorChange>,
    pub summary: String,
}

impl ScenarioResult {
    pub fn improved(&self) -> impl Iterator<Item = &FactorChange> {
        self.factor_changes
            .iter()
            .filter(|c| c.status == ChangeStatus::Improved)
    }

    pub fn declined(&self) -> impl Iterator<Item = &FactorChange> {
        self.factor_changes
            .iter()
            .filter(|c| c.status == ChangeStatus::Declined)
    }
}

/// Grade the baseline and the virtual bag and compare them.
///
/// Does not validate the changes; unknown ids are simply ignored.
pub fn compare(scorer: &BagScorer, baseline: &[Club], changes: &[ScenarioChange]) -> ScenarioResult {
    let virtual_bag = simulate(baseline, changes);
    let current = scorer.score(baseline);
    let projected = scorer.score(&virtual_bag);
    compare_reports(&current, &projected)
}

/// Compare two already computed reports.
pub fn compare_reports(current: &GradeReport, projected: &GradeReport) -> ScenarioResult {
    let factor_changes: Vec<FactorChange> = FactorKind::ALL
        .into_iter()
        .filter_map(|factor| {
            let from = current.component_scores.get(&factor)?;
            let to = projected.component_scores.get(&factor)?;
            let delta = i64::from(to.score) - i64::from(from.score);
            Some(FactorChange {
                factor,
                from_score: from.score,
                to_score: to.score,
                from_grade: from.grade,
                to_grade: to.grade,
                delta,
                status: ChangeStatus::from_delta(delta),
            })
        })
        .collect();

    let overall_delta = i64::from(projected.overall_score) - i64::from(current.overall_score);
    let summary = summarize(overall_delta, &factor_changes);
    tracing::debug!("Scenario delta {overall_delta:+}: {summary}");

    ScenarioResult {
        current: current.into(),
        projected: projected.into(),
        overall_delta,
        factor_changes,
        summary,
    }
}

/// Plain-language summary of a scenario outcome.
#[must_use]
pub fn summarize(overall_delta: i64, changes: &[FactorChange]) -> String {
    let magnitude = overall_delta.abs();
    let points = if magnitude == 1 {
        "1 point".to_string()
    } else {
        format!("{magnitude} points")
    };
    let mut summary = if overall_delta > 5 {
        format!("These changes would result in a significant improvement of {points}.")
    } else if overall_delta > 0 {
        format!("These changes would result in a modest improvement of {points}.")
    } else if overall_delta < -5 {
        format!("These changes would decrease your bag score by {points}.")
    } else if overall_delta < 0 {
        format!("These changes would result in a slight decrease of {points}.")
    } else {
        "These changes would have minimal impact on your overall score.".to_string()
    };

    let names = |status: ChangeStatus| -> Vec<String> {
        changes
            .iter()
            .filter(|c| c.status == status)
            .map(|c| c.factor.label())
            .collect()
    };
    let improved = names(ChangeStatus::Improved);
    let declined = names(ChangeStatus::Declined);
    if !improved.is_empty() {
        summary.push_str(&format!(" Improvements in: {}.", improved.join(", ")));
    }
    if !declined.is_empty() {
        summary.push_str(&format!(" Declines in: {}.", declined.join(", ")));
    }
    summary
}
