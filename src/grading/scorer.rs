//! Bag scorer.
//!
//! Runs every factor calculator over the sequenced bag and folds the results
//! into a weighted overall score and letter grade.

use super::factor::{FactorKind, FactorResult};
use super::factors::evaluate;
use super::grade::LetterGrade;
use super::weights::GradingWeights;
use crate::model::{fingerprint, Bag, Club};
use crate::sequence::sequence_bag;
use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inputs to grading that come from outside the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradingContext {
    /// Year clubs are aged against
    pub current_year: i32,
}

impl Default for GradingContext {
    fn default() -> Self {
        Self {
            current_year: chrono::Utc::now().year(),
        }
    }
}

impl GradingContext {
    #[must_use]
    pub const fn for_year(current_year: i32) -> Self {
        Self { current_year }
    }
}

/// One factor's contribution to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub score: u32,
    pub grade: LetterGrade,
    /// False when the factor fell back to the neutral score
    pub scorable: bool,
}

/// Complete grading outcome for one bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GradeReport {
    /// Weighted overall score
    pub overall_score: u32,
    pub overall_grade: LetterGrade,
    /// Per-factor scores, in factor order
    pub component_scores: IndexMap<FactorKind, ComponentScore>,
    /// Every factor's issues, concatenated in factor order
    pub issues: Vec<String>,
    /// Number of clubs graded
    pub club_count: usize,
    /// xxh3 fingerprint of the bag as supplied, in hex
    pub bag_fingerprint: String,
}

impl GradeReport {
    /// Score of one factor
    #[must_use]
    pub fn factor_score(&self, factor: FactorKind) -> Option<u32> {
        self.component_scores.get(&factor).map(|c| c.score)
    }

    /// Factors that fell back to the neutral score
    pub fn unscorable_factors(&self) -> impl Iterator<Item = FactorKind> + '_ {
        self.component_scores
            .iter()
            .filter(|(_, c)| !c.scorable)
            .map(|(f, _)| *f)
    }
}

/// Grades bags with a fixed weight table and context.
#[derive(Debug, Clone, Default)]
pub struct BagScorer {
    weights: GradingWeights,
    context: GradingContext,
}

impl BagScorer {
    /// Create a scorer with the given weights and the current calendar year.
    #[must_use]
    pub fn new(weights: GradingWeights) -> Self {
        Self {
            weights,
            context: GradingContext::default(),
        }
    }

    /// Pin the grading context, e.g. the year used for club age.
    #[must_use]
    pub const fn with_context(mut self, context: GradingContext) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub const fn weights(&self) -> &GradingWeights {
        &self.weights
    }

    #[must_use]
    pub const fn context(&self) -> &GradingContext {
        &self.context
    }

    /// Run every factor over the bag, in factor order.
    #[must_use]
    pub fn evaluate_factors(&self, clubs: &[Club]) -> IndexMap<FactorKind, FactorResult> {
        let sequenced = sequence_bag(clubs);
        FactorKind::ALL
            .into_iter()
            .map(|factor| (factor, evaluate(factor, &sequenced, &self.context)))
            .collect()
    }

    /// Grade a bag.
    ///
    /// Never fails: factors without enough data contribute the neutral score.
    pub fn score(&self, clubs: &[Club]) -> GradeReport {
        let results = self.evaluate_factors(clubs);

        let mut weighted = 0.0;
        let mut issues = Vec::new();
        let mut component_scores = IndexMap::with_capacity(results.len());
        for (factor, result) in results {
            let weight = self.weights.get(factor);
            weighted += f64::from(result.score) * weight;
            tracing::debug!(
                "{}: score {} (weight {:.2}, scorable {}, {} issue(s))",
                factor,
                result.score,
                weight,
                result.scorable,
                result.issues.len()
            );
            component_scores.insert(
                factor,
                ComponentScore {
                    score: result.score,
                    grade: LetterGrade::from_score(result.score),
                    scorable: result.scorable,
                },
            );
            issues.extend(result.issues);
        }

        // Negative totals saturate to 0
        let overall_score = weighted.round() as u32;
        let overall_grade = LetterGrade::from_score(overall_score);
        tracing::debug!(
            "Graded {} club(s): {} ({})",
            clubs.len(),
            overall_score,
            overall_grade
        );

        GradeReport {
            overall_score,
            overall_grade,
            component_scores,
            issues,
            club_count: clubs.len(),
            bag_fingerprint: format!("{:016x}", fingerprint(clubs)),
        }
    }

    /// Grade a [`Bag`].
    pub fn score_bag(&self, bag: &Bag) -> GradeReport {
        self.score(bag.as_slice())
    }
}

/// Grade clubs with optional weights, falling back to the defaults.
pub fn grade_bag(clubs: &[Club], weights: Option<&GradingWeights>) -> GradeReport {
    BagScorer::new(weights.copied().unwrap_or_default()).score(clubs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::NEUTRAL_SCORE;

    fn scorer() -> BagScorer {
        BagScorer::default().with_context(GradingContext::for_year(2024))
    }

    #[test]
    fn test_empty_bag_is_all_neutral() {
        let report = scorer().score(&[]);
        assert_eq!(report.overall_score, NEUTRAL_SCORE);
        assert_eq!(report.overall_grade, LetterGrade::C);
        assert_eq!(report.component_scores.len(), 8);
        assert_eq!(report.unscorable_factors().count(), 8);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_component_order_is_factor_order() {
        let report = scorer().score(&[Club::new("Driver")]);
        let keys: Vec<FactorKind> = report.component_scores.keys().copied().collect();
        assert_eq!(keys, FactorKind::ALL.to_vec());
    }

    #[test]
    fn test_weighted_overall() {
        // weight_progression 80, everything else neutral 75
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
        let report = scorer().score(&clubs);
        assert_eq!(report.factor_score(FactorKind::WeightProgression), Some(80));
        // 0.8 * 75 + 0.2 * 80 = 76
        assert_eq!(report.overall_score, 76);
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn test_custom_weights() {
        let weights = GradingWeights {
            age: 1.0,
            weight_progression: 0.0,
            loft_gapping: 0.0,
            flex_consistency: 0.0,
            kickpoint_consistency: 0.0,
            torque_consistency: 0.0,
            length_progression: 0.0,
            lie_angle_progression: 0.0,
        };
        let clubs = vec![Club {
            year: Some(2021),
            ..Club::new("Driver")
        }];
        let report = BagScorer::new(weights)
            .with_context(GradingContext::for_year(2024))
            .score(&clubs);
        assert_eq!(report.overall_score, 85);
        assert_eq!(report.overall_grade, LetterGrade::B);
    }

    #[test]
    fn test_issues_follow_factor_order() {
        let clubs = vec![
            Club {
                year: Some(2010),
                loft: Some(10.0),
                ..Club::new("Driver")
            },
            Club {
                loft: Some(20.0),
                ..Club::new("3 Wood")
            },
        ];
        let report = scorer().score(&clubs);
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues[0].contains("years old"));
        assert!(report.issues[1].contains("loft gap"));
    }

    #[test]
    fn test_grade_bag_defaults() {
        let clubs = vec![Club::new("Driver")];
        let report = grade_bag(&clubs, None);
        assert_eq!(report.club_count, 1);
        assert_eq!(report.bag_fingerprint.len(), 16);
    }
}
