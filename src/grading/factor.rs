//! Fit factor identities and per-factor results.

use serde::{Deserialize, Serialize};

/// Score given to a factor that lacks enough data to be measured.
pub const NEUTRAL_SCORE: u32 = 75;

/// One of the eight independent fit factors.
///
/// Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Age,
    WeightProgression,
    LoftGapping,
    FlexConsistency,
    KickpointConsistency,
    TorqueConsistency,
    LengthProgression,
    LieAngleProgression,
}

impl FactorKind {
    /// All factors in reporting order
    pub const ALL: [Self; 8] = [
        Self::Age,
        Self::WeightProgression,
        Self::LoftGapping,
        Self::FlexConsistency,
        Self::KickpointConsistency,
        Self::TorqueConsistency,
        Self::LengthProgression,
        Self::LieAngleProgression,
    ];

    /// Machine key, as used in weights and JSON output
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::WeightProgression => "weight_progression",
            Self::LoftGapping => "loft_gapping",
            Self::FlexConsistency => "flex_consistency",
            Self::KickpointConsistency => "kickpoint_consistency",
            Self::TorqueConsistency => "torque_consistency",
            Self::LengthProgression => "length_progression",
            Self::LieAngleProgression => "lie_angle_progression",
        }
    }

    /// Human label: the key with underscores turned into spaces.
    #[must_use]
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }

    /// Fewest clubs carrying the attribute before the factor is scorable.
    #[must_use]
    pub const fn min_samples(&self) -> usize {
        match self {
            Self::Age => 1,
            _ => 2,
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FactorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| format!("unknown factor: {s}"))
    }
}

/// Outcome of one factor calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorResult {
    /// Score in 0..=100
    pub score: u32,
    /// Problems found, naming the clubs involved
    pub issues: Vec<String>,
    /// False when the bag had too few clubs carrying the attribute
    pub scorable: bool,
}

impl FactorResult {
    /// Neutral result for a factor that could not be measured.
    #[must_use]
    pub const fn unscorable() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            issues: Vec::new(),
            scorable: false,
        }
    }

    /// Scored result. The raw score is clamped to 0..=100 and rounded.
    #[must_use]
    pub fn scored(raw: f64, issues: Vec<String>) -> Self {
        Self {
            score: clamp_score(raw),
            issues,
            scorable: true,
        }
    }
}

/// Clamp to 0..=100 and round half away from zero.
#[must_use]
pub fn clamp_score(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(FactorKind::LieAngleProgression.key(), "lie_angle_progression");
        assert_eq!(FactorKind::LieAngleProgression.label(), "lie angle progression");
        assert_eq!(
            serde_json::to_string(&FactorKind::KickpointConsistency).unwrap(),
            "\"kickpoint_consistency\""
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("loft gapping".parse::<FactorKind>(), Ok(FactorKind::LoftGapping));
        assert_eq!("Weight-Progression".parse::<FactorKind>(), Ok(FactorKind::WeightProgression));
        assert!("swing_speed".parse::<FactorKind>().is_err());
    }

    #[test]
    fn test_min_samples() {
        assert_eq!(FactorKind::Age.min_samples(), 1);
        assert!(FactorKind::ALL[1..].iter().all(|f| f.min_samples() == 2));
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(82.5), 83);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_unscorable_is_neutral() {
        let result = FactorResult::unscorable();
        assert_eq!(result.score, NEUTRAL_SCORE);
        assert!(!result.scorable);
        assert!(result.issues.is_empty());
    }
}
