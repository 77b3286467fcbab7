//! Factor weights for the composite score.

use super::factor::FactorKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How much each factor contributes to the overall score.
///
/// Weights conventionally sum to 1.0, but the scorer does not enforce it;
/// the config layer only warns when they drift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GradingWeights {
    pub age: f64,
    pub weight_progression: f64,
    pub loft_gapping: f64,
    pub flex_consistency: f64,
    pub kickpoint_consistency: f64,
    pub torque_consistency: f64,
    pub length_progression: f64,
    pub lie_angle_progression: f64,
}

impl Default for GradingWeights {
    fn default() -> Self {
        Self {
            age: 0.20,
            weight_progression: 0.20,
            loft_gapping: 0.20,
            flex_consistency: 0.05,
            kickpoint_consistency: 0.10,
            torque_consistency: 0.05,
            length_progression: 0.10,
            lie_angle_progression: 0.10,
        }
    }
}

impl GradingWeights {
    /// Weight for one factor
    #[must_use]
    pub const fn get(&self, factor: FactorKind) -> f64 {
        match factor {
            FactorKind::Age => self.age,
            FactorKind::WeightProgression => self.weight_progression,
            FactorKind::LoftGapping => self.loft_gapping,
            FactorKind::FlexConsistency => self.flex_consistency,
            FactorKind::KickpointConsistency => self.kickpoint_consistency,
            FactorKind::TorqueConsistency => self.torque_consistency,
            FactorKind::LengthProgression => self.length_progression,
            FactorKind::LieAngleProgression => self.lie_angle_progression,
        }
    }

    /// Builder-style override for one factor.
    #[must_use]
    pub fn with(mut self, factor: FactorKind, weight: f64) -> Self {
        match factor {
            FactorKind::Age => self.age = weight,
            FactorKind::WeightProgression => self.weight_progression = weight,
            FactorKind::LoftGapping => self.loft_gapping = weight,
            FactorKind::FlexConsistency => self.flex_consistency = weight,
            FactorKind::KickpointConsistency => self.kickpoint_consistency = weight,
            FactorKind::TorqueConsistency => self.torque_consistency = weight,
            FactorKind::LengthProgression => self.length_progression = weight,
            FactorKind::LieAngleProgression => self.lie_angle_progression = weight,
        }
        self
    }

    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        FactorKind::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Factors whose weight is negative or not a finite number.
    #[must_use]
    pub fn invalid_factors(&self) -> Vec<FactorKind> {
        FactorKind::ALL
            .into_iter()
            .filter(|f| {
                let w = self.get(*f);
                !w.is_finite() || w < 0.0
            })
            .collect()
    }
}
