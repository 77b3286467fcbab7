//! Configuration validation for clubfit.
//!
//! Hard errors come from [`Validatable::validate`]. Soft findings that should
//! only be logged, such as weights that do not sum to 1.0, come from
//! [`AppConfig::warnings`].

use super::types::{AppConfig, GradingConfig, OutputConfig};
use crate::grading::FactorKind;
use crate::scenario::ScenarioLimits;

/// Allowed drift of the weight sum from 1.0 before a warning.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.grading.validate());
        errors.extend(self.scenario.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for GradingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors: Vec<ConfigError> = self
            .weights
            .invalid_factors()
            .into_iter()
            .map(|factor| ConfigError {
                field: format!("grading.weights.{}", factor.key()),
                message: format!(
                    "Weight must be a finite, non-negative number, got {}",
                    self.weights.get(factor)
                ),
            })
            .collect();

        if let Some(year) = self.reference_year {
            if !(1900..=2200).contains(&year) {
                errors.push(ConfigError {
                    field: "grading.reference_year".to_string(),
                    message: format!("Reference year must be between 1900 and 2200, got {year}"),
                });
            }
        }

        errors
    }
}

impl Validatable for ScenarioLimits {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_changes == 0 {
            errors.push(ConfigError {
                field: "scenario.max_changes".to_string(),
                message: "At least one change per scenario must be allowed".to_string(),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl AppConfig {
    /// Findings that do not block a run but are worth logging.
    #[must_use]
    pub fn warnings(&self) -> Vec<ConfigError> {
        let mut warnings = Vec::new();
        let weights = &self.grading.weights;
        if weights.invalid_factors().is_empty() {
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                warnings.push(ConfigError {
                    field: "grading.weights".to_string(),
                    message: format!(
                        "Weights sum to {sum:.3}, not 1.0; overall scores will be scaled by that factor"
                    ),
                });
            }
            if FactorKind::ALL.iter().all(|f| weights.get(*f) == 0.0) {
                warnings.push(ConfigError {
                    field: "grading.weights".to_string(),
                    message: "All weights are zero; every bag will score 0".to_string(),
                });
            }
        }
        warnings
    }
}
