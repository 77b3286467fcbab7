//! Caller contract checks for scenario and grading requests.
//!
//! The engine never calls these. They exist for the layer that accepts
//! requests, so a bad request is rejected with the constraint it broke
//! before anything is graded.

use super::change::ScenarioChange;
use crate::error::{ClubFitError, Result, ScenarioErrorKind};
use crate::model::Club;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default cap on changes per scenario
pub const DEFAULT_MAX_CHANGES: usize = 7;

/// Limits applied to scenario requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScenarioLimits {
    /// Most changes accepted in one scenario
    pub max_changes: usize,
}

impl Default for ScenarioLimits {
    fn default() -> Self {
        Self {
            max_changes: DEFAULT_MAX_CHANGES,
        }
    }
}

/// Reject grading an empty bag.
pub fn validate_bag(clubs: &[Club]) -> Result<()> {
    if clubs.is_empty() {
        return Err(ClubFitError::scenario(
            "grading request",
            ScenarioErrorKind::EmptyBag,
        ));
    }
    Ok(())
}

/// Check a change list against a baseline bag.
///
/// Checks run in order: empty bag, empty change list, change count, then
/// each target id (must exist, may be targeted once).
pub fn validate_changes(
    baseline: &[Club],
    changes: &[ScenarioChange],
    limits: &ScenarioLimits,
) -> Result<()> {
    let reject = |kind| Err(ClubFitError::scenario("scenario request", kind));

    if baseline.is_empty() {
        return reject(ScenarioErrorKind::EmptyBag);
    }
    if changes.is_empty() {
        return reject(ScenarioErrorKind::EmptyScenario);
    }
    if changes.len() > limits.max_changes {
        return reject(ScenarioErrorKind::TooManyChanges {
            count: changes.len(),
            max: limits.max_changes,
        });
    }

    let known: HashSet<&str> = baseline.iter().filter_map(|c| c.id.as_deref()).collect();
    let mut targeted = HashSet::new();
    for id in changes.iter().filter_map(ScenarioChange::target_id) {
        if !known.contains(id) {
            return reject(ScenarioErrorKind::UnknownClub(id.to_string()));
        }
        if !targeted.insert(id) {
            return reject(ScenarioErrorKind::DuplicateTarget(id.to_string()));
        }
    }

    Ok(())
}
