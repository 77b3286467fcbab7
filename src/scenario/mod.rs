//! What-if scenarios.
//!
//! A scenario applies a short list of changes (replace, add or remove a
//! club) to a baseline bag, grades the resulting virtual bag next to the
//! baseline, and reports how each factor moved. The baseline is never
//! modified.
//!
//! ## Usage
//!
//! ```
//! use clubfit::grading::{BagScorer, GradingContext};
//! use clubfit::model::Club;
//! use clubfit::scenario::{compare, validate_changes, ScenarioChange, ScenarioLimits};
//!
//! let bag = vec![
//!     Club { shaft_weight: Some(70.0), ..Club::new("5-Iron").with_id("i5") },
//!     Club { shaft_weight: Some(60.0), ..Club::new("6-Iron").with_id("i6") },
//! ];
//! let changes = vec![ScenarioChange::replace(
//!     "i6",
//!     Club { shaft_weight: Some(72.0), ..Club::default() },
//! )];
//!
//! validate_changes(&bag, &changes, &ScenarioLimits::default()).unwrap();
//! let scorer = BagScorer::default().with_context(GradingContext::for_year(2024));
//! let result = compare(&scorer, &bag, &changes);
//! assert!(result.overall_delta > 0);
//! ```

mod change;
mod comparator;
mod simulator;
mod validation;

pub use change::{changes_from_value, parse_changes_str, ScenarioChange, ScenarioSwap};
pub use comparator::{
    compare, compare_reports, summarize, ChangeStatus, FactorChange, ScenarioGrade,
    ScenarioResult, CHANGE_THRESHOLD,
};
pub use simulator::{merge_replacement, simulate, ADDED_ID_PREFIX};
pub use validation::{validate_bag, validate_changes, ScenarioLimits, DEFAULT_MAX_CHANGES};
