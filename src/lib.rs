//! **Golf bag fitness grading and what-if equipment scenarios.**
//!
//! `clubfit` scores a bag of clubs on eight fitting factors (equipment age,
//! shaft weight progression, loft gapping, flex, kickpoint and torque
//! consistency, length and lie angle progression), rolls them into a weighted
//! overall score with a letter grade, and projects how a short list of
//! equipment changes would move that grade.
//!
//! ## Core Concepts & Modules
//!
//! - **[`normalize`]**: The single boundary between raw club records and the
//!   canonical [`Club`]. Club data arrives under several key spellings and
//!   with shaft data nested or flattened; everything downstream only sees
//!   [`Club`].
//! - **[`sequence`]**: Orders clubs the way they sit in a bag, driver to
//!   putter.
//! - **[`grading`]**: The factor calculators, the weighted aggregate, and the
//!   letter grade scale. [`BagScorer`] is the entry point.
//! - **[`scenario`]**: Applies replace/add/remove changes to a copy of the bag
//!   and compares the projected grade against the baseline.
//! - **[`pipeline`]** and **[`reports`]**: File loading, contract checks,
//!   and summary/JSON/Markdown rendering used by the CLI.
//!
//! Grading is pure: no caching, no global state, weights are passed per call.
//! Data gaps never fail a grade; a factor without enough data scores a
//! neutral 75 and is marked unscorable.
//!
//! ## Getting Started: Grading a Bag
//!
//! ```
//! use clubfit::{parse_bag_str, BagScorer, GradingContext};
//!
//! let bag = parse_bag_str(r#"[
//!     {"clubType": "Driver", "year": 2022, "loft": 10.5, "shaft": {"weight": 60, "flex": "S"}},
//!     {"clubType": "7-Iron", "year": 2022, "loft": 31, "shaft": {"weight": 110, "flex": "S"}}
//! ]"#).unwrap();
//!
//! let report = BagScorer::default()
//!     .with_context(GradingContext::for_year(2024))
//!     .score_bag(&bag);
//!
//! println!("{} ({})", report.overall_score, report.overall_grade);
//! for issue in &report.issues {
//!     println!("  - {issue}");
//! }
//! ```
//!
//! ### Running a Scenario
//!
//! ```
//! use clubfit::{compare, BagScorer, Club, GradingContext, ScenarioChange};
//!
//! let bag = vec![
//!     Club { shaft_weight: Some(70.0), ..Club::new("5-Iron").with_id("i5") },
//!     Club { shaft_weight: Some(55.0), ..Club::new("6-Iron").with_id("i6") },
//! ];
//! let changes = vec![ScenarioChange::replace(
//!     "i6",
//!     Club { shaft_weight: Some(75.0), ..Club::default() },
//! )];
//!
//! let scorer = BagScorer::default().with_context(GradingContext::for_year(2024));
//! let result = compare(&scorer, &bag, &changes);
//! println!("{}", result.summary);
//! assert_eq!(bag[1].shaft_weight, Some(55.0));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `clubfit` binary wraps this library with `grade`, `grade-many`,
//! `scenario` and `config` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores are bounded 0..=100 and club counts are small
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod grading;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reports;
pub mod scenario;
pub mod sequence;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{ClubFitError, ErrorContext, Result};
pub use grading::{
    grade_bag, score_to_grade, BagScorer, FactorKind, GradeReport, GradingContext,
    GradingWeights, LetterGrade,
};
pub use model::{Bag, Club, ClubCategory, ClubKind, Flex, Kickpoint};
pub use normalize::{normalize_club, parse_bag, parse_bag_str};
pub use reports::{ReportFormat, ReportGenerator};
pub use scenario::{
    compare, simulate, validate_changes, ChangeStatus, FactorChange, ScenarioChange,
    ScenarioLimits, ScenarioResult,
};
pub use sequence::sequence_bag;
