//! Bag fitness grading.
//!
//! Eight independent fit factors (age, shaft weight progression, loft
//! gapping, flex, kickpoint and torque consistency, length and lie angle
//! progression) are scored 0-100 and combined with [`GradingWeights`] into an
//! overall score and [`LetterGrade`].
//!
//! A factor without enough data is not an error. It scores the neutral
//! [`NEUTRAL_SCORE`] and is marked unscorable, and it still counts toward the
//! weighted total.
//!
//! ## Usage
//!
//! ```
//! use clubfit::grading::{BagScorer, GradingContext, GradingWeights};
//! use clubfit::model::Club;
//!
//! let clubs = vec![
//!     Club { loft: Some(10.0), ..Club::new("Driver") },
//!     Club { loft: Some(20.0), ..Club::new("3 Wood") },
//! ];
//!
//! let report = BagScorer::new(GradingWeights::default())
//!     .with_context(GradingContext::for_year(2024))
//!     .score(&clubs);
//! assert_eq!(report.component_scores.len(), 8);
//! ```

mod factor;
pub mod factors;
mod grade;
mod scorer;
mod weights;

pub use factor::{clamp_score, FactorKind, FactorResult, NEUTRAL_SCORE};
pub use grade::{score_to_grade, LetterGrade};
pub use scorer::{grade_bag, BagScorer, ComponentScore, GradeReport, GradingContext};
pub use weights::GradingWeights;
