//! Pipeline orchestration for grading and scenario runs.
//!
//! This module provides shared orchestration logic for load → validate →
//! grade → report workflows, reducing duplication across CLI command handlers.

mod grade_stage;
mod output;
mod parse;
mod report_stage;

pub use grade_stage::{grade, run_scenario};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{load_changes, load_weights, parse_bag_with_context};
pub use report_stage::{output_grade_report, output_scenario_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall score below `--min-score`, or a scenario declined with `--fail-on-decline`
    pub const THRESHOLD_NOT_MET: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
