//! Configuration module for clubfit.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use clubfit::config::{AppConfig, Validatable};
//! use clubfit::reports::ReportFormat;
//!
//! let config = AppConfig::builder()
//!     .reference_year(Some(2024))
//!     .max_changes(5)
//!     .output_format(ReportFormat::Json)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.clubfit.yaml` file in the working directory or `~/.config/clubfit/`:
//!
//! ```yaml
//! grading:
//!   weights:
//!     age: 0.1
//!     weight_progression: 0.3
//! scenario:
//!   max_changes: 5
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, GradingConfig, OutputConfig};
pub use validation::{ConfigError, Validatable, WEIGHT_SUM_TOLERANCE};

pub use file::{
    config_search_dirs, default_config_path, discover_config_file, generate_example_config,
    load_config_file, load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.clubfit.yaml`, for
/// editor validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"grading\""));
        assert!(schema.contains("\"max_changes\""));
        assert!(schema.contains("\"lie_angle_progression\""));
    }
}
