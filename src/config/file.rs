//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use crate::reports::ReportFormat;
use crate::scenario::DEFAULT_MAX_CHANGES;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".clubfit.yaml", ".clubfit.yml", "clubfit.yaml"];

/// Directory under the user config directory holding the global config.
const CONFIG_DIR_NAME: &str = "clubfit";

/// Directories searched for a config file, in order:
/// the current directory, the user config directory (`~/.config/clubfit/`),
/// then the home directory.
#[must_use]
pub fn config_search_dirs() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME)),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Discover a config file by searching standard locations.
///
/// An explicit path wins when it exists; otherwise the directories from
/// [`config_search_dirs`] are tried in order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    config_search_dirs()
        .iter()
        .find_map(|dir| find_config_in_dir(dir))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Where `config init` writes when no path is given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAMES[0])
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A file that fails to parse or validate is ignored with a warning.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                let errors = config.validate();
                if errors.is_empty() {
                    for warning in config.warnings() {
                        tracing::warn!("{}: {}", path.display(), warning);
                    }
                    tracing::debug!("Loaded config from {}", path.display());
                    (config, Some(path))
                } else {
                    for error in &errors {
                        tracing::warn!("Ignoring {}: {}", path.display(), error);
                    }
                    (AppConfig::default(), None)
                }
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this is how CLI
    /// flags are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        if other.grading.weights != defaults.grading.weights {
            self.grading.weights = other.grading.weights;
        }
        if other.grading.reference_year.is_some() {
            self.grading.reference_year = other.grading.reference_year;
        }

        if other.scenario.max_changes != DEFAULT_MAX_CHANGES {
            self.scenario.max_changes = other.scenario.max_changes;
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# clubfit configuration
# ======================
#
# Place this file at:
#   - .clubfit.yaml in the working directory
#   - ~/.config/clubfit/clubfit.yaml for global config
#
# CLI arguments always override file settings.

# Grading configuration
grading:
  # Factor weights. They conventionally sum to 1.0; a warning is logged
  # when they drift by more than 0.001.
  weights:
    age: 0.2
    weight_progression: 0.2
    loft_gapping: 0.2
    flex_consistency: 0.05
    kickpoint_consistency: 0.1
    torque_consistency: 0.05
    length_progression: 0.1
    lie_angle_progression: 0.1
  # Year clubs are aged against (omit for the current year)
  # reference_year: 2024

# Scenario limits
scenario:
  # Most changes accepted in one scenario
  max_changes: 7

# Output configuration
output:
  # Format: auto, summary, json, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::{FactorKind, GradingWeights};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".clubfit.yaml");
        std::fs::write(&config_path, "scenario:\n  max_changes: 3\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
grading:
  reference_year: 2022
  weights:
    torque_consistency: 0.0
scenario:
  max_changes: 4
output:
  format: json
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.grading.reference_year, Some(2022));
        assert!(config.grading.weights.torque_consistency.abs() < f64::EPSILON);
        assert_eq!(config.scenario.max_changes, 4);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();
        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_rejects_invalid() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "scenario:\n  max_changes: 0\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder().reference_year(Some(2020)).max_changes(5).build();
        let overrides = AppConfig::builder()
            .weights(GradingWeights::default().with(FactorKind::Age, 0.0))
            .output_format(ReportFormat::Markdown)
            .build();

        base.merge(&overrides);

        assert!(base.grading.weights.age.abs() < f64::EPSILON);
        assert_eq!(base.grading.reference_year, Some(2020));
        assert_eq!(base.scenario.max_changes, 5);
        assert_eq!(base.output.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_generate_example_config_parses() {
        let example = generate_example_config();
        let config: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output:\n  no_color: true").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
