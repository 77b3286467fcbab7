//! Input loading: bags, change lists and weight files.

use crate::grading::GradingWeights;
use crate::model::Bag;
use crate::normalize::{parse_bag_str, parse_document};
use crate::scenario::{parse_changes_str, ScenarioChange};
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a bag file with context for error messages
pub fn parse_bag_with_context(path: &Path, quiet: bool) -> Result<Bag> {
    if !quiet {
        tracing::info!("Parsing bag: {}", path.display());
    }

    let raw_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bag file: {}", path.display()))?;
    let bag = parse_bag_str(&raw_content)
        .with_context(|| format!("Failed to parse bag: {}", path.display()))?;

    if !quiet {
        tracing::info!("Parsed {} clubs", bag.len());
    }

    Ok(bag)
}

/// Load a scenario change list (JSON or YAML)
pub fn load_changes(path: &Path) -> Result<Vec<ScenarioChange>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read change list: {}", path.display()))?;
    let changes = parse_changes_str(&content)
        .with_context(|| format!("Failed to parse change list: {}", path.display()))?;
    tracing::info!("Loaded {} scenario changes", changes.len());
    Ok(changes)
}

/// Load factor weights (JSON or YAML); missing factors keep their defaults
pub fn load_weights(path: &Path) -> Result<GradingWeights> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read weights file: {}", path.display()))?;
    let value = parse_document(&content)
        .with_context(|| format!("Failed to parse weights file: {}", path.display()))?;
    if value.is_null() {
        return Ok(GradingWeights::default());
    }
    serde_json::from_value(value)
        .with_context(|| format!("Invalid weights in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_bag_with_context() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "bag.yaml",
            "clubs:\n  - clubType: Driver\n    loft: 10.5\n  - clubType: 7-Iron\n",
        );
        let bag = parse_bag_with_context(&path, true).unwrap();
        assert_eq!(bag.len(), 2);
    }

    #[test]
    fn test_missing_bag_names_the_file() {
        let err = parse_bag_with_context(Path::new("/nonexistent/bag.json"), true).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/bag.json"));
    }

    #[test]
    fn test_load_changes() {
        let tmp = TempDir::new().unwrap();
        let path = write(
            &tmp,
            "changes.json",
            r#"[{"clubId": "i7", "replacement": {"shaft_weight": 95}}, {"action": "remove", "club_id": "w5"}]"#,
        );
        let changes = load_changes(&path).unwrap();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[1].action(), "remove");
    }

    #[test]
    fn test_load_weights_partial() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "weights.yaml", "age: 0.0\nloft_gapping: 0.4\n");
        let weights = load_weights(&path).unwrap();
        assert!(weights.age.abs() < f64::EPSILON);
        assert!((weights.loft_gapping - 0.4).abs() < f64::EPSILON);
        assert!((weights.weight_progression - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_weights_rejects_strings() {
        let tmp = TempDir::new().unwrap();
        let path = write(&tmp, "weights.json", r#"{"age": "heavy"}"#);
        assert!(load_weights(&path).is_err());
    }
}
