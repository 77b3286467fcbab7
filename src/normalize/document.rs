//! Bag documents: JSON or YAML, bare list or `{ clubs: [...] }`.

use super::normalize_club;
use crate::error::{ClubFitError, ErrorContext, ParseErrorKind, Result};
use crate::model::Bag;
use serde_json::Value;
use std::path::Path;

/// Parse a JSON or YAML document into a generic value.
///
/// Content starting with `[` or `{` is read as JSON, anything else as YAML.
pub fn parse_document(content: &str) -> Result<Value> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        serde_json::from_str(trimmed).map_err(|e| {
            ClubFitError::parse("parsing JSON document", ParseErrorKind::InvalidJson(e.to_string()))
        })
    } else {
        serde_yaml::from_str(content).map_err(|e| {
            ClubFitError::parse("parsing YAML document", ParseErrorKind::InvalidYaml(e.to_string()))
        })
    }
}

/// Build a bag from a parsed document.
///
/// Entries that are not objects are skipped with a warning rather than
/// failing the whole bag.
pub fn bag_from_value(value: &Value) -> Result<Bag> {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("clubs") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ClubFitError::parse(
                    "reading bag",
                    ParseErrorKind::UnexpectedShape("`clubs` must be a list".to_string()),
                ))
            }
            None => {
                return Err(ClubFitError::parse(
                    "reading bag",
                    ParseErrorKind::UnexpectedShape("object has no `clubs` list".to_string()),
                ))
            }
        },
        Value::Null => return Ok(Bag::default()),
        other => {
            return Err(ClubFitError::parse(
                "reading bag",
                ParseErrorKind::UnexpectedShape(format!(
                    "expected a list of clubs, found {}",
                    value_kind(other)
                )),
            ))
        }
    };

    let mut clubs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match normalize_club(entry) {
            Some(club) => clubs.push(club),
            None => tracing::warn!(
                "Skipping clubs[{}]: expected an object, found {}",
                index,
                value_kind(entry)
            ),
        }
    }
    Ok(Bag::new(clubs))
}

/// Parse bag content from a string.
pub fn parse_bag_str(content: &str) -> Result<Bag> {
    let value = parse_document(content)?;
    bag_from_value(&value)
}

/// Read and parse a bag file.
pub fn parse_bag(path: &Path) -> Result<Bag> {
    let content = std::fs::read_to_string(path).map_err(|e| ClubFitError::io(path, e))?;
    parse_bag_str(&content).with_context(|| format!("loading {}", path.display()))
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
