//! Scenario change instructions.

use crate::error::{ClubFitError, ParseErrorKind, Result};
use crate::model::Club;
use crate::normalize::{deserialize_club, parse_document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Replace one club, keyed by id, with a partial club record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSwap {
    #[serde(alias = "clubId")]
    pub club_id: String,
    /// Fields for the new club. Anything left out becomes empty, except the
    /// id and club type, which carry over from the club being replaced.
    #[serde(deserialize_with = "deserialize_club")]
    pub replacement: Club,
}

/// One what-if instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ScenarioChange {
    /// Swap a club for another
    Replace(ScenarioSwap),
    /// Put a new club in the bag
    Add {
        #[serde(deserialize_with = "deserialize_club")]
        club: Club,
    },
    /// Take a club out of the bag
    Remove {
        #[serde(alias = "clubId")]
        club_id: String,
    },
}

impl ScenarioChange {
    #[must_use]
    pub fn replace(club_id: impl Into<String>, replacement: Club) -> Self {
        Self::Replace(ScenarioSwap {
            club_id: club_id.into(),
            replacement,
        })
    }

    #[must_use]
    pub const fn add(club: Club) -> Self {
        Self::Add { club }
    }

    #[must_use]
    pub fn remove(club_id: impl Into<String>) -> Self {
        Self::Remove {
            club_id: club_id.into(),
        }
    }

    /// Id of the baseline club this change targets; additions target none.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Replace(swap) => Some(&swap.club_id),
            Self::Remove { club_id } => Some(club_id),
            Self::Add { .. } => None,
        }
    }

    /// Short verb for logs and reports
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Replace(_) => "replace",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }
}

impl From<ScenarioSwap> for ScenarioChange {
    fn from(swap: ScenarioSwap) -> Self {
        Self::Replace(swap)
    }
}

/// Read one change entry. Entries without an `action` are swaps.
fn change_from_value(value: Value) -> std::result::Result<ScenarioChange, serde_json::Error> {
    let tagged = value
        .as_object()
        .is_some_and(|map| map.contains_key("action"));
    if tagged {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<ScenarioSwap>(value).map(ScenarioChange::Replace)
    }
}

/// Build a change list from a parsed document.
///
/// Accepts a bare list or an object holding the list under `changes` or
/// `swaps`.
pub fn changes_from_value(value: Value) -> Result<Vec<ScenarioChange>> {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("changes").or_else(|| map.remove("swaps")) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ClubFitError::parse(
                    "reading scenario",
                    ParseErrorKind::UnexpectedShape(
                        "expected a `changes` or `swaps` list".to_string(),
                    ),
                ))
            }
        },
        Value::Null => Vec::new(),
        _ => {
            return Err(ClubFitError::parse(
                "reading scenario",
                ParseErrorKind::UnexpectedShape("expected a list of changes".to_string()),
            ))
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            change_from_value(entry).map_err(|e| {
                ClubFitError::parse(
                    "reading scenario",
                    ParseErrorKind::InvalidChange {
                        index,
                        message: e.to_string(),
                    },
                )
            })
        })
        .collect()
}

/// Parse a JSON or YAML change list.
pub fn parse_changes_str(content: &str) -> Result<Vec<ScenarioChange>> {
    changes_from_value(parse_document(content)?)
}
