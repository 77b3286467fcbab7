//! Canonical club and bag structures.

use super::{ClubCategory, ClubKind, Flex, Kickpoint};
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

/// A single club in canonical shape.
///
/// Every numeric attribute is optional. Calculators skip clubs that lack
/// the attribute they need rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Club {
    /// Stable identifier, required only for scenario changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Free-form club type ("7-Iron", "Driver", "56°")
    pub club_type: String,
    pub category: Option<ClubCategory>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    /// Loft in degrees
    pub loft: Option<f64>,
    /// Lie angle in degrees
    pub lie: Option<f64>,
    /// Length in inches
    pub length: Option<f64>,
    pub shaft_brand: Option<String>,
    pub shaft_model: Option<String>,
    /// Shaft weight in grams
    pub shaft_weight: Option<f64>,
    pub shaft_flex: Option<String>,
    pub shaft_kickpoint: Option<String>,
    /// Shaft torque in degrees
    pub shaft_torque: Option<f64>,
    pub is_favorite: bool,
    pub status: Option<String>,
}

impl Club {
    /// Create a club with only a type set; the category is inferred.
    #[must_use]
    pub fn new(club_type: impl Into<String>) -> Self {
        let club_type = club_type.into();
        let category = ClubKind::parse(&club_type).category();
        Self {
            club_type,
            category,
            ..Self::default()
        }
    }

    /// Builder-style id setter, mostly for fixtures and scenario additions.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> ClubKind {
        ClubKind::parse(&self.club_type)
    }

    /// Decoded shaft flex
    #[must_use]
    pub fn flex(&self) -> Flex {
        self.shaft_flex
            .as_deref()
            .map_or(Flex::Unknown, Flex::decode)
    }

    /// Decoded shaft kickpoint
    #[must_use]
    pub fn kickpoint(&self) -> Kickpoint {
        self.shaft_kickpoint
            .as_deref()
            .map_or(Kickpoint::Unknown, Kickpoint::decode)
    }

    /// Name used in issue text; falls back when the type is blank.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.club_type.trim().is_empty() {
            "unnamed club"
        } else {
            &self.club_type
        }
    }
}

/// A bag of clubs, supplied fresh for every grading call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    pub clubs: Vec<Club>,
}

impl Bag {
    #[must_use]
    pub const fn new(clubs: Vec<Club>) -> Self {
        Self { clubs }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Club] {
        &self.clubs
    }

    /// Look up a club by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.id.as_deref() == Some(id))
    }

    /// Deterministic content hash of the clubs, in their current order.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        fingerprint(&self.clubs)
    }
}

impl From<Vec<Club>> for Bag {
    fn from(clubs: Vec<Club>) -> Self {
        Self::new(clubs)
    }
}

/// xxh3 over the canonical JSON form of a club list.
#[must_use]
pub fn fingerprint(clubs: &[Club]) -> u64 {
    serde_json::to_vec(clubs).map_or(0, |bytes| xxh3_64(&bytes))
}
