//! Club record normalization.
//!
//! Club records come from spec sheets, older exports and hand-written YAML,
//! so the same attribute shows up under several keys (`lie` or `lie_angle`,
//! `clubType` or `club_type`) and shaft data may be nested under `shaft` or
//! flattened into `shaft_*` fields. This module is the only place that knows
//! about those shapes; everything downstream works on [`Club`].
//!
//! ## Usage
//!
//! ```
//! use clubfit::normalize::parse_bag_str;
//!
//! let bag = parse_bag_str(r#"[
//!     {"clubType": "Driver", "loft": 10.5, "shaft": {"weight": 60, "flex": "S"}},
//!     {"club_type": "7-Iron", "lie_angle": "62.5", "shaft_weight": 110}
//! ]"#).unwrap();
//!
//! assert_eq!(bag.len(), 2);
//! assert_eq!(bag.clubs[1].lie, Some(62.5));
//! ```

mod document;
mod raw;

pub use document::{bag_from_value, parse_bag, parse_bag_str, parse_document};

use crate::model::{Club, ClubCategory, ClubKind};
use raw::RawRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const ID_KEYS: &[&str] = &["id", "club_id", "clubId"];
const TYPE_KEYS: &[&str] = &["clubType", "club_type", "type"];
const CATEGORY_KEYS: &[&str] = &["category", "club_category"];
const BRAND_KEYS: &[&str] = &["brand", "make"];
const MODEL_KEYS: &[&str] = &["model"];
const YEAR_KEYS: &[&str] = &["year", "model_year", "modelYear"];
const LOFT_KEYS: &[&str] = &["loft"];
const LIE_KEYS: &[&str] = &["lie", "lie_angle", "lieAngle"];
const LENGTH_KEYS: &[&str] = &["length", "club_length", "clubLength"];
const FAVORITE_KEYS: &[&str] = &["isFavorite", "is_favorite", "favorite"];
const STATUS_KEYS: &[&str] = &["status"];

const SHAFT_KEYS: &[&str] = &["shaft"];
const NESTED_BRAND: &[&str] = &["brand"];
const NESTED_MODEL: &[&str] = &["model", "name"];
const NESTED_WEIGHT: &[&str] = &["weight"];
const NESTED_FLEX: &[&str] = &["flex"];
const NESTED_KICKPOINT: &[&str] = &["kickPoint", "kickpoint", "kick_point"];
const NESTED_TORQUE: &[&str] = &["torque"];

const FLAT_BRAND: &[&str] = &["shaft_brand", "shaftBrand"];
const FLAT_MODEL: &[&str] = &["shaft_model", "shaftModel"];
const FLAT_WEIGHT: &[&str] = &["shaft_weight", "shaftWeight"];
const FLAT_FLEX: &[&str] = &["shaft_flex", "shaftFlex", "flex"];
const FLAT_KICKPOINT: &[&str] = &["shaft_kickpoint", "shaft_kick_point", "shaftKickPoint"];
const FLAT_TORQUE: &[&str] = &["shaft_torque", "shaftTorque"];

/// Normalize one raw club record.
///
/// Returns `None` only when the value is not an object. Missing or
/// unreadable attributes become `None` on the returned club.
#[must_use]
pub fn normalize_club(value: &Value) -> Option<Club> {
    let map = value.as_object()?;
    let raw = RawRecord::new(map);
    let shaft = raw.nested(SHAFT_KEYS);

    let club_type = raw.text(TYPE_KEYS).unwrap_or_default();
    let category = raw
        .text(CATEGORY_KEYS)
        .and_then(|c| ClubCategory::parse(&c))
        .or_else(|| ClubKind::parse(&club_type).category());

    // Nested shaft values win over flat ones
    let shaft_text = |nested: &[&str], flat: &[&str]| {
        shaft
            .and_then(|s| s.text(nested))
            .or_else(|| raw.text(flat))
    };
    let shaft_number = |nested: &[&str], flat: &[&str]| {
        shaft
            .and_then(|s| s.number(nested))
            .or_else(|| raw.number(flat))
    };

    // A plain string under `shaft` is the shaft model
    let shaft_model = shaft_text(NESTED_MODEL, FLAT_MODEL).or_else(|| {
        if shaft.is_none() {
            raw.text(SHAFT_KEYS)
        } else {
            None
        }
    });

    Some(Club {
        id: raw.text(ID_KEYS),
        club_type,
        category,
        brand: raw.text(BRAND_KEYS),
        model: raw.text(MODEL_KEYS),
        year: raw.integer(YEAR_KEYS),
        loft: raw.number(LOFT_KEYS),
        lie: raw.number(LIE_KEYS),
        length: raw.number(LENGTH_KEYS),
        shaft_brand: shaft_text(NESTED_BRAND, FLAT_BRAND),
        shaft_model,
        shaft_weight: shaft_number(NESTED_WEIGHT, FLAT_WEIGHT),
        shaft_flex: shaft_text(NESTED_FLEX, FLAT_FLEX),
        shaft_kickpoint: shaft_text(NESTED_KICKPOINT, FLAT_KICKPOINT),
        shaft_torque: shaft_number(NESTED_TORQUE, FLAT_TORQUE),
        is_favorite: raw.flag(FAVORITE_KEYS).unwrap_or(false),
        status: raw.text(STATUS_KEYS),
    })
}

/// Serde adapter that reads a club in any accepted raw shape.
///
/// Use with `#[serde(deserialize_with = "deserialize_club")]` on fields that
/// hold user-supplied club records.
pub fn deserialize_club<'de, D>(deserializer: D) -> std::result::Result<Club, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    normalize_club(&value).ok_or_else(|| serde::de::Error::custom("club record must be an object"))
}
