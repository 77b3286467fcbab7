//! Key-spelling tolerant access to a raw club record.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-+]?\d+(?:\.\d+)?|[-+]?\.\d+)").expect("static regex"));

/// Borrowed view over one JSON object, reading values by any of several keys.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawRecord<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    pub(crate) const fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// First non-null value among `keys`.
    fn first(&self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find(|value| !value.is_null())
    }

    /// Nested object under any of `keys`.
    pub(crate) fn nested(&self, keys: &[&str]) -> Option<RawRecord<'a>> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find_map(Value::as_object)
            .map(RawRecord::new)
    }

    /// Non-empty text. Numbers are accepted and rendered as text.
    pub(crate) fn text(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find_map(|value| match value {
                Value::String(s) => {
                    let trimmed = s.trim();
                    (!trimmed.is_empty()).then(|| trimmed.to_string())
                }
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }

    /// Finite number. Strings like `"46.5"` or `"10.5°"` are read by their
    /// leading numeric part; anything else is treated as missing.
    pub(crate) fn number(&self, keys: &[&str]) -> Option<f64> {
        keys.iter()
            .filter_map(|key| self.map.get(*key))
            .find_map(value_as_number)
    }

    /// Whole number, rounded from whatever numeric form was supplied.
    pub(crate) fn integer(&self, keys: &[&str]) -> Option<i32> {
        self.number(keys)
            .filter(|n| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(n))
            .map(|n| n.round() as i32)
    }

    pub(crate) fn flag(&self, keys: &[&str]) -> Option<bool> {
        match self.first(keys)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|v| v != 0.0),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Some(true),
                "false" | "no" | "n" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

fn value_as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => LEADING_NUMBER
            .captures(s)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok())?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
