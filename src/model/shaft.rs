//! Shaft flex and kickpoint decoding.
//!
//! Both attributes are typed by hand on spec sheets, so the same flex shows
//! up as "S", "Stiff" or "stiff flex". The decoders here map every spelling
//! onto a finite set with an explicit unknown bucket.

use serde::{Deserialize, Serialize};

/// Shaft flex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flex {
    ExtraStiff,
    Stiff,
    Regular,
    Senior,
    Ladies,
    /// A token outside the synonym table, kept uppercased
    Other(String),
    /// Empty or missing
    Unknown,
}

impl Flex {
    /// Decode a flex token.
    ///
    /// Tokens outside the synonym table are kept as their uppercased text,
    /// so "TX" and "tx" land in the same bucket.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Unknown;
        }
        match trimmed.to_lowercase().as_str() {
            "x" | "xs" | "extra stiff" | "extra-stiff" | "extrastiff" | "x-stiff" | "xstiff" => {
                Self::ExtraStiff
            }
            "s" | "stiff" => Self::Stiff,
            "r" | "regular" => Self::Regular,
            "a" | "senior" => Self::Senior,
            "l" | "ladies" => Self::Ladies,
            _ => Self::Other(trimmed.to_uppercase()),
        }
    }

    /// Bucket code used when counting flexes across a bag.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::ExtraStiff => Some("X"),
            Self::Stiff => Some("S"),
            Self::Regular => Some("R"),
            Self::Senior => Some("A"),
            Self::Ladies => Some("L"),
            Self::Other(code) => Some(code.as_str()),
            Self::Unknown => None,
        }
    }
}

/// Shaft kickpoint (bend point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kickpoint {
    Low,
    Mid,
    High,
    Unknown,
}

impl Kickpoint {
    /// Decode by substring, so "Low Launch", "mid-kick" and "HIGH" all work.
    #[must_use]
    pub fn decode(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("low") {
            Self::Low
        } else if lower.contains("mid") {
            Self::Mid
        } else if lower.contains("high") {
            Self::High
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Low => Some("low"),
            Self::Mid => Some("mid"),
            Self::High => Some("high"),
            Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_synonyms() {
        assert_eq!(Flex::decode("X"), Flex::ExtraStiff);
        assert_eq!(Flex::decode("xs"), Flex::ExtraStiff);
        assert_eq!(Flex::decode("Extra Stiff"), Flex::ExtraStiff);
        assert_eq!(Flex::decode("stiff"), Flex::Stiff);
        assert_eq!(Flex::decode(" R "), Flex::Regular);
        assert_eq!(Flex::decode("Senior"), Flex::Senior);
        assert_eq!(Flex::decode("ladies"), Flex::Ladies);
    }

    #[test]
    fn test_flex_fallback_buckets() {
        assert_eq!(Flex::decode("tx"), Flex::Other("TX".to_string()));
        assert_eq!(Flex::decode("tx").code(), Flex::decode("TX").code());
        assert_eq!(Flex::decode("   "), Flex::Unknown);
        assert_eq!(Flex::Unknown.code(), None);
    }

    #[test]
    fn test_kickpoint_substrings() {
        assert_eq!(Kickpoint::decode("Low"), Kickpoint::Low);
        assert_eq!(Kickpoint::decode("mid-kick"), Kickpoint::Mid);
        assert_eq!(Kickpoint::decode("HIGH launch"), Kickpoint::High);
        assert_eq!(Kickpoint::decode("counter-balanced"), Kickpoint::Unknown);
        assert_eq!(Kickpoint::Unknown.code(), None);
    }
}
