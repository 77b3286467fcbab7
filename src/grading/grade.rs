//! Letter grades.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Letter grade for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterGrade {
    APlus,
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
}

impl LetterGrade {
    /// Every grade, best first
    pub const ALL: [Self; 12] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::F,
    ];

    /// Grade a score using fixed cutoffs. Scores above 100 grade as A+.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            97..=u32::MAX => Self::APlus,
            93..=96 => Self::A,
            90..=92 => Self::AMinus,
            87..=89 => Self::BPlus,
            83..=86 => Self::B,
            80..=82 => Self::BMinus,
            77..=79 => Self::CPlus,
            73..=76 => Self::C,
            70..=72 => Self::CMinus,
            67..=69 => Self::DPlus,
            65..=66 => Self::D,
            _ => Self::F,
        }
    }

    #[must_use]
    pub const fn letter(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

impl std::str::FromStr for LetterGrade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.letter().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown grade: {s}"))
    }
}

impl Serialize for LetterGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.letter())
    }
}

impl<'de> Deserialize<'de> for LetterGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Letter for a score, as a string.
#[must_use]
pub const fn score_to_grade(score: u32) -> &'static str {
    LetterGrade::from_score(score).letter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(score_to_grade(100), "A+");
        assert_eq!(score_to_grade(97), "A+");
        assert_eq!(score_to_grade(96), "A");
        assert_eq!(score_to_grade(93), "A");
        assert_eq!(score_to_grade(92), "A-");
        assert_eq!(score_to_grade(83), "B");
        assert_eq!(score_to_grade(80), "B-");
        assert_eq!(score_to_grade(65), "D");
        assert_eq!(score_to_grade(64), "F");
        assert_eq!(score_to_grade(59), "F");
        assert_eq!(score_to_grade(0), "F");
    }

    #[test]
    fn test_monotonic() {
        for score in 1..=100 {
            assert!(LetterGrade::from_score(score) <= LetterGrade::from_score(score - 1));
        }
    }

    #[test]
    fn test_serde_as_letter() {
        let json = serde_json::to_string(&LetterGrade::BMinus).unwrap();
        assert_eq!(json, "\"B-\"");
        let back: LetterGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LetterGrade::BMinus);
        assert!(serde_json::from_str::<LetterGrade>("\"E\"").is_err());
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("a+".parse::<LetterGrade>(), Ok(LetterGrade::APlus));
        assert_eq!(" c- ".parse::<LetterGrade>(), Ok(LetterGrade::CMinus));
    }
}
