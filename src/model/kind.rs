//! Club type tokens and categories.
//!
//! Club types arrive as free-form text ("7-Iron", "3 Wood", "56°", "PW").
//! [`ClubKind::parse`] reduces them to a closed set of kinds, which both the
//! category inference and the bag sequencer key off.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Rank given to tokens the sequencer does not recognize.
pub const UNKNOWN_RANK: u32 = 1000;

static WOOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:w|wd|wood|fw|fwy|fairway|fairwaywood)$").expect("static regex")
});
static HYBRID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})(?:h|hy|hyb|hybrid|rescue|ut|utility)$").expect("static regex")
});
static IRON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})(?:i|ir|iron)?$").expect("static regex"));
/// Loft first: "56", "60deg", "52w", "56sandwedge"
static DEGREE_WEDGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<deg>\d{2})(?:degrees|degree|deg)?(?P<name>[a-z]*)$").expect("static regex")
});
/// Name first: "sw56", "lobwedge60"
static NAMED_DEGREE_WEDGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[a-z]+?)(?P<deg>\d{2})(?:degrees|degree|deg)?$").expect("static regex")
});

/// Lofts read as wedges rather than irons or woods.
const WEDGE_LOFTS: std::ops::RangeInclusive<u32> = 44..=64;

/// Broad club category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClubCategory {
    Woods,
    Hybrids,
    Irons,
    Wedges,
    Putter,
}

impl ClubCategory {
    /// Decode a category label, accepting singular/plural and common synonyms.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_token(raw).as_str() {
            "wood" | "woods" | "driver" | "drivers" | "fairway" | "fairways" => Some(Self::Woods),
            "hybrid" | "hybrids" | "rescue" | "utility" => Some(Self::Hybrids),
            "iron" | "irons" => Some(Self::Irons),
            "wedge" | "wedges" => Some(Self::Wedges),
            "putter" | "putters" => Some(Self::Putter),
            _ => None,
        }
    }

    /// Category label as used in bag documents
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Woods => "woods",
            Self::Hybrids => "hybrids",
            Self::Irons => "irons",
            Self::Wedges => "wedges",
            Self::Putter => "putter",
        }
    }
}

impl std::fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named wedges, in conventional loft order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WedgeName {
    Pitching,
    Gap,
    Sand,
    Lob,
    /// "Wedge" with no loft or name
    Generic,
}

impl WedgeName {
    /// Decode a normalized wedge name ("sw", "sandwedge", "sand").
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "pw" | "pitchingwedge" | "pitching" => Some(Self::Pitching),
            "gw" | "gapwedge" | "gap" | "aw" | "approachwedge" | "approach" | "uw" => {
                Some(Self::Gap)
            }
            "sw" | "sandwedge" | "sand" => Some(Self::Sand),
            "lw" | "lobwedge" | "lob" => Some(Self::Lob),
            "w" | "wedge" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// A club type reduced to something the sequencer can order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClubKind {
    Driver,
    Wood(u32),
    Hybrid(u32),
    Iron(u32),
    NamedWedge(WedgeName),
    /// Wedge identified by its loft in degrees
    DegreeWedge(u32),
    Putter,
    Unknown,
}

impl ClubKind {
    /// Parse a free-form club type.
    #[must_use]
    pub fn parse(club_type: &str) -> Self {
        let token = normalize_token(club_type);
        if token.is_empty() {
            return Self::Unknown;
        }

        match token.as_str() {
            "driver" | "dr" | "drv" | "1w" | "1wood" => return Self::Driver,
            "putter" | "pt" | "putt" => return Self::Putter,
            "p" => return Self::NamedWedge(WedgeName::Pitching),
            _ => {}
        }
        if let Some(name) = WedgeName::parse(&token) {
            return Self::NamedWedge(name);
        }

        // Degree wedges first so "52w" is a wedge, not a 52-wood
        if let Some(kind) = degree_wedge(&token) {
            return kind;
        }
        if let Some(n) = capture_number(&WOOD, &token) {
            return if n == 1 { Self::Driver } else { Self::Wood(n) };
        }
        if let Some(n) = capture_number(&HYBRID, &token) {
            return Self::Hybrid(n);
        }
        if let Some(n) = capture_number(&IRON, &token) {
            if (1..=11).contains(&n) {
                return Self::Iron(n);
            }
        }

        Self::Unknown
    }

    /// Position in canonical bag order; lower sorts first.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        match self {
            Self::Driver => 1,
            Self::Wood(n) => 100 + *n,
            Self::Hybrid(n) => 200 + *n,
            Self::Iron(n) => 300 + *n,
            Self::NamedWedge(WedgeName::Pitching) => 401,
            Self::NamedWedge(WedgeName::Gap) => 403,
            Self::NamedWedge(WedgeName::Generic) => 405,
            Self::NamedWedge(WedgeName::Sand) => 406,
            Self::NamedWedge(WedgeName::Lob) => 408,
            Self::DegreeWedge(deg) => 400 + deg.saturating_sub(44) / 2,
            Self::Putter => 900,
            Self::Unknown => UNKNOWN_RANK,
        }
    }

    /// Category implied by the kind, if any.
    #[must_use]
    pub const fn category(&self) -> Option<ClubCategory> {
        match self {
            Self::Driver | Self::Wood(_) => Some(ClubCategory::Woods),
            Self::Hybrid(_) => Some(ClubCategory::Hybrids),
            Self::Iron(_) => Some(ClubCategory::Irons),
            Self::NamedWedge(_) | Self::DegreeWedge(_) => Some(ClubCategory::Wedges),
            Self::Putter => Some(ClubCategory::Putter),
            Self::Unknown => None,
        }
    }
}

/// Lowercase and drop everything that is not a letter or digit.
///
/// `"7-Iron"` becomes `"7iron"`, `"56°"` becomes `"56"`.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A wedge given by loft, with or without a name on either side.
///
/// A named wedge with a loft outside the wedge range keeps its name; a bare
/// number or "w" outside the range is left for the wood and iron patterns.
fn degree_wedge(token: &str) -> Option<ClubKind> {
    let caps = DEGREE_WEDGE
        .captures(token)
        .or_else(|| NAMED_DEGREE_WEDGE.captures(token))?;
    let deg: u32 = caps.name("deg")?.as_str().parse().ok()?;
    let name = caps.name("name").map_or("", |m| m.as_str());
    let named = if name.is_empty() {
        None
    } else {
        Some(WedgeName::parse(name)?)
    };

    if WEDGE_LOFTS.contains(&deg) {
        return Some(ClubKind::DegreeWedge(deg));
    }
    match named {
        Some(WedgeName::Generic) | None => None,
        Some(name) => Some(ClubKind::NamedWedge(name)),
    }
}

fn capture_number(re: &Regex, token: &str) -> Option<u32> {
    re.captures(token)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("7-Iron"), "7iron");
        assert_eq!(normalize_token("56°"), "56");
        assert_eq!(normalize_token("  Pitching Wedge "), "pitchingwedge");
    }

    #[test]
    fn test_parse_named_kinds() {
        assert_eq!(ClubKind::parse("Driver"), ClubKind::Driver);
        assert_eq!(ClubKind::parse("1W"), ClubKind::Driver);
        assert_eq!(ClubKind::parse("Putter"), ClubKind::Putter);
        assert_eq!(ClubKind::parse("PW"), ClubKind::NamedWedge(WedgeName::Pitching));
        assert_eq!(ClubKind::parse("Sand Wedge"), ClubKind::NamedWedge(WedgeName::Sand));
        assert_eq!(ClubKind::parse("AW"), ClubKind::NamedWedge(WedgeName::Gap));
    }

    #[test]
    fn test_parse_numbered_kinds() {
        assert_eq!(ClubKind::parse("3 Wood"), ClubKind::Wood(3));
        assert_eq!(ClubKind::parse("5W"), ClubKind::Wood(5));
        assert_eq!(ClubKind::parse("4-Hybrid"), ClubKind::Hybrid(4));
        assert_eq!(ClubKind::parse("7-Iron"), ClubKind::Iron(7));
        assert_eq!(ClubKind::parse("9i"), ClubKind::Iron(9));
        assert_eq!(ClubKind::parse("6"), ClubKind::Iron(6));
    }

    #[test]
    fn test_parse_degree_wedges() {
        assert_eq!(ClubKind::parse("56°"), ClubKind::DegreeWedge(56));
        assert_eq!(ClubKind::parse("60 deg"), ClubKind::DegreeWedge(60));
        assert_eq!(ClubKind::parse("52W"), ClubKind::DegreeWedge(52));
        assert_eq!(ClubKind::parse("58 SW"), ClubKind::DegreeWedge(58));
        // Out of wedge range and not an iron number
        assert_eq!(ClubKind::parse("30"), ClubKind::Unknown);
    }

    #[test]
    fn test_parse_lofted_named_wedges() {
        assert_eq!(ClubKind::parse("56° Sand Wedge"), ClubKind::DegreeWedge(56));
        assert_eq!(ClubKind::parse("52° Gap Wedge"), ClubKind::DegreeWedge(52));
        assert_eq!(ClubKind::parse("60° Lob Wedge"), ClubKind::DegreeWedge(60));
        assert_eq!(ClubKind::parse("SW 56"), ClubKind::DegreeWedge(56));
        assert_eq!(ClubKind::parse("Lob Wedge 60"), ClubKind::DegreeWedge(60));
        assert_eq!(ClubKind::parse("50 degrees"), ClubKind::DegreeWedge(50));
        // Named wedge with an odd loft keeps its name
        assert_eq!(
            ClubKind::parse("Sand Wedge 66"),
            ClubKind::NamedWedge(WedgeName::Sand)
        );
        // Not wedge names
        assert_eq!(ClubKind::parse("15 Wood"), ClubKind::Wood(15));
        assert_eq!(ClubKind::parse("10W"), ClubKind::Wood(10));
    }

    #[test]
    fn test_rank_bands_do_not_overlap() {
        let fifteen_wood = ClubKind::parse("15 Wood").rank();
        let one_hybrid = ClubKind::parse("1H").rank();
        let four_hybrid = ClubKind::parse("4H").rank();
        let long_iron = ClubKind::parse("2-Iron").rank();
        assert!(fifteen_wood < one_hybrid);
        assert!(fifteen_wood < four_hybrid);
        assert!(ClubKind::parse("11 Wood").rank() != one_hybrid);
        assert!(ClubKind::parse("9 Hybrid").rank() < long_iron);
        assert!(ClubKind::parse("11 Iron").rank() < ClubKind::parse("PW").rank());
        assert!(ClubKind::parse("64°").rank() < ClubKind::parse("Putter").rank());
    }

    #[test]
    fn test_wedges_interleave_by_loft() {
        let pw = ClubKind::parse("PW").rank();
        let gap = ClubKind::parse("50°").rank();
        let sw = ClubKind::parse("SW").rank();
        let lob = ClubKind::parse("60°").rank();
        assert_eq!(ClubKind::parse("46°").rank(), pw);
        assert_eq!(ClubKind::parse("GW").rank(), gap);
        assert_eq!(ClubKind::parse("56°").rank(), sw);
        assert_eq!(ClubKind::parse("LW").rank(), lob);
        assert!(pw < gap && gap < sw && sw < lob);
    }

    #[test]
    fn test_unknown_ranks_last() {
        assert_eq!(ClubKind::parse("Chipper").rank(), UNKNOWN_RANK);
        assert_eq!(ClubKind::parse("").rank(), UNKNOWN_RANK);
        assert!(ClubKind::parse("Putter").rank() < UNKNOWN_RANK);
    }

    #[test]
    fn test_category_inference_and_labels() {
        assert_eq!(ClubKind::parse("Driver").category(), Some(ClubCategory::Woods));
        assert_eq!(ClubKind::parse("3H").category(), Some(ClubCategory::Hybrids));
        assert_eq!(ClubKind::parse("56°").category(), Some(ClubCategory::Wedges));
        assert_eq!(ClubKind::parse("Chipper").category(), None);

        assert_eq!(ClubCategory::parse("Irons"), Some(ClubCategory::Irons));
        assert_eq!(ClubCategory::parse("wedge"), Some(ClubCategory::Wedges));
        assert_eq!(ClubCategory::parse("misc"), None);
    }
}
