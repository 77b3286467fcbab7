//! Canonical bag ordering.
//!
//! Progression factors (shaft weight, length, lie) compare neighbours, so
//! they need clubs in the order they sit in the bag: driver, fairway woods,
//! hybrids, irons, wedges by loft, putter. Clubs the parser does not
//! recognize sort after the putter and keep their input order.

use crate::model::Club;

/// Bag position of a club; lower sorts first.
#[must_use]
pub fn bag_rank(club: &Club) -> u32 {
    club.kind().rank()
}

/// Return the clubs in canonical bag order.
///
/// The sort is stable, so clubs with the same rank keep their relative input
/// order. The input is not modified.
#[must_use]
pub fn sequence_bag(clubs: &[Club]) -> Vec<Club> {
    let mut ranked: Vec<(u32, &Club)> = clubs.iter().map(|c| (bag_rank(c), c)).collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, club)| club.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN_RANK;

    fn types(clubs: &[Club]) -> Vec<&str> {
        clubs.iter().map(|c| c.club_type.as_str()).collect()
    }

    #[test]
    fn test_full_bag_order() {
        let shuffled: Vec<Club> = [
            "Putter", "56°", "PW", "7-Iron", "Driver", "4H", "3 Wood", "9i", "GW", "60 deg",
        ]
        .into_iter()
        .map(Club::new)
        .collect();

        let ordered = sequence_bag(&shuffled);
        assert_eq!(
            types(&ordered),
            vec!["Driver", "3 Wood", "4H", "7-Iron", "9i", "PW", "GW", "56°", "60 deg", "Putter"]
        );
    }

    #[test]
    fn test_unknown_clubs_last_and_stable() {
        let clubs: Vec<Club> = ["Chipper", "Putter", "Mystery", "Driver"]
            .into_iter()
            .map(Club::new)
            .collect();

        let ordered = sequence_bag(&clubs);
        assert_eq!(types(&ordered), vec!["Driver", "Putter", "Chipper", "Mystery"]);
        assert_eq!(bag_rank(&ordered[3]), UNKNOWN_RANK);
    }

    #[test]
    fn test_lofted_wedge_names_interleave() {
        let shuffled: Vec<Club> = [
            "Putter",
            "Lob Wedge 60",
            "56° Sand Wedge",
            "PW",
            "SW 54",
            "52° Gap Wedge",
            "9-Iron",
        ]
        .into_iter()
        .map(Club::new)
        .collect();

        let ordered = sequence_bag(&shuffled);
        assert_eq!(
            types(&ordered),
            vec![
                "9-Iron",
                "PW",
                "52° Gap Wedge",
                "SW 54",
                "56° Sand Wedge",
                "Lob Wedge 60",
                "Putter"
            ]
        );
    }

    #[test]
    fn test_long_fairway_before_hybrids() {
        let clubs: Vec<Club> = ["4H", "15 Wood", "1H", "11 Wood"]
            .into_iter()
            .map(Club::new)
            .collect();
        let ordered = sequence_bag(&clubs);
        assert_eq!(types(&ordered), vec!["11 Wood", "15 Wood", "1H", "4H"]);
    }

    #[test]
    fn test_input_untouched() {
        let clubs = vec![Club::new("PW"), Club::new("Driver")];
        let before = clubs.clone();
        let _ = sequence_bag(&clubs);
        assert_eq!(clubs, before);
    }

    #[test]
    fn test_empty_bag() {
        assert!(sequence_bag(&[]).is_empty());
    }
}
