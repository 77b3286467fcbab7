//! The eight fit factor calculators.
//!
//! Each calculator is a pure function over a bag and returns a
//! [`FactorResult`]. Below its minimum sample size a calculator returns the
//! neutral result instead of guessing; that keeps every division guarded.
//!
//! Progression factors compare neighbours in bag order. Loft gapping compares
//! neighbours in loft order instead, since a mis-labelled club should still be
//! judged by where its loft actually falls.

use super::factor::{FactorKind, FactorResult};
use super::scorer::GradingContext;
use crate::model::{Club, Flex, Kickpoint};
use crate::sequence::bag_rank;
use indexmap::IndexMap;

/// Run one factor calculator.
#[must_use]
pub fn evaluate(kind: FactorKind, clubs: &[Club], context: &GradingContext) -> FactorResult {
    match kind {
        FactorKind::Age => age(clubs, context.current_year),
        FactorKind::WeightProgression => weight_progression(clubs),
        FactorKind::LoftGapping => loft_gapping(clubs),
        FactorKind::FlexConsistency => flex_consistency(clubs),
        FactorKind::KickpointConsistency => kickpoint_consistency(clubs),
        FactorKind::TorqueConsistency => torque_consistency(clubs),
        FactorKind::LengthProgression => length_progression(clubs),
        FactorKind::LieAngleProgression => lie_angle_progression(clubs),
    }
}

/// Age of each dated club, averaged.
///
/// A club scores `max(50, 100 - 5 * age)`. Clubs without a year are left out
/// of the average. A future model year gives a negative age and a per-club
/// score above 100; only the averaged factor score is clamped.
#[must_use]
pub fn age(clubs: &[Club], current_year: i32) -> FactorResult {
    let dated: Vec<(&Club, i32)> = clubs
        .iter()
        .filter_map(|c| c.year.map(|y| (c, y)))
        .collect();
    if dated.len() < FactorKind::Age.min_samples() {
        return FactorResult::unscorable();
    }

    let mut issues = Vec::new();
    let mut total = 0.0;
    for (club, year) in &dated {
        let age = current_year.saturating_sub(*year);
        total += (100.0 - 5.0 * f64::from(age)).max(50.0);
        if age > 7 {
            issues.push(format!(
                "{} is {} years old ({}); consider updating",
                club.label(),
                age,
                year
            ));
        }
    }

    FactorResult::scored(total / dated.len() as f64, issues)
}

/// Shaft weight should fall steadily from the driver toward the wedges.
///
/// A club more than 5g lighter than the one before it costs twice the
/// difference. A step heavier by more than 25g costs the excess over 15g.
#[must_use]
pub fn weight_progression(clubs: &[Club]) -> FactorResult {
    let weighed = in_bag_order(clubs, |c| positive(c.shaft_weight));
    if weighed.len() < FactorKind::WeightProgression.min_samples() {
        return FactorResult::unscorable();
    }

    let mut penalty = 0.0;
    let mut issues = Vec::new();
    for pair in weighed.windows(2) {
        let (prev, prev_w) = pair[0];
        let (curr, curr_w) = pair[1];
        let gap = curr_w - prev_w;
        if gap < -5.0 {
            penalty += gap.abs() * 2.0;
            issues.push(format!(
                "{} shaft ({}g) is {}g lighter than {} ({}g)",
                curr.label(),
                num(curr_w),
                num(gap.abs()),
                prev.label(),
                num(prev_w)
            ));
        } else if gap > 25.0 {
            penalty += gap - 15.0;
            issues.push(format!(
                "Shaft weight jumps {}g from {} to {}",
                num(gap),
                prev.label(),
                curr.label()
            ));
        }
    }

    FactorResult::scored(100.0 - penalty, issues)
}

/// Loft gaps between neighbouring lofts, sorted by loft.
///
/// Gaps under 2° cost 2 points each. Gaps over 6° cost `(gap - 4) * 3`.
#[must_use]
pub fn loft_gapping(clubs: &[Club]) -> FactorResult {
    let mut lofted: Vec<(&Club, f64)> = clubs
        .iter()
        .filter_map(|c| positive(c.loft).map(|l| (c, l)))
        .collect();
    if lofted.len() < FactorKind::LoftGapping.min_samples() {
        return FactorResult::unscorable();
    }
    lofted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut penalty = 0.0;
    let mut issues = Vec::new();
    for pair in lofted.windows(2) {
        let (low, low_loft) = pair[0];
        let (high, high_loft) = pair[1];
        let gap = high_loft - low_loft;
        if gap < 2.0 {
            penalty += 2.0;
            issues.push(format!(
                "{} ({}°) and {} ({}°) are only {}° apart",
                low.label(),
                num(low_loft),
                high.label(),
                num(high_loft),
                num(gap)
            ));
        } else if gap > 6.0 {
            penalty += (gap - 4.0) * 3.0;
            issues.push(format!(
                "{}° loft gap between {} ({}°) and {} ({}°)",
                num(gap),
                low.label(),
                num(low_loft),
                high.label(),
                num(high_loft)
            ));
        }
    }

    FactorResult::scored(100.0 - penalty, issues)
}

/// Shared flex across the bag.
///
/// One flex bucket scores 100. Otherwise every club outside the most common
/// bucket costs 15 points.
#[must_use]
pub fn flex_consistency(clubs: &[Club]) -> FactorResult {
    let decoded: Vec<(&Club, String)> = clubs
        .iter()
        .filter_map(|c| match c.flex() {
            Flex::Unknown => None,
            flex => flex.code().map(|code| (c, code.to_string())),
        })
        .collect();
    if decoded.len() < FactorKind::FlexConsistency.min_samples() {
        return FactorResult::unscorable();
    }

    let buckets = bucket_counts(decoded.iter().map(|(_, code)| code.as_str()));
    if buckets.len() == 1 {
        return FactorResult::scored(100.0, Vec::new());
    }

    let (majority, max_count) = majority(&buckets);
    let penalty = (decoded.len() - max_count) as f64 * 15.0;
    let mut issues = vec![format!("Mixed shaft flexes in bag: {}", describe(&buckets))];
    issues.extend(
        decoded
            .iter()
            .filter(|(_, code)| code.as_str() != majority)
            .map(|(club, code)| {
                format!("{} has {} flex while most clubs are {}", club.label(), code, majority)
            }),
    );

    FactorResult::scored(100.0 - penalty, issues)
}

/// Shared kickpoint across the bag.
///
/// One kickpoint bucket scores 100. Each extra bucket costs 20 points.
#[must_use]
pub fn kickpoint_consistency(clubs: &[Club]) -> FactorResult {
    let decoded: Vec<(&Club, &'static str)> = clubs
        .iter()
        .filter_map(|c| match c.kickpoint() {
            Kickpoint::Unknown => None,
            kp => kp.code().map(|code| (c, code)),
        })
        .collect();
    if decoded.len() < FactorKind::KickpointConsistency.min_samples() {
        return FactorResult::unscorable();
    }

    let buckets = bucket_counts(decoded.iter().map(|(_, code)| *code));
    if buckets.len() == 1 {
        return FactorResult::scored(100.0, Vec::new());
    }

    let penalty = (buckets.len() - 1) as f64 * 20.0;
    let (majority, _) = majority(&buckets);
    let outliers: Vec<&str> = decoded
        .iter()
        .filter(|(_, code)| *code != majority)
        .map(|(club, _)| club.label())
        .collect();
    let issues = vec![format!(
        "Mixed kickpoints in bag: {}; {} differ from the {} kickpoint used elsewhere",
        describe(&buckets),
        outliers.join(", "),
        majority
    )];

    FactorResult::scored(100.0 - penalty, issues)
}

/// Spread of shaft torque, as a population standard deviation.
///
/// Scores `100 - stdev * 10`; a spread over 1° is reported.
#[must_use]
pub fn torque_consistency(clubs: &[Club]) -> FactorResult {
    let torqued: Vec<(&Club, f64)> = clubs
        .iter()
        .filter_map(|c| positive(c.shaft_torque).map(|t| (c, t)))
        .collect();
    if torqued.len() < FactorKind::TorqueConsistency.min_samples() {
        return FactorResult::unscorable();
    }

    let n = torqued.len() as f64;
    let mean = torqued.iter().map(|(_, t)| t).sum::<f64>() / n;
    let variance = torqued.iter().map(|(_, t)| (t - mean).powi(2)).sum::<f64>() / n;
    let stdev = variance.sqrt();

    let mut issues = Vec::new();
    if stdev > 1.0 {
        let lowest = torqued.iter().min_by(|a, b| a.1.total_cmp(&b.1));
        let highest = torqued.iter().max_by(|a, b| a.1.total_cmp(&b.1));
        if let (Some((lo, lo_t)), Some((hi, hi_t))) = (lowest, highest) {
            issues.push(format!(
                "Shaft torque is inconsistent (std dev {:.1}°): {} at {}° vs {} at {}°",
                stdev,
                lo.label(),
                num(*lo_t),
                hi.label(),
                num(*hi_t)
            ));
        }
    }

    FactorResult::scored(100.0 - stdev * 10.0, issues)
}

/// Club length should shorten from the driver toward the wedges.
///
/// A club more than 0.5" longer than the one before it costs 15 points per
/// inch. A drop larger than 1.5" costs `(drop - 0.5) * 5`.
#[must_use]
pub fn length_progression(clubs: &[Club]) -> FactorResult {
    let measured = in_bag_order(clubs, |c| positive(c.length));
    if measured.len() < FactorKind::LengthProgression.min_samples() {
        return FactorResult::unscorable();
    }

    let mut penalty = 0.0;
    let mut issues = Vec::new();
    for pair in measured.windows(2) {
        let (prev, prev_len) = pair[0];
        let (curr, curr_len) = pair[1];
        let diff = prev_len - curr_len;
        if diff < -0.5 {
            penalty += diff.abs() * 15.0;
            issues.push(format!(
                "{} ({}\") is {}\" longer than {} ({}\")",
                curr.label(),
                num(curr_len),
                num(diff.abs()),
                prev.label(),
                num(prev_len)
            ));
        } else if diff > 1.5 {
            penalty += (diff - 0.5) * 5.0;
            issues.push(format!(
                "Length drops {}\" from {} to {}",
                num(diff),
                prev.label(),
                curr.label()
            ));
        }
    }

    FactorResult::scored(100.0 - penalty, issues)
}

/// Lie angle should get more upright from the driver toward the wedges.
///
/// A club more than 1° flatter than the one before it costs 5 points per
/// degree.
#[must_use]
pub fn lie_angle_progression(clubs: &[Club]) -> FactorResult {
    let measured = in_bag_order(clubs, |c| positive(c.lie));
    if measured.len() < FactorKind::LieAngleProgression.min_samples() {
        return FactorResult::unscorable();
    }

    let mut penalty = 0.0;
    let mut issues = Vec::new();
    for pair in measured.windows(2) {
        let (prev, prev_lie) = pair[0];
        let (curr, curr_lie) = pair[1];
        let diff = curr_lie - prev_lie;
        if diff < -1.0 {
            penalty += diff.abs() * 5.0;
            issues.push(format!(
                "{} lie ({}°) is {}° flatter than {} ({}°)",
                curr.label(),
                num(curr_lie),
                num(diff.abs()),
                prev.label(),
                num(prev_lie)
            ));
        }
    }

    FactorResult::scored(100.0 - penalty, issues)
}

/// Clubs carrying an attribute, stably ordered by bag position.
fn in_bag_order(clubs: &[Club], attr: impl Fn(&Club) -> Option<f64>) -> Vec<(&Club, f64)> {
    let mut present: Vec<(&Club, f64)> = clubs
        .iter()
        .filter_map(|c| attr(c).map(|v| (c, v)))
        .collect();
    present.sort_by_key(|(club, _)| bag_rank(club));
    present
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Count codes, keeping first-seen order so ties break predictably.
fn bucket_counts<'a>(codes: impl Iterator<Item = &'a str>) -> IndexMap<&'a str, usize> {
    let mut buckets = IndexMap::new();
    for code in codes {
        *buckets.entry(code).or_insert(0) += 1;
    }
    buckets
}

fn majority<'a>(buckets: &IndexMap<&'a str, usize>) -> (&'a str, usize) {
    buckets
        .iter()
        .fold(("", 0), |best, (code, count)| {
            if *count > best.1 {
                (*code, *count)
            } else {
                best
            }
        })
}

fn describe(buckets: &IndexMap<&str, usize>) -> String {
    buckets
        .iter()
        .map(|(code, count)| format!("{code} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a measurement with at most one decimal.
fn num(value: f64) -> String {
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map_or(text.clone(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    fn club(club_type: &str) -> Club {
        Club::new(club_type)
    }

    fn weighted(club_type: &str, grams: f64) -> Club {
        Club {
            shaft_weight: Some(grams),
            ..club(club_type)
        }
    }

    fn lofted(club_type: &str, loft: f64) -> Club {
        Club {
            loft: Some(loft),
            ..club(club_type)
        }
    }

    fn flexed(club_type: &str, flex: &str) -> Club {
        Club {
            shaft_flex: Some(flex.to_string()),
            ..club(club_type)
        }
    }

    #[test]
    fn test_age_recent_club() {
        let bag = vec![Club {
            year: Some(YEAR - 3),
            ..club("Driver")
        }];
        let result = age(&bag, YEAR);
        assert_eq!(result.score, 85);
        assert!(result.issues.is_empty());
        assert!(result.scorable);
    }

    #[test]
    fn test_age_old_club_floors_at_50() {
        let bag = vec![Club {
            year: Some(YEAR - 10),
            ..club("7-Iron")
        }];
        let result = age(&bag, YEAR);
        assert_eq!(result.score, 50);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("7-Iron"));

        let ancient = vec![Club {
            year: Some(1950),
            ..club("Putter")
        }];
        assert_eq!(age(&ancient, YEAR).score, 50);
    }

    #[test]
    fn test_age_skips_undated_and_future() {
        let bag = vec![
            Club {
                year: Some(YEAR + 1),
                ..club("Driver")
            },
            club("PW"),
        ];
        // 105 before the clamp
        assert_eq!(age(&bag, YEAR).score, 100);
        assert!(!age(&[club("PW")], YEAR).scorable);
    }

    #[test]
    fn test_age_future_year_lifts_the_average() {
        let bag = vec![
            Club {
                year: Some(YEAR + 1),
                ..club("Driver")
            },
            Club {
                year: Some(YEAR - 10),
                ..club("3 Wood")
            },
        ];
        // (105 + 50) / 2 = 77.5
        let result = age(&bag, YEAR);
        assert_eq!(result.score, 78);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("3 Wood"));
    }

    #[test]
    fn test_weight_lighter_toward_wedges_penalized() {
        let bag = vec![weighted("5-Iron", 70.0), weighted("6-Iron", 60.0)];
        let result = weight_progression(&bag);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("6-Iron"));
        assert!(result.issues[0].contains("5-Iron"));
    }

    #[test]
    fn test_weight_large_jump_penalized() {
        let bag = vec![weighted("3 Wood", 70.0), weighted("4-Iron", 110.0)];
        // gap 40 -> penalty 25
        assert_eq!(weight_progression(&bag).score, 75);
    }

    #[test]
    fn test_weight_uses_bag_order() {
        let bag = vec![weighted("PW", 120.0), weighted("Driver", 60.0)];
        let result = weight_progression(&bag);
        // Driver 60 -> PW 120 is a 60g jump, not a drop
        assert_eq!(result.score, 55);
    }

    #[test]
    fn test_weight_needs_two_samples() {
        let bag = vec![weighted("Driver", 60.0), weighted("3 Wood", 0.0), club("PW")];
        assert_eq!(weight_progression(&bag), FactorResult::unscorable());
    }

    #[test]
    fn test_loft_wide_gap() {
        let bag = vec![lofted("Driver", 10.0), lofted("3 Wood", 20.0)];
        let result = loft_gapping(&bag);
        assert_eq!(result.score, 82);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_loft_tight_gap_and_sorting() {
        let bag = vec![
            lofted("PW", 46.0),
            lofted("Mystery", 45.0),
            lofted("9-Iron", 41.0),
        ];
        // Sorted 41, 45, 46: gaps 4 (fine) and 1 (tight)
        let result = loft_gapping(&bag);
        assert_eq!(result.score, 98);
        assert!(result.issues[0].contains("Mystery"));
    }

    #[test]
    fn test_flex_single_bucket() {
        let bag = vec![flexed("Driver", "Stiff"), flexed("7-Iron", "S")];
        assert_eq!(flex_consistency(&bag).score, 100);
    }

    #[test]
    fn test_flex_mixed_buckets() {
        let bag = vec![
            flexed("Driver", "X"),
            flexed("3 Wood", "S"),
            flexed("7-Iron", "stiff"),
            flexed("PW", "R"),
        ];
        // total 4, majority S with 2 -> penalty 30
        let result = flex_consistency(&bag);
        assert_eq!(result.score, 70);
        assert!(result.issues.iter().any(|i| i.contains("Driver")));
        assert!(result.issues.iter().any(|i| i.contains("PW")));
        assert!(!result.issues.iter().any(|i| i.starts_with("7-Iron")));
    }

    #[test]
    fn test_flex_ignores_blank() {
        let bag = vec![flexed("Driver", " "), flexed("PW", "R")];
        assert!(!flex_consistency(&bag).scorable);
    }

    #[test]
    fn test_kickpoint_buckets() {
        let kicked = |t: &str, kp: &str| Club {
            shaft_kickpoint: Some(kp.to_string()),
            ..club(t)
        };
        let same = vec![kicked("Driver", "Mid"), kicked("PW", "mid-kick")];
        assert_eq!(kickpoint_consistency(&same).score, 100);

        let mixed = vec![
            kicked("Driver", "Low"),
            kicked("5-Iron", "Mid"),
            kicked("6-Iron", "mid"),
            kicked("PW", "HIGH"),
        ];
        let result = kickpoint_consistency(&mixed);
        assert_eq!(result.score, 60);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("Driver"));
    }

    #[test]
    fn test_torque_spread() {
        let torqued = |t: &str, v: f64| Club {
            shaft_torque: Some(v),
            ..club(t)
        };
        let tight = vec![torqued("Driver", 3.0), torqued("3 Wood", 3.0)];
        assert_eq!(torque_consistency(&tight).score, 100);

        // mean 3, stdev 2
        let wide = vec![torqued("Driver", 5.0), torqued("7-Iron", 1.0)];
        let result = torque_consistency(&wide);
        assert_eq!(result.score, 80);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_length_wrong_direction() {
        let measured = |t: &str, v: f64| Club {
            length: Some(v),
            ..club(t)
        };
        let bag = vec![measured("7-Iron", 37.0), measured("8-Iron", 38.0)];
        // diff -1 -> 15
        assert_eq!(length_progression(&bag).score, 85);

        let drop = vec![measured("Driver", 45.5), measured("3 Wood", 43.0)];
        // diff 2.5 -> (2.5 - 0.5) * 5 = 10
        assert_eq!(length_progression(&drop).score, 90);

        let normal = vec![measured("7-Iron", 37.0), measured("8-Iron", 36.5)];
        assert_eq!(length_progression(&normal).score, 100);
    }

    #[test]
    fn test_lie_flatter_toward_wedges() {
        let lied = |t: &str, v: f64| Club {
            lie: Some(v),
            ..club(t)
        };
        let bag = vec![lied("7-Iron", 63.0), lied("8-Iron", 61.0)];
        assert_eq!(lie_angle_progression(&bag).score, 90);

        let upright = vec![lied("7-Iron", 62.5), lied("8-Iron", 63.0)];
        assert_eq!(lie_angle_progression(&upright).score, 100);
    }

    #[test]
    fn test_scores_clamped_at_zero() {
        let bag: Vec<Club> = (3..=9)
            .map(|n| weighted(&format!("{n}-Iron"), 130.0 - f64::from(n) * 12.0))
            .collect();
        assert_eq!(weight_progression(&bag).score, 0);
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(2.24), "2.2");
        assert_eq!(num(0.30000000000000004), "0.3");
    }
}
