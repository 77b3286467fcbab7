//! Virtual bag construction.
//!
//! The simulator is a total transform: it never fails and never touches the
//! baseline. Changes whose id matches nothing are skipped; rejecting them is
//! the job of [`super::validate_changes`].

use super::change::{ScenarioChange, ScenarioSwap};
use crate::model::{Club, ClubKind};

/// Prefix for ids generated for added clubs
pub const ADDED_ID_PREFIX: &str = "scenario-add-";

/// Apply changes to a baseline bag and return the virtual bag.
///
/// Replacements and removals are matched by id against the baseline. When
/// several changes target the same id, the last one wins. Additions are
/// appended in order.
#[must_use]
pub fn simulate(baseline: &[Club], changes: &[ScenarioChange]) -> Vec<Club> {
    let mut virtual_bag: Vec<Club> = baseline
        .iter()
        .filter_map(|club| match last_change_for(club, changes) {
            Some(ScenarioChange::Remove { .. }) => {
                tracing::debug!("Scenario removes {}", club.label());
                None
            }
            Some(ScenarioChange::Replace(swap)) => Some(merge_replacement(club, swap)),
            _ => Some(club.clone()),
        })
        .collect();

    let mut added = 0usize;
    for change in changes {
        if let ScenarioChange::Add { club } = change {
            added += 1;
            let mut club = club.clone();
            if club.id.is_none() {
                club.id = Some(format!("{ADDED_ID_PREFIX}{added}"));
            }
            if club.category.is_none() {
                club.category = club.kind().category();
            }
            tracing::debug!("Scenario adds {}", club.label());
            virtual_bag.push(club);
        }
    }

    virtual_bag
}

fn last_change_for<'a>(club: &Club, changes: &'a [ScenarioChange]) -> Option<&'a ScenarioChange> {
    let id = club.id.as_deref()?;
    changes.iter().rev().find(|c| c.target_id() == Some(id))
}

/// Merge a replacement onto the club it replaces.
///
/// The original id and club type survive unless the replacement sets them.
/// Every other field comes from the replacement, so a field it leaves out
/// ends up empty.
#[must_use]
pub fn merge_replacement(original: &Club, swap: &ScenarioSwap) -> Club {
    let mut merged = swap.replacement.clone();
    if merged.id.is_none() {
        merged.id.clone_from(&original.id);
    }
    if merged.club_type.trim().is_empty() {
        merged.club_type.clone_from(&original.club_type);
    }
    if merged.category.is_none() {
        merged.category = ClubKind::parse(&merged.club_type)
            .category()
            .or(original.category);
    }
    tracing::debug!(
        "Scenario replaces {} ({})",
        original.label(),
        swap.club_id
    );
    merged
}
