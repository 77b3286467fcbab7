//! Canonical club representation.
//!
//! Every raw club record, whatever its key spellings or shaft layout, is
//! normalized into a [`Club`] before any scoring happens. Nothing outside
//! [`crate::normalize`] ever looks at the raw shape.

mod club;
mod kind;
mod shaft;

pub use club::{fingerprint, Bag, Club};
pub use kind::{normalize_token, ClubCategory, ClubKind, WedgeName, UNKNOWN_RANK};
pub use shaft::{Flex, Kickpoint};
