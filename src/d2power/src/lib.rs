//! # d2power
//!
//! Destiny 2 power engine - item joining, slot selection, and power
//! aggregation.
//!
//! This library provides functionality to:
//! - Join profile inventory entries with manifest definitions and instance data
//! - Pick the highest-power item per equipment slot for each character
//! - Repair picks that combine more than one exotic weapon or armor piece
//! - Compute overall, minimum, and potential power, per character and account-wide
//! - Track unfinished deepsight weapons and drive a refresh loop
//!
//! ## Example
//!
//! ```no_run
//! use std::fs;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manifest = d2power::Manifest::from_json(&fs::read_to_string("manifest.json")?)?;
//! let profile = d2power::ProfileData::from_json(&fs::read_to_string("profile.json")?)?;
//!
//! let data = d2power::compute_character_data(&manifest, &profile)?;
//! for (id, character) in &data.characters {
//!     println!("{}: {}", id, character.result.power.overall_power);
//! }
//! # Ok(())
//! # }
//! ```

pub mod compute;
pub mod deepsight;
pub mod items;
pub mod manifest;
pub mod power;
pub mod profile;
pub mod reference;
pub mod select;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(test)]
mod testing;

// Re-export commonly used items
#[doc(inline)]
pub use compute::{
    compute_character_data, compute_with_caps, CharacterPowerResult, ComputeError, ComputedData,
    GlobalResult, SlotPowerResult,
};
#[doc(inline)]
pub use deepsight::{deepsight_items, DeepsightEntry, PatternProgress};
#[doc(inline)]
pub use items::{join_item, join_profile_items, score_item, JoinedItem, ScoredItem};
#[doc(inline)]
pub use manifest::{ItemDefinition, Manifest, RecordDefinition};
#[doc(inline)]
pub use power::{potential_power, summarize, DropTier, PowerBySlot, PowerCaps, PowerSummary};
#[doc(inline)]
pub use profile::{Character, ItemState, ProfileData, RawItem};
#[doc(inline)]
pub use select::{resolve_conflicts, select, Selection, SlotCandidates, SlotPicks};
#[doc(inline)]
pub use session::{
    LockCandidate, NoopObserver, RefreshObserver, RefreshOutcome, RefreshSession, RefreshTicket,
};

// Reference data (slots, buckets, classes, locations)
#[doc(inline)]
pub use reference::{slot_by_bucket, ClassType, ItemLocation, Slot, SLOT_BUCKETS};
