//! Slot selection
//!
//! Picks the best item per slot from a set of scored candidates, then
//! repairs the picks so unique-equip items are not combined.

mod conflicts;
mod top_items;

pub use conflicts::{resolve_conflicts, Resolution};
pub use top_items::{total_score, SlotCandidates, SlotPicks};

/// Result of one selection pass
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Best equippable combination
    pub top_items: SlotPicks,
    /// Best item per slot with any number of exotics
    pub unrestricted_top_items: SlotPicks,
    /// Equip labels the repair could not fix
    pub unresolved_conflicts: Vec<String>,
}

/// Run top-item selection and conflict repair over a candidate set
pub fn select(candidates: &SlotCandidates) -> Selection {
    let unrestricted_top_items = candidates.top_items();
    let Resolution { picks, unresolved } = resolve_conflicts(&unrestricted_top_items, candidates);
    Selection {
        top_items: picks,
        unrestricted_top_items,
        unresolved_conflicts: unresolved,
    }
}
