//! Unique-equip conflict resolution
//!
//! The game allows one exotic weapon and one exotic armor piece at a time.
//! Items that exclude each other share a non-empty equip label. When the
//! unrestricted picks contain two or more items with the same label, every
//! member of the group is tried as the one to keep, with the other members'
//! slots falling back to their best unlabelled item. The combination with
//! the highest total score wins.

use super::top_items::{total_score, SlotCandidates, SlotPicks};
use crate::reference::Slot;
use std::collections::BTreeMap;

/// Repaired picks plus the labels that could not be repaired
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub picks: SlotPicks,
    /// Labels still held by more than one pick
    pub unresolved: Vec<String>,
}

/// Slots of the picks sharing each label, for labels held by two or more
fn conflicting_groups(picks: &SlotPicks) -> BTreeMap<String, Vec<Slot>> {
    let mut groups: BTreeMap<String, Vec<Slot>> = BTreeMap::new();
    for (slot, pick) in picks {
        if let Some(label) = &pick.item.equip_label {
            groups.entry(label.clone()).or_default().push(*slot);
        }
    }
    groups.retain(|_, slots| slots.len() > 1);
    groups
}

/// Keep `keep`, replace every other slot in `group` with its best unlabelled
/// candidate. `None` when one of those slots has no such candidate.
fn substitute(
    picks: &SlotPicks,
    candidates: &SlotCandidates,
    group: &[Slot],
    keep: Slot,
) -> Option<SlotPicks> {
    let mut combination = picks.clone();
    for slot in group.iter().copied().filter(|s| *s != keep) {
        let alternative = candidates.best_unlabelled(slot)?;
        combination.insert(slot, alternative.clone());
    }
    Some(combination)
}

/// Repair unrestricted picks so no equip label is used twice
pub fn resolve_conflicts(unrestricted: &SlotPicks, candidates: &SlotCandidates) -> Resolution {
    let mut picks = unrestricted.clone();
    let mut unresolved = Vec::new();

    for (label, group) in conflicting_groups(unrestricted) {
        let mut best: Option<(f64, SlotPicks)> = None;
        for keep in &group {
            let Some(combination) = substitute(&picks, candidates, &group, *keep) else {
                continue;
            };
            let total = total_score(&combination);
            if best.as_ref().is_none_or(|(score, _)| total > *score) {
                best = Some((total, combination));
            }
        }

        match best {
            Some((_, combination)) => picks = combination,
            None => {
                tracing::warn!(
                    label = %label,
                    slots = ?group,
                    "no substitute for conflicting unique-equip items, keeping unrestricted picks"
                );
                unresolved.push(label);
            }
        }
    }

    Resolution { picks, unresolved }
}
