//! Top item per slot

use crate::items::ScoredItem;
use crate::reference::Slot;
use std::collections::BTreeMap;

/// Winning item per slot. Slots without candidates are absent.
pub type SlotPicks = BTreeMap<Slot, ScoredItem>;

/// Selectable items grouped by slot, preserving input order within a slot
#[derive(Debug, Clone, Default)]
pub struct SlotCandidates {
    by_slot: BTreeMap<Slot, Vec<ScoredItem>>,
}

/// First item with the highest score. Later items must score strictly
/// higher to win, so equal scores keep input order.
fn first_best<'a>(items: impl IntoIterator<Item = &'a ScoredItem>) -> Option<&'a ScoredItem> {
    items.into_iter().fold(None, |best: Option<&ScoredItem>, item| match best {
        Some(current) if current.score >= item.score => Some(current),
        _ => Some(item),
    })
}

impl SlotCandidates {
    /// Group items by slot, skipping items without a slot or power
    pub fn group(items: impl IntoIterator<Item = ScoredItem>) -> Self {
        let mut by_slot: BTreeMap<Slot, Vec<ScoredItem>> = BTreeMap::new();
        for scored in items {
            if !scored.item.is_selectable() {
                continue;
            }
            if let Some(slot) = scored.item.slot {
                by_slot.entry(slot).or_default().push(scored);
            }
        }
        Self { by_slot }
    }

    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }

    /// Candidates for a slot in input order
    pub fn slot(&self, slot: Slot) -> &[ScoredItem] {
        self.by_slot.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredItem> {
        self.by_slot.values().flatten()
    }

    /// Best candidate for a slot
    pub fn best(&self, slot: Slot) -> Option<&ScoredItem> {
        first_best(self.slot(slot))
    }

    /// Best candidate for a slot that carries no unique-equip label
    pub fn best_unlabelled(&self, slot: Slot) -> Option<&ScoredItem> {
        first_best(self.slot(slot).iter().filter(|s| s.item.equip_label.is_none()))
    }

    /// Best item per slot, ignoring unique-equip labels
    pub fn top_items(&self) -> SlotPicks {
        self.by_slot
            .keys()
            .filter_map(|slot| self.best(*slot).map(|item| (*slot, item.clone())))
            .collect()
    }
}

/// Sum of the scores of a pick set
pub fn total_score(picks: &SlotPicks) -> f64 {
    picks.values().map(|p| p.score).sum()
}
