//! Item scoring
//!
//! The score orders items by power first. Bonuses only break ties between
//! items of equal power; together they stay below one power point.

use super::JoinedItem;
use crate::reference::ItemLocation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Bonus for items already equipped on the evaluated character
pub const PRIORITY_BONUS: f64 = 0.5;

/// Bonus for masterworked items
pub const MASTERWORK_BONUS: f64 = 0.25;

/// Bonus for items carried in a character inventory
pub const INVENTORY_BONUS: f64 = 0.125;

/// A joined item with its selection score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: JoinedItem,
    pub score: f64,
}

impl ScoredItem {
    pub fn new(item: JoinedItem, priority: &HashSet<String>) -> Self {
        let score = score_item(&item, priority);
        Self { item, score }
    }

    /// Power of the underlying item (0 when unknown)
    pub fn power(&self) -> u32 {
        self.item.power.unwrap_or(0)
    }
}

/// Score an item for slot selection.
///
/// `priority` holds the instance ids equipped on the character being
/// evaluated. Redacted items score their raw power only.
pub fn score_item(item: &JoinedItem, priority: &HashSet<String>) -> f64 {
    let Some(power) = item.power else {
        return 0.0;
    };

    let mut score = f64::from(power);
    if item.is_redacted {
        return score;
    }

    if priority.contains(&item.instance_id) {
        score += PRIORITY_BONUS;
    }
    if item.is_masterwork {
        score += MASTERWORK_BONUS;
    }
    if item.location == ItemLocation::Inventory {
        score += INVENTORY_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Slot;
    use crate::testing::joined;

    #[test]
    fn test_base_score_is_power() {
        let mut item = joined("i1", Slot::Helmet, 1800);
        item.location = ItemLocation::Vault;
        assert_eq!(score_item(&item, &HashSet::new()), 1800.0);
    }

    #[test]
    fn test_no_power_scores_zero() {
        let mut item = joined("i1", Slot::Helmet, 1800);
        item.power = None;
        item.is_masterwork = true;
        assert_eq!(score_item(&item, &HashSet::from(["i1".to_string()])), 0.0);
    }

    #[test]
    fn test_all_bonuses() {
        let mut item = joined("i1", Slot::Helmet, 1800);
        item.is_masterwork = true;
        item.location = ItemLocation::Inventory;
        let priority = HashSet::from(["i1".to_string()]);
        assert_eq!(score_item(&item, &priority), 1800.875);
    }

    #[test]
    fn test_redacted_gets_no_bonus() {
        let mut item = joined("i1", Slot::Helmet, 1800);
        item.is_redacted = true;
        item.is_masterwork = true;
        item.location = ItemLocation::Inventory;
        let priority = HashSet::from(["i1".to_string()]);
        assert_eq!(score_item(&item, &priority), 1800.0);
    }

    #[test]
    fn test_bonuses_never_beat_a_power_point() {
        let mut bonused = joined("i1", Slot::Helmet, 1800);
        bonused.is_masterwork = true;
        bonused.location = ItemLocation::Inventory;
        let mut stronger = joined("i2", Slot::Helmet, 1801);
        stronger.location = ItemLocation::Vault;
        let priority = HashSet::from(["i1".to_string()]);
        assert!(score_item(&stronger, &priority) > score_item(&bonused, &priority));
    }

    #[test]
    fn test_scored_item_power() {
        let scored = ScoredItem::new(joined("i1", Slot::Legs, 1750), &HashSet::new());
        assert_eq!(scored.power(), 1750);
    }
}
