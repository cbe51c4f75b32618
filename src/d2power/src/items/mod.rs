//! Joined items
//!
//! A joined item is one inventory entry merged with its manifest
//! definition, instance component, and socket data. Joined items are
//! rebuilt on every refresh and never mutated afterwards.

mod classify;
mod join;
mod score;

pub use classify::{
    has_incomplete_deepsight_resonance, is_crafted, is_equippable_by_character, is_masterwork,
};
pub use join::{join_item, join_profile_items};
pub use score::{score_item, ScoredItem, INVENTORY_BONUS, MASTERWORK_BONUS, PRIORITY_BONUS};

use crate::reference::{ClassType, ItemLocation, Slot};
use serde::{Deserialize, Serialize};

/// Normalized view of one instanced item
#[allow(clippy::struct_excessive_bools)] // Item flags as reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedItem {
    pub instance_id: String,
    pub item_hash: u32,
    /// `None` for items outside the eight power slots
    pub slot: Option<Slot>,
    pub name: String,
    /// `None` when neither the instance nor redaction data gives a power
    pub power: Option<u32>,
    pub icon: Option<String>,
    pub watermark: Option<String>,
    pub is_crafted: bool,
    pub is_masterwork: bool,
    pub has_incomplete_deepsight: bool,
    pub is_weapon: bool,
    pub class_type: ClassType,
    pub is_redacted: bool,
    pub is_locked: bool,
    pub can_equip: bool,
    pub cannot_equip_reason: u32,
    pub location: ItemLocation,
    /// Unique-equip label; never an empty string
    pub equip_label: Option<String>,
    /// Character holding the item, `None` for the vault
    pub owner: Option<String>,
}

impl JoinedItem {
    /// Items without a slot or a power never take part in slot selection
    pub fn is_selectable(&self) -> bool {
        self.slot.is_some() && self.power.is_some()
    }

    pub fn is_exotic(&self) -> bool {
        self.equip_label.is_some()
    }
}
