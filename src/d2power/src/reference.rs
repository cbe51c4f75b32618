//! Reference data for Destiny 2 items
//!
//! Hardcoded reference data for game concepts like equipment slots,
//! inventory buckets, character classes, item locations, and plug
//! categories. Hash values are stable identifiers from the game API.

mod class;
mod location;
mod plug;
mod slot;

pub use class::ClassType;
pub use location::ItemLocation;
pub use plug::{
    PLUG_CATEGORY_CRAFTED_FRAME, PLUG_CATEGORY_DEEPSIGHT_MEMORY, PLUG_CATEGORY_FRAMES,
    TIER_TYPE_COMMON,
};
pub use slot::{slot_by_bucket, Slot, SlotBucket, BUCKET_LOST_ITEMS, SLOT_BUCKETS};

// ============================================================================
// Item Types
// ============================================================================

/// `itemType` value for weapons
pub const ITEM_TYPE_WEAPON: u32 = 3;

// ============================================================================
// Equip Failure Reasons
// ============================================================================

/// `cannotEquipReason` bit reported for items that are only blocked because
/// they sit in the vault. Such items can be pulled and equipped.
pub const EQUIP_FAILURE_NOT_ON_CHARACTER: u32 = 16;
