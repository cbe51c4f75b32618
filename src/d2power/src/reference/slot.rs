//! Equipment slot definitions

use serde::{Deserialize, Serialize};

/// One of the eight equipment slots that contribute to power
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Kinetic,
    Energy,
    Power,
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
}

impl Slot {
    /// Number of power-bearing slots
    pub const COUNT: usize = 8;

    /// All slots in display order (weapons first, then armor)
    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::Kinetic,
        Slot::Energy,
        Slot::Power,
        Slot::Helmet,
        Slot::Gauntlets,
        Slot::Chest,
        Slot::Legs,
        Slot::ClassItem,
    ];

    /// Position of this slot in [`Slot::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_weapon(self) -> bool {
        matches!(self, Slot::Kinetic | Slot::Energy | Slot::Power)
    }

    /// Inventory bucket hash for this slot
    pub fn bucket_hash(self) -> u32 {
        SLOT_BUCKETS[self.index()].bucket_hash
    }

    /// Human-readable slot name
    pub fn name(self) -> &'static str {
        SLOT_BUCKETS[self.index()].name
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Slot to inventory bucket mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBucket {
    pub slot: Slot,
    pub bucket_hash: u32,
    pub name: &'static str,
}

/// Bucket table, indexed in the same order as [`Slot::ALL`]
pub const SLOT_BUCKETS: &[SlotBucket] = &[
    SlotBucket {
        slot: Slot::Kinetic,
        bucket_hash: 1498876634,
        name: "Kinetic",
    },
    SlotBucket {
        slot: Slot::Energy,
        bucket_hash: 2465295065,
        name: "Energy",
    },
    SlotBucket {
        slot: Slot::Power,
        bucket_hash: 953998645,
        name: "Power",
    },
    SlotBucket {
        slot: Slot::Helmet,
        bucket_hash: 3448274439,
        name: "Helmet",
    },
    SlotBucket {
        slot: Slot::Gauntlets,
        bucket_hash: 3551918588,
        name: "Gauntlets",
    },
    SlotBucket {
        slot: Slot::Chest,
        bucket_hash: 14239492,
        name: "Chest Armor",
    },
    SlotBucket {
        slot: Slot::Legs,
        bucket_hash: 20886954,
        name: "Leg Armor",
    },
    SlotBucket {
        slot: Slot::ClassItem,
        bucket_hash: 1585787867,
        name: "Class Item",
    },
];

/// Postmaster ("Lost Items") bucket. The API reports a character location
/// for these items, but they can only be pulled from the postmaster.
pub const BUCKET_LOST_ITEMS: u32 = 215593132;

/// Get the slot an inventory bucket maps to
pub fn slot_by_bucket(bucket_hash: u32) -> Option<Slot> {
    SLOT_BUCKETS
        .iter()
        .find(|b| b.bucket_hash == bucket_hash)
        .map(|b| b.slot)
}
