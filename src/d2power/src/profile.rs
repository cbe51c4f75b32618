//! Profile data as returned by the game API
//!
//! Characters, inventories, and the per-instance item components. The
//! profile is fetched by an outside service; the engine only reads it.

use crate::reference::{ClassType, ItemLocation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Item state bit flags
///
/// # Example
///
/// ```
/// use d2power::ItemState;
///
/// let state = ItemState::from_raw(5);
/// assert!(state.is_locked());
/// assert!(state.is_masterwork());
/// assert!(!state.is_crafted());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemState(pub u32);

impl ItemState {
    const LOCKED: u32 = 1; // bit 0
    const MASTERWORK: u32 = 4; // bit 2
    const CRAFTED: u32 = 8; // bit 3

    /// Create flags from a raw u32 value.
    pub fn from_raw(bits: u32) -> Self {
        Self(bits)
    }

    /// Get the raw u32 value.
    pub fn to_raw(self) -> u32 {
        self.0
    }

    pub fn with_locked(mut self) -> Self {
        self.0 |= Self::LOCKED;
        self
    }

    pub fn with_masterwork(mut self) -> Self {
        self.0 |= Self::MASTERWORK;
        self
    }

    pub fn is_locked(self) -> bool {
        self.0 & Self::LOCKED != 0
    }

    pub fn is_masterwork(self) -> bool {
        self.0 & Self::MASTERWORK != 0
    }

    pub fn is_crafted(self) -> bool {
        self.0 & Self::CRAFTED != 0
    }
}

impl From<u32> for ItemState {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// An inventory entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawItem {
    pub item_hash: u32,
    /// Absent for stackables and currencies
    pub item_instance_id: Option<String>,
    pub bucket_hash: u32,
    pub location: ItemLocation,
    pub state: ItemState,
    /// Ornament applied to the item; its icon replaces the base icon
    pub override_style_item_hash: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub character_id: String,
    pub class_type: ClassType,
    /// Power level currently reported by the API
    pub light: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatValue {
    pub stat_hash: u32,
    pub value: u32,
}

/// Per-instance data (`DestinyItemInstanceComponent`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceComponent {
    pub primary_stat: Option<StatValue>,
    pub item_level: u32,
    pub quality: u32,
    pub can_equip: bool,
    pub cannot_equip_reason: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketState {
    pub plug_hash: Option<u32>,
    pub is_enabled: bool,
    pub is_visible: bool,
}

/// Sockets of one item instance, in socket index order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocketsComponent {
    pub sockets: Vec<SocketState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectiveProgress {
    pub objective_hash: u32,
    pub progress: Option<u32>,
    pub completion_value: u32,
    pub complete: bool,
}

/// Objectives attached to the plugs of one item instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugObjectivesComponent {
    pub objectives_per_plug: HashMap<u32, Vec<ObjectiveProgress>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalArtifact {
    pub power_bonus: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileProgression {
    pub seasonal_artifact: Option<SeasonalArtifact>,
}

/// Profile-scoped record progress
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordComponent {
    pub state: u32,
    pub objectives: Vec<ObjectiveProgress>,
}

/// Everything the engine reads from one profile fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub characters: BTreeMap<String, Character>,
    pub character_equipments: HashMap<String, Vec<RawItem>>,
    pub character_inventories: HashMap<String, Vec<RawItem>>,
    pub profile_inventories: Vec<RawItem>,
    pub item_instances: HashMap<String, InstanceComponent>,
    pub item_sockets: HashMap<String, SocketsComponent>,
    pub item_plug_objectives: HashMap<String, PlugObjectivesComponent>,
    pub profile_progression: Option<ProfileProgression>,
    pub records: HashMap<u32, RecordComponent>,
    /// Server time the response was generated; used as the staleness key
    pub response_minted_timestamp: Option<DateTime<Utc>>,
}

/// A raw item together with the character holding it (`None` for the vault
/// and other profile-level inventories)
#[derive(Debug, Clone, Copy)]
pub struct OwnedItem<'a> {
    pub owner: Option<&'a str>,
    pub item: &'a RawItem,
}

impl ProfileData {
    /// Parse profile data from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when the fetch produced no characters at all
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Every item on the account: each character's equipment and
    /// inventory (in character id order), then profile inventories.
    pub fn owned_items(&self) -> impl Iterator<Item = OwnedItem<'_>> {
        let character_items = self.characters.keys().flat_map(move |id| {
            let equipped = self.character_equipments.get(id).into_iter().flatten();
            let carried = self.character_inventories.get(id).into_iter().flatten();
            equipped.chain(carried).map(move |item| OwnedItem {
                owner: Some(id.as_str()),
                item,
            })
        });
        let profile_items = self
            .profile_inventories
            .iter()
            .map(|item| OwnedItem { owner: None, item });
        character_items.chain(profile_items)
    }

    /// Instance ids currently equipped on a character
    pub fn equipped_instance_ids(&self, character_id: &str) -> HashSet<String> {
        self.character_equipments
            .get(character_id)
            .into_iter()
            .flatten()
            .filter_map(|item| item.item_instance_id.clone())
            .collect()
    }

    pub fn instance(&self, instance_id: &str) -> Option<&InstanceComponent> {
        self.item_instances.get(instance_id)
    }

    pub fn sockets(&self, instance_id: &str) -> Option<&SocketsComponent> {
        self.item_sockets.get(instance_id)
    }

    pub fn plug_objectives(&self, instance_id: &str) -> Option<&PlugObjectivesComponent> {
        self.item_plug_objectives.get(instance_id)
    }

    pub fn record(&self, hash: u32) -> Option<&RecordComponent> {
        self.records.get(&hash)
    }

    /// Seasonal artifact power bonus, 0 when not reported
    pub fn artifact_power(&self) -> u32 {
        self.profile_progression
            .as_ref()
            .and_then(|p| p.seasonal_artifact)
            .map(|a| a.power_bonus)
            .unwrap_or(0)
    }

    /// Highest power currently reported for any character
    pub fn max_character_light(&self) -> u32 {
        self.characters.values().map(|c| c.light).max().unwrap_or(0)
    }
}
