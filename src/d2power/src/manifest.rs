//! Manifest definitions for Destiny 2 items
//!
//! The manifest is downloaded and cached by an outside service; this module
//! only models the subset of `DestinyInventoryItemDefinition` and
//! `DestinyRecordDefinition` the power engine reads, and provides lookups
//! that return `None` for hashes the manifest does not know yet.

use crate::reference::{ClassType, ITEM_TYPE_WEAPON};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Data Structures
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayProperties {
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquippingBlock {
    /// Items sharing a non-empty label cannot be equipped together
    pub unique_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryBlock {
    pub bucket_type_hash: u32,
    pub tier_type: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlugBlock {
    pub plug_category_identifier: String,
}

/// Subset of `DestinyInventoryItemDefinition`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDefinition {
    pub display_properties: DisplayProperties,
    pub icon_watermark: Option<String>,
    pub class_type: ClassType,
    /// Definition withheld by the API (usually unreleased content)
    pub redacted: bool,
    pub item_type: u32,
    pub equipping_block: Option<EquippingBlock>,
    pub inventory: Option<InventoryBlock>,
    pub plug: Option<PlugBlock>,
}

impl ItemDefinition {
    pub fn name(&self) -> &str {
        &self.display_properties.name
    }

    pub fn icon(&self) -> Option<&str> {
        self.display_properties.icon.as_deref()
    }

    pub fn is_weapon(&self) -> bool {
        self.item_type == ITEM_TYPE_WEAPON
    }

    /// Unique-equip label, ignoring empty strings
    pub fn unique_label(&self) -> Option<&str> {
        self.equipping_block
            .as_ref()
            .and_then(|b| b.unique_label.as_deref())
            .filter(|label| !label.is_empty())
    }

    pub fn bucket_hash(&self) -> Option<u32> {
        self.inventory.as_ref().map(|i| i.bucket_type_hash)
    }

    pub fn tier_type(&self) -> Option<u8> {
        self.inventory.as_ref().map(|i| i.tier_type)
    }

    pub fn plug_category(&self) -> Option<&str> {
        self.plug.as_ref().map(|p| p.plug_category_identifier.as_str())
    }

    /// Check the plug category, ignoring ASCII case
    pub fn has_plug_category(&self, category: &str) -> bool {
        self.plug_category()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}

/// Subset of `DestinyRecordDefinition`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordDefinition {
    pub display_properties: DisplayProperties,
    pub objective_hashes: Vec<u32>,
}

/// Manifest tables consumed by the engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(rename = "DestinyInventoryItemDefinition", default)]
    pub items: HashMap<u32, ItemDefinition>,

    #[serde(rename = "DestinyRecordDefinition", default)]
    pub records: HashMap<u32, RecordDefinition>,
}

// ============================================================================
// Public API
// ============================================================================

impl Manifest {
    /// Parse manifest tables from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when no item definitions are loaded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item definition by hash
    pub fn item(&self, hash: u32) -> Option<&ItemDefinition> {
        self.items.get(&hash)
    }

    /// Look up a record definition by hash
    pub fn record(&self, hash: u32) -> Option<&RecordDefinition> {
        self.records.get(&hash)
    }

    /// Find a record whose display name matches exactly.
    ///
    /// Weapon pattern records are named after the weapon they unlock. When
    /// several records share a name the lowest hash wins so results are
    /// stable across runs.
    pub fn record_by_name(&self, name: &str) -> Option<(u32, &RecordDefinition)> {
        self.records
            .iter()
            .filter(|(_, r)| r.display_properties.name == name)
            .min_by_key(|(hash, _)| **hash)
            .map(|(hash, r)| (*hash, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_manifest() -> Manifest {
        let value = json!({
            "DestinyInventoryItemDefinition": {
                "100": {
                    "displayProperties": { "name": "Gjallarhorn", "icon": "/gjally.jpg" },
                    "classType": 3,
                    "itemType": 3,
                    "equippingBlock": { "uniqueLabel": "exotic_weapon" },
                    "inventory": { "bucketTypeHash": 953998645, "tierType": 6 }
                },
                "200": {
                    "displayProperties": { "name": "Plain Helmet" },
                    "classType": 0,
                    "itemType": 2,
                    "equippingBlock": { "uniqueLabel": "" },
                    "inventory": { "bucketTypeHash": 3448274439u32, "tierType": 5 }
                },
                "300": {
                    "displayProperties": { "name": "Enhanced Trait" },
                    "plug": { "plugCategoryIdentifier": "Frames" },
                    "inventory": { "tierType": 3 }
                }
            },
            "DestinyRecordDefinition": {
                "9": { "displayProperties": { "name": "Gjallarhorn" }, "objectiveHashes": [1] },
                "5": { "displayProperties": { "name": "Gjallarhorn" }, "objectiveHashes": [2] }
            }
        });
        Manifest::from_json(&value.to_string()).unwrap()
    }

    #[test]
    fn test_lookup_missing_hash() {
        let manifest = sample_manifest();
        assert!(manifest.item(12345).is_none());
        assert!(manifest.record(12345).is_none());
    }

    #[test]
    fn test_item_fields() {
        let manifest = sample_manifest();
        let gjally = manifest.item(100).unwrap();
        assert_eq!(gjally.name(), "Gjallarhorn");
        assert_eq!(gjally.icon(), Some("/gjally.jpg"));
        assert!(gjally.is_weapon());
        assert_eq!(gjally.class_type, ClassType::Any);
        assert_eq!(gjally.unique_label(), Some("exotic_weapon"));
        assert_eq!(gjally.bucket_hash(), Some(953998645));
        assert!(!gjally.redacted);
    }

    #[test]
    fn test_empty_unique_label_is_none() {
        let manifest = sample_manifest();
        let helmet = manifest.item(200).unwrap();
        assert_eq!(helmet.unique_label(), None);
        assert_eq!(helmet.class_type, ClassType::Titan);
        assert!(!helmet.is_weapon());
    }

    #[test]
    fn test_plug_category_case_insensitive() {
        let manifest = sample_manifest();
        let plug = manifest.item(300).unwrap();
        assert!(plug.has_plug_category("frames"));
        assert!(!plug.has_plug_category("crafting.plugs.frame_identifiers"));
        assert_eq!(plug.tier_type(), Some(3));
    }

    #[test]
    fn test_record_by_name_prefers_lowest_hash() {
        let manifest = sample_manifest();
        let (hash, record) = manifest.record_by_name("Gjallarhorn").unwrap();
        assert_eq!(hash, 5);
        assert_eq!(record.objective_hashes, vec![2]);
        assert!(manifest.record_by_name("Nothing").is_none());
    }

    #[test]
    fn test_from_json_empty_tables() {
        let manifest = Manifest::from_json("{}").unwrap();
        assert!(manifest.is_empty());
    }
}
