//! Shared test fixtures

use crate::items::{JoinedItem, ScoredItem};
use crate::manifest::{EquippingBlock, InventoryBlock, ItemDefinition, Manifest, PlugBlock};
use crate::profile::{
    Character, InstanceComponent, ProfileData, ProfileProgression, RawItem, SeasonalArtifact,
    StatValue,
};
use crate::reference::{ClassType, ItemLocation, Slot, BUCKET_LOST_ITEMS, ITEM_TYPE_WEAPON};
use std::collections::HashSet;

const STAT_POWER: u32 = 1935470627;

/// Plain legendary definition sitting in `slot`'s bucket
pub fn definition(name: &str, slot: Slot) -> ItemDefinition {
    let mut def = ItemDefinition::default();
    def.display_properties.name = name.to_string();
    def.inventory = Some(InventoryBlock {
        bucket_type_hash: slot.bucket_hash(),
        tier_type: 5,
    });
    def
}

pub trait DefinitionExt {
    fn weapon(self) -> Self;
    fn redacted(self) -> Self;
    fn icon(self, icon: &str) -> Self;
    fn label(self, label: &str) -> Self;
    fn class(self, class_type: ClassType) -> Self;
    fn plug(self, category: &str, tier_type: u8) -> Self;
}

impl DefinitionExt for ItemDefinition {
    fn weapon(mut self) -> Self {
        self.item_type = ITEM_TYPE_WEAPON;
        self
    }

    fn redacted(mut self) -> Self {
        self.redacted = true;
        self
    }

    fn icon(mut self, icon: &str) -> Self {
        self.display_properties.icon = Some(icon.to_string());
        self
    }

    fn label(mut self, label: &str) -> Self {
        self.equipping_block = Some(EquippingBlock {
            unique_label: Some(label.to_string()),
        });
        self
    }

    fn class(mut self, class_type: ClassType) -> Self {
        self.class_type = class_type;
        self
    }

    fn plug(mut self, category: &str, tier_type: u8) -> Self {
        self.plug = Some(PlugBlock {
            plug_category_identifier: category.to_string(),
        });
        if let Some(inventory) = self.inventory.as_mut() {
            inventory.tier_type = tier_type;
        }
        self
    }
}

pub fn manifest_with(definitions: Vec<(u32, ItemDefinition)>) -> Manifest {
    Manifest {
        items: definitions.into_iter().collect(),
        ..Manifest::default()
    }
}

pub fn raw_item(hash: u32, instance_id: &str, bucket_hash: u32) -> RawItem {
    RawItem {
        item_hash: hash,
        item_instance_id: Some(instance_id.to_string()),
        bucket_hash,
        location: ItemLocation::Inventory,
        ..RawItem::default()
    }
}

pub fn instance(power: u32) -> InstanceComponent {
    InstanceComponent {
        primary_stat: Some(StatValue {
            stat_hash: STAT_POWER,
            value: power,
        }),
        can_equip: true,
        ..InstanceComponent::default()
    }
}

/// Joined vault item with no bonuses
pub fn joined(instance_id: &str, slot: Slot, power: u32) -> JoinedItem {
    JoinedItem {
        instance_id: instance_id.to_string(),
        item_hash: 0,
        slot: Some(slot),
        name: instance_id.to_string(),
        power: Some(power),
        icon: None,
        watermark: None,
        is_crafted: false,
        is_masterwork: false,
        has_incomplete_deepsight: false,
        is_weapon: slot.is_weapon(),
        class_type: ClassType::Any,
        is_redacted: false,
        is_locked: false,
        can_equip: true,
        cannot_equip_reason: 0,
        location: ItemLocation::Vault,
        equip_label: None,
        owner: None,
    }
}

pub fn scored(item: JoinedItem) -> ScoredItem {
    ScoredItem::new(item, &HashSet::new())
}

/// Builds a manifest and a matching profile side by side
#[derive(Default)]
pub struct ProfileBuilder {
    definitions: Vec<(u32, ItemDefinition)>,
    profile: ProfileData,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn character(mut self, id: &str, class_type: ClassType, light: u32) -> Self {
        self.profile.characters.insert(
            id.to_string(),
            Character {
                character_id: id.to_string(),
                class_type,
                light,
                ..Character::default()
            },
        );
        self
    }

    pub fn artifact(mut self, power_bonus: u32) -> Self {
        self.profile.profile_progression = Some(ProfileProgression {
            seasonal_artifact: Some(SeasonalArtifact { power_bonus }),
        });
        self
    }

    fn add(&mut self, hash: u32, id: &str, slot: Slot, power: u32) -> RawItem {
        let mut def = definition(id, slot);
        if slot.is_weapon() {
            def = def.weapon();
        }
        self.definitions.push((hash, def));
        self.profile
            .item_instances
            .insert(id.to_string(), instance(power));
        raw_item(hash, id, slot.bucket_hash())
    }

    /// Item carried in a character inventory
    pub fn item(mut self, owner: &str, hash: u32, id: &str, slot: Slot, power: u32) -> Self {
        let raw = self.add(hash, id, slot, power);
        self.profile
            .character_inventories
            .entry(owner.to_string())
            .or_default()
            .push(raw);
        self
    }

    pub fn equipped_item(
        mut self,
        owner: &str,
        hash: u32,
        id: &str,
        slot: Slot,
        power: u32,
    ) -> Self {
        let raw = self.add(hash, id, slot, power);
        self.profile
            .character_equipments
            .entry(owner.to_string())
            .or_default()
            .push(raw);
        self
    }

    pub fn vault_item(mut self, hash: u32, id: &str, slot: Slot, power: u32) -> Self {
        let mut raw = self.add(hash, id, slot, power);
        raw.location = ItemLocation::Vault;
        self.profile.profile_inventories.push(raw);
        self
    }

    pub fn postmaster_item(
        mut self,
        owner: &str,
        hash: u32,
        id: &str,
        slot: Slot,
        power: u32,
    ) -> Self {
        let mut raw = self.add(hash, id, slot, power);
        raw.bucket_hash = BUCKET_LOST_ITEMS;
        raw.location = ItemLocation::Postmaster;
        self.profile
            .character_inventories
            .entry(owner.to_string())
            .or_default()
            .push(raw);
        self
    }

    /// Carried item whose definition is missing from the manifest
    pub fn unknown_item(
        mut self,
        owner: &str,
        hash: u32,
        id: &str,
        slot: Slot,
        power: u32,
    ) -> Self {
        let raw = self.add(hash, id, slot, power);
        self.definitions.retain(|(h, _)| *h != hash);
        self.profile
            .character_inventories
            .entry(owner.to_string())
            .or_default()
            .push(raw);
        self
    }

    fn edit(mut self, hash: u32, f: impl FnOnce(ItemDefinition) -> ItemDefinition) -> Self {
        if let Some(entry) = self.definitions.iter_mut().find(|(h, _)| *h == hash) {
            entry.1 = f(std::mem::take(&mut entry.1));
        }
        self
    }

    pub fn labelled(self, hash: u32, label: &str) -> Self {
        self.edit(hash, |def| def.label(label))
    }

    pub fn class_restricted(self, hash: u32, class_type: ClassType) -> Self {
        self.edit(hash, |def| def.class(class_type))
    }

    /// Mark a definition redacted and replace its instance power with
    /// level and quality only
    pub fn redacted(mut self, hash: u32, id: &str, item_level: u32, quality: u32) -> Self {
        if let Some(inst) = self.profile.item_instances.get_mut(id) {
            inst.primary_stat = None;
            inst.item_level = item_level;
            inst.quality = quality;
        }
        self.edit(hash, |def| def.redacted())
    }

    pub fn manifest(&self) -> Manifest {
        manifest_with(self.definitions.clone())
    }

    pub fn build(self) -> ProfileData {
        self.profile
    }
}
