//! Item joiner

use super::classify::{has_incomplete_deepsight_resonance, is_crafted, is_masterwork};
use super::JoinedItem;
use crate::manifest::Manifest;
use crate::profile::{
    InstanceComponent, PlugObjectivesComponent, ProfileData, RawItem, SocketsComponent,
};
use crate::reference::{slot_by_bucket, ItemLocation, BUCKET_LOST_ITEMS};

/// Merge a raw item with its definition and components.
///
/// Returns `None` for non-instanced items, items the manifest does not know
/// yet, and instanced items whose instance component is missing.
pub fn join_item(
    raw: &RawItem,
    manifest: &Manifest,
    instance: Option<&InstanceComponent>,
    sockets: Option<&SocketsComponent>,
    plug_objectives: Option<&PlugObjectivesComponent>,
) -> Option<JoinedItem> {
    let instance_id = raw.item_instance_id.as_deref()?;

    let Some(definition) = manifest.item(raw.item_hash) else {
        tracing::debug!(
            item_hash = raw.item_hash,
            instance_id,
            "no manifest definition, dropping item"
        );
        return None;
    };

    let Some(instance) = instance else {
        tracing::debug!(
            item_hash = raw.item_hash,
            instance_id,
            "no instance data, dropping item"
        );
        return None;
    };

    let power = match instance.primary_stat {
        Some(stat) => Some(stat.value),
        None if definition.redacted => Some(
            instance
                .item_level
                .saturating_mul(10)
                .saturating_add(instance.quality),
        ),
        None => None,
    };

    let icon = raw
        .override_style_item_hash
        .and_then(|hash| manifest.item(hash))
        .and_then(|style| style.icon())
        .or_else(|| definition.icon())
        .map(String::from);

    let location = if raw.bucket_hash == BUCKET_LOST_ITEMS {
        ItemLocation::Postmaster
    } else {
        raw.location
    };

    Some(JoinedItem {
        instance_id: instance_id.to_string(),
        item_hash: raw.item_hash,
        slot: definition.bucket_hash().and_then(slot_by_bucket),
        name: definition.name().to_string(),
        power,
        icon,
        watermark: definition.icon_watermark.clone(),
        is_crafted: raw.state.is_crafted() || is_crafted(sockets, manifest),
        is_masterwork: is_masterwork(raw.state, definition, sockets, manifest),
        has_incomplete_deepsight: has_incomplete_deepsight_resonance(
            sockets,
            plug_objectives,
            manifest,
        ),
        is_weapon: definition.is_weapon(),
        class_type: definition.class_type,
        is_redacted: definition.redacted,
        is_locked: raw.state.is_locked(),
        can_equip: instance.can_equip,
        cannot_equip_reason: instance.cannot_equip_reason,
        location,
        equip_label: definition.unique_label().map(String::from),
        owner: None,
    })
}

/// Join every owned item of a profile, dropping the ones that fail to join.
/// Output order follows [`ProfileData::owned_items`].
pub fn join_profile_items(manifest: &Manifest, profile: &ProfileData) -> Vec<JoinedItem> {
    profile
        .owned_items()
        .filter_map(|owned| {
            let instance_id = owned.item.item_instance_id.as_deref()?;
            let mut joined = join_item(
                owned.item,
                manifest,
                profile.instance(instance_id),
                profile.sockets(instance_id),
                profile.plug_objectives(instance_id),
            )?;
            joined.owner = owned.owner.map(String::from);
            Some(joined)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ItemState;
    use crate::reference::{ClassType, Slot};
    use crate::testing::{definition, instance, manifest_with, raw_item, DefinitionExt};

    #[test]
    fn test_join_basic_item() {
        let manifest = manifest_with(vec![(
            1,
            definition("Hand Cannon", Slot::Kinetic).weapon(),
        )]);
        let raw = raw_item(1, "i1", Slot::Kinetic.bucket_hash());
        let joined = join_item(&raw, &manifest, Some(&instance(1800)), None, None).unwrap();

        assert_eq!(joined.instance_id, "i1");
        assert_eq!(joined.slot, Some(Slot::Kinetic));
        assert_eq!(joined.power, Some(1800));
        assert_eq!(joined.name, "Hand Cannon");
        assert!(joined.is_weapon);
        assert!(!joined.is_masterwork);
        assert_eq!(joined.equip_label, None);
        assert_eq!(joined.location, ItemLocation::Inventory);
    }

    #[test]
    fn test_join_requires_instance_id() {
        let manifest = manifest_with(vec![(1, definition("Glimmer", Slot::Kinetic))]);
        let mut raw = raw_item(1, "i1", Slot::Kinetic.bucket_hash());
        raw.item_instance_id = None;
        assert!(join_item(&raw, &manifest, Some(&instance(10)), None, None).is_none());
    }

    #[test]
    fn test_join_missing_definition_is_dropped() {
        let manifest = manifest_with(vec![]);
        let raw = raw_item(99, "i1", Slot::Kinetic.bucket_hash());
        assert!(join_item(&raw, &manifest, Some(&instance(1800)), None, None).is_none());
    }

    #[test]
    fn test_join_missing_instance_is_dropped() {
        let manifest = manifest_with(vec![(1, definition("Helm", Slot::Helmet))]);
        let raw = raw_item(1, "i1", Slot::Helmet.bucket_hash());
        assert!(join_item(&raw, &manifest, None, None, None).is_none());
    }

    #[test]
    fn test_redacted_power_from_level_and_quality() {
        let manifest = manifest_with(vec![(1, definition("???", Slot::Chest).redacted())]);
        let raw = raw_item(1, "i1", Slot::Chest.bucket_hash());
        let mut inst = instance(0);
        inst.primary_stat = None;
        inst.item_level = 95;
        inst.quality = 5;

        let joined = join_item(&raw, &manifest, Some(&inst), None, None).unwrap();
        assert_eq!(joined.power, Some(955));
        assert!(joined.is_redacted);
    }

    #[test]
    fn test_redacted_power_saturates() {
        let manifest = manifest_with(vec![(1, definition("???", Slot::Chest).redacted())]);
        let raw = raw_item(1, "i1", Slot::Chest.bucket_hash());
        let mut inst = instance(0);
        inst.primary_stat = None;
        inst.item_level = u32::MAX / 2;
        inst.quality = 7;

        let joined = join_item(&raw, &manifest, Some(&inst), None, None).unwrap();
        assert_eq!(joined.power, Some(u32::MAX));
    }

    #[test]
    fn test_crafted_state_bit() {
        let manifest = manifest_with(vec![(1, definition("Gun", Slot::Energy).weapon())]);
        let mut raw = raw_item(1, "i1", Slot::Energy.bucket_hash());
        raw.state = ItemState::from_raw(8);
        let joined = join_item(&raw, &manifest, Some(&instance(1800)), None, None).unwrap();
        assert!(joined.is_crafted);
    }

    #[test]
    fn test_missing_power_when_not_redacted() {
        let manifest = manifest_with(vec![(1, definition("Ghost", Slot::Chest))]);
        let raw = raw_item(1, "i1", Slot::Chest.bucket_hash());
        let mut inst = instance(0);
        inst.primary_stat = None;
        inst.item_level = 95;

        let joined = join_item(&raw, &manifest, Some(&inst), None, None).unwrap();
        assert_eq!(joined.power, None);
        assert!(!joined.is_selectable());
    }

    #[test]
    fn test_unmapped_bucket_has_no_slot() {
        let mut def = definition("Sparrow", Slot::Kinetic);
        if let Some(inv) = def.inventory.as_mut() {
            inv.bucket_type_hash = 2025709351;
        }
        let manifest = manifest_with(vec![(1, def)]);
        let raw = raw_item(1, "i1", 2025709351);
        let joined = join_item(&raw, &manifest, Some(&instance(10)), None, None).unwrap();
        assert_eq!(joined.slot, None);
        assert!(!joined.is_selectable());
    }

    #[test]
    fn test_override_style_icon() {
        let manifest = manifest_with(vec![
            (1, definition("Armor", Slot::Helmet).icon("/base.png")),
            (2, definition("Ornament", Slot::Helmet).icon("/ornament.png")),
        ]);
        let mut raw = raw_item(1, "i1", Slot::Helmet.bucket_hash());
        raw.override_style_item_hash = Some(2);
        let joined = join_item(&raw, &manifest, Some(&instance(10)), None, None).unwrap();
        assert_eq!(joined.icon.as_deref(), Some("/ornament.png"));

        raw.override_style_item_hash = Some(404);
        let joined = join_item(&raw, &manifest, Some(&instance(10)), None, None).unwrap();
        assert_eq!(joined.icon.as_deref(), Some("/base.png"));
    }

    #[test]
    fn test_lost_items_bucket_reports_postmaster() {
        let manifest = manifest_with(vec![(1, definition("Helm", Slot::Helmet))]);
        let raw = raw_item(1, "i1", BUCKET_LOST_ITEMS);
        let joined = join_item(&raw, &manifest, Some(&instance(10)), None, None).unwrap();
        assert_eq!(joined.location, ItemLocation::Postmaster);
        assert_eq!(joined.slot, Some(Slot::Helmet));
    }

    #[test]
    fn test_exotic_label_and_class() {
        let manifest = manifest_with(vec![(
            1,
            definition("Exotic Helm", Slot::Helmet)
                .label("exotic_armor")
                .class(ClassType::Hunter),
        )]);
        let raw = raw_item(1, "i1", Slot::Helmet.bucket_hash());
        let joined = join_item(&raw, &manifest, Some(&instance(10)), None, None).unwrap();
        assert_eq!(joined.equip_label.as_deref(), Some("exotic_armor"));
        assert!(joined.is_exotic());
        assert_eq!(joined.class_type, ClassType::Hunter);
    }
}
