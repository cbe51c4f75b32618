//! Item classifiers
//!
//! Pure predicates over item state, socket data, and joined items.

use super::JoinedItem;
use crate::manifest::{ItemDefinition, Manifest};
use crate::profile::{Character, ItemState, PlugObjectivesComponent, SocketsComponent};
use crate::reference::{
    PLUG_CATEGORY_CRAFTED_FRAME, PLUG_CATEGORY_DEEPSIGHT_MEMORY, PLUG_CATEGORY_FRAMES,
    TIER_TYPE_COMMON,
};

/// Enhanced traits needed before a weapon counts as masterworked
const ENHANCED_TRAITS_FOR_MASTERWORK: usize = 2;

/// Definitions of the plugs in enabled sockets
fn enabled_plugs<'a>(
    sockets: Option<&'a SocketsComponent>,
    manifest: &'a Manifest,
) -> impl Iterator<Item = &'a ItemDefinition> + 'a {
    sockets
        .into_iter()
        .flat_map(|s| s.sockets.iter())
        .filter(|socket| socket.is_enabled)
        .filter_map(|socket| socket.plug_hash)
        .filter_map(move |hash| manifest.item(hash))
}

/// Masterwork state bit, or a weapon carrying at least two enhanced traits
/// (crafted and enhanced weapons do not always set the bit).
pub fn is_masterwork(
    state: ItemState,
    definition: &ItemDefinition,
    sockets: Option<&SocketsComponent>,
    manifest: &Manifest,
) -> bool {
    if state.is_masterwork() {
        return true;
    }
    if !definition.is_weapon() {
        return false;
    }

    let enhanced = enabled_plugs(sockets, manifest)
        .filter(|plug| {
            plug.has_plug_category(PLUG_CATEGORY_FRAMES)
                && plug.tier_type() == Some(TIER_TYPE_COMMON)
        })
        .count();
    enhanced >= ENHANCED_TRAITS_FOR_MASTERWORK
}

/// A crafted weapon always has its frame identifier plug enabled
pub fn is_crafted(sockets: Option<&SocketsComponent>, manifest: &Manifest) -> bool {
    enabled_plugs(sockets, manifest).any(|plug| plug.has_plug_category(PLUG_CATEGORY_CRAFTED_FRAME))
}

/// Deepsight memory plug whose extraction objective is still running
pub fn has_incomplete_deepsight_resonance(
    sockets: Option<&SocketsComponent>,
    plug_objectives: Option<&PlugObjectivesComponent>,
    manifest: &Manifest,
) -> bool {
    let (Some(sockets), Some(plug_objectives)) = (sockets, plug_objectives) else {
        return false;
    };

    sockets
        .sockets
        .iter()
        .filter_map(|socket| socket.plug_hash)
        .filter(|hash| {
            manifest
                .item(*hash)
                .is_some_and(|plug| plug.has_plug_category(PLUG_CATEGORY_DEEPSIGHT_MEMORY))
        })
        .any(|hash| {
            plug_objectives
                .objectives_per_plug
                .get(&hash)
                .is_some_and(|objectives| objectives.iter().any(|o| !o.complete))
        })
}

/// Whether a character could wear or wield the item.
///
/// Only a known class mismatch rules an item out. Redacted definitions may
/// hide the real restriction, so they stay eligible. The instance's own
/// `canEquip` flag is not consulted: it is false for vault items
/// (`cannotEquipReason` 16) and for many transient reasons that do not
/// matter when planning gear.
pub fn is_equippable_by_character(item: &JoinedItem, character: &Character) -> bool {
    !(item.class_type.is_restricted()
        && item.class_type != character.class_type
        && !item.is_redacted)
}
