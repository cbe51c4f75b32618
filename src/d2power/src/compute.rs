//! Power computation entry point
//!
//! Runs the full pipeline for one profile snapshot: join every owned item,
//! then for each character (and once for the whole account) score the
//! eligible items, select the best per slot, repair unique-equip conflicts,
//! and aggregate the picks into power numbers.

use crate::deepsight::{deepsight_items, DeepsightEntry};
use crate::items::{is_equippable_by_character, join_profile_items, JoinedItem, ScoredItem};
use crate::manifest::Manifest;
use crate::power::{potential_power, summarize, DropTier, PowerBySlot, PowerCaps, PowerSummary};
use crate::profile::{Character, ProfileData};
use crate::reference::{ClassType, ItemLocation};
use crate::select::{select, Selection, SlotCandidates, SlotPicks};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("Manifest data is unavailable")]
    ManifestUnavailable,

    #[error("Profile data is unavailable")]
    ProfileUnavailable,

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Selection and power numbers for one item pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPowerResult {
    pub top_items_by_slot: SlotPicks,
    pub unrestricted_top_items_by_slot: SlotPicks,
    pub power: PowerSummary,
    pub unrestricted_power: PowerSummary,
    /// Overall power reachable by infusing the top items
    pub potential_overall_power: u32,
    pub next_drop_tier: DropTier,
    /// Equip labels still used twice in `top_items_by_slot`
    pub unresolved_conflicts: Vec<String>,
}

impl SlotPowerResult {
    fn from_selection(selection: Selection, fallback: u32, caps: &PowerCaps) -> Self {
        let slot_power = |picks: &SlotPicks| {
            PowerBySlot::from_partial(picks.iter().map(|(slot, p)| (*slot, p.power())), fallback)
        };
        let top_power = slot_power(&selection.top_items);
        let power = summarize(&top_power);
        let unrestricted_power = summarize(&slot_power(&selection.unrestricted_top_items));

        Self {
            top_items_by_slot: selection.top_items,
            unrestricted_top_items_by_slot: selection.unrestricted_top_items,
            power,
            unrestricted_power,
            potential_overall_power: potential_power(&top_power, caps.soft_cap),
            next_drop_tier: caps.next_drop_tier(power.overall_power),
            unresolved_conflicts: selection.unresolved_conflicts,
        }
    }
}

/// Power result for one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterPowerResult {
    pub character_id: String,
    pub class_type: ClassType,
    /// Power reported by the API, artifact bonus included
    pub light: u32,
    #[serde(flatten)]
    pub result: SlotPowerResult,
    pub overall_power_with_artifact: u32,
    /// Some eligible item is redacted, so numbers may be off
    pub has_redacted_items: bool,
    /// A winning item must first be pulled from the postmaster
    pub has_postmaster_top_items: bool,
}

impl CharacterPowerResult {
    /// Winning items of the equippable combination, in slot order
    pub fn top_items(&self) -> impl Iterator<Item = &ScoredItem> {
        self.result.top_items_by_slot.values()
    }
}

/// Account-wide values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalResult {
    /// Best gear across all characters, ignoring class restrictions
    pub account_power: SlotPowerResult,
    pub artifact_power: u32,
    pub deepsight_items: Vec<DeepsightEntry>,
    pub response_minted_timestamp: Option<DateTime<Utc>>,
}

/// Output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedData {
    pub global: GlobalResult,
    pub characters: BTreeMap<String, CharacterPowerResult>,
}

impl ComputedData {
    pub fn character(&self, character_id: &str) -> Option<&CharacterPowerResult> {
        self.characters.get(character_id)
    }

    pub fn to_json(&self) -> Result<String, ComputeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Compute power data with the default season caps
pub fn compute_character_data(
    manifest: &Manifest,
    profile: &ProfileData,
) -> Result<ComputedData, ComputeError> {
    compute_with_caps(manifest, profile, &PowerCaps::default())
}

/// Compute power data for every character and for the account
pub fn compute_with_caps(
    manifest: &Manifest,
    profile: &ProfileData,
    caps: &PowerCaps,
) -> Result<ComputedData, ComputeError> {
    if manifest.is_empty() {
        return Err(ComputeError::ManifestUnavailable);
    }
    if profile.is_empty() {
        return Err(ComputeError::ProfileUnavailable);
    }

    let items = join_profile_items(manifest, profile);
    let artifact_power = profile.artifact_power();
    tracing::debug!(
        joined = items.len(),
        characters = profile.characters.len(),
        "joined profile items"
    );

    let characters = profile
        .characters
        .iter()
        .map(|(id, character)| {
            let result = character_power(character, &items, profile, caps, artifact_power);
            (id.clone(), result)
        })
        .collect();

    let global = GlobalResult {
        account_power: account_power(&items, profile, caps, artifact_power),
        artifact_power,
        deepsight_items: deepsight_items(&items, manifest, profile),
        response_minted_timestamp: profile.response_minted_timestamp,
    };

    Ok(ComputedData { global, characters })
}

fn character_power(
    character: &Character,
    items: &[JoinedItem],
    profile: &ProfileData,
    caps: &PowerCaps,
    artifact_power: u32,
) -> CharacterPowerResult {
    let priority = profile.equipped_instance_ids(&character.character_id);
    let eligible: Vec<&JoinedItem> = items
        .iter()
        .filter(|item| item.is_selectable() && is_equippable_by_character(item, character))
        .collect();
    let has_redacted_items = eligible.iter().any(|item| item.is_redacted);

    let candidates = SlotCandidates::group(
        eligible
            .into_iter()
            .map(|item| ScoredItem::new(item.clone(), &priority)),
    );
    let fallback = character.light.saturating_sub(artifact_power);
    let result = SlotPowerResult::from_selection(select(&candidates), fallback, caps);

    let has_postmaster_top_items = result
        .top_items_by_slot
        .values()
        .any(|pick| pick.item.location == ItemLocation::Postmaster);

    tracing::debug!(
        character = %character.character_id,
        class = %character.class_type,
        overall = result.power.overall_power,
        unrestricted = result.unrestricted_power.overall_power,
        potential = result.potential_overall_power,
        "computed character power"
    );

    CharacterPowerResult {
        character_id: character.character_id.clone(),
        class_type: character.class_type,
        light: character.light,
        overall_power_with_artifact: result.power.overall_power + artifact_power,
        result,
        has_redacted_items,
        has_postmaster_top_items,
    }
}

fn account_power(
    items: &[JoinedItem],
    profile: &ProfileData,
    caps: &PowerCaps,
    artifact_power: u32,
) -> SlotPowerResult {
    let no_priority = HashSet::new();
    let candidates = SlotCandidates::group(
        items
            .iter()
            .filter(|item| item.is_selectable())
            .map(|item| ScoredItem::new(item.clone(), &no_priority)),
    );
    let fallback = profile.max_character_light().saturating_sub(artifact_power);
    SlotPowerResult::from_selection(select(&candidates), fallback, caps)
}
