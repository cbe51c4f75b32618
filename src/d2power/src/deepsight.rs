//! Deepsight tracking
//!
//! Lists weapons whose deepsight resonance has not been extracted yet,
//! together with the progress of the matching weapon pattern record.

use crate::items::JoinedItem;
use crate::manifest::Manifest;
use crate::profile::ProfileData;
use serde::{Deserialize, Serialize};

/// Progress of a weapon pattern record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternProgress {
    pub record_hash: u32,
    pub progress: u32,
    pub completion_value: u32,
    pub complete: bool,
}

/// One weapon with an unfinished deepsight resonance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepsightEntry {
    pub instance_id: String,
    pub item_hash: u32,
    pub name: String,
    pub owner: Option<String>,
    pub pattern: Option<PatternProgress>,
}

/// Pattern progress for a weapon name, from the first objective of the
/// record named after it
fn pattern_progress(
    name: &str,
    manifest: &Manifest,
    profile: &ProfileData,
) -> Option<PatternProgress> {
    let (record_hash, _) = manifest.record_by_name(name)?;
    let objective = profile.record(record_hash)?.objectives.first()?;
    Some(PatternProgress {
        record_hash,
        progress: objective.progress.unwrap_or(0),
        completion_value: objective.completion_value,
        complete: objective.complete,
    })
}

/// Collect deepsight entries from joined items, in item order
pub fn deepsight_items(
    items: &[JoinedItem],
    manifest: &Manifest,
    profile: &ProfileData,
) -> Vec<DeepsightEntry> {
    items
        .iter()
        .filter(|item| item.has_incomplete_deepsight)
        .map(|item| DeepsightEntry {
            instance_id: item.instance_id.clone(),
            item_hash: item.item_hash,
            name: item.name.clone(),
            owner: item.owner.clone(),
            pattern: pattern_progress(&item.name, manifest, profile),
        })
        .collect()
}
