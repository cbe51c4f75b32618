//! Items command handler

use anyhow::{Context, Result};
use d2power::{CharacterPowerResult, ItemLocation, Slot, SlotPicks};
use std::fmt::Write;

use super::emit;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::file_io::load_inputs;

/// Handle the items command
pub fn handle(input: &InputArgs, character: Option<&str>, unrestricted: bool) -> Result<()> {
    let config = Config::load()?;
    let (manifest, profile) = load_inputs(input, &config)?;
    let data = d2power::compute_with_caps(&manifest, &profile, &config.power_caps())
        .context("Failed to compute power data")?;

    let result = match character {
        Some(id) => data.character(id),
        None => data.characters.values().next(),
    }
    .with_context(|| format!("Character {} not found in profile", character.unwrap_or("")))?;

    let picks = picks_for(result, unrestricted);
    emit(input, picks, || render(picks))
}

fn picks_for(result: &CharacterPowerResult, unrestricted: bool) -> &SlotPicks {
    if unrestricted {
        &result.result.unrestricted_top_items_by_slot
    } else {
        &result.result.top_items_by_slot
    }
}

fn render(picks: &SlotPicks) -> String {
    let mut out = String::new();
    for slot in Slot::ALL {
        let Some(pick) = picks.get(&slot) else {
            let _ = writeln!(out, "{:<10} -", slot.name());
            continue;
        };
        let item = &pick.item;
        let mut flags = Vec::new();
        if item.is_exotic() {
            flags.push("exotic");
        }
        if item.is_masterwork {
            flags.push("masterwork");
        }
        if item.location == ItemLocation::Postmaster {
            flags.push("postmaster");
        }
        let _ = write!(
            out,
            "{:<10} {:>5}  {}",
            slot.name(),
            pick.power(),
            item.name
        );
        if !flags.is_empty() {
            let _ = write!(out, " [{}]", flags.join(", "));
        }
        out.push('\n');
    }
    out
}
