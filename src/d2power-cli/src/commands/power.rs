//! Power command handler
//!
//! Runs the full pipeline and prints power numbers per character and for
//! the account.

use anyhow::{bail, Context, Result};
use d2power::{CharacterPowerResult, ComputedData, SlotPowerResult};
use std::fmt::Write;

use super::emit;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::file_io::load_inputs;

/// Handle the power command
pub fn handle(input: &InputArgs, character: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let (manifest, profile) = load_inputs(input, &config)?;
    let data = d2power::compute_with_caps(&manifest, &profile, &config.power_caps())
        .context("Failed to compute power data")?;

    match character {
        Some(id) => {
            let Some(result) = data.character(id) else {
                bail!("Character {} not found in profile", id);
            };
            emit(input, result, || render_character(result))
        }
        None => emit(input, &data, || render(&data)),
    }
}

fn render_power(out: &mut String, result: &SlotPowerResult) {
    let _ = writeln!(
        out,
        "  Power:        {} (avg {:.3}, min {})",
        result.power.overall_power, result.power.average_power, result.power.min_power
    );
    let _ = writeln!(
        out,
        "  Unrestricted: {} (avg {:.3})",
        result.unrestricted_power.overall_power, result.unrestricted_power.average_power
    );
    let _ = writeln!(out, "  Potential:    {}", result.potential_overall_power);
    let _ = writeln!(out, "  Next drops:   {}", result.next_drop_tier);
    if !result.unresolved_conflicts.is_empty() {
        let _ = writeln!(
            out,
            "  Unresolved:   {}",
            result.unresolved_conflicts.join(", ")
        );
    }
}

fn render_character(character: &CharacterPowerResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - light {}",
        character.class_type, character.character_id, character.light
    );
    render_power(&mut out, &character.result);
    let _ = writeln!(
        out,
        "  With artifact: {}",
        character.overall_power_with_artifact
    );
    if character.has_redacted_items {
        let _ = writeln!(out, "  Note: redacted items present, numbers may be off");
    }
    if character.has_postmaster_top_items {
        let _ = writeln!(out, "  Note: a top item is waiting in the postmaster");
    }
    out
}

fn render(data: &ComputedData) -> String {
    let mut out = String::new();
    for character in data.characters.values() {
        out.push_str(&render_character(character));
        out.push('\n');
    }
    let _ = writeln!(out, "Account (artifact +{})", data.global.artifact_power);
    render_power(&mut out, &data.global.account_power);
    out
}
