//! Deepsight command handler

use anyhow::{Context, Result};
use d2power::DeepsightEntry;
use std::fmt::Write;

use super::emit;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::file_io::load_inputs;

/// Handle the deepsight command
pub fn handle(input: &InputArgs) -> Result<()> {
    let config = Config::load()?;
    let (manifest, profile) = load_inputs(input, &config)?;
    let data = d2power::compute_with_caps(&manifest, &profile, &config.power_caps())
        .context("Failed to compute power data")?;

    let entries = &data.global.deepsight_items;
    emit(input, entries, || render(entries))
}

fn render(entries: &[DeepsightEntry]) -> String {
    if entries.is_empty() {
        return "No unfinished deepsight weapons\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let owner = entry.owner.as_deref().unwrap_or("vault");
        let _ = write!(out, "{} ({})", entry.name, owner);
        match &entry.pattern {
            Some(p) if p.complete => {
                let _ = write!(out, "  pattern complete");
            }
            Some(p) => {
                let _ = write!(out, "  pattern {}/{}", p.progress, p.completion_value);
            }
            None => {}
        }
        out.push('\n');
    }
    out
}
