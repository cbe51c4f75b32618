//! I/O helpers for consistent file/stdin/stdout handling

use anyhow::{bail, Context, Result};
use d2power::{Manifest, ProfileData};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::InputArgs;
use crate::config::Config;

/// Read text from a file path or stdin if path is None
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("Failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Write text to a file path or stdout if path is None
pub fn write_output(path: Option<&Path>, data: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("Failed to write {}", p.display())),
        None => io::stdout()
            .write_all(data.as_bytes())
            .context("Failed to write to stdout"),
    }
}

/// Load manifest and profile, falling back to configured paths.
/// The profile is read from stdin when no path is known.
pub fn load_inputs(input: &InputArgs, config: &Config) -> Result<(Manifest, ProfileData)> {
    let Some(manifest_path) = input.manifest.as_ref().or(config.manifest_path.as_ref()) else {
        bail!("No manifest given. Pass --manifest or run: d2power configure --manifest PATH");
    };
    let profile_path = input.profile.as_ref().or(config.profile_path.as_ref());

    let manifest = Manifest::from_json(&read_input(Some(manifest_path))?)
        .with_context(|| format!("Failed to parse manifest {}", manifest_path.display()))?;
    let profile = ProfileData::from_json(&read_input(profile_path.map(|p| p.as_path()))?)
        .context("Failed to parse profile")?;

    tracing::debug!(
        definitions = manifest.items.len(),
        characters = profile.characters.len(),
        "loaded inputs"
    );
    Ok((manifest, profile))
}
