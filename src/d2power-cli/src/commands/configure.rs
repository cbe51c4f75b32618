//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up d2power CLI defaults.

use crate::config::{CapOverrides, Config};
use anyhow::Result;
use std::path::PathBuf;

/// Values passed to `configure`
#[derive(Debug, Default)]
pub struct ConfigureArgs {
    pub manifest: Option<PathBuf>,
    pub profile: Option<PathBuf>,
    pub caps: CapOverrides,
    pub show: bool,
}

/// Handle the configure command
pub fn handle(args: ConfigureArgs) -> Result<()> {
    let mut config = Config::load()?;

    if args.show {
        show_config(&config);
        return Ok(());
    }

    if !apply(&mut config, args) {
        show_usage();
        return Ok(());
    }

    config.save()?;
    println!("Configuration updated");
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Merge the given values into the config. Returns false when nothing was set.
fn apply(config: &mut Config, args: ConfigureArgs) -> bool {
    let mut changed = false;

    if let Some(path) = args.manifest {
        config.manifest_path = Some(path);
        changed = true;
    }
    if let Some(path) = args.profile {
        config.profile_path = Some(path);
        changed = true;
    }

    let caps = args.caps;
    for (value, target) in [
        (caps.soft_cap, &mut config.caps.soft_cap),
        (caps.powerful_cap, &mut config.caps.powerful_cap),
        (caps.pinnacle_cap, &mut config.caps.pinnacle_cap),
    ] {
        if value.is_some() {
            *target = value;
            changed = true;
        }
    }

    changed
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.manifest_path {
        Some(path) => println!("Manifest: {}", path.display()),
        None => println!("No manifest configured"),
    }
    match &config.profile_path {
        Some(path) => println!("Profile: {}", path.display()),
        None => println!("No profile configured (reads stdin)"),
    }

    let caps = config.power_caps();
    println!(
        "Caps: soft {}, powerful {}, pinnacle {}",
        caps.soft_cap, caps.powerful_cap, caps.pinnacle_cap
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: d2power configure --manifest PATH [--profile PATH]");
    println!("   or: d2power configure --soft-cap N --powerful-cap N --pinnacle-cap N");
    println!("   or: d2power configure --show");
}
