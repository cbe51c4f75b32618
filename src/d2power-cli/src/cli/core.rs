//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "d2power")]
#[command(about = "Destiny 2 power calculator", long_about = None)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Manifest and profile sources shared by the compute commands
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Path to manifest JSON (uses configured default if not provided)
    #[arg(short, long, env = "D2POWER_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Path to profile JSON (configured default, then stdin)
    #[arg(short, long, env = "D2POWER_PROFILE")]
    pub profile: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show power per character and account-wide
    #[command(visible_alias = "p")]
    Power {
        #[command(flatten)]
        input: InputArgs,

        /// Only show this character
        #[arg(short, long)]
        character: Option<String>,
    },

    /// Show the winning item per slot for a character
    #[command(visible_alias = "i")]
    Items {
        #[command(flatten)]
        input: InputArgs,

        /// Character id (defaults to the first character)
        #[arg(short, long)]
        character: Option<String>,

        /// Show the unrestricted picks (any number of exotics)
        #[arg(short, long)]
        unrestricted: bool,
    },

    /// List weapons with unfinished deepsight resonance
    #[command(visible_alias = "d")]
    Deepsight {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default manifest path
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Set default profile path
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Override the soft cap
        #[arg(long)]
        soft_cap: Option<u32>,

        /// Override the powerful cap
        #[arg(long)]
        powerful_cap: Option<u32>,

        /// Override the pinnacle cap
        #[arg(long)]
        pinnacle_cap: Option<u32>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
