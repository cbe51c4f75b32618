//! CLI argument definitions for d2power
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{Cli, Commands, InputArgs};
