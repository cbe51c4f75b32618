//! Command handlers for d2power CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod deepsight;
pub mod items;
pub mod power;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::InputArgs;
use crate::file_io::write_output;

/// Print either the JSON form of `value` or the rendered text
fn emit<T: Serialize>(
    input: &InputArgs,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    let rendered = if input.json {
        let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        json.push('\n');
        json
    } else {
        text()
    };
    write_output(input.output.as_deref(), &rendered)
}
