mod cli;
mod commands;
mod config;
mod file_io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use commands::configure::ConfigureArgs;
use config::CapOverrides;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "d2power=debug" } else { "d2power=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Power { input, character } => {
            commands::power::handle(&input, character.as_deref())?;
        }

        Commands::Items {
            input,
            character,
            unrestricted,
        } => {
            commands::items::handle(&input, character.as_deref(), unrestricted)?;
        }

        Commands::Deepsight { input } => {
            commands::deepsight::handle(&input)?;
        }

        Commands::Configure {
            manifest,
            profile,
            soft_cap,
            powerful_cap,
            pinnacle_cap,
            show,
        } => {
            commands::configure::handle(ConfigureArgs {
                manifest,
                profile,
                caps: CapOverrides {
                    soft_cap,
                    powerful_cap,
                    pinnacle_cap,
                },
                show,
            })?;
        }
    }

    Ok(())
}
