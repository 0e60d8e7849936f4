mod catalog;
mod cli;
mod commands;
mod config;
mod organize;
mod placement;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use commands::build::BuildArgs;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build {
            catalog,
            dest,
            source,
            dry_run,
            print_structure,
            json,
        } => {
            commands::build::run(BuildArgs {
                catalog: &catalog,
                dest: dest.as_deref(),
                source: source.as_deref(),
                dry_run,
                print_structure,
                json,
                verbose: cli.verbose,
                quiet: cli.quiet,
            })?;
        }
        Commands::Summarize { catalog, json } => {
            commands::summarize::run(&catalog, json, cli.quiet)?;
        }
    }

    Ok(())
}
