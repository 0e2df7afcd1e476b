//! Command dispatch logic for wgraph
use std::env;
use std::time::Instant;

use wgraph_core::config::Config;
use wgraph_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands::{self, Context};

/// Load configuration from `--config`, or discover it in the working directory
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };
    tracing::debug!(explicit = cli.config.is_some(), ?config, "resolve_config");
    Ok(config)
}

/// Run one subcommand against the resolved settings
pub fn run(ctx: &Context, command: &Commands, start: Instant) -> Result<()> {
    tracing::debug!(elapsed = ?start.elapsed(), format = %ctx.format, "dispatch");

    match command {
        Commands::Path { files, from, to } => commands::path::execute(ctx, files, from, to),
        Commands::Mst { files } => commands::mst::execute(ctx, files),
        Commands::Show { files } => commands::show::execute(ctx, files),
    }
}
