//! wgraph - weighted graph queries from the command line
//!
//! Reads a vertex file and an edge file, builds a graph, and answers
//! shortest-path or minimum-spanning-tree queries against it.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::{dispatch, Context};
use wgraph_core::error::GraphError;
use wgraph_core::logging::LogOptions;

fn main() -> ExitCode {
    let start = Instant::now();
    // Usage errors, --help and --version are reported by clap (exit 2 / 0)
    let cli = Cli::parse();

    let logging = LogOptions {
        verbose: cli.verbose,
        level: cli.log_level.clone(),
        json: cli.log_json,
    };
    if let Err(e) = logging.init() {
        eprintln!("warning: logging disabled: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let context = dispatch::load_config(&cli)
        .map(|config| Context::new(config, cli.format, cli.mode, cli.quiet));

    // Errors follow the output format, including one chosen in wgraph.toml
    let error_format = match &context {
        Ok(ctx) => ctx.format,
        Err(_) => cli.format.unwrap_or_default(),
    };

    match context.and_then(|ctx| dispatch::run(&ctx, &cli.command, start)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, error_format, cli.quiet),
    }
}

/// Print `err` to stderr and turn it into the process exit status
///
/// `--quiet` silences the text form only.
fn report(err: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human | OutputFormat::Records if !quiet => eprintln!("error: {err}"),
        OutputFormat::Human | OutputFormat::Records => {}
    }
    ExitCode::from(err.exit_code() as u8)
}
