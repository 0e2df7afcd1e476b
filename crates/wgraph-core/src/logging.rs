//! Structured logging setup
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `WGRAPH_LOG` (or `RUST_LOG`) replaces the filter built from the flags.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive for wgraph
pub const LOG_ENV: &str = "WGRAPH_LOG";

/// Emit a trace event with the microseconds elapsed since `$start`
#[macro_export]
macro_rules! trace_elapsed {
    ($start:expr, $name:literal $(, $field:ident = $value:expr)* $(,)?) => {
        ::tracing::trace!(
            elapsed_us = $start.elapsed().as_micros() as u64,
            $($field = $value,)*
            $name
        )
    };
}

/// Logging choices made on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// `--verbose`: debug level for the wgraph crates
    pub verbose: bool,
    /// `--log-level`: a bare level or a full filter directive
    pub level: Option<String>,
    /// `--log-json`: one JSON object per event, with span open/close events
    pub json: bool,
}

impl LogOptions {
    /// Filter directive implied by the flags alone
    ///
    /// A bare level such as `debug` is scoped to the wgraph crates; a
    /// directive containing `=` is used as given.
    pub fn directive(&self) -> String {
        let level = match self.level.as_deref() {
            Some(directive) if directive.contains('=') => return directive.to_string(),
            Some(level) => level,
            None if self.verbose => "debug",
            None => "warn",
        };
        format!("wgraph={level},wgraph_core={level}")
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    /// Install the global subscriber
    ///
    /// Fails only if a global subscriber is already installed.
    pub fn init(&self) -> Result<(), TryInitError> {
        let output = if self.json {
            fmt::layer()
                .json()
                .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
                .with_writer(io::stderr)
                .boxed()
        } else {
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_ansi(false)
                .with_writer(io::stderr)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(output)
            .with(self.filter())
            .try_init()
    }
}
