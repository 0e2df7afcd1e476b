//! Configuration for wgraph
//!
//! Configuration is read from `wgraph.toml`:
//!
//! ```toml
//! [graph]
//! mode = "undirected"
//!
//! [output]
//! format = "json"
//! ```
//!
//! Command-line flags take precedence over file values, which take
//! precedence over each command's defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::format::OutputFormat;
use crate::graph::GraphMode;

pub use types::{Config, GraphConfig, OutputConfig, CONFIG_FILE_NAME};

impl Config {
    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| GraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), ?config, "load_config");
        Ok(config)
    }

    /// Load `wgraph.toml` from `dir` if it exists, otherwise defaults
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the construction mode: flag, then file, then `fallback`
    pub fn resolve_mode(&self, flag: Option<GraphMode>, fallback: GraphMode) -> GraphMode {
        flag.or(self.graph.mode).unwrap_or(fallback)
    }

    /// Resolve the output format: flag, then file, then human
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or_default()
    }
}
