//! Configuration type definitions

use crate::format::OutputFormat;
use crate::graph::GraphMode;
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up by [`Config::discover`](super::Config::discover)
pub const CONFIG_FILE_NAME: &str = "wgraph.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Graph construction settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Construction mode; unset means each command picks its own default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<GraphMode>,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}
