use wgraph_core::format::OutputFormat;
use wgraph_core::graph::GraphMode;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph construction mode from string
pub fn parse_mode(s: &str) -> std::result::Result<GraphMode, String> {
    s.parse::<GraphMode>().map_err(|e| e.to_string())
}
