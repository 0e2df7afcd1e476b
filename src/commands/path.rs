//! Shortest path command
use std::time::Instant;

use wgraph_core::error::Result;
use wgraph_core::graph::{shortest_path, GraphMode, Path, Vertex};

use super::Context;
use crate::cli::GraphFiles;
use crate::output_by_format;

/// Execute the path command
pub fn execute(ctx: &Context, files: &GraphFiles, from: &str, to: &str) -> Result<()> {
    let start = Instant::now();
    let graph = ctx.load_graph(files, GraphMode::Directed)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    let from = Vertex::new(from);
    let to = Vertex::new(to);
    let result = shortest_path(&graph, &from, &to)?;
    tracing::debug!(elapsed = ?start.elapsed(), found = result.is_some(), "shortest_path");

    output_by_format!(ctx.format,
        json => { output_path_json(&from, &to, result.as_ref())? },
        human => { output_path_human(&from, &to, result.as_ref()) },
        records => { output_path_records(&from, &to, result.as_ref()) }
    );

    Ok(())
}

fn output_path_json(from: &Vertex, to: &Vertex, result: Option<&Path>) -> Result<()> {
    let output = serde_json::json!({
        "from": from,
        "to": to,
        "found": result.is_some(),
        "vertices": result.map(|p| p.vertices.as_slice()).unwrap_or_default(),
        "cost": result.map(|p| p.cost),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_path_human(from: &Vertex, to: &Vertex, result: Option<&Path>) {
    match result {
        Some(path) => {
            println!("{}", path);
            println!("cost: {}", path.cost);
        }
        None => println!("no path from {} to {}", from, to),
    }
}

fn output_path_records(from: &Vertex, to: &Vertex, result: Option<&Path>) {
    let cost = result.map_or_else(|| "-".to_string(), |p| p.cost.to_string());
    let hops = result.map_or_else(|| "-".to_string(), |p| p.hops().to_string());
    println!(
        "H wgraph=1 records=1 mode=path from={} to={} found={} cost={} hops={}",
        from,
        to,
        result.is_some(),
        cost,
        hops
    );
    if let Some(path) = result {
        for vertex in &path.vertices {
            println!("V {}", vertex);
        }
    }
}
