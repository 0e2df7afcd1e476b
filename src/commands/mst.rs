//! Minimum spanning forest command
use std::time::Instant;

use wgraph_core::error::Result;
use wgraph_core::graph::{minimum_spanning_forest, Graph, GraphMode, SpanningForest};

use super::{bracketed, sorted_edges, sorted_vertices, Context};
use crate::cli::GraphFiles;
use crate::output_by_format;

/// Execute the mst command
pub fn execute(ctx: &Context, files: &GraphFiles) -> Result<()> {
    let start = Instant::now();
    let graph = ctx.load_graph(files, GraphMode::Undirected)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    let forest = minimum_spanning_forest(&graph)?;
    tracing::debug!(elapsed = ?start.elapsed(), accepted = forest.edges.len(), "spanning_forest");

    output_by_format!(ctx.format,
        json => { output_mst_json(&graph, &forest)? },
        human => { output_mst_human(ctx, &graph, &forest) },
        records => { output_mst_records(&graph, &forest) }
    );

    Ok(())
}

fn output_mst_json(graph: &Graph, forest: &SpanningForest) -> Result<()> {
    let output = serde_json::json!({
        "mode": graph.mode(),
        "vertices": sorted_vertices(graph),
        "edges": sorted_edges(graph),
        "forest": forest.edges,
        "total_weight": forest.total_weight,
        "components": forest.components,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_mst_human(ctx: &Context, graph: &Graph, forest: &SpanningForest) {
    if !ctx.quiet {
        println!("Vertices are {}", bracketed(&sorted_vertices(graph)));
        println!("Edges are {}", bracketed(&sorted_edges(graph)));
    }

    let accepted: Vec<String> = forest.edges.iter().map(ToString::to_string).collect();
    println!("{}", accepted.join(" "));
    println!("total weight: {}", forest.total_weight);
    println!("components: {}", forest.components);
}

fn output_mst_records(graph: &Graph, forest: &SpanningForest) {
    println!(
        "H wgraph=1 records=1 mode=mst vertices={} edges={} accepted={} total_weight={} components={}",
        graph.vertex_count(),
        graph.edge_count(),
        forest.edges.len(),
        forest.total_weight,
        forest.components
    );
    for edge in &forest.edges {
        println!("E {} {} {}", edge.source, edge.destination, edge.weight);
    }
}
