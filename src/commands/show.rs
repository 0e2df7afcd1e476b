//! Graph inspection command
use wgraph_core::error::Result;
use wgraph_core::graph::{Graph, GraphMode, Vertex, Weight};

use super::{sorted_edges, sorted_vertices, Context};
use crate::cli::GraphFiles;
use crate::output_by_format;

/// Execute the show command
pub fn execute(ctx: &Context, files: &GraphFiles) -> Result<()> {
    let graph = ctx.load_graph(files, GraphMode::Directed)?;

    output_by_format!(ctx.format,
        json => { output_show_json(&graph)? },
        human => { output_show_human(&graph)? },
        records => { output_show_records(&graph) }
    );

    Ok(())
}

/// Outgoing neighbors of `vertex` sorted by label
fn sorted_neighbors<'a>(graph: &'a Graph, vertex: &Vertex) -> Result<Vec<(&'a Vertex, Weight)>> {
    let mut neighbors: Vec<(&Vertex, Weight)> = graph.neighbors(vertex)?.collect();
    neighbors.sort();
    Ok(neighbors)
}

fn output_show_json(graph: &Graph) -> Result<()> {
    let output = serde_json::json!({
        "mode": graph.mode(),
        "vertices": sorted_vertices(graph),
        "edges": sorted_edges(graph),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_show_human(graph: &Graph) -> Result<()> {
    println!(
        "{} graph: {} vertices, {} edges",
        graph.mode(),
        graph.vertex_count(),
        graph.edge_count()
    );
    for vertex in sorted_vertices(graph) {
        let neighbors = sorted_neighbors(graph, vertex)?;
        if neighbors.is_empty() {
            println!("{}", vertex);
        } else {
            let parts: Vec<String> = neighbors
                .iter()
                .map(|(neighbor, weight)| format!("{} ({})", neighbor, weight))
                .collect();
            println!("{} -> {}", vertex, parts.join(", "));
        }
    }
    Ok(())
}

fn output_show_records(graph: &Graph) {
    println!(
        "H wgraph=1 records=1 mode=show graph={} vertices={} edges={}",
        graph.mode(),
        graph.vertex_count(),
        graph.edge_count()
    );
    for vertex in sorted_vertices(graph) {
        println!("V {}", vertex);
    }
    for edge in sorted_edges(graph) {
        println!("E {} {} {}", edge.source, edge.destination, edge.weight);
    }
}
