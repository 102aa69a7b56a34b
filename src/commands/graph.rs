//! `borderpath graph` command - dump the adjacency graph
//!
//! The JSON form is the adjacency-list shape accepted by `--adjacency`, so a
//! geometric build can be exported once and reused.

use tracing::{debug, warn};

use crate::commands::dispatch::CommandContext;
use crate::output_by_format;
use borderpath_core::error::Result;
use borderpath_core::records::{format_edge_record, format_header};

/// Execute the graph command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let finder = ctx.finder()?;
    let graph = finder.graph()?;
    debug!(
        countries = graph.node_count(),
        borders = graph.border_count(),
        edges = graph.edge_count(),
        elapsed = ?ctx.start.elapsed(),
        "graph"
    );

    let unavailable: Vec<_> = graph.unavailable().collect();
    if !unavailable.is_empty() && !ctx.cli.quiet {
        warn!(
            count = unavailable.len(),
            "countries without adjacency data are left out of the export"
        );
    }

    output_by_format!(ctx.cli.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&graph.to_adjacency_list())?
            );
            Ok(())
        },
        human => {
            for (id, neighbors) in graph.iter() {
                if let Some(reason) = graph.unavailable_reason(id.as_str()) {
                    println!("{}: (unavailable: {})", id, reason);
                    continue;
                }
                let list: Vec<&str> = neighbors.iter().map(|n| n.as_str()).collect();
                println!("{}: {}", id, list.join(", "));
            }
            if !ctx.cli.quiet {
                println!();
                println!(
                    "{} countries, {} borders, {} unavailable",
                    graph.node_count(),
                    graph.border_count(),
                    unavailable.len()
                );
            }
            Ok(())
        },
        records => {
            println!(
                "{}",
                format_header(
                    "graph",
                    &[
                        ("countries", graph.node_count()),
                        ("borders", graph.border_count()),
                        ("unavailable", unavailable.len()),
                    ]
                )
            );
            for (id, neighbors) in graph.iter() {
                for n in neighbors
                    .iter()
                    .filter(|n| *n > id || !graph.has_edge(n.as_str(), id.as_str()))
                {
                    println!("{}", format_edge_record(id, n));
                }
            }
            Ok(())
        }
    )
}
