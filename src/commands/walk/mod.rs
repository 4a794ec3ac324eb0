//! `anansi walk` command - traverse a graph file from a root vertex
//!
//! The graph file maps each vertex to its ordered list of children, in JSON,
//! YAML or TOML. Walks ending at a `--prune` vertex have their subtree
//! skipped; walks ending at a `--remove` vertex have their last edge deleted
//! from the graph, which is printed afterwards in JSON output.

use std::collections::BTreeSet;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::output_by_format_result;
use anansi_core::bail_invalid;
use anansi_core::document::{read_document_text, DocumentKind};
use anansi_core::error::{AnansiError, Result};
use anansi_core::traverse::Order;
use anansi_core::{AdjacencyList, Path as WalkPath, PruningIterator};

/// Resolved options for one traversal
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub root: String,
    pub order: Order,
    pub limit: usize,
    pub prune: BTreeSet<String>,
    pub remove: BTreeSet<String>,
}

/// An edge deleted during the traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedEdge {
    pub from: String,
    pub to: String,
}

/// What a traversal produced
#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub root: String,
    pub order: Order,
    /// Each walk as the vertices it visits, root first
    pub walks: Vec<Vec<String>>,
    /// Whether the limit stopped the traversal early
    pub truncated: bool,
    pub removed: Vec<RemovedEdge>,
    /// The graph after removals
    pub adjacency: AdjacencyList<String>,
}

/// Execute the walk command
#[tracing::instrument(level = "debug", skip(ctx, options), fields(root = %options.root, order = %options.order))]
pub fn execute(ctx: &CommandContext, graph_file: &Path, options: WalkOptions) -> Result<()> {
    let graph = load_graph(graph_file)?;
    let report = traverse(graph, options)?;

    output_by_format_result!(ctx.format(),
        json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok::<(), AnansiError>(())
        },
        human => {
            for walk in &report.walks {
                println!("{}", walk.join(" -> "));
            }
            if !report.removed.is_empty() {
                println!();
                println!("Removed edges:");
                for edge in &report.removed {
                    println!("  {} -> {}", edge.from, edge.to);
                }
            }
            if report.truncated && !ctx.cli.quiet {
                eprintln!("(stopped after {} walks; raise --limit to see more)", report.walks.len());
            }
        }
    )
}

/// Read a vertex-to-children map from a JSON, YAML or TOML file.
pub fn load_graph(path: &Path) -> Result<AdjacencyList<String>> {
    let (kind, content) = read_document_text(path, "graph")?;
    let graph: AdjacencyList<String> = match kind {
        DocumentKind::Json => serde_json::from_str(&content)?,
        DocumentKind::Yaml => serde_yaml::from_str(&content)?,
        DocumentKind::Toml => toml::from_str(&content)?,
    };
    tracing::debug!(path = %path.display(), edges = graph.edge_count(), "loaded graph");
    Ok(graph)
}

/// Run one traversal over `graph`, applying prunes and removals as walks
/// are produced.
pub fn traverse(mut graph: AdjacencyList<String>, options: WalkOptions) -> Result<WalkReport> {
    let WalkOptions {
        root,
        order,
        limit,
        prune,
        remove,
    } = options;

    if !graph.contains(&root) {
        return Err(AnansiError::not_found("vertex", &root));
    }
    if order.needs_finite_depth() && graph.reaches_cycle(&root) {
        bail_invalid!(
            "graph",
            format!("a cycle is reachable from {root}, which {order} cannot traverse")
        );
    }

    let started = Instant::now();
    let mut walks = Vec::new();
    let mut removed = Vec::new();
    let truncated = {
        let mut traversal = order.traverse(root.clone(), &mut graph);
        while walks.len() < limit {
            let Some(path) = traversal.next() else {
                break;
            };
            let reached = path.to_vertex();
            let mut consumed = false;
            if remove.contains(reached) {
                if let Some(step) = path.last_step() {
                    traversal.remove()?;
                    consumed = true;
                    removed.push(RemovedEdge {
                        from: step.from_vertex().clone(),
                        to: step.to_vertex().clone(),
                    });
                } else {
                    tracing::warn!(vertex = %reached, "the root walk has no edge to remove");
                }
            }
            if !consumed && prune.contains(reached) {
                traversal.prune()?;
            }
            walks.push(vertices(&path));
        }
        traversal.has_next()
    };
    anansi_core::trace_time!(started, "traverse", walks = walks.len());

    tracing::debug!(
        %order,
        walks = walks.len(),
        removed = removed.len(),
        truncated,
        "walk complete"
    );

    Ok(WalkReport {
        root,
        order,
        walks,
        truncated,
        removed,
        adjacency: graph,
    })
}

fn vertices(path: &WalkPath<String, ()>) -> Vec<String> {
    std::iter::once(path.from_vertex())
        .chain(path.steps().iter().map(|step| step.to_vertex()))
        .cloned()
        .collect()
}
