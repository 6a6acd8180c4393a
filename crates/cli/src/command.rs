use crate::cli::Command;
use crate::config::CliConfig;
use anyhow::{Context, Result};
use essay_graph::{linearize, ArgumentGraph, ArgumentGraphSession, SubgraphExtractor};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;

#[derive(Debug, Serialize)]
struct StatsOutput<'a> {
    nodes: usize,
    edges: usize,
    important_nodes: usize,
    untyped_nodes: usize,
    oevre: &'a str,
}

fn load(path: &Path) -> Result<ArgumentGraph> {
    ArgumentGraph::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn to_json<T: Serialize>(value: &T, config: &CliConfig) -> Result<String> {
    let text = if config.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

pub fn execute(command: &Command, config: &CliConfig) -> Result<String> {
    match command {
        Command::Chunks { document, json } => {
            let argument = load(document)?;
            let chunks = ArgumentGraphSession::new(&argument)
                .with_format(config.statement_format)
                .chunks()?;
            if *json {
                return to_json(&chunks, config);
            }
            let mut out = String::new();
            for (i, chunk) in chunks.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                writeln!(out, "## {}", chunk.node)?;
                for statement in chunk.statements() {
                    writeln!(out, "- {statement}")?;
                }
            }
            Ok(out.trim_end().to_string())
        }
        Command::Subgraph {
            document,
            node,
            direction,
        } => {
            let argument = load(document)?;
            let extractor =
                SubgraphExtractor::new(argument.graph(), argument.important_nodes_ordered());
            let subgraph = extractor.extract(node, (*direction).into())?;
            Ok(linearize(&subgraph, config.statement_format).join("\n"))
        }
        Command::Stats { document } => {
            let argument = load(document)?;
            let stats = ArgumentGraphSession::new(&argument).stats();
            to_json(
                &StatsOutput {
                    nodes: stats.total_nodes,
                    edges: stats.total_edges,
                    important_nodes: stats.important_nodes,
                    untyped_nodes: argument.graph().untyped_nodes().count(),
                    oevre: argument.oevre(),
                },
                config,
            )
        }
        Command::Validate { document } => {
            let argument = load(document)?;
            let untyped = argument.graph().untyped_nodes().count();
            if untyped > 0 {
                log::warn!("{untyped} node(s) have no node_type");
            }
            Ok(format!(
                "ok: {} nodes, {} edges, {} important",
                argument.graph().node_count(),
                argument.graph().edge_count(),
                argument.important_nodes_ordered().len()
            ))
        }
    }
}
