use crate::error::{Result, ValidationError};
use crate::session::{ArgumentChunk, ArgumentGraphSession};
use crate::types::{EdgeSpec, EssayGraph, NodeSpec};

/// An essay's argument graph plus its ordered important nodes and style
///
/// Built once and read-only afterwards; every important node is guaranteed
/// to exist in the graph.
#[derive(Debug, Clone)]
pub struct ArgumentGraph {
    graph: EssayGraph,
    important_nodes_ordered: Vec<String>,
    oevre: String,
}

impl ArgumentGraph {
    /// Wrap an already-built graph, validating the important node order
    pub fn new(
        graph: EssayGraph,
        important_nodes_ordered: Vec<String>,
        oevre: impl Into<String>,
    ) -> Result<Self> {
        validate_important_nodes(&graph, &important_nodes_ordered)?;
        Ok(Self {
            graph,
            important_nodes_ordered,
            oevre: oevre.into(),
        })
    }

    /// Build from extractor output: all nodes first, then all edges
    pub fn from_parts(
        nodes: &[NodeSpec],
        edges: &[EdgeSpec],
        important_nodes_ordered: Vec<String>,
        oevre: impl Into<String>,
    ) -> Result<Self> {
        let mut graph = EssayGraph::new();
        for node in nodes {
            graph.add_node_spec(node)?;
        }
        for edge in edges {
            graph.add_edge_spec(edge)?;
        }

        log::info!(
            "Built argument graph: {} nodes, {} edges, {} important",
            graph.node_count(),
            graph.edge_count(),
            important_nodes_ordered.len()
        );

        Self::new(graph, important_nodes_ordered, oevre)
    }

    #[must_use]
    pub const fn graph(&self) -> &EssayGraph {
        &self.graph
    }

    #[must_use]
    pub fn important_nodes_ordered(&self) -> &[String] {
        &self.important_nodes_ordered
    }

    #[must_use]
    pub fn oevre(&self) -> &str {
        &self.oevre
    }

    /// Explanation chunks for every important node, in essay order
    pub fn chunks(&self) -> Result<Vec<ArgumentChunk>> {
        ArgumentGraphSession::new(self).chunks()
    }

    /// Flat form of [`chunks`](Self::chunks): upstream then downstream
    /// statements per important node
    pub fn traverse(&self) -> Result<Vec<Vec<String>>> {
        ArgumentGraphSession::new(self).traverse()
    }
}

// Repeated ids are allowed; each entry still gets its own chunk.
fn validate_important_nodes(graph: &EssayGraph, important: &[String]) -> Result<()> {
    match important.iter().find(|id| !graph.contains_node(id)) {
        Some(id) => Err(ValidationError::UnknownImportantNode(id.clone()).into()),
        None => Ok(()),
    }
}
