use crate::argument::ArgumentGraph;
use crate::error::{GraphError, Result};
use crate::types::{EdgeType, EssayGraph, NodeType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Portable form of an [`ArgumentGraph`]
///
/// ```json
/// {
///   "graph": {
///     "directed": true,
///     "multigraph": false,
///     "nodes": [{"id": "A", "node_type": "Claim"}],
///     "links": [{"source": "e", "target": "A", "edge_type": "Supports"}]
///   },
///   "important_nodes_ordered": ["A"],
///   "oevre": "measured"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentGraphDocument {
    pub graph: NodeLinkGraph,
    pub important_nodes_ordered: Vec<String>,
    pub oevre: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeLinkGraph {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub multigraph: bool,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
    // Optional on the wire so that a missing type is reported as malformed
    // rather than as a generic decode failure.
    #[serde(default)]
    pub edge_type: Option<String>,
}

const fn default_directed() -> bool {
    true
}

impl ArgumentGraphDocument {
    /// Rebuild the graph, validating every token and important id
    pub fn into_argument_graph(self) -> Result<ArgumentGraph> {
        let Self {
            graph: doc,
            important_nodes_ordered,
            oevre,
        } = self;

        if !doc.directed {
            return Err(GraphError::MalformedGraph(
                "document describes an undirected graph".to_string(),
            ));
        }
        if doc.multigraph {
            return Err(GraphError::MalformedGraph(
                "multigraph documents are not supported".to_string(),
            ));
        }

        let mut graph = EssayGraph::new();
        for node in &doc.nodes {
            match &node.node_type {
                Some(token) => {
                    let node_type: NodeType = token.parse()?;
                    graph.add_node(&node.id, node_type)?;
                }
                None => {
                    log::warn!("Node {:?} has no node_type; loading it untyped", node.id);
                    graph.add_untyped_node(&node.id)?;
                }
            }
        }
        for link in &doc.links {
            let token = link.edge_type.as_deref().ok_or_else(|| {
                GraphError::MalformedGraph(format!(
                    "link {:?} -> {:?} has no edge_type",
                    link.source, link.target
                ))
            })?;
            let edge_type: EdgeType = token.parse()?;
            graph.add_edge(&link.source, &link.target, edge_type)?;
        }

        ArgumentGraph::new(graph, important_nodes_ordered, oevre)
    }
}

impl From<&ArgumentGraph> for ArgumentGraphDocument {
    fn from(argument: &ArgumentGraph) -> Self {
        let graph = argument.graph();
        let nodes = graph
            .nodes()
            .map(|node| NodeRecord {
                id: node.id.clone(),
                node_type: node.node_type.map(String::from),
            })
            .collect();
        let links = graph
            .edges()
            .map(|(source, target, edge_type)| LinkRecord {
                source: source.to_string(),
                target: target.to_string(),
                edge_type: Some(edge_type.into()),
            })
            .collect();

        Self {
            graph: NodeLinkGraph {
                directed: true,
                multigraph: false,
                nodes,
                links,
            },
            important_nodes_ordered: argument.important_nodes_ordered().to_vec(),
            oevre: argument.oevre().to_string(),
        }
    }
}

impl ArgumentGraph {
    #[must_use]
    pub fn to_document(&self) -> ArgumentGraphDocument {
        ArgumentGraphDocument::from(self)
    }

    pub fn from_document(document: ArgumentGraphDocument) -> Result<Self> {
        document.into_argument_graph()
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: ArgumentGraphDocument = serde_json::from_str(json)?;
        document.into_argument_graph()
    }

    /// Write the document to `path` via a temporary sibling file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(&self.to_document())?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, bytes)?;
        std::fs::rename(&tmp, path)?;
        log::info!("Saved argument graph to {}", path.display());
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let document: ArgumentGraphDocument = serde_json::from_slice(&bytes)?;
        let argument = document.into_argument_graph()?;
        log::info!(
            "Loaded argument graph from {}: {} nodes, {} edges",
            path.display(),
            argument.graph().node_count(),
            argument.graph().edge_count()
        );
        Ok(argument)
    }
}
