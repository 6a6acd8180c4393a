use crate::error::{Result, ValidationError};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Category of an argument node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NodeType {
    Claim,
    Evidence,
    Example,
}

/// Relation carried by a directed edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EdgeType {
    Supports,
    Refutes,
    /// Motivates the target without logically entailing it
    Suggests,
}

impl NodeType {
    pub const ALL: [Self; 3] = [Self::Claim, Self::Evidence, Self::Example];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "Claim",
            Self::Evidence => "Evidence",
            Self::Example => "Example",
        }
    }
}

impl EdgeType {
    pub const ALL: [Self; 3] = [Self::Supports, Self::Refutes, Self::Suggests];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "Supports",
            Self::Refutes => "Refutes",
            Self::Suggests => "Suggests",
        }
    }
}

// Tokens match case-insensitively so both `Claim` and `CLAIM` parse.
impl FromStr for NodeType {
    type Err = ValidationError;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ValidationError::UnknownNodeType(token.to_string()))
    }
}

impl FromStr for EdgeType {
    type Err = ValidationError;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        let token = token.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ValidationError::UnknownEdgeType(token.to_string()))
    }
}

impl TryFrom<String> for NodeType {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for EdgeType {
    type Error = ValidationError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NodeType> for String {
    fn from(value: NodeType) -> Self {
        value.as_str().to_string()
    }
}

impl From<EdgeType> for String {
    fn from(value: EdgeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way a traversal follows edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalDirection {
    /// Follow edges backwards, towards whatever feeds the start node
    Upstream,
    /// Follow edges as stored
    Downstream,
}

impl TraversalDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::Downstream => "downstream",
        }
    }

    pub(crate) const fn petgraph(self) -> petgraph::Direction {
        match self {
            Self::Upstream => petgraph::Direction::Incoming,
            Self::Downstream => petgraph::Direction::Outgoing,
        }
    }
}

impl FromStr for TraversalDirection {
    type Err = ValidationError;

    fn from_str(token: &str) -> std::result::Result<Self, Self::Err> {
        match token.trim() {
            "upstream" => Ok(Self::Upstream),
            "downstream" => Ok(Self::Downstream),
            other => Err(ValidationError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for TraversalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node in the argument graph
///
/// `node_type` is `None` for nodes that were only ever named as an edge
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub node_type: Option<NodeType>,
}

/// Edge in the argument graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub edge_type: EdgeType,
}

/// Node descriptor as produced by an extractor: an id plus a raw type token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    pub type_token: String,
}

/// Edge descriptor as produced by an extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub type_token: String,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, type_token: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_token: type_token.into(),
        }
    }
}

impl EdgeSpec {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        type_token: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            type_token: type_token.into(),
        }
    }
}

/// Simple directed graph of argument nodes keyed by string id
///
/// At most one edge exists per ordered `(source, target)` pair; re-adding a
/// pair overwrites its type. Nodes and edges are append-only.
#[derive(Debug, Clone, Default)]
pub struct EssayGraph {
    pub(crate) graph: DiGraph<GraphNode, GraphEdge>,
    pub(crate) index: HashMap<String, NodeIndex>,
}

impl EssayGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node or overwrite the type of an existing one
    pub fn add_node(&mut self, id: &str, node_type: NodeType) -> Result<NodeIndex> {
        if id.is_empty() {
            return Err(ValidationError::EmptyNodeId.into());
        }
        let idx = self.ensure_node(id);
        self.graph[idx].node_type = Some(node_type);
        Ok(idx)
    }

    /// Insert an edge or overwrite the type of the existing `(source, target)` edge
    ///
    /// Endpoints that do not exist yet are created untyped.
    pub fn add_edge(&mut self, source: &str, target: &str, edge_type: EdgeType) -> Result<()> {
        if source.is_empty() || target.is_empty() {
            return Err(ValidationError::EmptyEndpoint.into());
        }
        let from = self.ensure_node(source);
        let to = self.ensure_node(target);
        if let Some(existing) = self.graph.find_edge(from, to) {
            let previous = self.graph[existing].edge_type;
            if previous != edge_type {
                log::debug!("Edge {source:?} -> {target:?} retyped {previous} -> {edge_type}");
            }
        }
        self.graph.update_edge(from, to, GraphEdge { edge_type });
        Ok(())
    }

    /// Insert a node without a type; an existing node keeps its type
    pub fn add_untyped_node(&mut self, id: &str) -> Result<NodeIndex> {
        if id.is_empty() {
            return Err(ValidationError::EmptyNodeId.into());
        }
        Ok(self.ensure_node(id))
    }

    /// Parse a node descriptor and insert it
    pub fn add_node_spec(&mut self, spec: &NodeSpec) -> Result<NodeIndex> {
        let node_type: NodeType = spec.type_token.parse()?;
        self.add_node(&spec.id, node_type)
    }

    /// Parse an edge descriptor and insert it
    pub fn add_edge_spec(&mut self, spec: &EdgeSpec) -> Result<()> {
        let edge_type: EdgeType = spec.type_token.parse()?;
        self.add_edge(&spec.source, &spec.target, edge_type)
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            node_type: None,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }
}
