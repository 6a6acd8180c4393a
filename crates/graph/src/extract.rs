use crate::error::{Result, ValidationError};
use crate::types::{EdgeType, EssayGraph, TraversalDirection};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet, VecDeque};

/// Directed substructure collected by a single extraction
///
/// Edges are stored in the orientation of the view they were collected in:
/// for an upstream subgraph every `(from, to)` pair is `(child, parent)` in
/// terms of the source graph. Edge order is BFS discovery order.
#[derive(Debug, Clone)]
pub struct Subgraph {
    direction: TraversalDirection,
    graph: DiGraph<String, EdgeType>,
    index: HashMap<String, NodeIndex>,
}

impl Subgraph {
    fn new(direction: TraversalDirection) -> Self {
        Self {
            direction,
            graph: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    fn record_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    fn record_edge(&mut self, from: &str, to: &str, edge_type: EdgeType) {
        let a = self.record_node(from);
        let b = self.record_node(to);
        self.graph.update_edge(a, b, edge_type);
    }

    #[must_use]
    pub const fn direction(&self) -> TraversalDirection {
        self.direction
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
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

    /// Recorded nodes in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Recorded edges as `(from, to, type)` in discovery order, oriented in
    /// the collection view
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeType)> {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                *edge.weight(),
            )
        })
    }

    /// Recorded edges re-oriented to the source graph's direction
    pub fn source_edges(&self) -> impl Iterator<Item = (&str, &str, EdgeType)> {
        let direction = self.direction;
        self.edges().map(move |(from, to, edge_type)| match direction {
            TraversalDirection::Downstream => (from, to, edge_type),
            TraversalDirection::Upstream => (to, from, edge_type),
        })
    }
}

/// Boundary-respecting reachability over an [`EssayGraph`]
///
/// The boundary is the set of important node ids. Traversal records the edge
/// into a boundary node but never continues past it. Boundary ids that are
/// not in the graph are ignored.
pub struct SubgraphExtractor<'g> {
    graph: &'g EssayGraph,
    boundary: HashSet<NodeIndex>,
}

impl<'g> SubgraphExtractor<'g> {
    pub fn new<I, S>(graph: &'g EssayGraph, boundary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let boundary = boundary
            .into_iter()
            .filter_map(|id| graph.find_node(id.as_ref()))
            .collect();
        Self { graph, boundary }
    }

    #[must_use]
    pub fn is_boundary(&self, id: &str) -> bool {
        self.graph
            .find_node(id)
            .is_some_and(|idx| self.boundary.contains(&idx))
    }

    /// Extract the subgraph reachable from `start` in `direction`
    ///
    /// Returns an empty subgraph (without `start`) when nothing qualifies.
    pub fn extract(&self, start: &str, direction: TraversalDirection) -> Result<Subgraph> {
        let start_idx = self
            .graph
            .find_node(start)
            .ok_or_else(|| ValidationError::NodeNotFound(start.to_string()))?;

        let mut subgraph = Subgraph::new(direction);
        let mut visited = HashSet::from([start_idx]);
        let mut queue = VecDeque::from([start_idx]);

        while let Some(current) = queue.pop_front() {
            let current_id = self.graph.graph[current].id.as_str();
            for (neighbor, edge_type) in self.graph.adjacent(current, direction.petgraph()) {
                let neighbor_id = self.graph.graph[neighbor].id.as_str();
                if self.boundary.contains(&neighbor) {
                    visited.insert(neighbor);
                    subgraph.record_edge(current_id, neighbor_id, edge_type);
                } else if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                    subgraph.record_edge(current_id, neighbor_id, edge_type);
                }
            }
        }

        log::debug!(
            "Extracted {direction} subgraph from {start:?}: {} nodes, {} edges",
            subgraph.node_count(),
            subgraph.edge_count()
        );

        Ok(subgraph)
    }

    /// Like [`extract`](Self::extract) but takes the direction as a token
    pub fn extract_by_token(&self, start: &str, direction: &str) -> Result<Subgraph> {
        let direction: TraversalDirection = direction.parse()?;
        self.extract(start, direction)
    }
}

/// One-shot extraction without keeping an extractor around
pub fn extract_subgraph<I, S>(
    graph: &EssayGraph,
    boundary: I,
    start: &str,
    direction: TraversalDirection,
) -> Result<Subgraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SubgraphExtractor::new(graph, boundary).extract(start, direction)
}
