use crate::types::{EdgeType, EssayGraph, GraphNode, NodeType, TraversalDirection};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// Neighbor of a node together with the type of the connecting edge
pub type Neighbor<'a> = (&'a str, EdgeType);

impl EssayGraph {
    /// Type of a node, `None` if the node is unknown or untyped
    #[must_use]
    pub fn node_type(&self, id: &str) -> Option<NodeType> {
        self.find_node(id).and_then(|idx| self.graph[idx].node_type)
    }

    /// Type of the edge `source -> target`, if present
    #[must_use]
    pub fn edge_type(&self, source: &str, target: &str) -> Option<EdgeType> {
        let from = self.find_node(source)?;
        let to = self.find_node(target)?;
        self.graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge].edge_type)
    }

    /// Nodes that `id` points at (outgoing edges)
    #[must_use]
    pub fn successors(&self, id: &str) -> Vec<Neighbor<'_>> {
        self.find_node(id)
            .map(|idx| self.neighbors_of(idx, Direction::Outgoing))
            .unwrap_or_default()
    }

    /// Nodes that point at `id` (incoming edges)
    #[must_use]
    pub fn predecessors(&self, id: &str) -> Vec<Neighbor<'_>> {
        self.find_node(id)
            .map(|idx| self.neighbors_of(idx, Direction::Incoming))
            .unwrap_or_default()
    }

    /// Neighbors of `id` in the view selected by `direction`
    ///
    /// Downstream yields successors, upstream yields predecessors (the
    /// reversed view).
    #[must_use]
    pub fn neighbors(&self, id: &str, direction: TraversalDirection) -> Vec<Neighbor<'_>> {
        match direction {
            TraversalDirection::Downstream => self.successors(id),
            TraversalDirection::Upstream => self.predecessors(id),
        }
    }

    /// Adjacent node indices ordered by edge insertion.
    ///
    /// petgraph walks adjacency lists newest-first, so the edge index is used
    /// to restore insertion order.
    pub(crate) fn adjacent(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> Vec<(NodeIndex, EdgeType)> {
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, direction)
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (edge.id(), other, edge.weight().edge_type)
            })
            .collect();
        edges.sort_by_key(|(edge_idx, _, _)| *edge_idx);
        edges
            .into_iter()
            .map(|(_, other, edge_type)| (other, edge_type))
            .collect()
    }

    fn neighbors_of(&self, idx: NodeIndex, direction: Direction) -> Vec<Neighbor<'_>> {
        self.adjacent(idx, direction)
            .into_iter()
            .map(|(other, edge_type)| (self.graph[other].id.as_str(), edge_type))
            .collect()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All edges as `(source, target, type)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, EdgeType)> {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
                edge.weight().edge_type,
            )
        })
    }

    /// Nodes that have no type assigned
    pub fn untyped_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes()
            .filter(|node| node.node_type.is_none())
            .map(|node| node.id.as_str())
    }

    /// Number of nodes of each type, in `NodeType::ALL` order
    #[must_use]
    pub fn count_by_type(&self) -> [(NodeType, usize); 3] {
        NodeType::ALL.map(|kind| {
            let count = self
                .nodes()
                .filter(|node| node.node_type == Some(kind))
                .count();
            (kind, count)
        })
    }

    /// Get statistics about the graph
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.node_count(), self.edge_count())
    }
}
