//! Tests for EssayGraph construction and queries

use essay_graph::{
    EdgeType, EssayGraph, GraphError, NodeType, TraversalDirection, ValidationError,
};

fn make_graph(nodes: &[(&str, NodeType)], edges: &[(&str, &str, EdgeType)]) -> EssayGraph {
    let mut graph = EssayGraph::new();
    for (id, kind) in nodes {
        graph.add_node(id, *kind).unwrap();
    }
    for (source, target, kind) in edges {
        graph.add_edge(source, target, *kind).unwrap();
    }
    graph
}

#[test]
fn test_add_node_and_find() {
    let mut graph = EssayGraph::new();

    let idx = graph.add_node("claim", NodeType::Claim).unwrap();

    assert!(graph.contains_node("claim"));
    assert_eq!(graph.find_node("claim"), Some(idx));
    assert!(graph.find_node("other").is_none());
}

#[test]
fn test_node_count() {
    let mut graph = EssayGraph::new();

    assert_eq!(graph.node_count(), 0);

    graph.add_node("a", NodeType::Claim).unwrap();
    assert_eq!(graph.node_count(), 1);

    graph.add_node("b", NodeType::Evidence).unwrap();
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_readding_node_overwrites_type() {
    let mut graph = EssayGraph::new();

    graph.add_node("a", NodeType::Claim).unwrap();
    graph.add_node("a", NodeType::Example).unwrap();

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.node_type("a"), Some(NodeType::Example));
}

#[test]
fn test_duplicate_edge_is_last_write_wins() {
    let mut graph = make_graph(
        &[("a", NodeType::Claim), ("b", NodeType::Claim)],
        &[("a", "b", EdgeType::Supports)],
    );

    graph.add_edge("a", "b", EdgeType::Refutes).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_type("a", "b"), Some(EdgeType::Refutes));
    // The reverse pair is a different edge.
    assert_eq!(graph.edge_type("b", "a"), None);
}

#[test]
fn test_edge_endpoints_are_created_untyped() {
    let mut graph = EssayGraph::new();

    graph.add_edge("x", "y", EdgeType::Suggests).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.node_type("x"), None);
    assert_eq!(graph.untyped_nodes().collect::<Vec<_>>(), vec!["x", "y"]);

    graph.add_node("x", NodeType::Evidence).unwrap();
    assert_eq!(graph.node_type("x"), Some(NodeType::Evidence));
}

#[test]
fn test_empty_ids_are_rejected() {
    let mut graph = EssayGraph::new();

    let err = graph.add_node("", NodeType::Claim).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Validation(ValidationError::EmptyNodeId)
    ));

    let err = graph.add_edge("a", "", EdgeType::Supports).unwrap_err();
    assert!(matches!(
        err,
        GraphError::Validation(ValidationError::EmptyEndpoint)
    ));
    assert_eq!(graph.node_count(), 0);
}

#[test]
fn test_neighbors_follow_insertion_order() {
    let graph = make_graph(
        &[
            ("hub", NodeType::Claim),
            ("first", NodeType::Evidence),
            ("second", NodeType::Evidence),
            ("third", NodeType::Example),
        ],
        &[
            ("hub", "first", EdgeType::Supports),
            ("hub", "second", EdgeType::Refutes),
            ("third", "hub", EdgeType::Suggests),
            ("hub", "third", EdgeType::Supports),
        ],
    );

    assert_eq!(
        graph.successors("hub"),
        vec![
            ("first", EdgeType::Supports),
            ("second", EdgeType::Refutes),
            ("third", EdgeType::Supports),
        ]
    );
    assert_eq!(graph.predecessors("hub"), vec![("third", EdgeType::Suggests)]);
    assert!(graph.successors("missing").is_empty());
}

#[test]
fn test_neighbors_in_active_view() {
    let graph = make_graph(
        &[
            ("claim", NodeType::Claim),
            ("evidence", NodeType::Evidence),
            ("counter", NodeType::Claim),
        ],
        &[
            ("evidence", "claim", EdgeType::Supports),
            ("claim", "counter", EdgeType::Refutes),
        ],
    );

    assert_eq!(
        graph.neighbors("claim", TraversalDirection::Downstream),
        vec![("counter", EdgeType::Refutes)]
    );
    assert_eq!(
        graph.neighbors("claim", TraversalDirection::Upstream),
        vec![("evidence", EdgeType::Supports)]
    );
    assert!(graph
        .neighbors("evidence", TraversalDirection::Upstream)
        .is_empty());
}

#[test]
fn test_edges_iterate_in_insertion_order() {
    let graph = make_graph(
        &[("a", NodeType::Claim), ("b", NodeType::Claim), ("c", NodeType::Claim)],
        &[("b", "c", EdgeType::Refutes), ("a", "b", EdgeType::Supports)],
    );

    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![("b", "c", EdgeType::Refutes), ("a", "b", EdgeType::Supports)]
    );
}

#[test]
fn test_count_by_type() {
    let graph = make_graph(
        &[
            ("a", NodeType::Claim),
            ("b", NodeType::Claim),
            ("e", NodeType::Evidence),
        ],
        &[],
    );

    assert_eq!(
        graph.count_by_type(),
        [
            (NodeType::Claim, 2),
            (NodeType::Evidence, 1),
            (NodeType::Example, 0),
        ]
    );
    assert_eq!(graph.stats(), (3, 0));
}

#[test]
fn test_type_tokens() {
    assert_eq!("Claim".parse::<NodeType>().unwrap(), NodeType::Claim);
    assert_eq!("EXAMPLE".parse::<NodeType>().unwrap(), NodeType::Example);
    assert_eq!("suggests".parse::<EdgeType>().unwrap(), EdgeType::Suggests);

    assert_eq!(
        "Opinion".parse::<NodeType>().unwrap_err(),
        ValidationError::UnknownNodeType("Opinion".to_string())
    );
    assert_eq!(
        "Contradicts".parse::<EdgeType>().unwrap_err(),
        ValidationError::UnknownEdgeType("Contradicts".to_string())
    );
}
