//! Serialize / deserialize argument graphs

use essay_graph::{
    ArgumentGraph, ArgumentGraphDocument, EdgeSpec, EdgeType, GraphNode, NodeSpec, NodeType,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn sample() -> ArgumentGraph {
    ArgumentGraph::from_parts(
        &[
            NodeSpec::new("Egregores are inevitable", "Claim"),
            NodeSpec::new("Ideas manipulate emotion", "Evidence"),
            NodeSpec::new("The chariot", "Example"),
            NodeSpec::new("Consciousness is a psycho-technology", "Claim"),
        ],
        &[
            EdgeSpec::new("Ideas manipulate emotion", "Egregores are inevitable", "Supports"),
            EdgeSpec::new("The chariot", "Consciousness is a psycho-technology", "Suggests"),
            EdgeSpec::new(
                "Egregores are inevitable",
                "Consciousness is a psycho-technology",
                "Supports",
            ),
            EdgeSpec::new(
                "Consciousness is a psycho-technology",
                "Egregores are inevitable",
                "Refutes",
            ),
        ],
        vec![
            "Consciousness is a psycho-technology".to_string(),
            "Egregores are inevitable".to_string(),
        ],
        "Provocative, mythic",
    )
    .unwrap()
}

fn node_set(argument: &ArgumentGraph) -> BTreeSet<(String, Option<NodeType>)> {
    argument
        .graph()
        .nodes()
        .map(|GraphNode { id, node_type }| (id.clone(), *node_type))
        .collect()
}

fn edge_set(argument: &ArgumentGraph) -> BTreeSet<(String, String, EdgeType)> {
    argument
        .graph()
        .edges()
        .map(|(a, b, t)| (a.to_string(), b.to_string(), t))
        .collect()
}

fn assert_same(a: &ArgumentGraph, b: &ArgumentGraph) {
    assert_eq!(node_set(a), node_set(b));
    assert_eq!(edge_set(a), edge_set(b));
    assert_eq!(a.important_nodes_ordered(), b.important_nodes_ordered());
    assert_eq!(a.oevre(), b.oevre());
}

#[test]
fn json_round_trip_preserves_everything() {
    let original = sample();

    let json = original.to_json_string().unwrap();
    let restored = ArgumentGraph::from_json_str(&json).unwrap();

    assert_same(&original, &restored);
    assert_eq!(original.traverse().unwrap(), restored.traverse().unwrap());
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("essay.json");
    let original = sample();

    original.save(&path).unwrap();
    let restored = ArgumentGraph::load(&path).unwrap();

    assert_same(&original, &restored);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn document_uses_node_link_keys() {
    let json: serde_json::Value =
        serde_json::from_str(&sample().to_json_string().unwrap()).unwrap();

    assert_eq!(json["graph"]["directed"], true);
    assert_eq!(json["graph"]["multigraph"], false);
    assert_eq!(json["graph"]["nodes"][0]["node_type"], "Claim");
    assert_eq!(json["graph"]["links"][0]["edge_type"], "Supports");
    assert_eq!(
        json["important_nodes_ordered"][0],
        "Consciousness is a psycho-technology"
    );
    assert_eq!(json["oevre"], "Provocative, mythic");
}

#[test]
fn important_order_survives_round_trip() {
    let mut document = sample().to_document();
    document.important_nodes_ordered.reverse();

    let restored = ArgumentGraphDocument::into_argument_graph(document.clone()).unwrap();
    assert_eq!(
        restored.important_nodes_ordered(),
        document.important_nodes_ordered.as_slice()
    );
}

#[test]
fn document_without_directed_flags_loads() {
    let json = r#"{
        "graph": {
            "nodes": [{"id": "A", "node_type": "Claim"}, {"id": "B", "node_type": "Evidence"}],
            "links": [{"source": "B", "target": "A", "edge_type": "Supports"}]
        },
        "important_nodes_ordered": ["A"],
        "oevre": ""
    }"#;

    let argument = ArgumentGraph::from_json_str(json).unwrap();
    assert_eq!(argument.graph().edge_type("B", "A"), Some(EdgeType::Supports));
}

#[test]
fn repeated_important_node_round_trips() {
    let json = r#"{
        "graph": {
            "directed": true,
            "multigraph": false,
            "nodes": [{"id": "A", "node_type": "Claim"}, {"id": "e", "node_type": "Evidence"}],
            "links": [{"source": "e", "target": "A", "edge_type": "Supports"}]
        },
        "important_nodes_ordered": ["A", "A"],
        "oevre": "dry"
    }"#;

    let argument = ArgumentGraph::from_json_str(json).unwrap();
    let restored = ArgumentGraph::from_json_str(&argument.to_json_string().unwrap()).unwrap();

    assert_same(&argument, &restored);
    assert_eq!(restored.important_nodes_ordered(), ["A", "A"]);
    assert_eq!(
        restored.traverse().unwrap(),
        vec![
            vec!["e -> Supports -> A".to_string()],
            vec!["e -> Supports -> A".to_string()],
        ]
    );
}
