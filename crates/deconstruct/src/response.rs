use crate::error::Result;
use essay_graph::{ArgumentGraph, EdgeSpec, NodeSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Schema-only mirrors of the graph's type tokens. The response fields stay
// strings so that token parsing (and its errors) happens in essay_graph.
#[derive(JsonSchema)]
#[allow(dead_code)]
enum NodeTypeToken {
    Claim,
    Evidence,
    Example,
}

#[derive(JsonSchema)]
#[allow(dead_code)]
enum EdgeTypeToken {
    Supports,
    Refutes,
    Suggests,
}

/// A claim, piece of evidence or example, reduced to one or two sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseNode {
    #[serde(rename = "type")]
    #[schemars(with = "NodeTypeToken")]
    pub node_type: String,
    pub content: String,
}

/// A relation between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResponseEdge {
    #[serde(rename = "type")]
    #[schemars(with = "EdgeTypeToken")]
    pub edge_type: String,
    pub source: ResponseNode,
    pub target: ResponseNode,
}

/// Structured answer of a deconstruction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DeconstructedEssay {
    pub nodes: Vec<ResponseNode>,
    pub edges: Vec<ResponseEdge>,
    /// Contents of the most important claims, in the order they appear in the essay
    pub important_nodes_ordered: Vec<String>,
    /// One sentence on the style or mood of the essay
    pub oevre: String,
}

impl DeconstructedEssay {
    /// Node descriptors keyed by content
    #[must_use]
    pub fn node_specs(&self) -> Vec<NodeSpec> {
        self.nodes
            .iter()
            .map(|node| NodeSpec::new(node.content.clone(), node.node_type.clone()))
            .collect()
    }

    /// Edge descriptors; endpoints are identified by their content
    #[must_use]
    pub fn edge_specs(&self) -> Vec<EdgeSpec> {
        self.edges
            .iter()
            .map(|edge| {
                EdgeSpec::new(
                    edge.source.content.clone(),
                    edge.target.content.clone(),
                    edge.edge_type.clone(),
                )
            })
            .collect()
    }

    /// Validate and build the argument graph
    pub fn into_argument_graph(self) -> Result<ArgumentGraph> {
        let nodes = self.node_specs();
        let edges = self.edge_specs();
        Ok(ArgumentGraph::from_parts(
            &nodes,
            &edges,
            self.important_nodes_ordered,
            self.oevre,
        )?)
    }
}

/// JSON schema of [`DeconstructedEssay`], part of the cache key for
/// structured responses
pub fn response_schema() -> Result<String> {
    let schema = schemars::schema_for!(DeconstructedEssay);
    Ok(serde_json::to_string(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_graph::{EdgeType, NodeType};

    fn node(kind: &str, content: &str) -> ResponseNode {
        ResponseNode {
            node_type: kind.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn response_decodes_type_field() {
        let json = r#"{
            "nodes": [{"type": "Claim", "content": "Man is not the apex predator"}],
            "edges": [],
            "important_nodes_ordered": ["Man is not the apex predator"],
            "oevre": "polemical"
        }"#;

        let essay: DeconstructedEssay = serde_json::from_str(json).unwrap();
        assert_eq!(essay.nodes[0], node("Claim", "Man is not the apex predator"));
    }

    #[test]
    fn converts_into_argument_graph() {
        let claim = node("Claim", "Language subjugates");
        let evidence = node("Evidence", "Ideologies spread themselves");
        let essay = DeconstructedEssay {
            nodes: vec![claim.clone(), evidence.clone()],
            edges: vec![ResponseEdge {
                edge_type: "Supports".to_string(),
                source: evidence,
                target: claim,
            }],
            important_nodes_ordered: vec!["Language subjugates".to_string()],
            oevre: "polemical".to_string(),
        };

        let argument = essay.into_argument_graph().unwrap();
        assert_eq!(
            argument.graph().node_type("Ideologies spread themselves"),
            Some(NodeType::Evidence)
        );
        assert_eq!(
            argument.traverse().unwrap(),
            vec![vec![
                "Ideologies spread themselves -> Supports -> Language subjugates".to_string()
            ]]
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let essay = DeconstructedEssay {
            nodes: vec![node("Hunch", "x")],
            edges: vec![],
            important_nodes_ordered: vec![],
            oevre: String::new(),
        };

        assert!(essay.into_argument_graph().is_err());
    }

    fn enum_values(value: &serde_json::Value, out: &mut Vec<Vec<String>>) {
        match value {
            serde_json::Value::Object(map) => {
                if let Some(serde_json::Value::Array(values)) = map.get("enum") {
                    out.push(
                        values
                            .iter()
                            .filter_map(|v| v.as_str().map(str::to_string))
                            .collect(),
                    );
                }
                map.values().for_each(|v| enum_values(v, out));
            }
            serde_json::Value::Array(items) => items.iter().for_each(|v| enum_values(v, out)),
            _ => {}
        }
    }

    #[test]
    fn schema_mentions_every_field() {
        let schema = response_schema().unwrap();
        for field in ["nodes", "edges", "important_nodes_ordered", "oevre"] {
            assert!(schema.contains(field), "schema is missing {field}");
        }
    }

    #[test]
    fn schema_restricts_type_tokens() {
        let schema: serde_json::Value =
            serde_json::from_str(&response_schema().unwrap()).unwrap();
        let mut enums = Vec::new();
        enum_values(&schema, &mut enums);

        let node_tokens: Vec<String> = NodeType::ALL.iter().map(|t| t.to_string()).collect();
        let edge_tokens: Vec<String> = EdgeType::ALL.iter().map(|t| t.to_string()).collect();
        assert!(enums.contains(&node_tokens), "no node type enum in {schema}");
        assert!(enums.contains(&edge_tokens), "no edge type enum in {schema}");
    }
}
