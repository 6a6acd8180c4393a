use crate::argument::ArgumentGraph;
use crate::error::Result;
use crate::extract::SubgraphExtractor;
use crate::linearize::{linearize, StatementFormat};
use crate::types::TraversalDirection;
use serde::{Deserialize, Serialize};

/// Explanation chunk for one important node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentChunk {
    /// Important node the chunk explains
    pub node: String,

    /// Statements about what leads into the node
    pub upstream: Vec<String>,

    /// Statements about what the node leads to
    pub downstream: Vec<String>,
}

impl ArgumentChunk {
    /// Upstream statements followed by downstream statements
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.upstream
            .iter()
            .chain(self.downstream.iter())
            .map(String::as_str)
    }

    #[must_use]
    pub fn into_statements(self) -> Vec<String> {
        let mut out = self.upstream;
        out.extend(self.downstream);
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.upstream.len() + self.downstream.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.upstream.is_empty() && self.downstream.is_empty()
    }
}

/// Walks every important node of an [`ArgumentGraph`] and linearizes its
/// neighbourhood
///
/// The boundary for every extraction is the full set of important nodes.
pub struct ArgumentGraphSession<'a> {
    argument: &'a ArgumentGraph,
    extractor: SubgraphExtractor<'a>,
    format: StatementFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub important_nodes: usize,
}

impl<'a> ArgumentGraphSession<'a> {
    #[must_use]
    pub fn new(argument: &'a ArgumentGraph) -> Self {
        let boundary = argument
            .important_nodes_ordered()
            .iter()
            .map(String::as_str);
        Self {
            argument,
            extractor: SubgraphExtractor::new(argument.graph(), boundary),
            format: StatementFormat::default(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: StatementFormat) -> Self {
        self.format = format;
        self
    }

    /// Chunk for a single node (usually an important one)
    pub fn chunk_for(&self, node: &str) -> Result<ArgumentChunk> {
        let upstream = self.extractor.extract(node, TraversalDirection::Upstream)?;
        let downstream = self.extractor.extract(node, TraversalDirection::Downstream)?;

        Ok(ArgumentChunk {
            node: node.to_string(),
            upstream: linearize(&upstream, self.format),
            downstream: linearize(&downstream, self.format),
        })
    }

    /// One chunk per important node, in essay order
    pub fn chunks(&self) -> Result<Vec<ArgumentChunk>> {
        let chunks = self
            .argument
            .important_nodes_ordered()
            .iter()
            .map(|node| self.chunk_for(node))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Produced {} chunks ({} statements)",
            chunks.len(),
            chunks.iter().map(ArgumentChunk::len).sum::<usize>()
        );

        Ok(chunks)
    }

    pub fn traverse(&self) -> Result<Vec<Vec<String>>> {
        Ok(self
            .chunks()?
            .into_iter()
            .map(ArgumentChunk::into_statements)
            .collect())
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        let (total_nodes, total_edges) = self.argument.graph().stats();
        SessionStats {
            total_nodes,
            total_edges,
            important_nodes: self.argument.important_nodes_ordered().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EdgeSpec, NodeSpec};

    #[test]
    fn chunks_follow_important_order() {
        let argument = ArgumentGraph::from_parts(
            &[
                NodeSpec::new("first", "Claim"),
                NodeSpec::new("second", "Claim"),
                NodeSpec::new("ex", "Example"),
            ],
            &[
                EdgeSpec::new("ex", "second", "Suggests"),
                EdgeSpec::new("second", "first", "Refutes"),
            ],
            vec!["second".to_string(), "first".to_string()],
            "",
        )
        .unwrap();

        let session = ArgumentGraphSession::new(&argument);
        let chunks = session.chunks().unwrap();

        assert_eq!(chunks[0].node, "second");
        assert_eq!(chunks[0].upstream, vec!["ex -> Suggests -> second"]);
        assert_eq!(chunks[0].downstream, vec!["second -> Refutes -> first"]);
        assert_eq!(chunks[1].node, "first");
        assert_eq!(chunks[1].upstream, vec!["second -> Refutes -> first"]);
        assert!(chunks[1].downstream.is_empty());

        let stats = session.stats();
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.important_nodes, 2);
    }
}
