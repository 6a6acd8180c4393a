use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The graph breaks a structural contract (for example a link without an
    /// edge type). Never recoverable by retrying inside this crate.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedGraph(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown node type {0:?} (expected Claim, Evidence or Example)")]
    UnknownNodeType(String),

    #[error("unknown edge type {0:?} (expected Supports, Refutes or Suggests)")]
    UnknownEdgeType(String),

    #[error("unknown traversal direction {0:?} (expected upstream or downstream)")]
    UnknownDirection(String),

    #[error("unknown statement format {0:?} (expected plain or delimited)")]
    UnknownFormat(String),

    #[error("node id must not be empty")]
    EmptyNodeId,

    #[error("edge endpoint must not be empty")]
    EmptyEndpoint,

    #[error("node {0:?} is not in the graph")]
    NodeNotFound(String),

    #[error("important node {0:?} is not in the graph")]
    UnknownImportantNode(String),
}
