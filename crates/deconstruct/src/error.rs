use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeconstructError>;

#[derive(Error, Debug)]
pub enum DeconstructError {
    #[error("Graph error: {0}")]
    Graph(#[from] essay_graph::GraphError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cache key {0:?} (expected 64 lowercase hex digits)")]
    InvalidCacheKey(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
