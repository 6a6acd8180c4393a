//! # Essay Graph
//!
//! Argument structure of an essay as a directed graph, decomposed into
//! per-claim explanation chunks.
//!
//! ## Features
//!
//! - **Typed argument graph** - claims, evidence and examples linked by
//!   supports / refutes / suggests edges
//! - **Boundary-aware extraction** - upstream and downstream neighbourhoods
//!   of an important node that stop at the next important node
//! - **Linearization** - deterministic `from -> Relation -> to` statements
//! - **Node-link documents** - exact JSON round-trip of graph + metadata
//!
//! ## Architecture
//!
//! ```text
//! Extractor output (nodes, edges, important order, oevre)
//!     │
//!     ├──> ArgumentGraph (petgraph)
//!     │      ├─ Nodes: Claim / Evidence / Example
//!     │      └─ Edges: Supports / Refutes / Suggests
//!     │
//!     ├──> ArgumentGraphSession
//!     │      ├─ SubgraphExtractor (upstream, downstream)
//!     │      ├─ Linearizer
//!     │      └─ One chunk per important node, in essay order
//!     │
//!     └──> ArgumentGraphDocument (serde_json)
//! ```
//!
//! ## Example
//!
//! ```
//! use essay_graph::{ArgumentGraph, EdgeSpec, NodeSpec};
//!
//! let argument = ArgumentGraph::from_parts(
//!     &[NodeSpec::new("A", "Claim"), NodeSpec::new("e", "Evidence")],
//!     &[EdgeSpec::new("e", "A", "Supports")],
//!     vec!["A".to_string()],
//!     "plain-spoken",
//! )?;
//!
//! let chunks = argument.traverse()?;
//! assert_eq!(chunks, vec![vec!["e -> Supports -> A".to_string()]]);
//! # Ok::<(), essay_graph::GraphError>(())
//! ```

mod argument;
mod document;
mod error;
mod extract;
mod graph;
mod linearize;
mod session;
mod types;

pub use argument::ArgumentGraph;
pub use document::{ArgumentGraphDocument, LinkRecord, NodeLinkGraph, NodeRecord};
pub use error::{GraphError, Result, ValidationError};
pub use extract::{extract_subgraph, Subgraph, SubgraphExtractor};
pub use graph::Neighbor;
pub use linearize::{linearize, render_statement, StatementFormat};
pub use session::{ArgumentChunk, ArgumentGraphSession, SessionStats};
pub use types::{
    EdgeSpec, EdgeType, EssayGraph, GraphEdge, GraphNode, NodeSpec, NodeType, TraversalDirection,
};
