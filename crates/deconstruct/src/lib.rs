//! # Essay Deconstruct
//!
//! The boundary between an essay and its argument graph.
//!
//! An [`EssayDeconstructor`] turns essay text into a [`DeconstructedEssay`]
//! (usually by asking a language model). Responses are memoized through an
//! injected [`ResponseCache`], addressed by a SHA-256 of the request content.
//!
//! ```text
//! Essay text
//!     │
//!     ├──> DeconstructRequest (messages + model)
//!     │      └─ cache_key = sha256(contents ‖ model ‖ response schema)
//!     │
//!     ├──> CachedDeconstructor
//!     │      ├─ hit:  parse cached JSON
//!     │      └─ miss: inner deconstructor, then store JSON
//!     │
//!     └──> DeconstructedEssay ──> essay_graph::ArgumentGraph
//! ```

mod cache;
mod deconstructor;
mod error;
mod response;

pub use cache::{cache_key, cache_key_with_schema, DiskCache, MemoryCache, ResponseCache};
pub use deconstructor::{
    deconstruct_essay, CachedDeconstructor, ChatMessage, DeconstructRequest, EssayDeconstructor,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};
pub use error::{DeconstructError, Result};
pub use response::{response_schema, DeconstructedEssay, ResponseEdge, ResponseNode};
