use crate::cache::{cache_key_with_schema, ResponseCache};
use crate::error::Result;
use crate::response::{response_schema, DeconstructedEssay};
use async_trait::async_trait;
use essay_graph::ArgumentGraph;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Everything a deconstructor needs to answer, and everything the cache key
/// is derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeconstructRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl DeconstructRequest {
    /// Request carrying the essay as the only user message
    pub fn for_essay(essay: &str, model: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(format!(
                "# The Essay\n{essay}\n\n Your deconstruction:"
            ))],
            model: model.into(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Put caller-supplied instructions in front of the essay
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.messages.insert(0, ChatMessage::system(prompt));
        self
    }

    pub fn cache_key(&self) -> Result<String> {
        Ok(cache_key_with_schema(
            &self.messages,
            &self.model,
            &response_schema()?,
        ))
    }
}

/// Produces a structured deconstruction for a request (typically an LLM call)
#[async_trait]
pub trait EssayDeconstructor: Send + Sync {
    async fn deconstruct(&self, request: &DeconstructRequest) -> Result<DeconstructedEssay>;
}

/// Memoizes an inner deconstructor through an injected cache
pub struct CachedDeconstructor<D, C> {
    inner: D,
    cache: C,
}

impl<D, C> CachedDeconstructor<D, C>
where
    D: EssayDeconstructor,
    C: ResponseCache,
{
    pub fn new(inner: D, cache: C) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }
}

#[async_trait]
impl<D, C> EssayDeconstructor for CachedDeconstructor<D, C>
where
    D: EssayDeconstructor,
    C: ResponseCache,
{
    async fn deconstruct(&self, request: &DeconstructRequest) -> Result<DeconstructedEssay> {
        let key = request.cache_key()?;
        if let Some(cached) = self.cache.get(&key).await? {
            log::debug!("Deconstruction cache hit ({key})");
            return Ok(serde_json::from_str(&cached)?);
        }

        let response = self.inner.deconstruct(request).await?;
        let serialized = serde_json::to_string(&response)?;
        self.cache.put(&key, &serialized).await?;
        log::info!(
            "Deconstructed essay with {}: {} nodes, {} edges",
            request.model,
            response.nodes.len(),
            response.edges.len()
        );
        Ok(response)
    }
}

/// Run a deconstruction and validate the result into an [`ArgumentGraph`]
pub async fn deconstruct_essay<D>(
    deconstructor: &D,
    request: &DeconstructRequest,
) -> Result<ArgumentGraph>
where
    D: EssayDeconstructor + ?Sized,
{
    let response = deconstructor.deconstruct(request).await?;
    response.into_argument_graph()
}
