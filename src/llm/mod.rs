//! Hosted chat-completion access
//!
//! [`LanguageModel`] is the seam the RAG pipeline depends on; [`LlmService`]
//! implements it against any OpenAI-compatible `/chat/completions` endpoint
//! (Groq by default).

pub mod client;
pub mod prompts;

use async_trait::async_trait;

pub use client::ChatMessage;
pub use client::LlmService;

use crate::errors::Result;

/// First-person answer generation over retrieved context
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Answer `question` grounded in `context`
    async fn generate(&self, context: &str, question: &str) -> Result<String>;

    /// True when the service answers a trivial prompt
    async fn health_check(&self) -> bool;
}
