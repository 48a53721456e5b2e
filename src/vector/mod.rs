//! Vector search over the indexed profile
//!
//! The index itself (embedding + nearest-neighbour search) is hosted; this
//! module only talks to it. [`VectorStore`] is the seam the RAG pipeline
//! depends on, [`UpstashVectorClient`] the REST implementation.

pub mod upstash;

use async_trait::async_trait;

pub use upstash::UpstashVectorClient;

use crate::errors::Result;
use crate::models::ProfileChunk;
use crate::models::VectorSearchResult;

/// Semantic search over profile chunks
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Return up to `top_k` chunks ranked by descending similarity
    async fn query(&self, text: &str, top_k: usize) -> Result<Vec<VectorSearchResult>>;

    /// Insert or replace chunks in the index
    async fn upsert(&self, chunks: &[ProfileChunk]) -> Result<()>;

    /// True when a trivial query succeeds
    async fn health_check(&self) -> bool {
        match self.query("test", 1).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Vector database health check failed: {}", e);
                false
            }
        }
    }
}
