//! Shared test doubles for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use profiletwin::api::AppState;
use profiletwin::config::ServerConfig;
use profiletwin::models::ChunkMetadata;
use profiletwin::models::ProfileCategory;
use profiletwin::models::ProfileChunk;
use profiletwin::models::VectorSearchResult;
use profiletwin::LanguageModel;
use profiletwin::ProfileTwinError;
use profiletwin::RagService;
use profiletwin::Result;
use profiletwin::VectorStore;

/// Vector store replaying queued responses, one per query
#[derive(Default)]
pub struct FakeVectorStore {
    responses: Mutex<VecDeque<Result<Vec<VectorSearchResult>>>>,
    pub query_count: AtomicUsize,
}

impl FakeVectorStore {
    pub fn with(responses: Vec<Result<Vec<VectorSearchResult>>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            query_count: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl VectorStore for FakeVectorStore {
    async fn query(&self, _text: &str, _top_k: usize) -> Result<Vec<VectorSearchResult>> {
        self.query_count.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn upsert(&self, _chunks: &[ProfileChunk]) -> Result<()> {
        Ok(())
    }
}

/// Language model returning a fixed answer and counting calls
#[derive(Default)]
pub struct FakeLlm {
    pub calls: AtomicUsize,
}

impl FakeLlm {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for FakeLlm {
    async fn generate(&self, _context: &str, _question: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok("I build distributed systems in Rust.".to_string())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

pub fn chunk(title: &str, content: &str, score: f64, category: Option<ProfileCategory>) -> VectorSearchResult {
    VectorSearchResult {
        title: title.to_string(),
        content: content.to_string(),
        score,
        metadata: ChunkMetadata {
            category,
            chunk_type: category.map(|c| c.as_str().to_string()),
            ..ChunkMetadata::default()
        },
    }
}

pub fn vector_failure() -> ProfileTwinError {
    ProfileTwinError::VectorSearchError("503 Service Unavailable: index offline".to_string())
}

pub fn state_with(store: Arc<FakeVectorStore>, llm: Arc<FakeLlm>) -> AppState {
    let rag = Arc::new(RagService::from_services(store, llm));
    AppState::new(rag, ServerConfig::default())
}
