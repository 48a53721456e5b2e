pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod rag;
pub mod vector;

#[cfg(test)]
mod errors_tests;

pub use config::AppConfig;
pub use errors::*;
pub use llm::LanguageModel;
pub use llm::LlmService;
pub use rag::RagService;
pub use vector::UpstashVectorClient;
pub use vector::VectorStore;
