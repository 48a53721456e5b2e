//! RAG (Retrieval-Augmented Generation) module
//!
//! Answers questions about the profile from indexed chunks:
//! - Semantic retrieval from the hosted vector index
//! - Context assembly from retrieved chunks
//! - First-person answer generation with the hosted LLM
//! - Retrieval-based confidence scoring
//!
//! # Examples
//!
//! ```rust,no_run
//! use profiletwin::config::AppConfig;
//! use profiletwin::rag::RagService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = RagService::from_config(&config)?;
//!
//!     let response = service.answer_question("What projects have you built?").await?;
//!     println!("Answer: {}", response.answer);
//!     println!("Confidence: {:.0}%", response.confidence * 100.0);
//!
//!     Ok(())
//! }
//! ```

pub mod confidence;
pub mod context;
pub mod pipeline;
pub mod sections;

pub use confidence::ConfidenceStrategy;
pub use confidence::MeanScoreConfidence;
pub use context::format_context;
pub use pipeline::RagService;
pub use pipeline::RagSettings;
pub use pipeline::ServiceHealth;
pub use pipeline::NO_INFORMATION_ANSWER;
