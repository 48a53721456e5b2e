//! Complete RAG pipeline: Retrieve -> Format -> Generate -> Score

use std::sync::Arc;

use futures::stream;
use futures::StreamExt;
use tracing::debug;
use tracing::error;
use tracing::info;

use crate::config::AppConfig;
use crate::config::RagConfig;
use crate::errors::ProfileTwinError;
use crate::errors::Result;
use crate::llm::LanguageModel;
use crate::llm::LlmService;
use crate::models::ProfileCategory;
use crate::models::ProfileSearchResult;
use crate::models::ProfileSection;
use crate::models::RagResponse;
use crate::models::VectorSearchResult;
use crate::models::UNKNOWN_CHUNK_TYPE;
use crate::rag::confidence::ConfidenceStrategy;
use crate::rag::confidence::MeanScoreConfidence;
use crate::rag::context::format_context;
use crate::rag::context::preview;
use crate::rag::sections::profile_sections;
use crate::vector::UpstashVectorClient;
use crate::vector::VectorStore;

/// Answer returned when retrieval finds nothing; the LLM is not consulted
pub const NO_INFORMATION_ANSWER: &str = "I don't have information about that in my profile. Feel free to ask me about my skills, projects, experience, education, or other aspects of my professional background.";

/// Retrieval sizes and preview length used by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RagSettings {
    pub top_k: usize,
    pub search_top_k: usize,
    pub preview_chars: usize,
}

impl Default for RagSettings {
    fn default() -> Self {
        Self::from(&RagConfig::default())
    }
}

impl From<&RagConfig> for RagSettings {
    fn from(config: &RagConfig) -> Self {
        Self {
            top_k: config.top_k,
            search_top_k: config.search_top_k,
            preview_chars: config.preview_chars,
        }
    }
}

/// Reachability of the hosted services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHealth {
    pub vector_database: bool,
    pub llm: bool,
}

impl ServiceHealth {
    pub const fn is_healthy(&self) -> bool {
        self.vector_database && self.llm
    }
}

/// Complete RAG service
pub struct RagService {
    vector_store: Arc<dyn VectorStore>,
    llm: Arc<dyn LanguageModel>,
    confidence: Arc<dyn ConfidenceStrategy>,
    settings: RagSettings,
}

impl RagService {
    /// Build the service and both hosted-service clients from configuration
    ///
    /// # Errors
    /// - `ConfigError` when vector or LLM credentials are missing
    /// - HTTP client build errors
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let vector_store = Arc::new(UpstashVectorClient::from_config(config)?);
        let llm = Arc::new(LlmService::new(config)?);

        Ok(Self::from_services(vector_store, llm).with_settings(RagSettings::from(&config.rag)))
    }

    /// Create from existing services with the mean-score confidence strategy
    #[must_use]
    pub fn from_services(vector_store: Arc<dyn VectorStore>, llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            vector_store,
            llm,
            confidence: Arc::new(MeanScoreConfidence),
            settings: RagSettings::default(),
        }
    }

    /// Replace the confidence strategy
    #[must_use]
    pub fn with_confidence(mut self, confidence: Arc<dyn ConfidenceStrategy>) -> Self {
        self.confidence = confidence;
        self
    }

    /// Replace retrieval sizes and preview length
    #[must_use]
    pub fn with_settings(mut self, settings: RagSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> &RagSettings {
        &self.settings
    }

    /// Answer one question from retrieved profile context
    ///
    /// # Errors
    /// - `Retrieval` when the vector search fails
    /// - `Generation` when the LLM call fails or returns no text
    pub async fn answer_question(&self, question: &str) -> Result<RagResponse> {
        info!("Processing RAG query: {}", question);

        debug!("Step 1: Retrieving chunks");
        let sources = self
            .retrieve(question, self.settings.top_k)
            .await
            .map_err(|e| {
                error!("RAG query error: {}", e);
                e
            })?;

        if sources.is_empty() {
            info!("No chunks retrieved, answering without the LLM");
            return Ok(RagResponse {
                answer: NO_INFORMATION_ANSWER.to_string(),
                confidence: 0.0,
                sources: Vec::new(),
            });
        }

        debug!("Step 2: Formatting context from {} chunks", sources.len());
        let context = format_context(&sources);

        debug!("Step 3: Generating answer");
        let answer = self
            .llm
            .generate(&context, question)
            .await
            .map_err(|e| {
                error!("RAG query error: {}", e);
                ProfileTwinError::generation(e)
            })?;

        debug!("Step 4: Scoring confidence");
        let scores: Vec<f64> = sources.iter().map(|s| s.score).collect();
        let confidence = self.confidence.estimate(&scores);

        info!("RAG query completed (confidence {:.2})", confidence);

        Ok(RagResponse {
            answer,
            confidence,
            sources,
        })
    }

    /// Keyword search with an optional category filter
    ///
    /// # Errors
    /// - `Retrieval` when the vector search fails
    pub async fn search_by_keyword(
        &self,
        query: &str,
        category: Option<ProfileCategory>,
    ) -> Result<Vec<ProfileSearchResult>> {
        info!(
            "Profile search: {} (category: {})",
            query,
            category.map_or("any", ProfileCategory::as_str)
        );

        let results = self.retrieve(query, self.settings.search_top_k).await?;

        let hits: Vec<ProfileSearchResult> = results
            .into_iter()
            .filter(|r| category.map_or(true, |c| r.metadata.category == Some(c)))
            .enumerate()
            .map(|(index, result)| ProfileSearchResult {
                id: index.to_string(),
                preview: preview(&result.content, self.settings.preview_chars),
                result_type: result
                    .metadata
                    .chunk_type
                    .unwrap_or_else(|| UNKNOWN_CHUNK_TYPE.to_string()),
                relevance: result.score,
                title: result.title,
            })
            .collect();

        debug!("Profile search returned {} hits", hits.len());
        Ok(hits)
    }

    /// Profile sections available to ask about
    ///
    /// Currently a static catalog; fallible so a catalog backed by the index
    /// can replace it.
    pub async fn list_sections(&self) -> Result<Vec<ProfileSection>> {
        Ok(profile_sections())
    }

    /// Answer questions one at a time, in order.
    ///
    /// All-or-nothing: the first failure is returned and answers gathered so
    /// far are dropped.
    ///
    /// # Errors
    /// - The first `Retrieval` or `Generation` failure
    pub async fn answer_sequential(&self, questions: &[String]) -> Result<Vec<RagResponse>> {
        let mut responses = Vec::with_capacity(questions.len());
        for question in questions {
            responses.push(self.answer_question(question).await?);
        }
        Ok(responses)
    }

    /// Answer questions one at a time, in order, keeping a per-question
    /// outcome instead of stopping at the first failure.
    pub async fn answer_each(&self, questions: &[String]) -> Vec<Result<RagResponse>> {
        stream::iter(questions)
            .then(move |question| self.answer_question(question))
            .collect()
            .await
    }

    /// Probe both hosted services
    pub async fn check_health(&self) -> ServiceHealth {
        let vector_database = self.vector_store.health_check().await;
        let llm = self.llm.health_check().await;
        ServiceHealth {
            vector_database,
            llm,
        }
    }

    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<VectorSearchResult>> {
        self.vector_store
            .query(query, top_k)
            .await
            .map_err(ProfileTwinError::retrieval)
    }
}
