//! Upstash Vector REST client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::error;

use super::VectorStore;
use crate::config::AppConfig;
use crate::config::VECTOR_TOKEN_ENV;
use crate::config::VECTOR_URL_ENV;
use crate::errors::ProfileTwinError;
use crate::errors::Result;
use crate::models::ChunkMetadata;
use crate::models::ProfileChunk;
use crate::models::VectorSearchResult;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
    data: &'a str,
    top_k: usize,
    include_metadata: bool,
}

#[derive(Serialize)]
struct UpsertItem<'a> {
    id: &'a str,
    data: String,
    metadata: serde_json::Value,
}

#[derive(Deserialize)]
struct QueryResponse {
    result: Vec<QueryMatch>,
}

#[derive(Deserialize)]
struct QueryMatch {
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    metadata: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for a hosted Upstash vector index with server-side embedding
#[derive(Clone)]
pub struct UpstashVectorClient {
    base_url: String,
    token: String,
    client: Client,
}

impl UpstashVectorClient {
    /// Create a new client
    ///
    /// # Errors
    /// - `ConfigError` when the URL or token is empty, or the URL does not parse
    /// - HTTP client build errors
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self> {
        if base_url.trim().is_empty() || token.trim().is_empty() {
            return Err(ProfileTwinError::ConfigError(format!(
                "Missing Upstash Vector credentials. Set {VECTOR_URL_ENV} and {VECTOR_TOKEN_ENV}"
            )));
        }

        url::Url::parse(base_url).map_err(|e| {
            ProfileTwinError::ConfigError(format!("Invalid {VECTOR_URL_ENV} '{base_url}': {e}"))
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProfileTwinError::HttpError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    /// Create a client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.vector_url(),
            config.vector_token(),
            Duration::from_secs(config.vector.timeout_secs),
        )
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<reqwest::Response> {
        let url = format!("{}/{path}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await
            .map_err(|e| ProfileTwinError::VectorSearchError(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error)
            .unwrap_or(body);
        Err(ProfileTwinError::VectorSearchError(format!(
            "{status}: {message}"
        )))
    }
}

#[async_trait]
impl VectorStore for UpstashVectorClient {
    async fn query(&self, text: &str, top_k: usize) -> Result<Vec<VectorSearchResult>> {
        debug!("Vector query (top_k={}): {}", top_k, text);

        let request = QueryRequest {
            data: text,
            top_k,
            include_metadata: true,
        };

        let response = self.post("query-data", &request).await.map_err(|e| {
            error!("Vector search error: {}", e);
            e
        })?;

        let body: QueryResponse = response.json().await.map_err(|e| {
            ProfileTwinError::VectorSearchError(format!("Malformed query response: {e}"))
        })?;

        let results: Vec<VectorSearchResult> = body
            .result
            .into_iter()
            .map(|m| {
                let metadata = m
                    .metadata
                    .as_ref()
                    .map(ChunkMetadata::from_value)
                    .unwrap_or_default();
                VectorSearchResult::from_metadata(m.score.unwrap_or(0.0), metadata)
            })
            .collect();

        debug!("Vector query returned {} results", results.len());
        Ok(results)
    }

    async fn upsert(&self, chunks: &[ProfileChunk]) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let items: Vec<UpsertItem<'_>> = chunks
            .iter()
            .map(|chunk| UpsertItem {
                id: &chunk.id,
                data: chunk.embedding_text(),
                metadata: chunk.index_metadata(),
            })
            .collect();

        self.post("upsert-data", &items).await?;
        debug!("Upserted {} chunks", items.len());
        Ok(())
    }
}
