//! REST API request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::error;
use tracing::info;

use crate::api::types::ApiResponse;
use crate::api::types::AskBatchRequest;
use crate::api::types::AskRequest;
use crate::api::types::HealthResponse;
use crate::api::types::SearchRequest;
use crate::config::ServerConfig;
use crate::errors::ProfileTwinError;
use crate::models::ProfileCategory;
use crate::models::ProfileSearchResult;
use crate::models::ProfileSection;
use crate::models::RagResponse;
use crate::rag::RagService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub rag: Arc<RagService>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(rag: Arc<RagService>, server: ServerConfig) -> Self {
        Self {
            rag,
            server: Arc::new(server),
        }
    }
}

type ApiResult<T> = (StatusCode, Json<ApiResponse<T>>);

fn ok<T>(data: T) -> ApiResult<T> {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

fn failure<T>(err: &ProfileTwinError) -> ApiResult<T> {
    let status = match err {
        ProfileTwinError::InvalidInput(_) | ProfileTwinError::UnknownCategory(_) => {
            StatusCode::BAD_REQUEST
        }
        _ if err.is_config_error() => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

fn require_text(value: &str, what: &str) -> Result<(), ProfileTwinError> {
    if value.trim().is_empty() {
        return Err(ProfileTwinError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let health = state.rag.check_health().await;
    let status = if health.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse::success(HealthResponse {
            status: if health.is_healthy() { "healthy" } else { "degraded" }.to_string(),
            version: state.server.version.clone(),
            vector_database: health.vector_database,
            llm: health.llm,
        })),
    )
}

/// Answer one question (POST /api/ask)
pub async fn ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> ApiResult<RagResponse> {
    info!("POST /api/ask: {}", req.question);

    if let Err(e) = require_text(&req.question, "question") {
        return failure(&e);
    }

    match state.rag.answer_question(&req.question).await {
        Ok(response) => ok(response),
        Err(e) => {
            error!("Error processing RAG query: {}", e);
            failure(&e)
        }
    }
}

/// Answer several questions in order (POST /api/ask/batch)
pub async fn ask_batch(
    State(state): State<AppState>,
    Json(req): Json<AskBatchRequest>,
) -> ApiResult<Vec<RagResponse>> {
    info!("POST /api/ask/batch: {} questions", req.questions.len());

    if let Some(e) = req
        .questions
        .iter()
        .find_map(|q| require_text(q, "question").err())
    {
        return failure(&e);
    }

    match state.rag.answer_sequential(&req.questions).await {
        Ok(responses) => ok(responses),
        Err(e) => {
            error!("Error processing RAG batch: {}", e);
            failure(&e)
        }
    }
}

/// Keyword search (POST /api/search)
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> ApiResult<Vec<ProfileSearchResult>> {
    info!("POST /api/search: {}", req.query);

    if let Err(e) = require_text(&req.query, "query") {
        return failure(&e);
    }

    let category = match ProfileCategory::parse_filter(req.category.as_deref()) {
        Ok(category) => category,
        Err(e) => return failure(&e),
    };

    match state.rag.search_by_keyword(&req.query, category).await {
        Ok(results) => ok(results),
        Err(e) => {
            error!("Error searching profile: {}", e);
            failure(&e)
        }
    }
}

/// Profile sections (GET /api/sections)
pub async fn sections(State(state): State<AppState>) -> ApiResult<Vec<ProfileSection>> {
    match state.rag.list_sections().await {
        Ok(sections) => ok(sections),
        Err(e) => {
            error!("Error listing profile sections: {}", e);
            failure(&e)
        }
    }
}
