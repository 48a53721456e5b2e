//! CLI command handlers

use std::path::Path;

use crate::api::serve_api;
use crate::api::tools;
use crate::cli::output::*;
use crate::errors::ProfileTwinError;
use crate::models::ProfileCategory;
use crate::models::ProfileChunk;
use crate::rag::RagService;
use crate::vector::UpstashVectorClient;
use crate::vector::VectorStore;
use crate::AppConfig;
use crate::Result;

pub async fn handle_serve(
    config: &AppConfig,
    host: Option<String>,
    port: Option<u16>,
    cors: bool,
) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let cors = cors || config.server.enable_cors;

    println!("🚀 Starting profiletwin API Server");
    println!("==================================\n");
    println!("📍 Host: {host}");
    println!("🔌 Port: {port}");
    println!("🌐 CORS: {}", if cors { "Enabled" } else { "Disabled" });
    println!();

    serve_api(config, host, port, cors).await
}

pub async fn handle_ask(
    config: &AppConfig,
    questions: &[String],
    keep_going: bool,
    show_sources: bool,
) -> Result<()> {
    if let Some(blank) = questions.iter().find(|q| q.trim().is_empty()) {
        return Err(ProfileTwinError::InvalidInput(format!(
            "question must not be empty: {blank:?}"
        )));
    }

    let service = RagService::from_config(config)?;
    let threshold = config.rag.min_confidence_threshold;

    if keep_going {
        let outcomes = service.answer_each(questions).await;
        let mut failures = 0;
        for (question, outcome) in questions.iter().zip(outcomes) {
            match outcome {
                Ok(response) => {
                    println!("{}", format_rag_response(question, &response, threshold, show_sources));
                }
                Err(e) => {
                    failures += 1;
                    print_error(&format!("{question}: {e}"));
                }
            }
        }
        if failures > 0 {
            print_warning(&format!("{failures} of {} questions failed", questions.len()));
        }
        return Ok(());
    }

    let responses = service.answer_sequential(questions).await?;
    for (question, response) in questions.iter().zip(&responses) {
        println!("{}", format_rag_response(question, response, threshold, show_sources));
    }
    Ok(())
}

pub async fn handle_search(config: &AppConfig, query: &str, category: Option<&str>) -> Result<()> {
    if query.trim().is_empty() {
        return Err(ProfileTwinError::InvalidInput(
            "search query must not be empty".to_string(),
        ));
    }
    let category = ProfileCategory::parse_filter(category)?;

    let service = RagService::from_config(config)?;
    let results = service.search_by_keyword(query, category).await?;
    println!("{}", tools::render_search_outcome(query, category, &results));
    Ok(())
}

pub async fn handle_sections(config: &AppConfig) -> Result<()> {
    let service = RagService::from_config(config)?;
    let sections = service.list_sections().await?;
    println!("{}", tools::render_sections(&sections));
    Ok(())
}

pub async fn handle_health(config: &AppConfig) -> Result<()> {
    let service = RagService::from_config(config)?;
    let health = service.check_health().await;

    let label = |ok: bool| if ok { "✅ reachable" } else { "❌ unreachable" };
    println!("🔎 Vector database: {}", label(health.vector_database));
    println!("🤖 LLM ({}): {}", config.llm_model(), label(health.llm));

    if health.is_healthy() {
        print_success("All services healthy");
    } else {
        print_warning("One or more services are unavailable");
    }
    Ok(())
}

/// Read profile chunks from a JSON array file
pub fn read_chunks(path: &Path) -> Result<Vec<ProfileChunk>> {
    let content = std::fs::read_to_string(path)?;
    let chunks: Vec<ProfileChunk> = serde_json::from_str(&content)?;
    Ok(chunks)
}

pub async fn handle_index(config: &AppConfig, file: &Path) -> Result<()> {
    let chunks = read_chunks(file)?;
    if chunks.is_empty() {
        print_warning(&format!("No chunks found in {}", file.display()));
        return Ok(());
    }

    let client = UpstashVectorClient::from_config(config)?;
    print_info(&format!("Upserting {} chunks from {}", chunks.len(), file.display()));
    client.upsert(&chunks).await?;
    print_success(&format!("Indexed {} chunks", chunks.len()));
    Ok(())
}

pub fn handle_config(config: &AppConfig) {
    print_config(config);
}
