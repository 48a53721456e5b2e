//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the profiletwin CLI

use crate::models::RagResponse;
use crate::AppConfig;

/// Print an info line
pub fn print_info(message: &str) {
    println!("ℹ️  {message}");
}

/// Print a warning line
pub fn print_warning(message: &str) {
    println!("⚠️  {message}");
}

/// Print a success line
pub fn print_success(message: &str) {
    println!("✅ {message}");
}

/// Print an error line to stderr
pub fn print_error(message: &str) {
    eprintln!("❌ {message}");
}

/// Render a RAG answer for the terminal
pub fn format_rag_response(
    question: &str,
    response: &RagResponse,
    min_confidence: f64,
    show_sources: bool,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("❓ {question}\n\n"));
    output.push_str(&format!("{}\n\n", response.answer));
    output.push_str(&format!(
        "[Confidence: {:.0}%]",
        response.confidence * 100.0
    ));
    if response.confidence < min_confidence {
        output.push_str(" (low confidence)");
    }
    output.push('\n');

    if show_sources && !response.sources.is_empty() {
        output.push_str(&format!("\nSources ({}):\n", response.sources.len()));
        for (idx, source) in response.sources.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} (Score: {:.2})\n",
                idx + 1,
                source.title,
                source.score
            ));
        }
    }

    output
}

/// Mask a secret, keeping only its first four characters
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}****")
}

/// Print configuration with credentials masked
pub fn print_config(config: &AppConfig) {
    println!("📋 profiletwin Configuration");
    println!("============================\n");

    println!("🔎 Vector index:");
    println!("  URL: {}", if config.vector_url().is_empty() { "(not set)" } else { config.vector_url() });
    println!("  Token: {}", mask_secret(config.vector_token()));
    println!("  Timeout: {}s", config.vector.timeout_secs);

    println!("\n🤖 LLM:");
    println!("  Endpoint: {}", config.llm_endpoint());
    println!("  Key: {}", mask_secret(config.llm_key()));
    println!("  Model: {}", config.llm_model());
    println!("  Max tokens: {}", config.llm.max_tokens);
    println!("  Temperature: {}", config.llm.temperature);

    println!("\n📚 Retrieval:");
    println!("  Top K (ask): {}", config.rag.top_k);
    println!("  Top K (search): {}", config.rag.search_top_k);
    println!("  Preview length: {}", config.rag.preview_chars);

    println!("\n👤 Profile owner: {}", config.owner_name());
    println!(
        "🌐 Server: {} v{} on {}:{}",
        config.server.name, config.server.version, config.server.host, config.server.port
    );
    println!("📝 Log level: {}", config.logging.level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChunkMetadata;
    use crate::models::VectorSearchResult;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "(not set)");
        assert_eq!(mask_secret("gsk_abcdef"), "gsk_****");
        assert_eq!(mask_secret("ab"), "ab****");
    }

    #[test]
    fn test_format_rag_response_flags_low_confidence() {
        let response = RagResponse {
            answer: "I studied physics.".to_string(),
            confidence: 0.42,
            sources: vec![VectorSearchResult {
                title: "Education".to_string(),
                content: "BSc Physics".to_string(),
                score: 0.42,
                metadata: ChunkMetadata::default(),
            }],
        };

        let text = format_rag_response("Where did you study?", &response, 0.5, true);
        assert!(text.contains("[Confidence: 42%] (low confidence)"));
        assert!(text.contains("1. Education (Score: 0.42)"));

        let text = format_rag_response("Where did you study?", &response, 0.4, false);
        assert!(!text.contains("low confidence"));
        assert!(!text.contains("Sources"));
    }
}
