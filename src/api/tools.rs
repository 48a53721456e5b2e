//! Tool actions exposed to MCP callers
//!
//! Each action validates its input, calls the RAG service and renders the
//! outcome as a text [`McpToolResult`]. Failures become error envelopes
//! rather than transport errors.

use tracing::error;
use tracing::warn;

use crate::api::types::McpToolResult;
use crate::models::ProfileCategory;
use crate::models::ProfileSearchResult;
use crate::models::ProfileSection;
use crate::rag::RagService;

/// Render a 0..1 value as a whole percentage
fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Answer a question about the profile
pub async fn ask_about_profile(service: &RagService, question: &str) -> McpToolResult {
    if question.trim().is_empty() {
        return McpToolResult::error("Please provide a question about my professional profile.");
    }

    match service.answer_question(question).await {
        Ok(response) => McpToolResult::text(format!(
            "{}\n\n[Confidence: {}%]",
            response.answer,
            percent(response.confidence)
        )),
        Err(e) => {
            error!("askAboutProfile failed: {}", e);
            McpToolResult::error(format!("Error processing query: {e}"))
        }
    }
}

/// Search the profile, optionally within one category
pub async fn search_profile(
    service: &RagService,
    query: &str,
    category: Option<&str>,
) -> McpToolResult {
    if query.trim().is_empty() {
        return McpToolResult::error("Please provide search keywords.");
    }

    let category = match ProfileCategory::parse_filter(category) {
        Ok(category) => category,
        Err(e) => {
            warn!("searchProfile rejected category: {}", e);
            return McpToolResult::error(format!(
                "Error searching profile: {e}. Valid categories: {}",
                ProfileCategory::names().join(", ")
            ));
        }
    };

    match service.search_by_keyword(query, category).await {
        Ok(results) => McpToolResult::text(render_search_outcome(query, category, &results)),
        Err(e) => {
            error!("searchProfile failed: {}", e);
            McpToolResult::error(format!("Error searching profile: {e}"))
        }
    }
}

/// List the sections of the profile
pub async fn list_profile_sections(service: &RagService) -> McpToolResult {
    match service.list_sections().await {
        Ok(sections) => McpToolResult::text(render_sections(&sections)),
        Err(e) => {
            error!("listProfileSections failed: {}", e);
            McpToolResult::error(format!("Error retrieving profile sections: {e}"))
        }
    }
}

/// Search hits as text, or the no-results message naming the query scope
pub(crate) fn render_search_outcome(
    query: &str,
    category: Option<ProfileCategory>,
    results: &[ProfileSearchResult],
) -> String {
    if results.is_empty() {
        let scope = category
            .map(|c| format!(" in category \"{c}\""))
            .unwrap_or_default();
        return format!("No results found for \"{query}\"{scope}.");
    }
    render_search_results(results)
}

pub(crate) fn render_search_results(results: &[ProfileSearchResult]) -> String {
    let formatted = results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            format!(
                "{}. **{}** ({}, relevance: {}%)\n   {}",
                index + 1,
                result.title,
                result.result_type,
                percent(result.relevance),
                result.preview
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let plural = if results.len() == 1 { "" } else { "s" };
    format!(
        "Found {} matching result{plural}:\n\n{formatted}",
        results.len()
    )
}

pub(crate) fn render_sections(sections: &[ProfileSection]) -> String {
    if sections.is_empty() {
        return "No profile sections available.".to_string();
    }

    let formatted = sections
        .iter()
        .map(|section| {
            format!(
                "• **{}** ({})\n  {}",
                section.name, section.section_type, section.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "My profile contains the following sections:\n\n{formatted}\n\nYou can ask me about any of these areas!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rag::sections::profile_sections;

    #[test]
    fn test_percent_rounds() {
        assert_eq!(percent(0.7), 70);
        assert_eq!(percent(0.456), 46);
        assert_eq!(percent(0.0), 0);
    }

    #[test]
    fn test_render_single_search_result() {
        let results = vec![ProfileSearchResult {
            id: "0".to_string(),
            title: "Rust".to_string(),
            result_type: "technical_skills".to_string(),
            relevance: 0.876,
            preview: "Systems programming...".to_string(),
        }];

        assert_eq!(
            render_search_results(&results),
            "Found 1 matching result:\n\n1. **Rust** (technical_skills, relevance: 88%)\n   Systems programming..."
        );
    }

    #[test]
    fn test_render_search_results_pluralizes() {
        let result = ProfileSearchResult {
            id: "0".to_string(),
            title: "A".to_string(),
            result_type: "unknown".to_string(),
            relevance: 0.5,
            preview: "...".to_string(),
        };
        let text = render_search_results(&[result.clone(), result]);
        assert!(text.starts_with("Found 2 matching results:"));
        assert!(text.contains("\n\n2. **A**"));
    }

    #[test]
    fn test_render_search_outcome_empty() {
        assert_eq!(
            render_search_outcome("awards", None, &[]),
            "No results found for \"awards\"."
        );
        assert_eq!(
            render_search_outcome("awards", Some(ProfileCategory::Goals), &[]),
            "No results found for \"awards\" in category \"goals\"."
        );
    }

    #[test]
    fn test_render_sections_empty() {
        assert_eq!(render_sections(&[]), "No profile sections available.");
    }

    #[test]
    fn test_render_sections() {
        let text = render_sections(&profile_sections());
        assert!(text.starts_with("My profile contains the following sections:\n\n• **Introduction** (intro)\n  Professional summary and pitch"));
        assert!(text.contains("• **Interview Preparation** (interview_prep)"));
        assert!(text.ends_with("\n\nYou can ask me about any of these areas!"));
    }
}
