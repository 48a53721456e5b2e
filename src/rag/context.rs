//! Context assembly from retrieved chunks

use crate::models::VectorSearchResult;

/// Separator between chunks in the context block
const CHUNK_SEPARATOR: &str = "\n\n";

/// Format retrieved chunks into one context block for the LLM.
///
/// Each chunk becomes `title: content`; chunks keep their retrieval order and
/// are joined by a blank line.
#[must_use]
pub fn format_context(results: &[VectorSearchResult]) -> String {
    results
        .iter()
        .map(|result| format!("{}: {}", result.title, result.content))
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR)
}

/// Character-safe preview: the first `max_chars` characters followed by
/// `"..."`. The marker is appended even when nothing was cut.
#[must_use]
pub fn preview(content: &str, max_chars: usize) -> String {
    let truncated: String = content.chars().take(max_chars).collect();
    format!("{truncated}...")
}
