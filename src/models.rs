//! Profile data model shared by the retrieval, generation and tool layers

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ProfileTwinError;

/// Title used when a chunk carries no title metadata
pub const DEFAULT_CHUNK_TITLE: &str = "Information";
/// Search result type used when a chunk carries no text `type` metadata
pub const UNKNOWN_CHUNK_TYPE: &str = "unknown";

/// Category of profile content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileCategory {
    Intro,
    Education,
    Experience,
    TechnicalSkills,
    Projects,
    Achievements,
    Goals,
    InterviewPrep,
}

impl ProfileCategory {
    /// Every category, in presentation order
    pub const ALL: [Self; 8] = [
        Self::Intro,
        Self::Education,
        Self::Experience,
        Self::TechnicalSkills,
        Self::Projects,
        Self::Achievements,
        Self::Goals,
        Self::InterviewPrep,
    ];

    /// Wire name of the category
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::TechnicalSkills => "technical_skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Goals => "goals",
            Self::InterviewPrep => "interview_prep",
        }
    }

    /// Wire names of every category, for input schemas
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }

    /// Parse an optional category filter from caller input.
    ///
    /// A missing or blank value means no filter.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, ProfileTwinError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => name.parse().map(Some),
        }
    }
}

impl fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileCategory {
    type Err = ProfileTwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ProfileTwinError::UnknownCategory(s.to_string()))
    }
}

/// Optional metadata attached to a profile chunk at index time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChunkMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProfileCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A unit of indexed profile content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileChunk {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub chunk_type: ProfileCategory,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ProfileChunkMetadata>,
}

impl ProfileChunk {
    /// Text submitted to the index for embedding
    pub fn embedding_text(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }

    /// Metadata stored alongside the vector, in the shape the retrieval
    /// boundary reads back
    pub fn index_metadata(&self) -> Value {
        let category = self
            .metadata
            .as_ref()
            .and_then(|m| m.category)
            .unwrap_or(self.chunk_type);
        let tags = self
            .metadata
            .as_ref()
            .map(|m| m.tags.clone())
            .unwrap_or_default();

        serde_json::json!({
            "title": self.title,
            "content": self.content,
            "category": category.as_str(),
            "type": self.chunk_type.as_str(),
            "tags": tags,
        })
    }
}

/// Metadata returned with a retrieved chunk, validated at the retrieval boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ProfileCategory>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub chunk_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl ChunkMetadata {
    /// Read metadata from the raw JSON the index returns.
    ///
    /// Non-string fields count as absent. Unknown categories count as absent
    /// so they never match a category filter.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let category = value
            .get("category")
            .and_then(Value::as_str)
            .and_then(|raw| match raw.parse::<ProfileCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    tracing::debug!("Ignoring unknown chunk category: {raw}");
                    None
                }
            });

        let tags = value
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title: text("title"),
            content: text("content"),
            category,
            chunk_type: text("type"),
            tags,
        }
    }
}

/// One retrieved chunk with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSearchResult {
    pub title: String,
    pub content: String,
    pub score: f64,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

impl VectorSearchResult {
    /// Build a result from index metadata, defaulting a missing title to
    /// "Information" and missing content to empty text
    pub fn from_metadata(score: f64, metadata: ChunkMetadata) -> Self {
        Self {
            title: metadata
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_CHUNK_TITLE.to_string()),
            content: metadata.content.clone().unwrap_or_default(),
            score,
            metadata,
        }
    }
}

/// Answer produced by the RAG pipeline for one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RagResponse {
    pub answer: String,
    pub confidence: f64,
    pub sources: Vec<VectorSearchResult>,
}

/// User-facing keyword search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSearchResult {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub result_type: String,
    pub relevance: f64,
    pub preview: String,
}

/// Descriptor of one profile category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSection {
    pub name: String,
    #[serde(rename = "type")]
    pub section_type: ProfileCategory,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in ProfileCategory::ALL {
            assert_eq!(category.as_str().parse::<ProfileCategory>().unwrap(), category);
        }
        assert_eq!(
            ProfileCategory::names(),
            vec![
                "intro",
                "education",
                "experience",
                "technical_skills",
                "projects",
                "achievements",
                "goals",
                "interview_prep"
            ]
        );
    }

    #[test]
    fn test_category_rejects_unknown() {
        let err = "hobbies".parse::<ProfileCategory>().unwrap_err();
        assert!(matches!(err, ProfileTwinError::UnknownCategory(name) if name == "hobbies"));
        assert!("Education".parse::<ProfileCategory>().is_err());
    }

    #[test]
    fn test_parse_filter_treats_blank_as_absent() {
        assert_eq!(ProfileCategory::parse_filter(None).unwrap(), None);
        assert_eq!(ProfileCategory::parse_filter(Some("")).unwrap(), None);
        assert_eq!(ProfileCategory::parse_filter(Some("  ")).unwrap(), None);
        assert_eq!(
            ProfileCategory::parse_filter(Some("goals")).unwrap(),
            Some(ProfileCategory::Goals)
        );
        assert!(matches!(
            ProfileCategory::parse_filter(Some("hobbies")),
            Err(ProfileTwinError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_serde_uses_snake_case() {
        let json = serde_json::to_string(&ProfileCategory::TechnicalSkills).unwrap();
        assert_eq!(json, "\"technical_skills\"");
    }

    #[test]
    fn test_metadata_from_value() {
        let raw = json!({
            "title": "Rust Skills",
            "content": "Async services with tokio",
            "category": "technical_skills",
            "type": "skill",
            "tags": ["rust", 7, "tokio"]
        });

        let metadata = ChunkMetadata::from_value(&raw);
        assert_eq!(metadata.title.as_deref(), Some("Rust Skills"));
        assert_eq!(metadata.category, Some(ProfileCategory::TechnicalSkills));
        assert_eq!(metadata.chunk_type.as_deref(), Some("skill"));
        assert_eq!(metadata.tags, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_metadata_non_text_fields_are_absent() {
        let raw = json!({ "title": 42, "type": {"nested": true}, "category": "hobbies" });

        let metadata = ChunkMetadata::from_value(&raw);
        assert_eq!(metadata, ChunkMetadata::default());
    }

    #[test]
    fn test_result_defaults_title_and_content() {
        let result = VectorSearchResult::from_metadata(0.4, ChunkMetadata::default());
        assert_eq!(result.title, "Information");
        assert_eq!(result.content, "");
        assert!((result.score - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chunk_index_metadata_prefers_explicit_category() {
        let chunk = ProfileChunk {
            id: "exp-1".to_string(),
            title: "Backend Engineer".to_string(),
            chunk_type: ProfileCategory::Experience,
            content: "Built payment APIs".to_string(),
            metadata: Some(ProfileChunkMetadata {
                category: Some(ProfileCategory::Projects),
                tags: vec!["payments".to_string()],
            }),
        };

        let metadata = chunk.index_metadata();
        assert_eq!(metadata["category"], "projects");
        assert_eq!(metadata["type"], "experience");
        assert_eq!(metadata["tags"], json!(["payments"]));
        assert_eq!(chunk.embedding_text(), "Backend Engineer: Built payment APIs");
    }

    #[test]
    fn test_search_result_serializes_type_field() {
        let result = ProfileSearchResult {
            id: "0".to_string(),
            title: "Education".to_string(),
            result_type: "education".to_string(),
            relevance: 0.9,
            preview: "BSc...".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["type"], "education");
    }
}
