use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileTwinError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Vector search error: {0}")]
    VectorSearchError(String),

    #[error("LLM error: {0}")]
    LlmError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Retrieval stage of the RAG pipeline failed
    #[error("Failed to query profile: {0}")]
    Retrieval(#[source] Box<ProfileTwinError>),

    /// Generation stage of the RAG pipeline failed
    #[error("Failed to generate response: {0}")]
    Generation(#[source] Box<ProfileTwinError>),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown profile category: {0}")]
    UnknownCategory(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileTwinError {
    /// Wrap an error as a retrieval stage failure
    #[must_use]
    pub fn retrieval(err: Self) -> Self {
        Self::Retrieval(Box::new(err))
    }

    /// Wrap an error as a generation stage failure
    #[must_use]
    pub fn generation(err: Self) -> Self {
        Self::Generation(Box::new(err))
    }

    /// True when the root cause is missing or invalid configuration,
    /// looking through the pipeline stage wrappers.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::ConfigError(_) => true,
            Self::Retrieval(inner) | Self::Generation(inner) => inner.is_config_error(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileTwinError>;
