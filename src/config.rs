use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

/// Environment variable holding the vector index REST URL
pub const VECTOR_URL_ENV: &str = "UPSTASH_VECTOR_REST_URL";
/// Environment variable holding the vector index REST token
pub const VECTOR_TOKEN_ENV: &str = "UPSTASH_VECTOR_REST_TOKEN";
/// Environment variable holding the chat-completions API key
pub const LLM_KEY_ENV: &str = "GROQ_API_KEY";
/// Environment variable overriding the chat model
pub const LLM_MODEL_ENV: &str = "GROQ_MODEL";
/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "PROFILETWIN_LOG_LEVEL";

/// Primary config file
pub const CONFIG_FILE: &str = "config.toml";
/// Fallback config file shipped with the repository
pub const EXAMPLE_CONFIG_FILE: &str = "config.example.toml";

/// Where [`AppConfig::load_with_source`] found its settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    ExampleFile,
    Defaults,
}

impl ConfigSource {
    /// Pick the first config file that exists
    pub fn detect<F>(exists: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        if exists(Path::new(CONFIG_FILE)) {
            Self::File
        } else if exists(Path::new(EXAMPLE_CONFIG_FILE)) {
            Self::ExampleFile
        } else {
            Self::Defaults
        }
    }

    /// File to read, if any
    pub fn path(self) -> Option<&'static Path> {
        match self {
            Self::File => Some(Path::new(CONFIG_FILE)),
            Self::ExampleFile => Some(Path::new(EXAMPLE_CONFIG_FILE)),
            Self::Defaults => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    #[serde(default)]
    pub rest_url: String,
    #[serde(default)]
    pub rest_token: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            rest_url: String::new(),
            rest_token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_endpoint")]
    pub llm_endpoint: String,
    #[serde(default)]
    pub llm_key: String,
    #[serde(default = "default_llm_model")]
    pub llm_model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

pub(crate) fn default_llm_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

pub(crate) fn default_max_tokens() -> u32 {
    1024
}

pub(crate) fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Chunks retrieved per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Chunks retrieved per keyword search
    #[serde(default = "default_search_top_k")]
    pub search_top_k: usize,
    /// Characters kept in a search preview
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    /// Answers below this confidence are flagged in CLI output
    #[serde(default = "default_min_confidence")]
    pub min_confidence_threshold: f64,
}

pub(crate) fn default_top_k() -> usize {
    3
}

pub(crate) fn default_search_top_k() -> usize {
    5
}

pub(crate) fn default_preview_chars() -> usize {
    150
}

fn default_min_confidence() -> f64 {
    0.5
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            search_top_k: default_search_top_k(),
            preview_chars: default_preview_chars(),
            min_confidence_threshold: default_min_confidence(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
}

pub(crate) fn default_owner_name() -> String {
    "Aiyppachan".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,
    #[serde(default = "default_server_version")]
    pub version: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
}

fn default_server_name() -> String {
    "digital-twin".to_string()
}

fn default_server_version() -> String {
    "1.0.0".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_server_version(),
            host: default_host(),
            port: default_port(),
            enable_cors: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub vector: VectorConfig,
    pub llm: LlmConfig,
    #[serde(default)]
    pub rag: RagConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from the default config file path, then apply
    /// environment overrides.
    ///
    /// Falls back to `config.example.toml`, and to built-in defaults when
    /// neither file exists, since credentials usually come from the
    /// environment.
    pub fn load() -> crate::Result<Self> {
        Self::load_with_source().map(|(config, _)| config)
    }

    /// Like [`AppConfig::load`], also reporting where the settings came from.
    ///
    /// Nothing is logged here; callers report the source once logging is up.
    pub fn load_with_source() -> crate::Result<(Self, ConfigSource)> {
        let source = ConfigSource::detect(Path::exists);
        let mut config = match source.path() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok((config, source))
    }

    /// Override credentials and selected settings from the environment.
    ///
    /// Takes a lookup function so tests can supply variables without
    /// touching the process environment. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(VECTOR_URL_ENV) {
            self.vector.rest_url = url;
        }
        if let Some(token) = get(VECTOR_TOKEN_ENV) {
            self.vector.rest_token = token;
        }
        if let Some(key) = get(LLM_KEY_ENV) {
            self.llm.llm_key = key;
        }
        if let Some(model) = get(LLM_MODEL_ENV) {
            self.llm.llm_model = model;
        }
        if let Some(level) = get(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }
    }

    /// Get vector index REST URL
    pub fn vector_url(&self) -> &str {
        &self.vector.rest_url
    }

    /// Get vector index REST token
    pub fn vector_token(&self) -> &str {
        &self.vector.rest_token
    }

    /// Get LLM endpoint
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.llm_endpoint
    }

    /// Get LLM key
    pub fn llm_key(&self) -> &str {
        &self.llm.llm_key
    }

    /// Get LLM model
    pub fn llm_model(&self) -> &str {
        &self.llm.llm_model
    }

    /// Get the profile owner's name used in the persona prompt
    pub fn owner_name(&self) -> &str {
        &self.profile.owner_name
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            vector: VectorConfig::default(),
            llm: LlmConfig {
                llm_endpoint: default_llm_endpoint(),
                llm_key: String::new(),
                llm_model: default_llm_model(),
                max_tokens: default_max_tokens(),
                temperature: default_temperature(),
                timeout_secs: default_timeout_secs(),
            },
            rag: RagConfig::default(),
            profile: ProfileConfig::default(),
            server: ServerConfig::default(),
        }
    }
}
