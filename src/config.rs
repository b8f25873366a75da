use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::generation::DEFAULT_PERSONA;
use crate::knowledge::KnowledgeBase;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct JoiConfig {
    pub server: ServerConfig,
    pub knowledge: KnowledgeConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Path to a `.toml` or `.json` knowledge base. Empty means built-in.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_limit: usize,
    pub context_chunks: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GenerationConfig {
    pub host: String,
    pub model: String,
    pub timeout_secs: u64,
    pub persona: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            host: "127.0.0.1".into(),
            port: 8787,
            log_level: "info".into(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_limit: crate::retrieval::DEFAULT_SEARCH_LIMIT,
            context_chunks: crate::retrieval::DEFAULT_CONTEXT_CHUNKS,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:11434".into(),
            model: "llama3.2".into(),
            timeout_secs: 60,
            persona: DEFAULT_PERSONA.into(),
        }
    }
}

/// Returns `~/.joi/`, or `.joi/` when there is no home directory.
pub fn default_joi_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".joi"))
        .unwrap_or_else(|| PathBuf::from(".joi"))
}

/// Returns the default config file path: `~/.joi/config.toml`
pub fn default_config_path() -> PathBuf {
    default_joi_dir().join("config.toml")
}

impl JoiConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            JoiConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (JOI_LOG_LEVEL, JOI_KNOWLEDGE, JOI_OLLAMA_HOST, JOI_MODEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOI_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("JOI_KNOWLEDGE") {
            self.knowledge.path = val;
        }
        if let Ok(val) = std::env::var("JOI_OLLAMA_HOST") {
            self.generation.host = val;
        }
        if let Ok(val) = std::env::var("JOI_MODEL") {
            self.generation.model = val;
        }
    }

    /// Resolve the knowledge file path, expanding `~` if needed. `None` means built-in.
    pub fn resolved_knowledge_path(&self) -> Option<PathBuf> {
        let path = self.knowledge.path.trim();
        (!path.is_empty()).then(|| expand_tilde(path))
    }

    /// Load the configured knowledge base, or the built-in one.
    pub fn load_knowledge(&self) -> Result<KnowledgeBase> {
        match self.resolved_knowledge_path() {
            Some(path) => KnowledgeBase::load_from(&path)
                .with_context(|| format!("failed to load knowledge base {}", path.display())),
            None => Ok(KnowledgeBase::builtin()),
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
