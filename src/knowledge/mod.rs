//! The knowledge base: records, built-in profile, and chunking.
//!
//! A knowledge base comes either from [`KnowledgeBase::builtin`] or from a TOML/JSON
//! file via [`KnowledgeBase::load_from`]. Either way it is turned into chunks once
//! with [`create_knowledge_chunks`] and never mutated afterwards.

pub mod builtin;
pub mod chunks;
pub mod types;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use chunks::{contact_chunk, create_knowledge_chunks, humanize_key};
pub use types::{Category, Chunk, ChunkMetadata, KnowledgeBase};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse knowledge TOML {path}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to parse knowledge JSON {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported knowledge file extension: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("knowledge base has no name")]
    MissingName,
    #[error("duplicate chunk id: {0}")]
    DuplicateChunkId(String),
}

impl KnowledgeBase {
    /// Load a knowledge base from a `.toml` or `.json` file and validate it.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let kb: KnowledgeBase = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&contents).map_err(|source| KnowledgeError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("json") => {
                serde_json::from_str(&contents).map_err(|source| KnowledgeError::Json {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => return Err(KnowledgeError::UnsupportedFormat(path.to_path_buf())),
        };

        kb.validate()?;
        tracing::info!(
            path = %path.display(),
            name = %kb.personal.name,
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Check that the knowledge base produces uniquely identified chunks.
    pub fn validate(&self) -> Result<(), KnowledgeError> {
        if self.personal.name.trim().is_empty() {
            return Err(KnowledgeError::MissingName);
        }
        let mut seen = HashSet::new();
        for chunk in create_knowledge_chunks(self) {
            if !seen.insert(chunk.id.clone()) {
                return Err(KnowledgeError::DuplicateChunkId(chunk.id));
            }
        }
        Ok(())
    }
}
