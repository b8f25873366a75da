pub mod ask;
pub mod chat;
pub mod chunks;
pub mod demo;
pub mod search;
pub mod stats;

use anyhow::Result;
use joi::config::JoiConfig;
use joi::retrieval::{RetrievalService, RetrievalSettings};

/// Build the retrieval service from config (custom knowledge file or built-in).
pub fn load_service(config: &JoiConfig) -> Result<RetrievalService> {
    let knowledge = config.load_knowledge()?;
    Ok(RetrievalService::new(
        knowledge,
        RetrievalSettings::from(&config.retrieval),
    ))
}

/// Shorten `text` to at most `max` characters, appending `...` when cut.
pub fn preview(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
