//! Keyword retrieval over the knowledge base.
//!
//! [`RetrievalService`] owns the chunks and the [`index::KeywordIndex`] built from
//! them. It is built once and only read afterwards, so it can be shared freely
//! (typically behind an `Arc`). Query flow:
//!
//! 1. [`router::Intent::detect`] picks a category filter from keywords in the query
//! 2. the filter (or ranked keyword search) yields [`Hit`]s
//! 3. [`answer::generate_contextual_response`] phrases them as one answer string

pub mod answer;
pub mod index;
pub mod router;
pub mod tokenize;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::knowledge::{contact_chunk, create_knowledge_chunks, Category, Chunk, KnowledgeBase};
use index::KeywordIndex;
use router::{Intent, RouteTargets};

pub use answer::DEFAULT_CONTEXT_CHUNKS;

/// Default maximum number of keyword-search hits.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Upper bound for caller-supplied search limits.
pub const MAX_SEARCH_LIMIT: usize = 20;

/// Clamp a caller-supplied limit into `1..=MAX_SEARCH_LIMIT`, defaulting to `default`.
pub fn clamp_limit(requested: Option<usize>, default: usize) -> usize {
    requested.unwrap_or(default).clamp(1, MAX_SEARCH_LIMIT)
}

/// A chunk returned for a query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Hit<'a> {
    pub chunk: &'a Chunk,
    /// Distinct query keywords found in the chunk. `None` for category-routed hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<usize>,
}

/// The routed intent and the hits it produced.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome<'a> {
    pub intent: Intent,
    pub hits: Vec<Hit<'a>>,
}

/// Compact reference to a chunk used in an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub id: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<usize>,
}

/// A finished answer to one query.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub intent: Intent,
    /// Category of the top hit, `None` when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub sources: Vec<SourceRef>,
}

impl Answer {
    /// True when nothing matched and `text` is the fallback message.
    pub fn is_fallback(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Index statistics.
#[derive(Debug, Serialize)]
pub struct IndexStats {
    pub total_chunks: usize,
    pub by_category: BTreeMap<String, usize>,
    pub vocabulary_size: usize,
}

/// Retrieval knobs.
#[derive(Debug, Clone, Copy)]
pub struct RetrievalSettings {
    pub search_limit: usize,
    pub context_chunks: usize,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            search_limit: DEFAULT_SEARCH_LIMIT,
            context_chunks: DEFAULT_CONTEXT_CHUNKS,
        }
    }
}

impl From<&crate::config::RetrievalConfig> for RetrievalSettings {
    /// Clamps the search limit into `1..=MAX_SEARCH_LIMIT` and keeps at least one context chunk.
    fn from(config: &crate::config::RetrievalConfig) -> Self {
        let settings = Self {
            search_limit: clamp_limit(Some(config.default_limit), DEFAULT_SEARCH_LIMIT),
            context_chunks: config.context_chunks.max(1),
        };
        if settings.search_limit != config.default_limit
            || settings.context_chunks != config.context_chunks
        {
            tracing::warn!(
                default_limit = config.default_limit,
                context_chunks = config.context_chunks,
                search_limit = settings.search_limit,
                used_context_chunks = settings.context_chunks,
                "retrieval settings out of range, clamped"
            );
        }
        settings
    }
}

/// Immutable knowledge base + keyword index.
#[derive(Debug)]
pub struct RetrievalService {
    knowledge: KnowledgeBase,
    chunks: Vec<Chunk>,
    contact: Chunk,
    index: KeywordIndex,
    settings: RetrievalSettings,
}

impl RetrievalService {
    pub fn new(knowledge: KnowledgeBase, settings: RetrievalSettings) -> Self {
        let chunks = create_knowledge_chunks(&knowledge);
        let contact = contact_chunk(&knowledge);
        let index = KeywordIndex::build(&chunks);
        tracing::info!(
            name = %knowledge.personal.name,
            chunks = chunks.len(),
            vocabulary = index.vocabulary_size(),
            "retrieval service ready"
        );
        Self {
            knowledge,
            chunks,
            contact,
            index,
            settings,
        }
    }

    /// Service over the built-in knowledge base with default settings.
    pub fn builtin() -> Self {
        Self::new(KnowledgeBase::builtin(), RetrievalSettings::default())
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn settings(&self) -> RetrievalSettings {
        self.settings
    }

    /// Indexed chunks in build order (the contact chunk is not included).
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Indexed chunks, optionally restricted to one category.
    pub fn chunks_in(&self, category: Option<Category>) -> Vec<&Chunk> {
        self.chunks
            .iter()
            .filter(|c| category.is_none_or(|cat| c.category == cat))
            .collect()
    }

    /// Look up a chunk by id, including the synthesized `contact` chunk.
    pub fn chunk(&self, id: &str) -> Option<&Chunk> {
        if id == self.contact.id {
            return Some(&self.contact);
        }
        self.chunks.iter().find(|c| c.id == id)
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Ranked keyword search, bypassing intent routing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Hit<'_>> {
        self.index
            .search(query, limit)
            .into_iter()
            .map(|scored| Hit {
                chunk: &self.chunks[scored.position],
                relevance_score: Some(scored.score),
            })
            .collect()
    }

    /// Route a query to its intent and collect the hits.
    pub fn process_query(&self, query: &str) -> QueryOutcome<'_> {
        let intent = Intent::detect(query);
        let targets = RouteTargets {
            chunks: &self.chunks,
            contact: &self.contact,
            index: &self.index,
            search_limit: self.settings.search_limit,
        };
        let hits = router::route(intent, query, &targets);
        tracing::debug!(query = %query, intent = %intent, hits = hits.len(), "query routed");
        QueryOutcome { intent, hits }
    }

    /// Phrase an answer from already-retrieved hits.
    pub fn generate_contextual_response(&self, hits: &[Hit<'_>]) -> String {
        answer::generate_contextual_response(&self.knowledge, hits, self.settings.context_chunks)
    }

    /// Route, retrieve, and phrase an answer in one call.
    pub fn answer(&self, query: &str) -> Answer {
        let outcome = self.process_query(query);
        let text = self.generate_contextual_response(&outcome.hits);
        let sources = outcome
            .hits
            .iter()
            .map(|h| SourceRef {
                id: h.chunk.id.clone(),
                category: h.chunk.category,
                relevance_score: h.relevance_score,
            })
            .collect();
        Answer {
            text,
            intent: outcome.intent,
            category: outcome.hits.first().map(|h| h.chunk.category),
            sources,
        }
    }

    /// The text returned when nothing matches.
    pub fn fallback_response(&self) -> String {
        answer::fallback_response(&self.knowledge)
    }

    pub fn stats(&self) -> IndexStats {
        let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
        for chunk in &self.chunks {
            *by_category.entry(chunk.category.to_string()).or_default() += 1;
        }
        IndexStats {
            total_chunks: self.chunks.len(),
            by_category,
            vocabulary_size: self.index.vocabulary_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_categories() {
        let service = RetrievalService::builtin();
        let stats = service.stats();
        assert_eq!(stats.total_chunks, 18);
        assert_eq!(stats.by_category["certifications"], 8);
        assert_eq!(stats.by_category["skills"], 4);
        assert_eq!(stats.by_category["projects"], 4);
        assert_eq!(stats.by_category["personal"], 1);
        assert_eq!(stats.by_category["experience"], 1);
        assert!(!stats.by_category.contains_key("contact"));
        assert!(stats.vocabulary_size > 100);
    }

    #[test]
    fn limits_are_clamped() {
        assert_eq!(clamp_limit(None, 5), 5);
        assert_eq!(clamp_limit(Some(0), 5), 1);
        assert_eq!(clamp_limit(Some(500), 5), MAX_SEARCH_LIMIT);
    }

    #[test]
    fn chunks_in_filters_by_category() {
        let service = RetrievalService::builtin();
        assert_eq!(service.chunks_in(None).len(), 18);
        let projects = service.chunks_in(Some(Category::Projects));
        assert_eq!(projects.len(), 4);
        assert!(projects.iter().all(|c| c.category == Category::Projects));
        assert!(service.chunks_in(Some(Category::Contact)).is_empty());
    }

    #[test]
    fn chunk_lookup_includes_contact() {
        let service = RetrievalService::builtin();
        assert_eq!(service.chunk("contact").unwrap().category, Category::Contact);
        assert_eq!(service.chunk("cert-7").unwrap().category, Category::Certifications);
        assert!(service.chunk("cert-8").is_none());
    }

    #[test]
    fn search_limit_comes_from_settings() {
        let settings = RetrievalSettings {
            search_limit: 2,
            context_chunks: 1,
        };
        let service = RetrievalService::new(KnowledgeBase::builtin(), settings);
        let outcome = service.process_query("michael");
        assert_eq!(outcome.intent, Intent::Search);
        assert_eq!(outcome.hits.len(), 2);
    }

    #[test]
    fn fallback_answer_has_no_sources() {
        let service = RetrievalService::builtin();
        let answer = service.answer("asdkjasd");
        assert!(answer.is_fallback());
        assert_eq!(answer.category, None);
        assert_eq!(answer.text, service.fallback_response());
    }
}
