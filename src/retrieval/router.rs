//! Keyword-based intent routing.
//!
//! A query is routed to a category filter by plain substring checks on the
//! lowercased text. Checks run in a fixed order and the first match wins, so a
//! query mentioning both "project" and "certification" is a projects query.
//! Queries matching no rule fall through to keyword search.

use serde::Serialize;

use super::index::KeywordIndex;
use super::Hit;
use crate::knowledge::{Category, Chunk};

/// The filter a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Skills,
    Projects,
    Certifications,
    Experience,
    Contact,
    /// No routing keyword: ranked keyword search.
    Search,
}

/// A sub-filter: if the query contains any of `needles`, narrow to `target`.
struct Focus {
    needles: &'static [&'static str],
    target: &'static str,
}

/// Skill sub-filters, checked top to bottom. `target` is a skill group key.
const SKILL_FOCUS: [Focus; 3] = [
    Focus { needles: &["ai", "machine learning"], target: "aiMachineLearning" },
    Focus { needles: &["frontend", "react"], target: "frontend" },
    Focus { needles: &["backend", "api"], target: "backendInfrastructure" },
];

/// Project sub-filters. `target` is matched against the lowercased project title.
const PROJECT_FOCUS: [Focus; 2] = [
    Focus { needles: &["rag", "retrieval"], target: "rag" },
    Focus { needles: &["chatbot", "chat"], target: "chatbot" },
];

fn focus_for(lower_query: &str, table: &[Focus]) -> Option<&'static str> {
    table
        .iter()
        .find(|f| contains_any(lower_query, f.needles))
        .map(|f| f.target)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

impl Intent {
    /// Routed intents in precedence order.
    const ROUTED: [Intent; 5] = [
        Self::Skills,
        Self::Projects,
        Self::Certifications,
        Self::Experience,
        Self::Contact,
    ];

    /// Substrings that route a query to this intent.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Skills => &["skill", "technology", "programming"],
            Self::Projects => &["project", "work", "built"],
            Self::Certifications => &["certification", "education", "course"],
            Self::Experience => &["experience", "background", "about"],
            Self::Contact => &["contact", "reach", "linkedin"],
            Self::Search => &[],
        }
    }

    /// Classify a query. First matching intent in [`Self::ROUTED`] order wins.
    pub fn detect(query: &str) -> Self {
        let lower = query.to_lowercase();
        Self::ROUTED
            .into_iter()
            .find(|intent| contains_any(&lower, intent.keywords()))
            .unwrap_or(Self::Search)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Experience => "experience",
            Self::Contact => "contact",
            Self::Search => "search",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn in_category(chunks: &[Chunk], category: Category) -> impl Iterator<Item = &Chunk> {
    chunks.iter().filter(move |c| c.category == category)
}

fn unscored(chunk: &Chunk) -> Hit<'_> {
    Hit {
        chunk,
        relevance_score: None,
    }
}

/// Everything a routed query may draw from.
pub(crate) struct RouteTargets<'a> {
    pub chunks: &'a [Chunk],
    pub contact: &'a Chunk,
    pub index: &'a KeywordIndex,
    pub search_limit: usize,
}

/// Resolve `intent` for `query` into hits.
pub(crate) fn route<'a>(intent: Intent, query: &str, targets: &RouteTargets<'a>) -> Vec<Hit<'a>> {
    let lower = query.to_lowercase();
    let chunks = targets.chunks;

    match intent {
        Intent::Skills => {
            let focus = focus_for(&lower, &SKILL_FOCUS);
            in_category(chunks, Category::Skills)
                .filter(|c| focus.is_none_or(|key| c.subcategory.as_deref() == Some(key)))
                .map(unscored)
                .collect()
        }
        Intent::Projects => {
            let focus = focus_for(&lower, &PROJECT_FOCUS);
            in_category(chunks, Category::Projects)
                .filter(|c| {
                    focus.is_none_or(|needle| {
                        c.metadata
                            .title()
                            .is_some_and(|t| t.to_lowercase().contains(needle))
                    })
                })
                .map(unscored)
                .collect()
        }
        Intent::Certifications => in_category(chunks, Category::Certifications)
            .map(unscored)
            .collect(),
        Intent::Experience => chunks
            .iter()
            .filter(|c| matches!(c.category, Category::Experience | Category::Personal))
            .map(unscored)
            .collect(),
        Intent::Contact => vec![unscored(targets.contact)],
        Intent::Search => targets
            .index
            .search(query, targets.search_limit)
            .into_iter()
            .map(|scored| Hit {
                chunk: &chunks[scored.position],
                relevance_score: Some(scored.score),
            })
            .collect(),
    }
}
