//! Templated natural-language answers built from retrieval hits.

use super::Hit;
use crate::knowledge::{humanize_key, Category, KnowledgeBase};

/// How many hits are concatenated into the answer context.
pub const DEFAULT_CONTEXT_CHUNKS: usize = 3;

/// The answer given when nothing matched.
pub fn fallback_response(kb: &KnowledgeBase) -> String {
    format!(
        "I don't have specific information about that. You can ask me about {}'s skills, \
         projects, certifications, or experience!",
        kb.first_name()
    )
}

/// Contents of the first `max_chunks` hits, joined by single spaces.
pub fn join_context(hits: &[Hit<'_>], max_chunks: usize) -> String {
    hits.iter()
        .take(max_chunks)
        .map(|h| h.chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Phrase an answer from `hits`, worded after the top hit's category.
pub fn generate_contextual_response(
    kb: &KnowledgeBase,
    hits: &[Hit<'_>],
    context_chunks: usize,
) -> String {
    let Some(top) = hits.first() else {
        return fallback_response(kb);
    };

    let first = kb.first_name();
    let context = join_context(hits, context_chunks);

    match top.chunk.category {
        Category::Skills => {
            let area = top
                .chunk
                .subcategory
                .as_deref()
                .map(humanize_key)
                .unwrap_or_default();
            format!("{first} has extensive expertise in {area}. {context}")
        }
        Category::Projects => {
            let title = top.chunk.metadata.title().unwrap_or_default();
            format!(
                "One of {first}'s notable projects is {title}. {}",
                top.chunk.content
            )
        }
        Category::Certifications => format!("Regarding certifications, {context}"),
        Category::Experience => format!("About {first}'s background: {context}"),
        Category::Contact => context,
        Category::Personal => format!("Here's what I know: {context}"),
    }
}
