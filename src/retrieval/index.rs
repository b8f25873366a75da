//! Inverted keyword index over a fixed chunk list.

use std::collections::{HashMap, HashSet};

use super::tokenize::extract_keywords;
use crate::knowledge::Chunk;

/// A chunk position paired with its hit count for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPosition {
    pub position: usize,
    pub score: usize,
}

/// Token → positions of the chunks containing it, in chunk order.
///
/// Built once from a chunk slice; positions index into that same slice.
#[derive(Debug, Default)]
pub struct KeywordIndex {
    postings: HashMap<String, Vec<usize>>,
}

impl KeywordIndex {
    pub fn build(chunks: &[Chunk]) -> Self {
        let mut postings: HashMap<String, Vec<usize>> = HashMap::new();
        for (position, chunk) in chunks.iter().enumerate() {
            let unique: HashSet<String> = extract_keywords(&chunk.content).into_iter().collect();
            for word in unique {
                postings.entry(word).or_default().push(position);
            }
        }
        // Posting lists are ascending: the outer loop walks chunks in order.
        tracing::debug!(vocabulary = postings.len(), chunks = chunks.len(), "keyword index built");
        Self { postings }
    }

    /// Score chunks by the number of distinct query keywords they contain.
    ///
    /// Results are ordered by non-increasing score; equal scores keep the order
    /// in which the chunks were first hit. At most `limit` results are returned.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredPosition> {
        let mut seen_words = HashSet::new();
        let mut scored: Vec<ScoredPosition> = Vec::new();
        let mut slot_of: HashMap<usize, usize> = HashMap::new();

        for word in extract_keywords(query) {
            if !seen_words.insert(word.clone()) {
                continue;
            }
            let Some(positions) = self.postings.get(&word) else {
                continue;
            };
            for &position in positions {
                match slot_of.get(&position) {
                    Some(&slot) => scored[slot].score += 1,
                    None => {
                        slot_of.insert(position, scored.len());
                        scored.push(ScoredPosition { position, score: 1 });
                    }
                }
            }
        }

        // Stable: ties stay in first-hit order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(limit);
        scored
    }

    /// Positions of chunks containing `token` (already normalized).
    pub fn postings(&self, token: &str) -> &[usize] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, token: &str) -> bool {
        self.postings.contains_key(token)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    /// All indexed tokens, sorted.
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.postings.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
