//! Keyword extraction shared by indexing and querying.

/// Words dropped from both chunk text and queries.
pub const STOP_WORDS: [&str; 23] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "been", "be", "have", "has", "had",
];

/// Words of this length or shorter are never keywords.
const MIN_KEYWORD_LEN: usize = 3;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase `text`, blank out punctuation, and return the remaining words
/// that are at least three characters long and not stop-words.
///
/// Anything that is not an ASCII word character or whitespace counts as
/// punctuation, so `Michael's` yields `michael` (and a dropped `s`).
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|word| word.len() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_short_words() {
        assert_eq!(
            extract_keywords("What are Michael's AI skills?"),
            vec!["what", "michael", "skills"]
        );
    }

    #[test]
    fn drops_stop_words() {
        assert_eq!(
            extract_keywords("The project has been built with React and the API"),
            vec!["project", "built", "react", "api"]
        );
    }

    #[test]
    fn splits_on_symbols() {
        assert_eq!(
            extract_keywords("HTML/CSS & Node.js, LoRA/QLoRA"),
            vec!["html", "css", "node", "lora", "qlora"]
        );
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(extract_keywords("snake_case v2023"), vec!["snake_case", "v2023"]);
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(extract_keywords("café résumé"), vec!["caf", "sum"]);
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  \t\n ").is_empty());
        assert!(extract_keywords("?!.,").is_empty());
    }
}
