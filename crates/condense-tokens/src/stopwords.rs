//! Stopword filtering.
//!
//! The set is a plain value handed to whoever needs it, so a different
//! locale is a different `StopwordSet`, not a global swap.

use std::collections::HashSet;

/// Built-in English function words: articles, conjunctions, common
/// auxiliaries, prepositions, and possessive pronouns.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "so", "on", "in", "at", "of", "for",
    "to", "with", "by", "is", "are", "was", "were", "be", "been", "has", "had", "have", "that",
    "this", "it", "as", "from", "into", "about", "over", "when", "while", "do", "does", "did",
    "can", "could", "should", "would", "our", "their", "your",
];

/// A case-insensitive set of low-information words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    /// Stored lowercase.
    words: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordSet {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_list(ENGLISH_STOPWORDS)
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build a set from a custom list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add words to the set.
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Builder form of [`extend`](Self::extend).
    pub fn with_extra<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.extend(words);
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) || !word.is_ascii() {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
