use std::collections::HashMap;

use condense_tokens::{tokenize, StopwordSet};

/// Corpus-wide counts of non-stopword tokens. Stopwords are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn build<I>(tokens: I, stopwords: &StopwordSet) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts = HashMap::new();
        for token in tokens {
            if stopwords.is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count the tokens of a whole text.
    pub fn from_text(text: &str, stopwords: &StopwordSet) -> Self {
        Self::build(tokenize(text), stopwords)
    }

    /// Occurrences of `token`; 0 for stopwords and unseen words.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}
