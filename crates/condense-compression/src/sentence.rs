use std::collections::HashSet;

use condense_tokens::{tokenize, StopwordSet};

/// Content words of the intent hint. Stopwords never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentKeywords {
    words: HashSet<String>,
}

impl IntentKeywords {
    pub fn from_intent(intent: Option<&str>, stopwords: &StopwordSet) -> Self {
        let words = intent
            .map(|text| {
                tokenize(text)
                    .filter(|word| !stopwords.is_stopword(word))
                    .collect()
            })
            .unwrap_or_default();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// One sentence of the input, tokenized.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the original text, 0-based.
    pub index: usize,
    /// Trimmed sentence text, terminator included.
    pub text: String,
    pub tokens: Vec<String>,
    pub token_count: usize,
    /// Bonus for distinct tokens shared with the intent keywords.
    pub intent_boost: f64,
}

impl Sentence {
    pub fn new(index: usize, raw: &str, keywords: &IntentKeywords, boost_per_match: f64) -> Self {
        let text = raw.trim().to_string();
        let tokens: Vec<String> = tokenize(&text).collect();
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let matches = unique.iter().filter(|word| keywords.contains(word)).count();
        Self {
            index,
            token_count: tokens.len(),
            tokens,
            text,
            intent_boost: matches as f64 * boost_per_match,
        }
    }

    /// Tokens this sentence consumes from the budget.
    ///
    /// A sentence without word tokens still costs its whitespace-separated pieces.
    pub fn budget_cost(&self) -> usize {
        if self.token_count > 0 {
            self.token_count
        } else {
            self.text.split(' ').count()
        }
    }
}

/// A sentence with its composite relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}
