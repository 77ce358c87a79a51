//! Composite sentence relevance.
//!
//! score = density + length + position + intent, where density sums the
//! corpus frequency of each token (stopwords are absent from the table and
//! contribute nothing).

use condense_core::config::HeuristicConfig;

use crate::frequency::FrequencyTable;
use crate::sentence::{ScoredSentence, Sentence};

/// Weights for the length factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Token count at which the length score reaches 1.0.
    pub length_divisor: f64,
    /// Cap on the length score.
    pub max_length_score: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::from(&HeuristicConfig::default())
    }
}

impl From<&HeuristicConfig> for ScoringWeights {
    fn from(config: &HeuristicConfig) -> Self {
        Self {
            length_divisor: config.length_divisor,
            max_length_score: config.max_length_score,
        }
    }
}

/// Individual factors of a sentence's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub density: f64,
    pub length: f64,
    pub position: f64,
    pub intent: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.density + self.length + self.position + self.intent
    }
}

/// Compute every factor for one sentence.
pub fn breakdown(
    sentence: &Sentence,
    frequencies: &FrequencyTable,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let density = sentence
        .tokens
        .iter()
        .map(|token| frequencies.count(token))
        .sum::<usize>() as f64;

    let length = if sentence.token_count > 0 {
        (sentence.token_count as f64 / weights.length_divisor).min(weights.max_length_score)
    } else {
        0.0
    };

    let position = 1.0 / (sentence.index as f64 + 1.0);

    ScoreBreakdown {
        density,
        length,
        position,
        intent: sentence.intent_boost,
    }
}

/// Score one sentence.
pub fn score_sentence(
    sentence: Sentence,
    frequencies: &FrequencyTable,
    weights: &ScoringWeights,
) -> ScoredSentence {
    let score = breakdown(&sentence, frequencies, weights).total();
    ScoredSentence { sentence, score }
}

/// Score all sentences, keeping their order.
pub fn score_sentences(
    sentences: Vec<Sentence>,
    frequencies: &FrequencyTable,
    weights: &ScoringWeights,
) -> Vec<ScoredSentence> {
    sentences
        .into_iter()
        .map(|sentence| score_sentence(sentence, frequencies, weights))
        .collect()
}
