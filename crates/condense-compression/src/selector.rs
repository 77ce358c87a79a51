use std::cmp::Ordering;
use std::collections::HashSet;

use crate::sentence::ScoredSentence;

/// Sentences chosen to fill a token budget, in reading order.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub sentences: Vec<&'a ScoredSentence>,
    /// Budget cost accumulated while selecting.
    pub selected_tokens: usize,
}

impl Selection<'_> {
    /// Join the selected sentence texts with single spaces.
    pub fn join(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.sentence.index).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Greedily take the highest-scoring sentences until their cost reaches
/// `target_tokens`, then restore ascending index order.
///
/// Equal scores keep their encounter order. When the budget is never reached
/// every sentence is selected.
pub fn select(scored: &[ScoredSentence], target_tokens: usize) -> Selection<'_> {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut seen = HashSet::with_capacity(ranked.len());
    let mut sentences = Vec::new();
    let mut selected_tokens = 0;

    for candidate in ranked {
        if seen.insert(candidate.sentence.index) {
            selected_tokens += candidate.sentence.budget_cost();
            sentences.push(candidate);
        }
        if selected_tokens >= target_tokens {
            break;
        }
    }

    if sentences.is_empty() {
        if let Some(first) = scored.first() {
            selected_tokens = first.sentence.budget_cost();
            sentences.push(first);
        }
    }

    sentences.sort_by_key(|s| s.sentence.index);
    Selection {
        sentences,
        selected_tokens,
    }
}
