//! HeuristicEngine: the single-pass extractive compression pipeline.
//!
//! trim → ratio → budget → split → frequency table → score → select → join → recount.

use std::time::Instant;

use condense_core::config::HeuristicConfig;
use condense_core::models::{CompressionMetrics, CompressionRequest, CompressionResult};
use condense_observability::compression_span;
use condense_tokens::{ReductionRatio, StopwordSet, TokenBudget, TokenCounter};
use tracing::{debug, info, warn};

use crate::frequency::FrequencyTable;
use crate::scoring::{self, ScoringWeights};
use crate::selector;
use crate::sentence::{IntentKeywords, ScoredSentence};
use crate::splitter;
use crate::warnings::CompressionWarning;

/// Deterministic sentence-ranking compressor.
///
/// Holds only read-only configuration and a token count cache, so one
/// engine can serve any number of requests. Only input prompts are
/// memoized; each compressed output is counted once and not cached.
#[derive(Debug)]
pub struct HeuristicEngine {
    counter: TokenCounter,
    stopwords: StopwordSet,
    config: HeuristicConfig,
}

impl HeuristicEngine {
    /// Create an engine with default configuration and the English stopword set.
    pub fn new() -> Self {
        Self::with_config(HeuristicConfig::default())
    }

    /// Create an engine from config. The stopword set is the configured
    /// replacement list (or English) plus any extra words.
    pub fn with_config(config: HeuristicConfig) -> Self {
        let stopwords = match &config.stopwords {
            Some(list) => StopwordSet::from_list(list),
            None => StopwordSet::english(),
        }
        .with_extra(&config.extra_stopwords);

        Self {
            counter: TokenCounter::new(config.token_cache_capacity),
            stopwords,
            config,
        }
    }

    /// Replace the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Get a reference to the underlying token counter.
    pub fn counter(&self) -> &TokenCounter {
        &self.counter
    }

    /// Split and score `text` without selecting, in reading order.
    pub fn score(&self, text: &str, intent: Option<&str>) -> Vec<ScoredSentence> {
        let text = text.trim();
        let keywords = IntentKeywords::from_intent(intent, &self.stopwords);
        let sentences =
            splitter::build_sentences(text, &keywords, self.config.intent_boost_per_match);
        let frequencies = FrequencyTable::from_text(text, &self.stopwords);
        scoring::score_sentences(sentences, &frequencies, &ScoringWeights::from(&self.config))
    }

    /// Compress a request. Never fails: degenerate input yields the original
    /// text plus a warning.
    pub fn compress(&self, request: &CompressionRequest) -> CompressionResult {
        let started = Instant::now();
        let _span = compression_span!(request.ratio, request.text.len()).entered();

        let trimmed = request.text.trim();
        if trimmed.is_empty() {
            warn!("empty input, nothing to compress");
            return finish(
                started,
                String::new(),
                TokenBudget {
                    original: 0,
                    target: 0,
                },
                0,
                vec![CompressionWarning::NoContent],
            );
        }

        let ratio = ReductionRatio::resolve(
            request.ratio,
            self.config.max_ratio,
            self.config.default_ratio,
        );
        if ratio.value() != request.ratio {
            debug!(
                requested = request.ratio,
                resolved = ratio.value(),
                "ratio outside accepted range, using default"
            );
        }

        let original = self.counter.count_cached(trimmed);
        let budget = TokenBudget::for_ratio(original, ratio);
        debug!(original, target = budget.target, "computed token budget");

        if !budget.is_reduction() {
            debug!("target does not reduce the input, returning it unchanged");
            return finish(started, trimmed.to_string(), budget, original, Vec::new());
        }

        let scored = self.score(trimmed, request.intent());
        if scored.len() < 2 {
            warn!(
                sentences = scored.len(),
                "no sentence boundary found, returning original text"
            );
            return finish(
                started,
                trimmed.to_string(),
                budget,
                original,
                vec![CompressionWarning::NoSentenceBoundaries],
            );
        }

        let selection = selector::select(&scored, budget.target);
        debug!(
            sentences = scored.len(),
            selected = selection.len(),
            selected_tokens = selection.selected_tokens,
            "selected sentences"
        );

        let compressed_text = selection.join();
        let final_tokens = self.counter.count(&compressed_text);

        let mut warnings = Vec::new();
        if budget.exceeded_by(final_tokens, self.config.budget_overshoot_factor) {
            warnings.push(CompressionWarning::ExceededTargetBudget);
        }
        if ratio.value() > self.config.high_ratio_threshold {
            warnings.push(CompressionWarning::HighReductionRatio);
        }

        info!(
            original,
            target = budget.target,
            final_tokens,
            warnings = warnings.len(),
            "heuristic compression complete"
        );

        finish(started, compressed_text, budget, final_tokens, warnings)
    }
}

impl Default for HeuristicEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(
    started: Instant,
    compressed_text: String,
    budget: TokenBudget,
    final_tokens: usize,
    warnings: Vec<CompressionWarning>,
) -> CompressionResult {
    CompressionResult {
        compressed_text,
        metrics: CompressionMetrics {
            original_tokens: budget.original,
            target_tokens: budget.target,
            final_tokens,
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        },
        warnings: warnings.into_iter().map(String::from).collect(),
    }
}
