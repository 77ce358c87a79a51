use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{CondenseError, CondenseResult};

/// Tuning knobs for the extractive sentence-ranking heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Ratio used when the requested one is out of range or not a number.
    pub default_ratio: f64,
    /// Largest accepted reduction ratio.
    pub max_ratio: f64,
    /// Token count at which the length score reaches 1.0.
    pub length_divisor: f64,
    /// Cap on the length score.
    pub max_length_score: f64,
    /// Score added per distinct intent keyword found in a sentence.
    pub intent_boost_per_match: f64,
    /// `final > target × factor` triggers the over-budget warning.
    pub budget_overshoot_factor: f64,
    /// Ratios above this trigger the high-reduction warning.
    pub high_ratio_threshold: f64,
    /// Replacement stopword list (e.g. for another locale). `None` keeps the built-in English set.
    pub stopwords: Option<Vec<String>>,
    /// Words appended to the active stopword list.
    pub extra_stopwords: Vec<String>,
    /// Capacity of the content-hash token count cache.
    pub token_cache_capacity: u64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            default_ratio: defaults::DEFAULT_RATIO,
            max_ratio: defaults::DEFAULT_MAX_RATIO,
            length_divisor: defaults::DEFAULT_LENGTH_DIVISOR,
            max_length_score: defaults::DEFAULT_MAX_LENGTH_SCORE,
            intent_boost_per_match: defaults::DEFAULT_INTENT_BOOST_PER_MATCH,
            budget_overshoot_factor: defaults::DEFAULT_BUDGET_OVERSHOOT_FACTOR,
            high_ratio_threshold: defaults::DEFAULT_HIGH_RATIO_THRESHOLD,
            stopwords: None,
            extra_stopwords: Vec::new(),
            token_cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
        }
    }
}

impl HeuristicConfig {
    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> CondenseResult<()> {
        if !(self.max_ratio.is_finite() && (0.0..1.0).contains(&self.max_ratio)) {
            return Err(invalid("max_ratio", self.max_ratio, "must be in [0, 1)"));
        }
        if !(self.default_ratio.is_finite() && (0.0..=self.max_ratio).contains(&self.default_ratio))
        {
            return Err(invalid(
                "default_ratio",
                self.default_ratio,
                "must be in [0, max_ratio]",
            ));
        }
        if !(self.length_divisor.is_finite() && self.length_divisor > 0.0) {
            return Err(invalid("length_divisor", self.length_divisor, "must be > 0"));
        }
        for (name, value) in [
            ("max_length_score", self.max_length_score),
            ("intent_boost_per_match", self.intent_boost_per_match),
            ("high_ratio_threshold", self.high_ratio_threshold),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, value, "must be >= 0"));
            }
        }
        if !(self.budget_overshoot_factor.is_finite() && self.budget_overshoot_factor >= 1.0) {
            return Err(invalid(
                "budget_overshoot_factor",
                self.budget_overshoot_factor,
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: f64, rule: &str) -> CondenseError {
    CondenseError::ConfigError(format!("heuristic.{field} = {value} {rule}"))
}
