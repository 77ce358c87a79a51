use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Input to every compression strategy. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionRequest {
    pub text: String,
    /// Fraction of tokens to remove, nominally in `[0, 0.9]`.
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    /// Free-text hint naming what the output must retain.
    #[serde(default)]
    pub intent: Option<String>,
}

fn default_ratio() -> f64 {
    defaults::DEFAULT_RATIO
}

impl CompressionRequest {
    pub fn new(text: impl Into<String>, ratio: f64) -> Self {
        Self {
            text: text.into(),
            ratio,
            intent: None,
        }
    }

    pub fn with_intent(mut self, intent: impl Into<String>) -> Self {
        self.intent = Some(intent.into());
        self
    }

    /// The intent hint, treating a blank string as absent.
    pub fn intent(&self) -> Option<&str> {
        self.intent.as_deref().filter(|i| !i.trim().is_empty())
    }
}
