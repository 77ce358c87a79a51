use serde::{Deserialize, Serialize};

/// Token accounting for one compression run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionMetrics {
    pub original_tokens: usize,
    pub target_tokens: usize,
    /// Always recounted from the emitted text.
    pub final_tokens: usize,
    pub duration_ms: f64,
}

/// Output of a compression strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    pub compressed_text: String,
    pub metrics: CompressionMetrics,
    /// Advisory messages in emission order.
    pub warnings: Vec<String>,
}

impl CompressionResult {
    /// Fraction of the original tokens that were removed, 0.0 when nothing was there.
    pub fn achieved_ratio(&self) -> f64 {
        if self.metrics.original_tokens == 0 {
            return 0.0;
        }
        1.0 - self.metrics.final_tokens as f64 / self.metrics.original_tokens as f64
    }
}
