use std::future::{self, Future};

use condense_core::config::defaults;
use condense_core::errors::{CondenseResult, StrategyError};
use condense_core::models::{CompressionRequest, CompressionResult};
use condense_core::traits::ICompressionStrategy;
use condense_core::CompressionMode;
use tracing::warn;

/// Model-backed strategy slot. No backend is wired in, so every call fails
/// with [`StrategyError::Unavailable`].
#[derive(Debug, Clone)]
pub struct LlmStrategy {
    reason: String,
}

impl LlmStrategy {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl Default for LlmStrategy {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_LLM_UNAVAILABLE_REASON)
    }
}

impl ICompressionStrategy for LlmStrategy {
    fn mode(&self) -> CompressionMode {
        CompressionMode::Llm
    }

    fn compress(
        &self,
        _request: &CompressionRequest,
    ) -> impl Future<Output = CondenseResult<CompressionResult>> + Send {
        warn!(reason = %self.reason, "llm strategy requested but not available");
        future::ready(Err(StrategyError::Unavailable {
            mode: CompressionMode::Llm.to_string(),
            reason: self.reason.clone(),
        }
        .into()))
    }
}
