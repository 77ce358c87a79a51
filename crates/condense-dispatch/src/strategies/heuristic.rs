use std::future::{self, Future};

use condense_compression::HeuristicEngine;
use condense_core::config::HeuristicConfig;
use condense_core::errors::CondenseResult;
use condense_core::models::{CompressionRequest, CompressionResult};
use condense_core::traits::ICompressionStrategy;
use condense_core::CompressionMode;

/// Local sentence-ranking strategy. Never suspends and never fails.
#[derive(Debug, Default)]
pub struct HeuristicStrategy {
    engine: HeuristicEngine,
}

impl HeuristicStrategy {
    pub fn new(config: HeuristicConfig) -> Self {
        Self {
            engine: HeuristicEngine::with_config(config),
        }
    }

    pub fn engine(&self) -> &HeuristicEngine {
        &self.engine
    }
}

impl ICompressionStrategy for HeuristicStrategy {
    fn mode(&self) -> CompressionMode {
        CompressionMode::Heuristic
    }

    fn compress(
        &self,
        request: &CompressionRequest,
    ) -> impl Future<Output = CondenseResult<CompressionResult>> + Send {
        future::ready(Ok(self.engine.compress(request)))
    }
}
