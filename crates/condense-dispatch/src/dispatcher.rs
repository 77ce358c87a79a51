//! StrategyDispatcher: resolves a mode identifier and runs the matching strategy.

use condense_core::errors::CondenseResult;
use condense_core::models::{CompressionRequest, CompressionResult};
use condense_core::traits::ICompressionStrategy;
use condense_core::{CompressionMode, CondenseConfig};
use condense_observability::dispatch_span;
use tracing::{debug, Instrument};

use crate::strategies::{HeuristicStrategy, LlmStrategy};

/// Owns one instance of every registered strategy.
///
/// Mode resolution is a closed match over [`CompressionMode`]: unknown
/// identifiers fail at parse time and no mode ever falls back to another.
#[derive(Debug)]
pub struct StrategyDispatcher {
    heuristic: HeuristicStrategy,
    llm: LlmStrategy,
    default_mode: CompressionMode,
}

impl StrategyDispatcher {
    /// Dispatcher with default configuration.
    pub fn new() -> Self {
        Self {
            heuristic: HeuristicStrategy::default(),
            llm: LlmStrategy::default(),
            default_mode: CompressionMode::default(),
        }
    }

    /// Build from config. Fails when the heuristic section is invalid or
    /// `dispatch.default_mode` is not a registered mode.
    pub fn from_config(config: &CondenseConfig) -> CondenseResult<Self> {
        config.heuristic.validate()?;
        let default_mode = config.dispatch.default_mode.parse::<CompressionMode>()?;
        Ok(Self {
            heuristic: HeuristicStrategy::new(config.heuristic.clone()),
            llm: LlmStrategy::new(config.dispatch.llm_unavailable_reason.clone()),
            default_mode,
        })
    }

    pub fn default_mode(&self) -> CompressionMode {
        self.default_mode
    }

    /// Identifiers of every registered mode, in registration order.
    pub fn supported_modes(&self) -> Vec<&'static str> {
        CompressionMode::ALL.iter().map(|mode| mode.as_str()).collect()
    }

    /// Parse `mode`, or take the default when it is absent or empty.
    pub fn resolve_mode(&self, mode: Option<&str>) -> CondenseResult<CompressionMode> {
        match mode {
            None | Some("") => Ok(self.default_mode),
            Some(id) => Ok(id.parse()?),
        }
    }

    /// Compress under the named mode (default mode when `None`).
    pub async fn compress(
        &self,
        mode: Option<&str>,
        request: &CompressionRequest,
    ) -> CondenseResult<CompressionResult> {
        let mode = self.resolve_mode(mode)?;
        self.compress_with(mode, request).await
    }

    /// Compress under an already-resolved mode.
    pub async fn compress_with(
        &self,
        mode: CompressionMode,
        request: &CompressionRequest,
    ) -> CondenseResult<CompressionResult> {
        let span = dispatch_span!(mode);
        async {
            debug!(%mode, "dispatching compression request");
            match mode {
                CompressionMode::Heuristic => self.heuristic.compress(request).await,
                CompressionMode::Llm => self.llm.compress(request).await,
            }
        }
        .instrument(span)
        .await
    }
}

impl Default for StrategyDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mode_resolves_to_default() {
        let dispatcher = StrategyDispatcher::new();
        assert_eq!(dispatcher.resolve_mode(None).unwrap(), CompressionMode::Heuristic);
    }

    #[test]
    fn configured_default_mode_is_honoured() {
        let mut config = CondenseConfig::default();
        config.dispatch.default_mode = "llm".to_string();
        let dispatcher = StrategyDispatcher::from_config(&config).unwrap();
        assert_eq!(dispatcher.default_mode(), CompressionMode::Llm);
    }

    #[test]
    fn empty_mode_resolves_to_default() {
        let dispatcher = StrategyDispatcher::new();
        assert_eq!(dispatcher.resolve_mode(Some("")).unwrap(), CompressionMode::Heuristic);
    }

    #[test]
    fn invalid_heuristic_config_is_rejected() {
        let mut config = CondenseConfig::default();
        config.heuristic.max_ratio = 1.0;
        let err = StrategyDispatcher::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("heuristic.max_ratio"));

        let mut config = CondenseConfig::default();
        config.heuristic.budget_overshoot_factor = f64::NAN;
        let err = StrategyDispatcher::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("heuristic.budget_overshoot_factor"));
    }

    #[test]
    fn unregistered_default_mode_is_rejected() {
        let mut config = CondenseConfig::default();
        config.dispatch.default_mode = "summarize".to_string();
        let err = StrategyDispatcher::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("unknown compression mode: summarize"));
    }
}
