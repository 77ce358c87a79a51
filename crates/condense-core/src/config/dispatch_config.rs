use serde::{Deserialize, Serialize};

use super::defaults;

/// Strategy dispatch configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Mode used when a request does not name one.
    pub default_mode: String,
    /// Message carried by the error the llm strategy returns.
    pub llm_unavailable_reason: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_mode: defaults::DEFAULT_MODE.to_string(),
            llm_unavailable_reason: defaults::DEFAULT_LLM_UNAVAILABLE_REASON.to_string(),
        }
    }
}
