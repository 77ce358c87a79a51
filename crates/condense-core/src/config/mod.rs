pub mod defaults;
mod dispatch_config;
mod heuristic_config;
mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use dispatch_config::DispatchConfig;
pub use heuristic_config::HeuristicConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{CondenseError, CondenseResult};

/// Top-level configuration. Every section falls back to its defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondenseConfig {
    pub heuristic: HeuristicConfig,
    pub dispatch: DispatchConfig,
    pub observability: ObservabilityConfig,
}

impl CondenseConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml(source: &str) -> CondenseResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.heuristic.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CondenseResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CondenseError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&source)
    }

    pub fn to_toml(&self) -> CondenseResult<String> {
        toml::to_string(self).map_err(|e| CondenseError::ConfigError(e.to_string()))
    }
}
