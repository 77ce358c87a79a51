mod strategy_error;

pub use strategy_error::StrategyError;

/// Top-level error for every fallible Condense operation.
///
/// The heuristic compression path itself is total; only strategy dispatch,
/// configuration loading, and serialization can fail.
#[derive(Debug, thiserror::Error)]
pub enum CondenseError {
    #[error(transparent)]
    StrategyError(#[from] StrategyError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type CondenseResult<T> = Result<T, CondenseError>;

impl From<toml::de::Error> for CondenseError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
