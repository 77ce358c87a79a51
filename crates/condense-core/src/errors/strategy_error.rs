/// Strategy dispatch errors.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("unknown compression mode: {mode}")]
    UnknownMode { mode: String },

    #[error("{mode} compression is not available: {reason}")]
    Unavailable { mode: String, reason: String },
}
