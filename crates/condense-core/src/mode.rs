use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StrategyError;

/// Every compression strategy the dispatcher knows about.
///
/// The set is closed: an identifier outside it is rejected at parse time
/// with [`StrategyError::UnknownMode`]. Identifiers are matched exactly,
/// without trimming or case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMode {
    /// Deterministic extractive sentence ranking. Runs locally.
    #[default]
    Heuristic,
    /// Model-backed pipeline. Registered but not implemented.
    Llm,
}

impl CompressionMode {
    /// All modes in registration order.
    pub const ALL: [CompressionMode; 2] = [Self::Heuristic, Self::Llm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Llm => "llm",
        }
    }
}

impl fmt::Display for CompressionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMode {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| StrategyError::UnknownMode {
                mode: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registered_modes() {
        assert_eq!("heuristic".parse::<CompressionMode>().unwrap(), CompressionMode::Heuristic);
        assert_eq!("llm".parse::<CompressionMode>().unwrap(), CompressionMode::Llm);
    }

    #[test]
    fn identifiers_match_exactly() {
        for id in ["HEURISTIC", "Llm", " heuristic ", "heuristic\n", ""] {
            let err = id.parse::<CompressionMode>().unwrap_err();
            assert!(matches!(err, StrategyError::UnknownMode { ref mode } if mode == id), "{id:?}");
        }
    }

    #[test]
    fn unknown_mode_keeps_original_identifier() {
        let err = "summarize".parse::<CompressionMode>().unwrap_err();
        assert!(matches!(err, StrategyError::UnknownMode { ref mode } if mode == "summarize"));
    }

    #[test]
    fn display_matches_identifier() {
        for mode in CompressionMode::ALL {
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }
}
