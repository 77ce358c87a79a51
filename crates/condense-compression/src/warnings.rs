use std::fmt;

/// Advisory conditions reported alongside a result. None of them is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionWarning {
    /// Input was empty or whitespace.
    NoContent,
    /// No sentence boundary was found; the text was returned as-is.
    NoSentenceBoundaries,
    /// The emitted text overshoots the target by more than the allowed factor.
    ExceededTargetBudget,
    /// The requested ratio is above the high-reduction threshold.
    HighReductionRatio,
}

impl CompressionWarning {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoContent => "no content provided",
            Self::NoSentenceBoundaries => {
                "unable to detect sentence boundaries; returning original text"
            }
            Self::ExceededTargetBudget => "exceeded target budget",
            Self::HighReductionRatio => "high reduction ratio may remove important context",
        }
    }
}

impl fmt::Display for CompressionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<CompressionWarning> for String {
    fn from(warning: CompressionWarning) -> Self {
        warning.message().to_string()
    }
}
