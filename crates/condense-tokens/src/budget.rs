/// A reduction ratio that has been checked against the accepted range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ReductionRatio(f64);

impl ReductionRatio {
    /// Accept `raw` when it is a finite value in `[0, max]`, otherwise use `fallback`.
    ///
    /// Out-of-range input is not clamped to the nearest bound: it is treated
    /// as if no usable ratio was given.
    pub fn resolve(raw: f64, max: f64, fallback: f64) -> Self {
        if raw.is_finite() && (0.0..=max).contains(&raw) {
            Self(raw)
        } else {
            Self(fallback)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Token budget derived from an original count and a reduction ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    pub original: usize,
    /// `max(1, round(original × (1 − ratio)))`.
    pub target: usize,
}

impl TokenBudget {
    pub fn for_ratio(original: usize, ratio: ReductionRatio) -> Self {
        let scaled = (original as f64 * (1.0 - ratio.value())).round();
        Self {
            original,
            target: (scaled as usize).max(1),
        }
    }

    /// Whether the target asks for fewer tokens than the original has.
    pub fn is_reduction(&self) -> bool {
        self.target < self.original
    }

    /// Whether `final_tokens` overshoots the target by more than `factor`.
    pub fn exceeded_by(&self, final_tokens: usize, factor: f64) -> bool {
        final_tokens as f64 > self.target as f64 * factor
    }
}
