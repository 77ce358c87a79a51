// Single source of truth for all default values.

// --- Heuristic ---
pub const DEFAULT_RATIO: f64 = 0.3;
pub const DEFAULT_MAX_RATIO: f64 = 0.9;
pub const DEFAULT_LENGTH_DIVISOR: f64 = 15.0;
pub const DEFAULT_MAX_LENGTH_SCORE: f64 = 1.5;
pub const DEFAULT_INTENT_BOOST_PER_MATCH: f64 = 2.0;
pub const DEFAULT_BUDGET_OVERSHOOT_FACTOR: f64 = 1.1;
pub const DEFAULT_HIGH_RATIO_THRESHOLD: f64 = 0.5;
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;

// --- Dispatch ---
pub const DEFAULT_MODE: &str = "heuristic";
pub const DEFAULT_LLM_UNAVAILABLE_REASON: &str = "the model-backed pipeline is not integrated yet";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
