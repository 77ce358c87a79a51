use moka::sync::Cache;

use crate::tokenizer::tokenize;

/// Word token counter.
///
/// Counting is a single linear scan, and hashing a text costs about the
/// same, so the cache only pays off for input that is submitted more than
/// once (the same prompt tried at several ratios). Use [`count`](Self::count)
/// for text that is seen once, such as compressed output.
pub struct TokenCounter {
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a new TokenCounter with the given cache capacity.
    pub fn new(cache_capacity: u64) -> Self {
        Self {
            cache: Cache::new(cache_capacity),
        }
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> usize {
        tokenize(text).count()
    }

    /// Count tokens with blake3 content-hash caching.
    /// Repeated calls with the same text return the cached result.
    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }

    /// Number of memoized counts, after pending cache maintenance has run.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}
