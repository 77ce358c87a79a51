//! # condense-tokens
//!
//! Word-level tokenization used for every token count in Condense.
//! A token is a maximal run of ASCII letters, digits, or apostrophes, lowercased.
//! Also provides the stopword set, a content-hash cached counter, and budget math.

pub mod budget;
pub mod counter;
pub mod stopwords;
pub mod tokenizer;

pub use budget::{ReductionRatio, TokenBudget};
pub use counter::TokenCounter;
pub use stopwords::StopwordSet;
pub use tokenizer::{tokenize, Tokens};
