//! # condense-compression
//!
//! Extractive prompt compression. Splits text into sentences, scores each by
//! corpus frequency density, length, position, and intent overlap, then keeps
//! the best sentences until the token budget is met, in original reading order.

pub mod engine;
pub mod frequency;
pub mod scoring;
pub mod selector;
pub mod sentence;
pub mod splitter;
pub mod warnings;

pub use engine::HeuristicEngine;
pub use frequency::FrequencyTable;
pub use scoring::{ScoreBreakdown, ScoringWeights};
pub use selector::Selection;
pub use sentence::{IntentKeywords, ScoredSentence, Sentence};
pub use warnings::CompressionWarning;
