//! # condense-dispatch
//!
//! Maps a mode identifier onto a compression strategy. The heuristic
//! strategy runs locally; the llm strategy is registered but reports itself
//! unavailable instead of falling back.

pub mod dispatcher;
pub mod strategies;

pub use dispatcher::StrategyDispatcher;
pub use strategies::{HeuristicStrategy, LlmStrategy};
