mod heuristic;
mod llm;

pub use heuristic::HeuristicStrategy;
pub use llm::LlmStrategy;
