//! # condense-core
//!
//! Foundation crate for the Condense prompt compressor.
//! Defines the request/result models, the strategy trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod mode;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CondenseConfig;
pub use errors::{CondenseError, CondenseResult};
pub use mode::CompressionMode;
pub use models::{CompressionMetrics, CompressionRequest, CompressionResult};
