//! # condense-observability
//!
//! Tracing subscriber setup and the span macros used by the compression
//! pipeline and the strategy dispatcher.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with};
