//! Span definitions per operation: compression and dispatch.

/// Create a compression span.
#[macro_export]
macro_rules! compression_span {
    ($ratio:expr, $chars:expr) => {
        tracing::info_span!("condense.compression", ratio = $ratio, chars = $chars)
    };
}

/// Create a dispatch span.
#[macro_export]
macro_rules! dispatch_span {
    ($mode:expr) => {
        tracing::info_span!("condense.dispatch", mode = %$mode)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const COMPRESSION: &str = "condense.compression";
    pub const DISPATCH: &str = "condense.dispatch";
}
