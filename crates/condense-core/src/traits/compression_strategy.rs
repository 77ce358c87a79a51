use std::future::Future;

use crate::errors::CondenseResult;
use crate::mode::CompressionMode;
use crate::models::{CompressionRequest, CompressionResult};

/// One way of shrinking a prompt.
///
/// The call is asynchronous so that network-bound strategies share the
/// signature; local strategies return an already-completed future.
pub trait ICompressionStrategy: Send + Sync {
    /// The mode this strategy is registered under.
    fn mode(&self) -> CompressionMode;

    /// Compress the request's text.
    fn compress(
        &self,
        request: &CompressionRequest,
    ) -> impl Future<Output = CondenseResult<CompressionResult>> + Send;
}
