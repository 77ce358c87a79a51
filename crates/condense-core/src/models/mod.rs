mod compression_request;
mod compression_result;

pub use compression_request::CompressionRequest;
pub use compression_result::{CompressionMetrics, CompressionResult};
