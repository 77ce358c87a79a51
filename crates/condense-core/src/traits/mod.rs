mod compression_strategy;

pub use compression_strategy::ICompressionStrategy;
