mod async_transformer;
mod transformer;

pub use async_transformer::AsyncTransformer;
pub use transformer::Transformer;
