mod async_piper;
mod pipe_ext;
mod piper;

pub use async_piper::{deferred, AsyncPiper};
pub use pipe_ext::PipeExt;
pub use piper::{pipe, Piper};
