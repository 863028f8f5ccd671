use crate::awaitable::Awaitable;

use super::{async_piper::AsyncPiper, piper::Piper};

pub trait PipeExt: Sized {
    /// Wraps `self` as a settled chain.
    fn piped(self) -> Piper<Self>;

    /// Wraps `self` as a pending chain.
    fn deferred(self) -> AsyncPiper<Self>
    where
        Self: Awaitable;
}

impl<T> PipeExt for T
where
    T: Sized,
{
    fn piped(self) -> Piper<Self> {
        Piper::new(self)
    }

    fn deferred(self) -> AsyncPiper<Self>
    where
        Self: Awaitable,
    {
        AsyncPiper::new(self)
    }
}
