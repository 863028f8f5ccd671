use std::{fmt, ops::Deref};

use crate::{
    awaitable::Awaitable,
    transform::{AsyncTransformer, Transformer},
};

use super::async_piper::AsyncPiper;

/// A settled chain link: holds exactly one value, set at construction and
/// never mutated. Every piping operation consumes the piper and produces a
/// fresh one.
#[derive(Debug, Clone)]
pub struct Piper<T> {
    value: T,
}

impl<T> Piper<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Applies `pipe` to the held value as-is. A panic inside `pipe` unwinds
    /// to the caller and no piper is produced.
    #[tracing::instrument(skip_all)]
    pub fn pipe_sync<Fn, R>(self, pipe: Fn) -> Piper<R>
    where
        Fn: FnOnce(T) -> R,
    {
        Piper::new(pipe(self.value))
    }

    /// On a settled value this is exactly [`Piper::pipe_sync`].
    pub fn pipe<Fn, R>(self, pipe: Fn) -> Piper<R>
    where
        Fn: FnOnce(T) -> R,
    {
        self.pipe_sync(pipe)
    }

    /// Enters deferred mode: `pipe` produces an awaitable, and every
    /// following [`AsyncPiper::pipe`] call defers until it resolves.
    #[tracing::instrument(skip_all)]
    pub fn async_pipe<Fn, A>(self, pipe: Fn) -> AsyncPiper<A>
    where
        Fn: FnOnce(T) -> A,
        A: Awaitable,
    {
        AsyncPiper::new(pipe(self.value))
    }

    #[tracing::instrument(skip_all)]
    pub fn pipe_with<Tr>(self, transformer: Tr) -> Piper<Tr::Output>
    where
        Tr: Transformer<T>,
    {
        Piper::new(transformer.transform(self.value))
    }

    pub fn async_pipe_with<Tr>(
        self,
        transformer: Tr,
    ) -> AsyncPiper<impl Awaitable<Resolved = Tr::Output>>
    where
        Tr: AsyncTransformer<T> + Send,
        T: Send,
    {
        AsyncPiper::new(async move { transformer.transform(self.value).await })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Piper<T>
where
    T: Awaitable,
{
    /// Re-interprets a held awaitable as a pending chain.
    pub fn deferred(self) -> AsyncPiper<T> {
        AsyncPiper::new(self.value)
    }
}

impl<T, E> Piper<Result<T, E>> {
    /// Applies `pipe` to the success value, carrying a held failure forward
    /// untouched.
    #[tracing::instrument(skip_all)]
    pub fn try_pipe<Fn, R>(self, pipe: Fn) -> Piper<Result<R, E>>
    where
        Fn: FnOnce(T) -> R,
    {
        Piper::new(self.value.map(pipe))
    }
}

impl<T> Deref for Piper<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> fmt::Display for Piper<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

pub fn pipe<T>(value: T) -> Piper<T> {
    Piper::new(value)
}
