use std::{fmt, future::IntoFuture};

use futures::{future::BoxFuture, FutureExt};

use crate::{
    awaitable::Awaitable,
    error::InfallibleError,
    transform::{AsyncTransformer, Transformer},
};

use super::piper::Piper;

/// A pending chain link: holds an awaitable whose result is not available
/// yet. Piping never blocks; transformations are registered as continuations
/// and run once the awaitable resolves.
pub struct AsyncPiper<A> {
    awaitable: A,
}

impl<A> AsyncPiper<A> {
    pub const fn new(awaitable: A) -> Self {
        Self { awaitable }
    }

    /// Applies `pipe` to the pending awaitable itself, unchanged. The
    /// returned piper is settled: it holds whatever `pipe` returned.
    #[tracing::instrument(skip_all)]
    pub fn pipe_sync<Fn, R>(self, pipe: Fn) -> Piper<R>
    where
        Fn: FnOnce(A) -> R,
    {
        Piper::new(pipe(self.awaitable))
    }

    pub fn value(&self) -> &A {
        &self.awaitable
    }

    pub fn into_value(self) -> A {
        self.awaitable
    }
}

impl<A> AsyncPiper<A>
where
    A: Awaitable,
{
    /// Registers `pipe` to run on the resolved value and returns immediately
    /// with a new pending chain. Continuations run in registration order.
    pub fn pipe<Fn, R>(self, pipe: Fn) -> AsyncPiper<impl Awaitable<Resolved = R>>
    where
        Fn: FnOnce(A::Resolved) -> R + Send,
        A: Send,
    {
        AsyncPiper::new(async move {
            let resolved = self.awaitable.resolve().await;

            tracing::trace!("Running deferred pipe");

            pipe(resolved)
        })
    }

    /// Registers an awaitable-returning continuation. The continuation's
    /// result is flattened into the chain: the returned piper resolves to the
    /// inner awaitable's eventual value, never to an awaitable of one.
    pub fn async_pipe<Fn, B>(self, pipe: Fn) -> AsyncPiper<impl Awaitable<Resolved = B::Resolved>>
    where
        Fn: FnOnce(A::Resolved) -> B + Send,
        B: Awaitable,
        A: Send,
    {
        AsyncPiper::new(async move {
            let resolved = self.awaitable.resolve().await;

            tracing::trace!("Running deferred async pipe");

            pipe(resolved).resolve().await
        })
    }

    pub fn pipe_with<Tr>(self, transformer: Tr) -> AsyncPiper<impl Awaitable<Resolved = Tr::Output>>
    where
        Tr: Transformer<A::Resolved> + Send,
        A: Send,
    {
        AsyncPiper::new(async move {
            let resolved = self.awaitable.resolve().await;

            transformer.transform(resolved)
        })
    }

    pub fn async_pipe_with<Tr>(
        self,
        transformer: Tr,
    ) -> AsyncPiper<impl Awaitable<Resolved = Tr::Output>>
    where
        Tr: AsyncTransformer<A::Resolved> + Send,
        A: Send,
    {
        AsyncPiper::new(async move {
            let resolved = self.awaitable.resolve().await;

            transformer.transform(resolved).await
        })
    }

    /// Lifts an infallible chain into a failure-carrying one.
    pub fn fallible(
        self,
    ) -> AsyncPiper<impl Awaitable<Resolved = Result<A::Resolved, InfallibleError>>>
    where
        A: Send,
    {
        AsyncPiper::new(async move { Ok(self.awaitable.resolve().await) })
    }

    /// Erases the awaitable's type so chains built in loops or branches stay
    /// uniform.
    pub fn boxed(self) -> AsyncPiper<BoxFuture<'static, A::Resolved>>
    where
        A::Future: 'static,
    {
        AsyncPiper::new(self.awaitable.resolve().boxed())
    }

    /// Resolves the chain to its eventual value.
    #[tracing::instrument(skip_all)]
    pub async fn resolve(self) -> A::Resolved {
        self.awaitable.resolve().await
    }
}

impl<A, T, E> AsyncPiper<A>
where
    A: Awaitable<Resolved = Result<T, E>>,
{
    /// Registers `pipe` to run only if the chain resolves successfully. A
    /// failure the chain already carries propagates to the new chain without
    /// `pipe` being invoked.
    pub fn try_pipe<Fn, R>(self, pipe: Fn) -> AsyncPiper<impl Awaitable<Resolved = Result<R, E>>>
    where
        Fn: FnOnce(T) -> R + Send,
        A: Send,
    {
        AsyncPiper::new(async move {
            self.awaitable.resolve().await.map(|value| {
                tracing::trace!("Running deferred try pipe");

                pipe(value)
            })
        })
    }

    /// Failure-aware variant of [`AsyncPiper::async_pipe`]. A carried failure
    /// is converted into the continuation's error type and propagated without
    /// `pipe` being invoked.
    pub fn try_async_pipe<Fn, B, R, E2>(
        self,
        pipe: Fn,
    ) -> AsyncPiper<impl Awaitable<Resolved = Result<R, E2>>>
    where
        Fn: FnOnce(T) -> B + Send,
        B: Awaitable<Resolved = Result<R, E2>>,
        E2: From<E>,
        A: Send,
        T: Send,
        E: Send,
    {
        AsyncPiper::new(async move {
            match self.awaitable.resolve().await {
                Ok(value) => pipe(value).resolve().await,
                Err(err) => Err(E2::from(err)),
            }
        })
    }
}

impl<A> fmt::Debug for AsyncPiper<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPiper").finish_non_exhaustive()
    }
}

impl<A> IntoFuture for AsyncPiper<A>
where
    A: Awaitable,
{
    type Output = A::Resolved;

    type IntoFuture = A::Future;

    fn into_future(self) -> Self::IntoFuture {
        self.awaitable.resolve()
    }
}

pub fn deferred<A>(awaitable: A) -> AsyncPiper<A>
where
    A: Awaitable,
{
    AsyncPiper::new(awaitable)
}
