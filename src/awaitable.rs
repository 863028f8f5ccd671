use std::future::Future;

/// Capability contract for deferred values: anything holding an eventually
/// available result that a continuation can be attached to.
///
/// Every [`Future`] that is [`Send`] is an [`Awaitable`], so futures produced
/// by any runtime participate without adaptation.
pub trait Awaitable {
    type Resolved;

    type Future: Future<Output = Self::Resolved> + Send;

    fn resolve(self) -> Self::Future;
}

impl<F> Awaitable for F
where
    F: Future + Send,
{
    type Resolved = F::Output;

    type Future = F;

    fn resolve(self) -> Self::Future {
        self
    }
}
