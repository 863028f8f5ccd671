use std::future::Future;

pub trait AsyncTransformer<T> {
    type Output;

    fn transform(&self, value: T) -> impl Future<Output = Self::Output> + Send;
}
