//! Run with
//!
//! ```not_rust
//! cargo run --example transform
//! ```

use std::time::Duration;

use composable_pipe::{
    pipe::pipe,
    transform::{AsyncTransformer, Transformer},
};

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, Clone)]
struct Add {
    n: i32,
}

impl Transformer<i32> for Add {
    type Output = i32;

    fn transform(&self, value: i32) -> Self::Output {
        value + self.n
    }
}

#[derive(Debug, Clone)]
struct Square;

impl Transformer<i32> for Square {
    type Output = i32;

    fn transform(&self, value: i32) -> Self::Output {
        value * value
    }
}

#[derive(Debug, Clone)]
struct Delay;

impl AsyncTransformer<i32> for Delay {
    type Output = i32;

    async fn transform(&self, value: i32) -> Self::Output {
        tokio::time::sleep(Duration::from_millis(100)).await;

        value
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("transform")?;

    let value = pipe(1)
        .pipe_with(Add { n: 10 })
        .async_pipe_with(Delay)
        .pipe_with(Square)
        .pipe_with(Add { n: 10 })
        .resolve()
        .await;

    tracing::info!(value);

    let stages: Vec<Box<dyn Transformer<i32, Output = i32> + Send + Sync>> = vec![
        Box::new(Add { n: 10 }),
        Box::new(Square),
        Box::new(Add { n: 10 }),
    ];

    let mut chain = pipe(1).async_pipe(|value| async move { value }).boxed();

    for stage in stages {
        chain = chain.pipe(move |value| stage.transform(value)).boxed();
    }

    let value = chain.resolve().await;

    tracing::info!(value);

    Ok(())
}
