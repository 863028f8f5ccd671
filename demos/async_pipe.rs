//! Run with
//!
//! ```not_rust
//! cargo run --example async_pipe
//! ```

use std::time::Duration;

use composable_pipe::pipe::pipe;

#[path = "../util/util.rs"]
mod util;

async fn add_100(value: u64) -> u64 {
    tokio::time::sleep(Duration::from_millis(value)).await;

    value + 100
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("async_pipe")?;

    let resolved = pipe(500)
        .async_pipe(add_100)
        .pipe(|value| value + 5)
        .pipe(|value| value.to_string())
        .await;

    tracing::info!(%resolved);

    Ok(())
}
