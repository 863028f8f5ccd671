//! Run with
//!
//! ```not_rust
//! cargo run --example pipe
//! ```

use composable_pipe::pipe::{pipe, PipeExt};

#[path = "../util/util.rs"]
mod util;

fn main() -> anyhow::Result<()> {
    util::init("pipe")?;

    let greeting = pipe("world")
        .pipe(|name| format!("Hello, {name}!"))
        .pipe_sync(|greeting| greeting.to_uppercase());

    tracing::info!(%greeting);

    let sum = 40.piped().pipe(|value| value + 2).into_value();

    tracing::info!(sum);

    Ok(())
}
