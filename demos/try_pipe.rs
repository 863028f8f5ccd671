//! Run with
//!
//! ```not_rust
//! cargo run --example try_pipe
//! ```

use composable_pipe::pipe::deferred;

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, thiserror::Error)]
enum LookupError {
    #[error("Missing user: {0}")]
    Missing(String),
}

async fn find_user(name: &str) -> Result<String, LookupError> {
    if name == "alice" {
        return Ok(String::from("alice"));
    }

    Err(LookupError::Missing(name.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    util::init("try_pipe")?;

    let resolved = deferred(find_user("alice"))
        .try_pipe(|user| user.to_uppercase())
        .resolve()
        .await;

    tracing::info!(?resolved);

    let resolved = deferred(find_user("eve"))
        .try_pipe(|user| user.to_uppercase())
        .resolve()
        .await;

    tracing::info!(?resolved);

    Ok(())
}
