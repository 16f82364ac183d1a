//! Fetches a resource relative to a page location, once synchronously and once asynchronously.
//!
//! ```text
//! RUST_LOG=debug cargo run --example fetch_resource -- https://example.com/page/ ./style.css
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use gosub_resource_fetch::{BrowserFrame, FetchConfig, ResourceFetch, Window};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let location = args.next().unwrap_or_else(|| "https://example.com/".to_string());
    let url = args.next().unwrap_or_else(|| "/".to_string());

    let config = FetchConfig::builder()
        .timeout(Duration::from_secs(10))
        .accept_language("en-US,en;q=0.9")
        .build()?;

    let frame = Arc::new(BrowserFrame::new(config)?);
    let window = Arc::new(Window::parse(&location).context("invalid page location")?);
    let resources = Arc::new(ResourceFetch::new(frame, window));

    // The synchronous path blocks, so run it before entering the runtime
    let text = resources.fetch_sync(&url)?;
    println!("sync:  {} bytes", text.len());

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    let text = runtime.block_on(resources.fetch(&url))?;
    println!("async: {} bytes", text.len());

    // Calling the synchronous path from async code needs a blocking thread
    let blocking = resources.clone();
    let text = runtime.block_on(async move {
        tokio::task::spawn_blocking(move || blocking.fetch_sync(&url)).await
    })??;
    println!("spawn_blocking: {} bytes", text.len());

    Ok(())
}
