//! LRU Cache Demo - scripted tour of the cache operations
//!
//! Prints the demo transcript on stdout; logs go to stderr.

use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_cache_demo::{run_demo, Config};

/// Main entry point for the LRU cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the scripted demo against stdout
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_cache_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: capacity={}, display_format={:?}",
        config.capacity, config.display_format
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &config)?;
    out.flush()?;

    info!("Demo complete");
    Ok(())
}
