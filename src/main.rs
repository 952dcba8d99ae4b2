//! Pokedex CLI - An interactive PokeAPI explorer
//!
//! Pages through location areas, explores encounters and catches pokemon,
//! with API responses held in an expiring in-memory cache.

use std::io;
use std::sync::Arc;

use tokio::io::BufReader;
use tokio::runtime::Runtime;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Cache, Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Build the API client and REPL session
/// 5. Run the REPL on stdin/stdout until `exit`, end of input or Ctrl+C
///
/// The runtime is shut down in the background on the way out: after Ctrl+C a
/// blocking stdin read may still be pending and must not hold the process open.
fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines stay out of the REPL output.
    // Override with RUST_LOG, e.g. RUST_LOG=pokedex_cli=debug
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn,pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let runtime = Runtime::new()?;
    let result = runtime.block_on(run_pokedex());
    runtime.shutdown_background();

    info!("Pokedex closed");
    result
}

/// Builds the cache, client and session, then runs the REPL until it ends or
/// Ctrl+C arrives.
async fn run_pokedex() -> anyhow::Result<()> {
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}, catch_threshold={}",
        config.cache_ttl, config.base_url, config.catch_threshold
    );

    let cache = Arc::new(Cache::new(config.cache_ttl()));
    info!("Response cache initialized");

    let client = PokeApiClient::from_config(&config, cache.clone())?;
    let mut session = Session::new(client).with_catch_threshold(config.catch_threshold);

    let input = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();

    let result = tokio::select! {
        result = repl::run(&mut session, input, &mut stdout) => result,
        _ = shutdown_signal() => {
            println!();
            Ok(())
        }
    };

    cache.stop();
    info!("Cache reaper stopped");

    Ok(result?)
}

/// Waits for Ctrl+C.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, initiating shutdown..."),
        // Without a handler there is nothing to wait for
        Err(err) => {
            info!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await
        }
    }
}
