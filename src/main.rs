//! Pokedex - an interactive PokeAPI explorer
//!
//! # Startup Sequence
//! 1. Parse command-line flags
//! 2. Initialize tracing subscriber for logging
//! 3. Load configuration from environment variables, apply flags
//! 4. Create the response cache (starts its cleanup task)
//! 5. Run the REPL on stdin/stdout until `exit`, EOF or a signal
//! 6. Stop the cleanup task and exit

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{repl, Cache, Config, PokeApiClient, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they do not interleave with the prompt.
    // Defaults to "warn", can be overridden with RUST_LOG env var.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_cli(&cli);
    info!(
        "Configuration loaded: cache_ttl={}s, api_base={}, http_timeout={}s",
        config.cache_ttl, config.api_base, config.http_timeout
    );

    let cache = Cache::new(config.cache_ttl()).context("failed to create response cache")?;
    let client = PokeApiClient::new(&config, cache.clone()).context("failed to create API client")?;
    let mut session = Session::from_config(&config, client);

    let mut stdout = std::io::stdout();
    let stdin = BufReader::new(tokio::io::stdin());

    let outcome = tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => Some(result),
        _ = shutdown_signal() => {
            println!();
            None
        }
    };

    cache.shutdown().await;
    info!("Pokedex shutdown complete");

    match outcome {
        Some(result) => result.context("terminal I/O failed"),
        None => {
            // The pending stdin read runs on a blocking thread that would keep
            // the runtime from shutting down until the next line arrives.
            std::process::exit(0);
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
