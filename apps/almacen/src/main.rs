//! # Almacén Binary
//!
//! Entry point: parses the CLI, initializes tracing, and either runs the
//! HTTP server or dumps the OpenAPI document.

use almacen::api::{self, docs};
use almacen::cli::{Cli, Command};
use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; default to info for the service itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => serve(&host, port).await,
        Command::Openapi => {
            let doc = serde_json::to_string_pretty(&docs::openapi_document())
                .context("failed to serialize OpenAPI document")?;
            println!("{doc}");
            Ok(())
        }
    }
}

/// Bind and run the HTTP server until ctrl-c.
async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local = listener.local_addr().context("failed to read bound address")?;
    tracing::info!(%local, "almacen listening");
    tracing::info!("interactive docs at http://{local}/docs, alternative docs at http://{local}/redoc");

    axum::serve(listener, api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("almacen stopped");
    Ok(())
}

/// Resolve when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
    }
}
