//! Sextant MCP Server
//!
//! This binary serves one bounded navigation session over MCP stdio.
//! The session is confined to the directory given with `--root`; an AI
//! assistant connected to the server can explore and change that subtree
//! but can never navigate out of it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rmcp::ServiceExt;
use sextant_mcp::SextantServer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Serve bounded working-directory navigation over MCP stdio.
#[derive(Debug, Parser)]
#[command(name = "sextant-mcp", version)]
struct Args {
    /// Root directory the session is confined to.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing - output to stderr so it doesn't interfere with MCP stdio
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    tracing::info!(root = %args.root.display(), "Starting Sextant MCP server");

    let server = SextantServer::new(&args.root)
        .with_context(|| format!("cannot open session root {}", args.root.display()))?;

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Failed to start MCP service: {}", e);
        })?;

    tracing::info!("Sextant MCP server running");

    service.waiting().await?;

    tracing::info!("Sextant MCP server shutting down");

    Ok(())
}
