//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use devforum_server::db::{create_pool_with_options, migrations};
use devforum_server::http::{run_server, ServerConfig};

use super::resolve_config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: DEVFORUM_BIND or 127.0.0.1:5000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides DATABASE_URI)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = resolve_config(
        &[
            ("DATABASE_URI", args.database_url),
            ("DEVFORUM_BIND", args.bind.map(|addr| addr.to_string())),
        ],
        |var| std::env::var(var).ok(),
    )
    .context("Failed to load configuration")?;

    if config.secret_key.is_none() {
        tracing::warn!("SECRET_KEY is not set; sessions cannot be signed");
    }

    tracing::info!("Starting devforum server on {}", config.bind_addr);

    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    let server = ServerConfig {
        bind_addr: config.bind_addr,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, server).await.context("Server error")?;

    Ok(())
}
