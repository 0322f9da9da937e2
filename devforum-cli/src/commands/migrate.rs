//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use devforum_server::db::{create_pool, migrations};

use super::resolve_config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides DATABASE_URI)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Create or update the forum schema
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let config = resolve_config(&[("DATABASE_URI", args.database_url)], |var| {
        std::env::var(var).ok()
    })
    .context("Failed to load configuration")?;

    let pool = create_pool(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("Migration failed")?;

    pool.close().await;
    Ok(())
}
