//! CLI administration tool for shortlink.
//!
//! Runs allocations and store maintenance against the configured backend
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Allocate a short identifier
//! cargo run --bin admin -- allocate https://example.com
//!
//! # Create the PostgreSQL table
//! cargo run --bin admin -- db init
//!
//! # Check the store connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortlink::config`].

use shortlink::application::services::Allocator;
use shortlink::config::{self, Config, StoreBackend};
use shortlink::domain::errors::AllocationError;
use shortlink::infrastructure::persistence::{PgRecordStore, RedisRecordStore};
use shortlink::server::connect_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::num::NonZeroU32;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Allocate a short identifier for a URL
    Allocate {
        /// URL to store
        url: String,

        /// Override MAX_RETRIES for this call
        #[arg(short, long)]
        max_retries: Option<NonZeroU32>,
    },

    /// Record store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Record store subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the PostgreSQL table if missing
    Init,

    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Allocate { url, max_retries } => allocate(&config, url, max_retries).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

/// Performs a single allocation and prints the assigned identifier.
async fn allocate(config: &Config, url: String, max_retries: Option<NonZeroU32>) -> Result<()> {
    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "⚠️  STORE_BACKEND is memory, the record is discarded on exit".yellow()
        );
    }

    let store = connect_store(config).await?;
    let allocator = Allocator::from_config(store, &config.allocator_config()?)?;
    let budget = max_retries.unwrap_or(allocator.max_retries());

    match allocator.allocate_with_budget(&url, budget).await {
        Ok(record) => {
            println!("{}", "✅ Allocated".green().bold());
            println!();
            println!("  ID:      {}", record.id.bright_yellow().bold());
            println!("  URL:     {}", record.url.cyan());
            println!(
                "  Created: {}",
                record.created_at.to_string().bright_black()
            );
            println!();
            Ok(())
        }
        Err(AllocationError::RetriesExhausted { attempts, last }) => {
            println!(
                "{}",
                format!("❌ No free identifier after {} attempts", attempts)
                    .red()
                    .bold()
            );
            println!("  Last conflict: {}", last.to_string().bright_black());
            anyhow::bail!("allocation failed")
        }
        Err(AllocationError::Store(e)) => {
            Err(anyhow::Error::new(e).context("record store failed during allocation"))
        }
    }
}

/// Handles record store commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    match action {
        DbAction::Init => {
            let store = connect_postgres(config).await?;
            store.ensure_schema().await?;

            println!(
                "{}",
                format!("✅ Table {} ready", store.table()).green().bold()
            );
        }
        DbAction::Check => {
            println!(
                "{}",
                format!("🔍 Checking {} store...", config.store_backend).bright_blue()
            );

            match config.store_backend {
                StoreBackend::Memory => {
                    println!("{}", "  Nothing to check for the memory backend".yellow());
                }
                StoreBackend::Postgres => {
                    connect_postgres(config).await?.ping().await?;
                    println!("{}", "✅ Database connection OK".green().bold());
                }
                StoreBackend::Redis => {
                    let redis_url = config
                        .redis_url
                        .as_deref()
                        .context("REDIS_URL must be set")?;
                    RedisRecordStore::connect(redis_url, &config.redis_key_prefix()).await?;
                    println!("{}", "✅ Redis connection OK".green().bold());
                }
            }
        }
    }

    Ok(())
}

/// Opens a PostgreSQL store from the configuration.
async fn connect_postgres(config: &Config) -> Result<PgRecordStore> {
    let database_url = config
        .database_url
        .as_deref()
        .context("STORE_BACKEND=postgres and DATABASE_URL are required for this command")?;

    let pool = PgPool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    Ok(PgRecordStore::new(
        Arc::new(pool),
        &config.table_name,
        &config.key_name,
    )?)
}
