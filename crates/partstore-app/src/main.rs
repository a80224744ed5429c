//! # partstore - Suppliers, their parts, and a transactional in-memory store
//!
//! This is the main entry point that wires everything together.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads: StoreConfig (shared)                             │
//! │    ├── Creates: InMemoryStorePartsRepository (adapter)         │
//! │    ├── Creates: StorePartsUseCase (use case)                   │
//! │    └── Runs: the selected command                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   partstore store <payload.json>...   - Store loader payloads
//!   partstore demo [--part-type door]   - Run the store walkthrough

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use commands::{DemoCommand, StoreCommand};
use partstore_adapter::InMemoryStorePartsRepository;
use partstore_domain::StorePartsRepository;
use partstore_usecase::StorePartsUseCase;
use shared::StoreConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "partstore")]
#[command(about = "Store suppliers and the parts they deliver")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Store configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Store loader payloads
    Store(StoreCommand),
    /// Run the store walkthrough
    Demo(DemoCommand),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::default(),
    };
    info!(?config, "Store configured");

    // Adapters (could be swapped for any StorePartsRepository)
    let store = InMemoryStorePartsRepository::with_config(config);
    match store.config().reset_timeout() {
        Some(limit) => info!(?limit, "Reset waits for open transactions"),
        None => info!("Reset waits for open transactions without limit"),
    }
    let repository: Arc<dyn StorePartsRepository> = Arc::new(store);

    match cli.command {
        Commands::Store(cmd) => {
            let use_case = StorePartsUseCase::new(Arc::clone(&repository));
            let rejected = cmd.run(&use_case).await?;
            if rejected > 0 {
                anyhow::bail!("{} payload(s) rejected", rejected);
            }
            Ok(())
        }
        Commands::Demo(cmd) => cmd.run(repository.as_ref()).await,
    }
}
