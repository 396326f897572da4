//! `warband` command-line client.
//!
//! Composition root: loads content from the data directory, opens the file
//! store and hands an [`Arena`] to the selected subcommand.

mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use warband_content::ContentFactory;
use warband_runtime::{Arena, ArenaConfig, FileStore, OracleManager};

use crate::config::ClientConfig;

#[derive(Parser)]
#[command(name = "warband", version, about = "Two-squad turn-based battle simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert the squads from world.ron into the store
    Seed(commands::Seed),
    /// List stored squads
    Squads,
    /// Fight a battle between two squads, or a random pair
    Battle(commands::Battle),
    /// Show the most recent battle report
    Report(commands::Report),
    /// Delete squads that have no units left
    Cleanup,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.log_dir)?;

    let factory = ContentFactory::new(&config.data_dir);
    let arena = build_arena(&config, &factory)?;

    match cli.command {
        Command::Seed(cmd) => cmd.execute(&arena, &factory),
        Command::Squads => commands::list_squads(&arena),
        Command::Battle(cmd) => cmd.execute(&arena).await,
        Command::Report(cmd) => cmd.execute(&arena),
        Command::Cleanup => commands::cleanup(&arena),
    }
}

fn build_arena(config: &ClientConfig, factory: &ContentFactory) -> Result<Arena> {
    let reference = factory
        .load_reference()
        .context("Failed to load reference data")?;
    let mut battle = factory
        .load_config()
        .context("Failed to load battle config")?;
    if let Some(seed) = config.seed {
        battle.seed = Some(seed);
    }

    let store = FileStore::open(&config.store_path)
        .with_context(|| format!("Failed to open store: {}", config.store_path.display()))?;

    tracing::debug!(
        data_dir = %factory.data_dir().display(),
        store = %config.store_path.display(),
        "assembling arena"
    );

    let arena = Arena::builder()
        .config(ArenaConfig {
            battle,
            ..ArenaConfig::default()
        })
        .oracles(OracleManager::from_catalog(&reference))
        .store(store)
        .build()?;

    Ok(arena)
}
