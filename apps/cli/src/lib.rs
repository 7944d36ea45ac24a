pub mod commands;
pub mod config;
pub mod storage;

use std::io;

use clap::Parser;
use kanji_core::Engine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{default_starred_path, Cli, Commands};
use crate::storage::{load_dataset, JsonFileStarStore};

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let entries = load_dataset(&cli.dataset)?;
    let store = JsonFileStarStore::new(cli.starred.unwrap_or_else(default_starred_path));
    tracing::debug!(path = %store.path().display(), "using starred store");

    let mut engine = Engine::new(entries, store, rand::rng());
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Drill(settings) => {
            commands::drill::execute(&mut engine, &settings, false, io::stdin().lock(), &mut stdout)
        }
        Commands::Quick(settings) => {
            commands::drill::execute(&mut engine, &settings, true, io::stdin().lock(), &mut stdout)
        }
        Commands::Bank { settings, json } => {
            commands::bank::execute(&mut engine, &settings, json, &mut stdout)
        }
        Commands::Star { id } => commands::stars::toggle(&mut engine, id, &mut stdout),
        Commands::Stars => commands::stars::list(&engine, &mut stdout),
    }
}
