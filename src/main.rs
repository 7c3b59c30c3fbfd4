//! Charsheet Engine - Character sheet model for a d20-style TTRPG
//!
//! The engine:
//! - Tracks six attributes, their modifiers, skill points and class eligibility
//! - Saves and loads the sheet through a remote sheet store over HTTP
//! - Runs an interactive console session (`play`, the default)
//! - Runs an in-memory development sheet store (`store`)
//! - Prints the active catalog in catalog file format (`catalog`)

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::dto::CatalogDto;
use crate::application::services::SheetSession;
use crate::infrastructure::catalog_loader::load_catalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::console::{parse_command, render_sheet, ConsoleCommand, ConsoleRenderer, HELP};
use crate::infrastructure::sheet_store_client::HttpSheetStore;
use crate::infrastructure::store_server::run_store_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging; stdout belongs to the console session
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charsheet_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Charsheet Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Sheet store: {}", config.sheet_store_url);

    let mode = std::env::args().nth(1).unwrap_or_else(|| "play".to_string());
    match mode.as_str() {
        "play" => run_console(config).await,
        "store" => run_store_server(config.server_port).await,
        "catalog" => print_catalog(config).await,
        other => anyhow::bail!("Unknown mode `{other}`, expected `play`, `store` or `catalog`"),
    }
}

async fn run_console(config: AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(config.catalog_path.as_deref()).await?;
    let store = Arc::new(HttpSheetStore::new(
        &config.sheet_store_url,
        config.sheet_store_timeout,
    )?);

    let mut session = SheetSession::new(catalog.clone(), store);
    session.subscribe(Arc::new(ConsoleRenderer::new(std::io::stdout())));

    // A failed load keeps the default sheet, which still needs drawing
    if !session.start().await {
        println!("{}", render_sheet(session.sheet()));
    }
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line, &catalog) {
            Ok(ConsoleCommand::Action(action)) => {
                if !session.dispatch(action).await {
                    println!("> No change");
                }
            }
            Ok(ConsoleCommand::Show) => println!("{}", render_sheet(session.sheet())),
            Ok(ConsoleCommand::Help) => println!("{HELP}"),
            Ok(ConsoleCommand::Quit) => break,
            Err(e) => println!("{e}"),
        }
    }

    tracing::info!("Console session ended");
    Ok(())
}

async fn print_catalog(config: AppConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(config.catalog_path.as_deref()).await?;
    println!("{}", serde_json::to_string_pretty(&CatalogDto::from(catalog.as_ref()))?);
    Ok(())
}
