use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use antim::app::App;
use antim::booking::{self, BookingDraft};
use antim::catalog::Catalog;
use antim::config::Config;
use antim::gateway::{SubmissionGateway, SystemChannel};
use antim::logging;

#[derive(Parser)]
#[command(name = "antim")]
#[command(about = "Guided booking for last-rites services")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog of religions, ritual kits and services
    Catalog,

    /// Compose the order message for a saved draft without sending it
    Preview {
        /// Path to a booking draft JSON file
        draft: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // No subcommand = launch the wizard TUI
    let is_tui_mode = cli.command.is_none();
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Catalog) => {
            cmd_catalog(&config)?;
        }
        Some(Commands::Preview { draft }) => {
            cmd_preview(&config, &draft)?;
        }
        None => {
            run_tui(config, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

/// Load the user catalog when configured, the embedded one otherwise
fn load_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path() {
        Some(path) => Catalog::from_file(&path),
        None => Catalog::builtin(),
    }
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    let catalog = Arc::new(load_catalog(&config)?);

    let mut app = App::new(config, catalog);
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}

fn cmd_catalog(config: &Config) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("Religions");
    println!("{}", "─".repeat(60));
    for religion in catalog.religions() {
        println!("{} {} ({})", religion.icon, religion.name, religion.id);
    }

    for religion in catalog.religions() {
        let Some(kit) = catalog.kit_for(&religion.id) else {
            continue;
        };
        println!();
        println!("Ritual kit: {}", religion.name);
        println!("{}", "─".repeat(60));
        for item in &kit.items {
            let marker = if item.required { " (required)" } else { "" };
            println!("  {} - ₹{}{}", item.name, item.price, marker);
            println!("      {}", item.description);
        }
    }

    println!();
    println!("Services");
    println!("{}", "─".repeat(60));
    for service in catalog.services() {
        let duration = service
            .duration
            .as_ref()
            .map(|d| format!(" ({d})"))
            .unwrap_or_default();
        println!("  {} - ₹{}{}", service.name, service.price, duration);
        println!("      {}", service.description);
    }

    Ok(())
}

fn cmd_preview(config: &Config, draft_path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(draft_path)
        .with_context(|| format!("Failed to read draft file: {}", draft_path.display()))?;
    let draft: BookingDraft = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse draft file: {}", draft_path.display()))?;

    let composition = booking::compose(&draft)?;

    println!("{}", composition.message);
    println!("{}", "─".repeat(60));
    println!("Kit subtotal:      ₹{}", composition.kit_subtotal);
    println!("Services subtotal: ₹{}", composition.services_subtotal);
    println!("Grand total:       ₹{}", composition.grand_total);
    println!();

    let gateway = SubmissionGateway::new(
        SystemChannel,
        config.booking.contact_number.clone(),
        config.booking.settle_delay(),
    );
    println!("Destination: {}", gateway.destination_uri(&composition));

    Ok(())
}
