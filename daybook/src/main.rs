//! daybook - diary and savings journal
//!
//! Interactive console menu for appending diary entries and savings amounts
//! to a local SQLite file, listing the diary and totalling the savings.
//!
//! Uses XDG Base Directory specification for auxiliary files:
//! - Database: `diary.db` in the working directory (overridable)
//! - Logs: $XDG_STATE_HOME/daybook/ (~/.local/state/daybook/)
//! - Config: $XDG_CONFIG_HOME/daybook/config.toml (~/.config/daybook/config.toml)

mod menu;
mod scanner;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use daybook_core::{Config, Database};

use crate::menu::Menu;

#[derive(Parser)]
#[command(name = "daybook")]
#[command(about = "Keep a diary and track daily savings")]
#[command(version)]
struct Args {
    /// Database file (default: diary.db in the working directory)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Every failure past argument parsing is reported, never turned into a
    // non-zero exit status.
    if let Err(e) = run(args) {
        tracing::error!(error = %e, "daybook stopped");
        eprintln!("daybook: {e:#}");
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("daybook: {e}; using default settings");
        Config::default()
    });

    // Logs go to a file; stdout belongs to the menu.
    let _log_guard = match daybook_core::logging::init(&config.logging) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("daybook: {e}; continuing without a log file");
            None
        }
    };

    tracing::info!("daybook starting");

    let db_path = args
        .database
        .unwrap_or_else(|| config.database_path().to_path_buf());
    tracing::info!(path = %db_path.display(), "Opening database");

    let db = Database::open(&db_path);
    if let Err(e) = db.initialize() {
        tracing::error!(error = %e, "Failed to create tables");
        println!("Database error: {e}");
    }

    let mut menu = Menu::new(&db, io::stdin().lock(), io::stdout().lock());
    menu.run().context("console I/O failed")?;

    tracing::info!("daybook shutting down");
    Ok(())
}
