//! # sparksave
//!
//! Terminal front end for SparkSave savings goals.
//!
//! - `sparksave list [--history --sort recent|highest|lowest]`
//! - `sparksave add <name> <target> [--saved N --description TEXT]`
//! - `sparksave edit <id> [--name --target --description]`
//! - `sparksave contribute <id> <amount>`
//! - `sparksave delete <id>`, `sparksave stats`, `sparksave clear --yes`

mod commands;
mod config;
mod main_lib;

use clap::Parser;
use commands::GoalCommand;
use config::Config;
use main_lib::{build_store, init_tracing};

/// Track savings goals from the terminal.
#[derive(Parser)]
#[command(name = "sparksave", version, about)]
struct Cli {
    /// Database file (overrides SPARKSAVE_DB_PATH).
    #[arg(long)]
    db_path: Option<String>,

    #[command(subcommand)]
    command: GoalCommand,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }
    init_tracing(config.log_format);

    let store = build_store(&config)?;
    let output = commands::execute(store.as_ref(), cli.command)?;
    println!("{}", output);
    Ok(())
}
