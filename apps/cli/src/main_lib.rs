use std::sync::Arc;

use sparksave_core::{GoalServiceTrait, GoalStore};
use sparksave_storage_sqlite::SqliteKeyValueStore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so command output on stdout stays clean.
    match log_format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Opens the database, runs migrations and loads the goal collection.
pub fn build_store(config: &Config) -> anyhow::Result<Arc<dyn GoalServiceTrait>> {
    let storage = SqliteKeyValueStore::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let store = GoalStore::new(Arc::new(storage)).with_storage_key(config.storage_key.clone());
    store.initialize()?;
    tracing::debug!("Goal store ready under key '{}'", store.storage_key());

    Ok(Arc::new(store))
}
