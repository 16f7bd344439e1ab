use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{SqliteStore, SteamRipCollector};
use crate::services::catalog::CatalogService;
use crate::services::export::SnapshotExporter;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.args.log_level))
        .init();

    config.ensure_directories()?;

    let store = Arc::new(SqliteStore::open(&config.args.db_path)?);
    let collector = Box::new(SteamRipCollector);
    let exporter = SnapshotExporter::new(&config.args.output_dir);

    CatalogService::new(store, collector, exporter).run()?;

    info!("Catalog run completed successfully!");
    Ok(())
}
