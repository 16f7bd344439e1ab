use crate::domain::storage::Storage;
use crate::error::{Result, TrackerError};
use crate::infrastructure::Collector;
use crate::services::export::SnapshotExporter;
use std::sync::Arc;
use tracing::info;

/// Runs the collect → upsert → read → export sequence once. Any failure
/// aborts the run; there is no partial-success mode.
pub struct CatalogService {
    store: Arc<dyn Storage>,
    collector: Box<dyn Collector>,
    exporter: SnapshotExporter,
}

impl CatalogService {
    pub fn new(
        store: Arc<dyn Storage>,
        collector: Box<dyn Collector>,
        exporter: SnapshotExporter,
    ) -> Self {
        Self {
            store,
            collector,
            exporter,
        }
    }

    pub fn run(&self) -> Result<()> {
        info!("Starting catalog run");

        let scraped = self.collector.collect()?;
        // url is the natural key for the whole pipeline
        if let Some(bad) = scraped.iter().find(|g| g.url.is_empty()) {
            return Err(TrackerError::Collection(format!(
                "collected record \"{}\" has no url",
                bad.title
            )));
        }
        info!("Collection completed: {} records", scraped.len());

        let new_games = self.store.upsert_games(&scraped)?;
        info!("Database update completed: {} new games", new_games.len());

        let all_games = self.store.all_games()?;
        self.exporter.write_snapshots(all_games, new_games)?;
        info!("Snapshot export completed");

        Ok(())
    }
}
