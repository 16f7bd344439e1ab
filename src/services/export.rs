use crate::domain::{FullSnapshot, GameRecord, NewSnapshot};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const ALL_GAMES_FILE: &str = "All.Games.json";
pub const NEW_GAMES_FILE: &str = "New.Games.json";

/// Writes the two snapshot documents. Both are whole-file overwrites and
/// both are written on every run, even when the delta is empty.
pub struct SnapshotExporter {
    output_dir: PathBuf,
}

impl SnapshotExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_snapshots(
        &self,
        all_games: Vec<GameRecord>,
        new_games: Vec<GameRecord>,
    ) -> Result<()> {
        let full = FullSnapshot::new(all_games);
        self.write_json_file(ALL_GAMES_FILE, &full)?;
        info!("Generated {} with {} games", ALL_GAMES_FILE, full.total_games);

        let delta = NewSnapshot::new(new_games);
        self.write_json_file(NEW_GAMES_FILE, &delta)?;
        info!(
            "Generated {} with {} new games",
            NEW_GAMES_FILE, delta.new_games_count
        );

        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, name: &str, data: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        fs::write(self.output_dir.join(name), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::Value;
    use tempfile::TempDir;

    fn stored_record(title: &str) -> GameRecord {
        let now = Utc::now().to_rfc3339();
        GameRecord {
            title: title.to_string(),
            url: format!("https://steamrip.com/{}", title),
            size: "10 GB".to_string(),
            date_added: now.clone(),
            last_updated: Some(now),
        }
    }

    fn fresh_record(title: &str) -> GameRecord {
        GameRecord {
            last_updated: None,
            ..stored_record(title)
        }
    }

    fn read_json(dir: &TempDir, name: &str) -> Value {
        let content = fs::read_to_string(dir.path().join(name)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn writes_both_snapshot_files() {
        let dir = TempDir::new().unwrap();
        let exporter = SnapshotExporter::new(dir.path());

        exporter
            .write_snapshots(
                vec![stored_record("cyberpunk-2077"), stored_record("elden-ring")],
                vec![fresh_record("elden-ring")],
            )
            .unwrap();

        let full = read_json(&dir, ALL_GAMES_FILE);
        assert_eq!(full["total_games"], 2);
        assert!(full["generated_at"].is_string());
        assert_eq!(full["games"].as_array().unwrap().len(), 2);

        let delta = read_json(&dir, NEW_GAMES_FILE);
        assert_eq!(delta["new_games_count"], 1);
        assert_eq!(delta["games"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn fresh_records_serialize_without_last_updated() {
        let dir = TempDir::new().unwrap();
        let exporter = SnapshotExporter::new(dir.path());

        exporter
            .write_snapshots(
                vec![stored_record("elden-ring")],
                vec![fresh_record("elden-ring")],
            )
            .unwrap();

        let full_game = &read_json(&dir, ALL_GAMES_FILE)["games"][0];
        assert!(full_game.get("last_updated").is_some());

        let new_game = &read_json(&dir, NEW_GAMES_FILE)["games"][0];
        assert!(new_game.get("last_updated").is_none());
        assert!(new_game.get("date_added").is_some());
    }

    #[test]
    fn empty_delta_is_still_written() {
        let dir = TempDir::new().unwrap();
        let exporter = SnapshotExporter::new(dir.path());

        exporter.write_snapshots(vec![], vec![]).unwrap();

        let delta = read_json(&dir, NEW_GAMES_FILE);
        assert_eq!(delta["new_games_count"], 0);
        assert_eq!(delta["games"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn snapshots_are_overwritten_not_appended() {
        let dir = TempDir::new().unwrap();
        let exporter = SnapshotExporter::new(dir.path());

        exporter
            .write_snapshots(vec![stored_record("a"), stored_record("b")], vec![])
            .unwrap();
        exporter
            .write_snapshots(vec![stored_record("a")], vec![])
            .unwrap();

        let full = read_json(&dir, ALL_GAMES_FILE);
        assert_eq!(full["total_games"], 1);
    }
}
