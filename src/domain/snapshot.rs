use crate::domain::GameRecord;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The complete catalog as of this run, written to `All.Games.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FullSnapshot {
    pub total_games: usize,
    pub generated_at: String,
    pub games: Vec<GameRecord>,
}

impl FullSnapshot {
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self {
            total_games: games.len(),
            generated_at: Utc::now().to_rfc3339(),
            games,
        }
    }
}

/// Records first seen in this run, written to `New.Games.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewSnapshot {
    pub new_games_count: usize,
    pub generated_at: String,
    pub games: Vec<GameRecord>,
}

impl NewSnapshot {
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self {
            new_games_count: games.len(),
            generated_at: Utc::now().to_rfc3339(),
            games,
        }
    }
}
