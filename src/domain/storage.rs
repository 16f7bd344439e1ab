use crate::domain::{GameRecord, ScrapedGame};
use crate::error::Result;

pub trait Storage: Send + Sync {
    /// Insert records that are new by `url` and refresh the ones that are
    /// not. Returns the newly inserted records in input order; records whose
    /// `url` already existed are updated in place and not returned.
    fn upsert_games(&self, games: &[ScrapedGame]) -> Result<Vec<GameRecord>>;

    /// Every stored record. The order is storage-defined; callers must not
    /// depend on it.
    fn all_games(&self) -> Result<Vec<GameRecord>>;
}
