use super::Collector;
use crate::domain::ScrapedGame;
use crate::error::Result;
use tracing::info;

pub const BASE_URL: &str = "https://steamrip.com";

/// Collector for the SteamRip catalog.
///
/// Fetching and markup extraction of the live site are not wired up yet;
/// until they are, `collect` returns a fixed record set with the same shape
/// the site produces. This version cannot fail.
pub struct SteamRipCollector;

impl Collector for SteamRipCollector {
    fn collect(&self) -> Result<Vec<ScrapedGame>> {
        let games = vec![
            ScrapedGame::new(
                "Cyberpunk 2077",
                format!("{}/cyberpunk-2077", BASE_URL),
                "70 GB",
            ),
            ScrapedGame::new("Elden Ring", format!("{}/elden-ring", BASE_URL), "50 GB"),
            ScrapedGame::new(
                "Red Dead Redemption 2",
                format!("{}/rdr2", BASE_URL),
                "150 GB",
            ),
        ];

        info!("Collected {} games", games.len());
        Ok(games)
    }
}
