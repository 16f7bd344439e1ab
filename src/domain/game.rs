use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A record as the collector hands it over, before it has been through the
/// database. `date_added` is a provisional collection-time value; the store
/// stamps its own insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedGame {
    pub title: String,
    pub url: String,
    pub size: String,
    pub date_added: String,
}

impl ScrapedGame {
    pub fn new(title: impl Into<String>, url: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            size: size.into(),
            date_added: Utc::now().to_rfc3339(),
        }
    }
}

/// A stored catalog entry. `url` is the natural key for the lifetime of the
/// store. `last_updated` is `None` only on records freshly returned from an
/// insert; anything read back from the store carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    pub url: String,
    pub size: String,
    pub date_added: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
