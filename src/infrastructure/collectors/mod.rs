use crate::domain::ScrapedGame;
use crate::error::Result;

pub(crate) mod steamrip;

/// Source of raw catalog records. The repository and exporter only see this
/// trait, so a networked implementation can replace the stub without
/// touching either.
pub trait Collector: Send + Sync {
    fn collect(&self) -> Result<Vec<ScrapedGame>>;
}
