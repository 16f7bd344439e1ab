mod game;
mod snapshot;
pub(crate) mod storage;

pub use game::{GameRecord, ScrapedGame};
pub use snapshot::{FullSnapshot, NewSnapshot};
