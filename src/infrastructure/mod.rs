mod collectors;
mod storage;

pub use collectors::{steamrip::SteamRipCollector, Collector};
pub use storage::sqlite_store::SqliteStore;
