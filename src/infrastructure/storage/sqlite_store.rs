use crate::domain::storage::Storage;
use crate::domain::{GameRecord, ScrapedGame};
use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// SQLite-backed catalog store. One table, keyed by the unique `url`;
/// `id` is a surrogate key that is never reused, so `ORDER BY id` is
/// insertion order.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS games (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                url TEXT UNIQUE,
                size TEXT,
                date_added TEXT,
                last_updated TEXT
            )",
            [],
        )?;
        Ok(())
    }
}

impl Storage for SqliteStore {
    fn upsert_games(&self, games: &[ScrapedGame]) -> Result<Vec<GameRecord>> {
        let mut conn = self.conn.lock().expect("database mutex poisoned");
        let tx = conn.transaction()?;
        let now = Utc::now().to_rfc3339();

        let mut new_games = Vec::new();
        for game in games {
            let existing: Option<i64> = tx
                .query_row(
                    "SELECT id FROM games WHERE url = ?1",
                    params![game.url],
                    |row| row.get(0),
                )
                .optional()?;

            if existing.is_some() {
                tx.execute(
                    "UPDATE games SET title = ?1, size = ?2, last_updated = ?3 WHERE url = ?4",
                    params![game.title, game.size, now, game.url],
                )?;
            } else {
                // The collector's date_added is provisional; the insert time
                // is the stored truth.
                tx.execute(
                    "INSERT INTO games (title, url, size, date_added, last_updated)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![game.title, game.url, game.size, now, now],
                )?;
                new_games.push(GameRecord {
                    title: game.title.clone(),
                    url: game.url.clone(),
                    size: game.size.clone(),
                    date_added: now.clone(),
                    last_updated: None,
                });
            }
        }

        tx.commit()?;
        info!("Added {} new games to the database", new_games.len());
        Ok(new_games)
    }

    fn all_games(&self) -> Result<Vec<GameRecord>> {
        let conn = self.conn.lock().expect("database mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT title, url, size, date_added, last_updated FROM games ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(GameRecord {
                title: row.get(0)?,
                url: row.get(1)?,
                size: row.get(2)?,
                date_added: row.get(3)?,
                last_updated: row.get(4)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
