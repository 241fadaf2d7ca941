//! SQLite persistence for difficulty ratings.
//!
//! One row per solution file, keyed by its path relative to the language
//! directory. Each call opens its own connection, so the store can be shared
//! freely between workers and used from blocking tasks.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use common::model::rating::is_valid_rating;
use rusqlite::{params, Connection};

#[derive(Clone, Debug)]
pub struct RatingsStore {
    path: PathBuf,
}

impl RatingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        Connection::open(&self.path)
    }

    /// Creates the database file and the `ratings` table when missing.
    pub fn init(&self) -> rusqlite::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Could not create {}: {}", parent.display(), e);
            }
        }
        let conn = self.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS ratings (filename TEXT PRIMARY KEY, rating INTEGER)",
            [],
        )?;
        Ok(())
    }

    /// Every stored rating. Rows holding out-of-range values are skipped.
    pub fn all(&self) -> rusqlite::Result<HashMap<String, u8>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT filename, rating FROM ratings")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<i64>>(1)?))
        })?;

        let mut ratings = HashMap::new();
        for row in rows {
            let (filename, rating) = row?;
            if let Some(rating) = rating
                .and_then(|r| u8::try_from(r).ok())
                .filter(|r| is_valid_rating(*r))
            {
                ratings.insert(filename, rating);
            }
        }
        Ok(ratings)
    }

    #[cfg(test)]
    pub fn get(&self, filename: &str) -> rusqlite::Result<Option<u8>> {
        Ok(self.all()?.get(filename).copied())
    }

    /// Inserts or replaces the rating of `filename`.
    pub fn save(&self, filename: &str, rating: u8) -> rusqlite::Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT OR REPLACE INTO ratings (filename, rating) VALUES (?1, ?2)",
            params![filename, rating],
        )?;
        Ok(())
    }
}
