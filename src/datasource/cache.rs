use super::PayloadCache;
use anyhow::{anyhow, Result};
use rusqlite::{params, Connection};
use std::{fs, path::Path};

const CONFIG_DIRECTORY: &str = "Cadenza";
const CACHE_FILENAME: &str = "cadenza.db";
const PAYLOAD_KEY: &str = "songs_payload";

const CREATE_CACHE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS payload_cache(
        key TEXT PRIMARY KEY,
        payload TEXT NOT NULL
    );
";

const GET_PAYLOAD: &str = "
    SELECT payload FROM payload_cache WHERE key = ?
";

const SET_PAYLOAD: &str = "
    INSERT OR REPLACE INTO payload_cache (key, payload) VALUES (?, ?)
";

/// Verbatim payload store, one row per key. The browser only ever writes
/// the songs key; the text round-trips byte for byte.
pub struct SqliteCache {
    conn: Connection,
}

impl SqliteCache {
    /// Opens the store under the user config directory, creating it on
    /// first use.
    pub fn open() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Config folder not present on system!"))?
            .join(CONFIG_DIRECTORY);

        fs::create_dir_all(&dir)?;

        let conn = Connection::open(dir.join(CACHE_FILENAME))?;
        Self::from_connection(conn)
    }

    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Throwaway store for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute_batch(CREATE_CACHE_TABLE)?;

        Ok(SqliteCache { conn })
    }
}

impl PayloadCache for SqliteCache {
    fn try_load(&mut self) -> Result<Option<String>> {
        match self
            .conn
            .query_row(GET_PAYLOAD, params![PAYLOAD_KEY], |row| {
                row.get::<_, String>(0)
            }) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, raw: &str) -> Result<()> {
        self.conn.execute(SET_PAYLOAD, params![PAYLOAD_KEY, raw])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_loads_nothing() {
        let mut cache = SqliteCache::open_in_memory().unwrap();
        assert_eq!(cache.try_load().unwrap(), None);
    }

    #[test]
    fn stored_text_round_trips_exactly() {
        let mut cache = SqliteCache::open_in_memory().unwrap();
        let raw = r#"[{ "id": 1 }]  "#;

        cache.store(raw).unwrap();
        assert_eq!(cache.try_load().unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn storing_again_replaces_the_payload() {
        let mut cache = SqliteCache::open_in_memory().unwrap();

        cache.store("first").unwrap();
        cache.store("second").unwrap();

        assert_eq!(cache.try_load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_backed_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");

        {
            let mut cache = SqliteCache::open_at(&path).unwrap();
            cache.store("kept between sessions").unwrap();
        }

        let mut reopened = SqliteCache::open_at(&path).unwrap();
        assert_eq!(
            reopened.try_load().unwrap().as_deref(),
            Some("kept between sessions")
        );
    }
}
