mod cache;
mod file_source;
mod payload;

pub use cache::SqliteCache;
pub use file_source::FileSource;
pub use payload::{RawAnalytics, RawBundle, RawDetails, RawNameRecord, RawSong};

use crate::error::{Error, Result};
use log::debug;

/// Where raw payload text comes from. Implementors fail however they like;
/// the loader wraps the reason for the caller.
pub trait SongSource {
    fn fetch_songs(&self) -> anyhow::Result<String>;
    fn fetch_artists(&self) -> anyhow::Result<String>;
    fn fetch_genres(&self) -> anyhow::Result<String>;
}

/// Verbatim storage for the songs payload between sessions.
pub trait PayloadCache {
    fn try_load(&mut self) -> anyhow::Result<Option<String>>;
    fn store(&mut self, raw: &str) -> anyhow::Result<()>;
}

/// Produces the raw bundle the catalog is built from.
///
/// The songs payload is served from the cache when one is stored, with no
/// fetch at all. On a miss it is fetched and the exact text cached once it
/// parses, so a malformed payload never poisons the cache. The name lists
/// are always fetched fresh.
pub fn load_bundle(source: &dyn SongSource, cache: &mut dyn PayloadCache) -> Result<RawBundle> {
    let cached = cache.try_load().map_err(|e| Error::Cache(e.to_string()))?;

    let songs = match cached {
        Some(raw) => {
            debug!("songs payload served from cache ({} bytes)", raw.len());
            payload::parse_songs(&raw)?
        }
        None => {
            let raw = source
                .fetch_songs()
                .map_err(|e| Error::Source(e.to_string()))?;
            let songs = payload::parse_songs(&raw)?;

            cache.store(&raw).map_err(|e| Error::Cache(e.to_string()))?;
            debug!("songs payload fetched and cached ({} bytes)", raw.len());
            songs
        }
    };

    let artists = payload::parse_name_list(
        &source
            .fetch_artists()
            .map_err(|e| Error::Source(e.to_string()))?,
    )?;

    let genres = payload::parse_name_list(
        &source
            .fetch_genres()
            .map_err(|e| Error::Source(e.to_string()))?,
    )?;

    Ok(RawBundle {
        songs,
        artists,
        genres,
    })
}
