use crate::error::{Error, Result};
use serde::Deserialize;

/// Wire shape of one song record in the data source payload.
#[derive(Debug, Deserialize)]
pub struct RawSong {
    pub id: u64,
    pub title: String,
    pub artist: RawNameRecord,
    pub genre: RawNameRecord,
    pub year: u32,
    pub details: RawDetails,
    pub analytics: RawAnalytics,
}

/// Artist and genre references arrive as single-field records, and the
/// auxiliary name lists reuse the same shape.
#[derive(Debug, Deserialize)]
pub struct RawNameRecord {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawDetails {
    pub duration: u32,
    pub bpm: u32,
    pub popularity: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawAnalytics {
    pub energy: u32,
    pub danceability: u32,
    pub valence: u32,
    pub liveness: u32,
    pub acousticness: u32,
    pub speechiness: u32,
}

/// Everything the loader hands the catalog builder.
pub struct RawBundle {
    pub songs: Vec<RawSong>,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

pub(crate) fn parse_songs(raw: &str) -> Result<Vec<RawSong>> {
    serde_json::from_str(raw).map_err(|e| Error::Payload(e.to_string()))
}

pub(crate) fn parse_name_list(raw: &str) -> Result<Vec<String>> {
    let records: Vec<RawNameRecord> =
        serde_json::from_str(raw).map_err(|e| Error::Payload(e.to_string()))?;

    Ok(records.into_iter().map(|r| r.name).collect())
}
