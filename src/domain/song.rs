use crate::{format_duration, truncate_title};
use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

/// Character budget for list-row titles.
pub const DISPLAY_TITLE_LIMIT: usize = 25;

/// One catalog entry. Immutable once the catalog is built.
///
/// Identity is the id alone, so an `Arc<Song>` works as the entity
/// reference in selection sets.
#[derive(Debug)]
pub struct Song {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) artist: Arc<String>,
    pub(crate) genre: Arc<String>,
    pub(crate) year: u32,
    pub(crate) details: Details,
    pub(crate) analytics: Analytics,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Details {
    pub duration_secs: u32,
    pub bpm: u32,
    pub popularity: u32,
}

/// The six audio scores, each conventionally 0 to 100.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Analytics {
    pub energy: u32,
    pub danceability: u32,
    pub valence: u32,
    pub liveness: u32,
    pub acousticness: u32,
    pub speechiness: u32,
}

impl Song {
    pub fn get_id(&self) -> u64 {
        self.id
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_artist(&self) -> &str {
        &self.artist
    }

    pub fn get_genre(&self) -> &str {
        &self.genre
    }

    pub fn get_year(&self) -> u32 {
        self.year
    }

    pub fn get_details(&self) -> &Details {
        &self.details
    }

    pub fn get_analytics(&self) -> &Analytics {
        &self.analytics
    }

    pub fn get_popularity(&self) -> u32 {
        self.details.popularity
    }

    pub fn get_duration_str(&self) -> String {
        format_duration(self.details.duration_secs)
    }

    /// Title shortened for list rows; the full text stays on `get_title`.
    pub fn get_display_title(&self) -> String {
        truncate_title(&self.title, DISPLAY_TITLE_LIMIT)
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Song {}

impl Hash for Song {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Analytics {
    /// The scores in radar order, labeled for charting collaborators.
    /// No chart geometry is computed here.
    pub fn axes(&self) -> [(&'static str, u32); 6] {
        [
            ("Energy", self.energy),
            ("Danceability", self.danceability),
            ("Valence", self.valence),
            ("Liveness", self.liveness),
            ("Acousticness", self.acousticness),
            ("Speechiness", self.speechiness),
        ]
    }
}
