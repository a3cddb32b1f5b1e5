use super::Song;
use indexmap::IndexSet;
use std::sync::Arc;

/// The working selection: ordered, duplicate-free, gone with the session.
#[derive(Default)]
pub struct Playlist {
    tracks: IndexSet<Arc<Song>>,
}

/// Figures the presentation shows beside the playlist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaylistSummary {
    pub count: usize,
    pub average_popularity: f64,
}

impl Playlist {
    pub fn new() -> Self {
        Playlist {
            tracks: IndexSet::new(),
        }
    }

    /// Appends at the end unless the song is already present.
    /// Returns true when the playlist actually grew.
    pub fn add(&mut self, song: &Arc<Song>) -> bool {
        self.tracks.insert(Arc::clone(song))
    }

    /// Removes by identity, keeping the order of the remaining tracks.
    pub fn remove(&mut self, song: &Arc<Song>) -> bool {
        self.tracks.shift_remove(song)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    pub fn contains(&self, song: &Arc<Song>) -> bool {
        self.tracks.contains(song)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get_tracks(&self) -> Vec<Arc<Song>> {
        self.tracks.iter().map(Arc::clone).collect()
    }

    /// Mean popularity rounded to two decimals. An empty playlist reports
    /// zero rather than dividing by zero.
    pub fn summary(&self) -> PlaylistSummary {
        let count = self.tracks.len();

        let average_popularity = match count {
            0 => 0.0,
            n => {
                let total: u64 = self
                    .tracks
                    .iter()
                    .map(|s| u64::from(s.details.popularity))
                    .sum();
                let mean = total as f64 / n as f64;
                (mean * 100.0).round() / 100.0
            }
        };

        PlaylistSummary {
            count,
            average_popularity,
        }
    }
}
