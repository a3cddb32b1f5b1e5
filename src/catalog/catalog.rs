use crate::{
    datasource::RawBundle,
    domain::{Analytics, Details, Song},
    error::{Error, Result},
};
use indexmap::IndexMap;
use std::{collections::HashMap, sync::Arc};

/// The full song collection, fixed for the life of a session.
///
/// Songs keep payload order. Artist and genre names are interned so every
/// song sharing a name shares one allocation.
pub struct Catalog {
    songs: IndexMap<u64, Arc<Song>>,
    artist_names: Vec<String>,
    genre_names: Vec<String>,
}

impl Catalog {
    /// Builds the catalog from a raw bundle, validating every record. Any
    /// bad record aborts the whole load; a partial catalog never escapes.
    pub fn load(bundle: RawBundle) -> Result<Catalog> {
        let mut songs = IndexMap::with_capacity(bundle.songs.len());
        let mut name_cache: HashMap<String, Arc<String>> = HashMap::new();

        for raw in bundle.songs {
            if raw.id == 0 {
                return Err(Error::Validation(format!(
                    "song {:?} has id 0",
                    raw.title
                )));
            }

            if raw.title.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "song {} has an empty title",
                    raw.id
                )));
            }

            if raw.artist.name.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "song {} has an empty artist name",
                    raw.id
                )));
            }

            if raw.genre.name.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "song {} has an empty genre name",
                    raw.id
                )));
            }

            let artist = intern(&mut name_cache, raw.artist.name);
            let genre = intern(&mut name_cache, raw.genre.name);

            let song = Arc::new(Song {
                id: raw.id,
                title: raw.title,
                artist,
                genre,
                year: raw.year,
                details: Details {
                    duration_secs: raw.details.duration,
                    bpm: raw.details.bpm,
                    popularity: raw.details.popularity,
                },
                analytics: Analytics {
                    energy: raw.analytics.energy,
                    danceability: raw.analytics.danceability,
                    valence: raw.analytics.valence,
                    liveness: raw.analytics.liveness,
                    acousticness: raw.analytics.acousticness,
                    speechiness: raw.analytics.speechiness,
                },
            });

            if let Some(prior) = songs.insert(song.get_id(), song) {
                return Err(Error::Validation(format!(
                    "duplicate song id {}",
                    prior.get_id()
                )));
            }
        }

        Ok(Catalog {
            songs,
            artist_names: bundle.artists,
            genre_names: bundle.genres,
        })
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

// ==============
//   ACCESSORS
// ==============

impl Catalog {
    pub fn get_all_songs(&self) -> Vec<Arc<Song>> {
        self.songs.values().cloned().collect()
    }

    pub fn get_song_by_id(&self, id: u64) -> Option<&Arc<Song>> {
        self.songs.get(&id)
    }

    /// Names supplied for the artist picker, payload order.
    pub fn get_artist_names(&self) -> &[String] {
        &self.artist_names
    }

    pub fn get_genre_names(&self) -> &[String] {
        &self.genre_names
    }
}

fn intern(cache: &mut HashMap<String, Arc<String>>, name: String) -> Arc<String> {
    match cache.get(&name) {
        Some(shared) => Arc::clone(shared),
        None => {
            let shared = Arc::new(name.clone());
            cache.insert(name, Arc::clone(&shared));
            shared
        }
    }
}
