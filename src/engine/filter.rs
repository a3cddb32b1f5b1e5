use super::FilterCriteria;
use crate::domain::Song;
use std::sync::Arc;

/// Keeps every song matched by at least one active field.
///
/// Title matches on case-insensitive containment; artist and genre match
/// on case-insensitive name equality. Active fields widen the result, they
/// never narrow it. With nothing active, nothing matches. Input order is
/// preserved, so feeding catalog order out gives catalog order back.
pub fn filter_songs(songs: &[Arc<Song>], criteria: &FilterCriteria) -> Vec<Arc<Song>> {
    if !criteria.is_active() {
        return Vec::new();
    }

    let title_query = criteria.title.as_deref().map(str::to_lowercase);
    let artist_query = criteria.artist.as_deref().map(str::to_lowercase);
    let genre_query = criteria.genre.as_deref().map(str::to_lowercase);

    songs
        .iter()
        .filter(|song| {
            let title_hit = title_query
                .as_deref()
                .map(|q| song.get_title().to_lowercase().contains(q))
                .unwrap_or(false);

            let artist_hit = artist_query
                .as_deref()
                .map(|q| song.get_artist().to_lowercase() == q)
                .unwrap_or(false);

            let genre_hit = genre_query
                .as_deref()
                .map(|q| song.get_genre().to_lowercase() == q)
                .unwrap_or(false);

            title_hit || artist_hit || genre_hit
        })
        .map(Arc::clone)
        .collect()
}
