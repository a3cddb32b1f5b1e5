use crate::domain::Song;
use indexmap::IndexMap;
use std::sync::Arc;

/// List length the home views ask for.
pub const DEFAULT_TOP_LIMIT: usize = 15;

/// Tallies how often each key occurs and returns the heaviest `limit` keys
/// with their counts.
///
/// Ties keep first-seen order, so a key that entered the catalog earlier
/// outranks an equal-count latecomer. Asking for more keys than exist
/// returns them all.
pub fn top_by_frequency<F>(songs: &[Arc<Song>], key_of: F, limit: usize) -> Vec<(String, usize)>
where
    F: Fn(&Song) -> &str,
{
    let mut tally: IndexMap<String, usize> = IndexMap::new();

    for song in songs {
        *tally.entry(key_of(song).to_string()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = tally.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);

    ranked
}

/// Ranks songs by a numeric score, highest first, keeping the top `limit`.
/// Equal scores keep catalog order.
pub fn top_by_score<F>(songs: &[Arc<Song>], score_of: F, limit: usize) -> Vec<Arc<Song>>
where
    F: Fn(&Song) -> u32,
{
    let mut ranked = songs.to_vec();
    ranked.sort_by(|a, b| score_of(b).cmp(&score_of(a)));
    ranked.truncate(limit);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Analytics, Details};

    fn song(id: u64, artist: &str, popularity: u32) -> Arc<Song> {
        Arc::new(Song {
            id,
            title: format!("Track {id}"),
            artist: Arc::new(artist.to_string()),
            genre: Arc::new("Jazz".to_string()),
            year: 2020,
            details: Details {
                duration_secs: 180,
                bpm: 120,
                popularity,
            },
            analytics: Analytics::default(),
        })
    }

    #[test]
    fn heaviest_keys_come_first() {
        let songs = vec![
            song(1, "Nova Quartet", 10),
            song(2, "Velvet Era", 10),
            song(3, "Nova Quartet", 10),
            song(4, "Iron Field", 10),
            song(5, "Nova Quartet", 10),
            song(6, "Iron Field", 10),
        ];

        let ranked = top_by_frequency(&songs, Song::get_artist, 2);
        assert_eq!(
            ranked,
            vec![
                ("Nova Quartet".to_string(), 3),
                ("Iron Field".to_string(), 2)
            ]
        );
    }

    #[test]
    fn oversized_limit_returns_every_key() {
        let songs = vec![
            song(1, "Nova Quartet", 10),
            song(2, "Velvet Era", 10),
            song(3, "Nova Quartet", 10),
            song(4, "Iron Field", 10),
            song(5, "Iron Field", 10),
        ];

        let ranked = top_by_frequency(&songs, Song::get_artist, 50);
        assert_eq!(ranked.len(), 3);

        let total: usize = ranked.iter().map(|(_, n)| n).sum();
        assert_eq!(total, songs.len());
    }

    #[test]
    fn count_ties_keep_first_seen_order() {
        let songs = vec![
            song(1, "Velvet Era", 10),
            song(2, "Nova Quartet", 10),
            song(3, "Velvet Era", 10),
            song(4, "Nova Quartet", 10),
        ];

        let ranked = top_by_frequency(&songs, Song::get_artist, 2);
        assert_eq!(ranked[0].0, "Velvet Era");
        assert_eq!(ranked[1].0, "Nova Quartet");
    }

    #[test]
    fn limit_zero_yields_nothing() {
        let songs = vec![song(1, "Nova Quartet", 10)];
        assert!(top_by_frequency(&songs, Song::get_artist, 0).is_empty());
    }

    #[test]
    fn scores_rank_highest_first() {
        let songs = vec![
            song(1, "a", 30),
            song(2, "b", 90),
            song(3, "c", 55),
            song(4, "d", 70),
        ];

        let ranked = top_by_score(&songs, |s| s.get_popularity(), 3);
        let ids: Vec<u64> = ranked.iter().map(|s| s.get_id()).collect();
        assert_eq!(ids, vec![2, 4, 3]);
    }

    #[test]
    fn score_ties_prefer_the_earlier_entry() {
        let songs = vec![song(1, "a", 30), song(2, "b", 90), song(3, "c", 90)];

        let top = top_by_score(&songs, |s| s.get_popularity(), 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].get_id(), 2);
    }

    #[test]
    fn oversized_score_limit_returns_all() {
        let songs = vec![song(1, "a", 30), song(2, "b", 90)];
        assert_eq!(top_by_score(&songs, |s| s.get_popularity(), 10).len(), 2);
    }
}
