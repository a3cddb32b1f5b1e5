use crate::domain::Song;
use crate::error::{Error, Result};
use std::{cmp::Ordering, sync::Arc};

/// Columns the catalog can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Artist,
    Genre,
    Year,
}

impl SortField {
    /// Parses a column name sent in by the presentation layer. Unknown
    /// names are rejected so callers can bail before touching any state.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "artist" => Ok(SortField::Artist),
            "genre" => Ok(SortField::Genre),
            "year" => Ok(SortField::Year),
            other => Err(Error::UnsupportedField(other.to_string())),
        }
    }
}

impl ToString for SortField {
    fn to_string(&self) -> String {
        match self {
            SortField::Title => "Title".into(),
            SortField::Artist => "Artist".into(),
            SortField::Genre => "Genre".into(),
            SortField::Year => "Year".into(),
        }
    }
}

/// The current column plus direction. Re-picking the same column flips the
/// direction; picking a new one starts it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortField::Title,
            ascending: true,
        }
    }
}

impl SortState {
    pub fn toggle(&mut self, field: SortField) {
        self.ascending = match self.field == field {
            true => !self.ascending,
            false => true,
        };
        self.field = field;
    }
}

/// Returns a new sequence ordered by the field's text key.
///
/// Every key compares as text, year included: ascending, 10 lands before 9
/// because "10" < "9". Equal keys keep their input order.
pub fn sort_songs(songs: &[Arc<Song>], field: SortField, ascending: bool) -> Vec<Arc<Song>> {
    let mut sorted = songs.to_vec();

    sorted.sort_by(|a, b| {
        let ord = compare_by_field(a, b, field);
        match ascending {
            true => ord,
            false => ord.reverse(),
        }
    });

    sorted
}

fn compare_by_field(a: &Song, b: &Song, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Artist => a.artist.cmp(&b.artist),
        SortField::Genre => a.genre.cmp(&b.genre),
        SortField::Year => a.year.to_string().cmp(&b.year.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Analytics, Details};

    fn song(id: u64, title: &str, artist: &str, year: u32) -> Arc<Song> {
        Arc::new(Song {
            id,
            title: title.to_string(),
            artist: Arc::new(artist.to_string()),
            genre: Arc::new("Jazz".to_string()),
            year,
            details: Details::default(),
            analytics: Analytics::default(),
        })
    }

    fn ids(songs: &[Arc<Song>]) -> Vec<u64> {
        songs.iter().map(|s| s.get_id()).collect()
    }

    #[test]
    fn titles_order_ascending_and_descending() {
        let songs = vec![
            song(1, "Night Signs", "Nova Quartet", 1999),
            song(2, "Altered States", "Velvet Era", 2020),
            song(3, "Crimson Run", "Nova Quartet", 2011),
        ];

        assert_eq!(ids(&sort_songs(&songs, SortField::Title, true)), vec![2, 3, 1]);
        assert_eq!(ids(&sort_songs(&songs, SortField::Title, false)), vec![1, 3, 2]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let songs = vec![
            song(5, "Echoes", "Nova Quartet", 1999),
            song(2, "Echoes", "Velvet Era", 2020),
            song(9, "Altered States", "Nova Quartet", 2011),
        ];

        let sorted = sort_songs(&songs, SortField::Title, true);
        assert_eq!(ids(&sorted), vec![9, 5, 2]);
    }

    #[test]
    fn years_compare_as_text() {
        let songs = vec![
            song(1, "a", "x", 9),
            song(2, "b", "x", 10),
            song(3, "c", "x", 1999),
            song(4, "d", "x", 2020),
        ];

        let sorted = sort_songs(&songs, SortField::Year, true);
        assert_eq!(ids(&sorted), vec![2, 3, 4, 1]);
    }

    #[test]
    fn same_width_years_order_naturally() {
        let songs = vec![song(1, "a", "x", 2020), song(2, "b", "x", 1999)];

        let sorted = sort_songs(&songs, SortField::Year, true);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn toggling_direction_twice_restores_the_order() {
        let songs = vec![
            song(1, "a", "Nova Quartet", 1),
            song(2, "b", "Velvet Era", 2),
            song(3, "c", "Nova Quartet", 3),
        ];

        let mut state = SortState::default();
        state.toggle(SortField::Artist);
        let first = sort_songs(&songs, state.field, state.ascending);

        state.toggle(SortField::Artist);
        state.toggle(SortField::Artist);
        let third = sort_songs(&songs, state.field, state.ascending);

        assert_eq!(ids(&first), ids(&third));
    }

    #[test]
    fn repicking_a_column_flips_direction() {
        let mut state = SortState::default();
        assert!(state.ascending);

        state.toggle(SortField::Title);
        assert_eq!(state.field, SortField::Title);
        assert!(!state.ascending);

        state.toggle(SortField::Title);
        assert!(state.ascending);
    }

    #[test]
    fn switching_columns_starts_ascending() {
        let mut state = SortState::default();
        state.toggle(SortField::Title);
        assert!(!state.ascending);

        state.toggle(SortField::Year);
        assert_eq!(state.field, SortField::Year);
        assert!(state.ascending);
    }

    #[test]
    fn unknown_column_names_are_rejected() {
        assert!(matches!(
            SortField::from_str("popularity"),
            Err(Error::UnsupportedField(_))
        ));
    }

    #[test]
    fn column_names_parse_any_case() {
        assert_eq!(SortField::from_str("YEAR").unwrap(), SortField::Year);
        assert_eq!(SortField::from_str("Artist").unwrap(), SortField::Artist);
    }

    #[test]
    fn column_names_round_trip_through_display() {
        for field in [
            SortField::Title,
            SortField::Artist,
            SortField::Genre,
            SortField::Year,
        ] {
            assert_eq!(SortField::from_str(&field.to_string()).unwrap(), field);
        }
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sort_songs(&[], SortField::Year, true).is_empty());
    }
}
