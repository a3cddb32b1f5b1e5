/// Per-field match state. `Some` means the field participates with that
/// text; `None` sits the field out entirely.
///
/// The empty string is a live value, not an inactive marker: an active
/// title of "" contains-matches every song, while an active artist or
/// genre of "" matches none (no empty names survive catalog validation).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
}

impl FilterCriteria {
    /// The opening state: title matching active with empty text, so the
    /// whole catalog shows until the caller narrows it.
    pub fn browse_all() -> Self {
        FilterCriteria {
            title: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn by_title(text: impl Into<String>) -> Self {
        FilterCriteria {
            title: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn by_artist(name: impl Into<String>) -> Self {
        FilterCriteria {
            artist: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_genre(name: impl Into<String>) -> Self {
        FilterCriteria {
            genre: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.title.is_some() || self.artist.is_some() || self.genre.is_some()
    }
}
