use crate::{
    catalog::Catalog,
    datasource::{load_bundle, PayloadCache, SongSource},
    domain::{Playlist, PlaylistSummary, Song},
    engine::{
        filter_songs, sort_songs, top_by_frequency, top_by_score, FilterCriteria, SortField,
        SortState, DEFAULT_TOP_LIMIT,
    },
    error::{Error, Result},
};
use log::info;
use std::sync::Arc;

/// One user's browsing context: the loaded catalog plus everything that
/// varies per session. Nothing lives in globals; drop the session and the
/// criteria and playlist go with it.
pub struct BrowserSession {
    catalog: Option<Arc<Catalog>>,
    criteria: FilterCriteria,
    sort: SortState,
    playlist: Playlist,
}

impl BrowserSession {
    pub fn new() -> Self {
        BrowserSession {
            catalog: None,
            criteria: FilterCriteria::browse_all(),
            sort: SortState::default(),
            playlist: Playlist::new(),
        }
    }

    /// Runs the fetch-or-cached pipeline and installs the catalog. The
    /// session stays unloaded when any stage fails.
    pub fn load_catalog(
        &mut self,
        source: &dyn SongSource,
        cache: &mut dyn PayloadCache,
    ) -> Result<()> {
        let bundle = load_bundle(source, cache)?;
        let catalog = Catalog::load(bundle)?;

        info!("catalog ready: {} songs", catalog.len());
        self.catalog = Some(Arc::new(catalog));

        Ok(())
    }

    /// Installs a prebuilt catalog directly.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(Arc::new(catalog));
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn get_catalog(&self) -> Result<&Arc<Catalog>> {
        self.catalog.as_ref().ok_or(Error::CatalogNotLoaded)
    }
}

impl Default for BrowserSession {
    fn default() -> Self {
        Self::new()
    }
}

// =======================
//   FILTERING & SORTING
// =======================

impl BrowserSession {
    pub fn get_criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn get_sort(&self) -> &SortState {
        &self.sort
    }

    pub fn set_title_filter(&mut self, text: Option<String>) {
        self.criteria.title = text;
    }

    pub fn set_artist_filter(&mut self, name: Option<String>) {
        self.criteria.artist = name;
    }

    pub fn set_genre_filter(&mut self, name: Option<String>) {
        self.criteria.genre = name;
    }

    /// Narrows to one artist, the way clicking a name in the artist tally
    /// works: that field alone stays active.
    pub fn filter_by_artist(&mut self, name: impl Into<String>) {
        self.criteria = FilterCriteria::by_artist(name);
    }

    pub fn filter_by_genre(&mut self, name: impl Into<String>) {
        self.criteria = FilterCriteria::by_genre(name);
    }

    /// Back to the opening view: everything visible, title ascending.
    /// The playlist is left alone.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::browse_all();
        self.sort = SortState::default();
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
    }

    /// Column-header entry point. Parses the name first, so an unknown
    /// column leaves the sort state untouched.
    pub fn toggle_sort_field(&mut self, name: &str) -> Result<()> {
        let field = SortField::from_str(name)?;
        self.sort.toggle(field);

        Ok(())
    }

    /// Songs passing the current criteria, in catalog order.
    pub fn filtered_songs(&self) -> Result<Vec<Arc<Song>>> {
        let catalog = self.get_catalog()?;
        Ok(filter_songs(&catalog.get_all_songs(), &self.criteria))
    }

    /// What the list view shows: the filtered set under the current sort.
    pub fn current_view(&self) -> Result<Vec<Arc<Song>>> {
        let filtered = self.filtered_songs()?;
        Ok(sort_songs(&filtered, self.sort.field, self.sort.ascending))
    }
}

// ================
//   AGGREGATIONS
// ================

impl BrowserSession {
    pub fn top_songs(&self) -> Result<Vec<Arc<Song>>> {
        let catalog = self.get_catalog()?;
        Ok(top_by_score(
            &catalog.get_all_songs(),
            |s| s.get_popularity(),
            DEFAULT_TOP_LIMIT,
        ))
    }

    pub fn top_artists(&self) -> Result<Vec<(String, usize)>> {
        let catalog = self.get_catalog()?;
        Ok(top_by_frequency(
            &catalog.get_all_songs(),
            Song::get_artist,
            DEFAULT_TOP_LIMIT,
        ))
    }

    pub fn top_genres(&self) -> Result<Vec<(String, usize)>> {
        let catalog = self.get_catalog()?;
        Ok(top_by_frequency(
            &catalog.get_all_songs(),
            Song::get_genre,
            DEFAULT_TOP_LIMIT,
        ))
    }
}

// ============
//   PLAYLIST
// ============

impl BrowserSession {
    pub fn add_to_playlist(&mut self, song: &Arc<Song>) -> bool {
        self.playlist.add(song)
    }

    pub fn remove_from_playlist(&mut self, song: &Arc<Song>) -> bool {
        self.playlist.remove(song)
    }

    pub fn clear_playlist(&mut self) {
        self.playlist.clear();
    }

    pub fn get_playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn playlist_summary(&self) -> PlaylistSummary {
        self.playlist.summary()
    }
}
