use super::SongSource;
use crate::{config::BrowserConfig, expand_tilde};
use anyhow::{anyhow, Result};
use std::{fs, path::PathBuf};

/// Reads the three payload files from a data directory, the static-file
/// deployment the browser was built around.
pub struct FileSource {
    dir: PathBuf,
    songs_file: String,
    artists_file: String,
    genres_file: String,
}

impl FileSource {
    /// Points at a directory using the stock file names.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        let defaults = BrowserConfig::default();

        FileSource {
            dir: dir.into(),
            songs_file: defaults.songs_file,
            artists_file: defaults.artists_file,
            genres_file: defaults.genres_file,
        }
    }

    pub fn from_config(config: &BrowserConfig) -> Result<Self> {
        Ok(FileSource {
            dir: expand_tilde(&config.data_dir)?,
            songs_file: config.songs_file.clone(),
            artists_file: config.artists_file.clone(),
            genres_file: config.genres_file.clone(),
        })
    }

    fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        fs::read_to_string(&path).map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))
    }
}

impl SongSource for FileSource {
    fn fetch_songs(&self) -> Result<String> {
        self.read(&self.songs_file)
    }

    fn fetch_artists(&self) -> Result<String> {
        self.read(&self.artists_file)
    }

    fn fetch_genres(&self) -> Result<String> {
        self.read(&self.genres_file)
    }
}
