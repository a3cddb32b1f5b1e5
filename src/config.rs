use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_SONGS_FILE: &str = "songs-nested.json";
pub(crate) const DEFAULT_ARTISTS_FILE: &str = "artists.json";
pub(crate) const DEFAULT_GENRES_FILE: &str = "genres.json";

/// Browser settings, read from an optional TOML file. Every key falls back
/// to the stock layout: payload files beside the working directory, cache
/// under the user config dir.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory holding the three payload files. Tilde paths are allowed.
    pub data_dir: PathBuf,
    pub songs_file: String,
    pub artists_file: String,
    pub genres_file: String,
    /// Payload cache location; the user config directory when unset.
    pub cache_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            data_dir: PathBuf::from("."),
            songs_file: DEFAULT_SONGS_FILE.to_string(),
            artists_file: DEFAULT_ARTISTS_FILE.to_string(),
            genres_file: DEFAULT_GENRES_FILE.to_string(),
            cache_path: None,
        }
    }
}

impl BrowserConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_str =
            std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config(e.to_string()))?;

        toml::from_str::<BrowserConfig>(&file_str).map_err(|e| Error::Config(e.to_string()))
    }
}
