mod playlist;
mod song;

pub use playlist::{Playlist, PlaylistSummary};
pub use song::{Analytics, Details, Song, DISPLAY_TITLE_LIMIT};
