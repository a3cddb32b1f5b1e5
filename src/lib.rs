use anyhow::anyhow;
use std::path::{Path, PathBuf};

pub mod catalog;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod session;

pub use catalog::Catalog;
pub use config::BrowserConfig;
pub use error::{Error, Result};
pub use session::BrowserSession;

/// Compact M:SS form for list rows.
pub fn format_duration(total_secs: u32) -> String {
    let mins = total_secs / 60;
    let secs = total_secs % 60;

    format!("{mins}:{secs:02}")
}

/// Hard-truncates to `limit` characters, marking the cut with an ellipsis.
/// Never splits inside a code point.
pub fn truncate_title(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }

    let byte_limit = s
        .char_indices()
        .map(|(i, _)| i)
        .nth(limit)
        .unwrap_or(s.len());

    let mut truncated = s[..byte_limit].to_string();
    truncated.push('…');
    truncated
}

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> anyhow::Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    if path_str == "~" {
        return Err(anyhow!(
            "Refusing a bare home directory. Point at the data folder itself!"
        ));
    }

    if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory!"))?;
        return Ok(home.join(&path_str[2..]));
    }

    Err(anyhow!("Error reading directory with tilde (~)"))
}
