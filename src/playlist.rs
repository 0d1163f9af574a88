//! Sound playlist format.
//!
//! A playlist is plain text with one resource path per line:
//!
//! ```text
//! # animals
//! sounds/wav/cow.wav
//!
//! sounds/wav/duck.wav
//! ```
//!
//! Lines are trimmed. Blank lines and lines starting with `#` are ignored.

pub const COMMENT_MARKER: char = '#';

/// One usable line of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// 1-based line number in the playlist.
    pub line: usize,
    /// Resource path of the sound.
    pub path: String,
}

pub fn parse_playlist(text: &str) -> Vec<PlaylistEntry> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let path = raw.trim();
            if path.is_empty() || path.starts_with(COMMENT_MARKER) {
                return None;
            }
            Some(PlaylistEntry {
                line: idx + 1,
                path: path.to_string(),
            })
        })
        .collect()
}
