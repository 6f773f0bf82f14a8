use super::{Playlist, PlaylistSongs};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse library file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LibraryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Everything the playlist screen reads: the playlist index plus the
/// artist → album → song map for each playlist id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LibrarySource {
    #[serde(default)]
    pub playlists: Vec<Playlist>,
    #[serde(default)]
    songs: HashMap<String, PlaylistSongs>,
}

impl LibrarySource {
    pub fn new(playlists: Vec<Playlist>, songs: HashMap<String, PlaylistSongs>) -> Self {
        Self { playlists, songs }
    }

    pub fn load(path: &Path) -> Result<Self, LibraryError> {
        let content = fs::read_to_string(path).map_err(|source| LibraryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::from_json(&content).map_err(|source| LibraryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            playlists = library.playlists.len(),
            "library loaded"
        );
        Ok(library)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn find(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Songs for `playlist`, or an empty map when the playlist is unknown or
    /// holds more than `max_items` entries.
    pub fn songs_for(&self, playlist: &Playlist, max_items: u32) -> PlaylistSongs {
        if playlist.item_count > max_items {
            tracing::debug!(
                id = %playlist.id,
                items = playlist.item_count,
                max_items,
                "playlist over item limit, withholding songs"
            );
            return PlaylistSongs::default();
        }
        self.songs.get(&playlist.id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"{
        "playlists": [
            { "id": "pl-1", "title": "Morning", "itemCount": 2 },
            { "id": "pl-2", "title": "Everything", "itemCount": 9000 }
        ],
        "songs": {
            "pl-1": { "Nina": { "a1": { "name": "Blue", "songs": [[1, "Day", 0], [2, "Night", 1]] } } },
            "pl-2": { "Nina": { "a1": { "name": "Blue", "songs": [[1, "Day", 0]] } } }
        }
    }"#;

    #[test]
    fn test_songs_for_known_playlist() {
        let lib = LibrarySource::from_json(LIBRARY).unwrap();
        let pl = lib.find("pl-1").unwrap().clone();
        assert_eq!(lib.songs_for(&pl, 500).song_count(), 2);
    }

    #[test]
    fn test_songs_withheld_over_limit() {
        let lib = LibrarySource::from_json(LIBRARY).unwrap();
        let pl = lib.find("pl-2").unwrap().clone();
        assert!(lib.songs_for(&pl, 500).is_empty());
        assert!(!lib.songs_for(&pl, 10_000).is_empty());
    }

    #[test]
    fn test_unknown_playlist_is_empty() {
        let lib = LibrarySource::from_json(LIBRARY).unwrap();
        assert!(lib.songs_for(&Playlist::new("nope", "Ghost", 0), 500).is_empty());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = LibrarySource::load(Path::new("/definitely/not/here/library.json")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("library.json"));
    }

    #[test]
    fn test_load_reports_parse_location() {
        let path = std::env::temp_dir().join(format!("setlist-bad-{}.json", std::process::id()));
        fs::write(&path, "{ \"playlists\": [ { \"id\": 1 } ] }").unwrap();
        let err = LibrarySource::load(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, LibraryError::Parse { .. }));
        assert!(err.to_string().contains("line 1"));
    }
}
