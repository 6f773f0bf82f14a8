use crate::library::{Album, PlaylistSongs, Song};

/// Flattened track list: an album header followed by its songs, album after album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    AlbumHeader { artist: &'a str, album: &'a Album },
    Track { position: usize, song: &'a Song },
}

pub fn rows(songs: &PlaylistSongs) -> Vec<Row<'_>> {
    let mut out = Vec::new();
    let mut position = 0;
    for group in songs.artists() {
        for album in &group.albums {
            out.push(Row::AlbumHeader {
                artist: &group.artist,
                album,
            });
            for song in &album.songs {
                out.push(Row::Track { position, song });
                position += 1;
            }
        }
    }
    out
}

/// Cursor over the track rows only; album headers are never selectable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackListState {
    /// Position among track rows, not among all rows.
    pub cursor: usize,
}

impl TrackListState {
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, track_count: usize) {
        if self.cursor + 1 < track_count {
            self.cursor += 1;
        }
    }

    pub fn select(&mut self, position: usize, track_count: usize) {
        self.cursor = position.min(track_count.saturating_sub(1));
    }

    pub fn selected_song<'a>(&self, songs: &'a PlaylistSongs) -> Option<&'a Song> {
        songs.songs().nth(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ArtistGroup;

    fn album(key: &str, songs: Vec<Song>) -> Album {
        Album {
            key: key.to_string(),
            name: key.to_string(),
            year: None,
            cover_art: None,
            songs,
        }
    }

    fn sample() -> PlaylistSongs {
        PlaylistSongs::from_artists(vec![
            ArtistGroup {
                artist: "A".to_string(),
                albums: vec![
                    album("a1", vec![Song::new(1, "x", 10), Song::new(2, "y", 11)]),
                    album("a2", vec![Song::new(1, "z", 12)]),
                ],
            },
            ArtistGroup {
                artist: "B".to_string(),
                albums: vec![album("b1", vec![Song::new(1, "w", 3)])],
            },
        ])
    }

    #[test]
    fn test_rows_interleave_headers() {
        let songs = sample();
        let rows = rows(&songs);
        assert_eq!(rows.len(), 7);
        assert!(matches!(rows[0], Row::AlbumHeader { artist: "A", .. }));
        assert!(matches!(rows[3], Row::AlbumHeader { .. }));
        match rows[6] {
            Row::Track { position, song } => {
                assert_eq!(position, 3);
                assert_eq!(song.track, 3);
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn test_cursor_skips_headers() {
        let songs = sample();
        let mut state = TrackListState::default();
        state.move_down(songs.song_count());
        state.move_down(songs.song_count());
        // Third song lives under the second album header.
        assert_eq!(state.selected_song(&songs).map(|s| s.track), Some(12));

        state.move_down(songs.song_count());
        state.move_down(songs.song_count());
        assert_eq!(state.cursor, 3);
        state.move_up();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_select_clamps() {
        let songs = sample();
        let mut state = TrackListState::default();
        state.select(99, songs.song_count());
        assert_eq!(state.cursor, 3);
        assert!(state.selected_song(&PlaylistSongs::default()).is_none());
    }
}
