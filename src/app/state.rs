use super::config::{PersistentState, UserConfig};
use super::keys::KeyConfig;
use super::{Page, Toast};
use crate::artwork::{ArtworkCache, ArtworkState};
use crate::library::{CurrentSong, LibrarySource, Playlist, PlaylistSongs};
use crate::player::PlayerTrait;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

pub mod hit;
pub mod picker;
pub mod tracks;

pub use hit::{HitMap, HitTarget};
pub use picker::PickerState;
pub use tracks::{rows, Row, TrackListState};

/// Owns everything the playlist screen reads and every callback it fires.
pub struct App {
    pub is_running: bool,
    pub page: Page,
    pub theme: Theme,
    pub keys: KeyConfig,
    pub max_playlist_items: u32,

    library: LibrarySource,
    player: Box<dyn PlayerTrait>,

    pub selected_playlist: Option<Playlist>,
    pub selected_playlist_songs: PlaylistSongs,

    pub picker: PickerState,
    pub tracks: TrackListState,
    pub artwork: ArtworkCache,
    pub hit_map: HitMap,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(
        library: LibrarySource,
        player: Box<dyn PlayerTrait>,
        config: UserConfig,
        state: &PersistentState,
    ) -> Self {
        let mut app = Self {
            is_running: true,
            page: Page::default(),
            theme: config.theme,
            keys: config.keys,
            max_playlist_items: config.max_playlist_items,
            library,
            player,
            selected_playlist: None,
            selected_playlist_songs: PlaylistSongs::default(),
            picker: PickerState::default(),
            tracks: TrackListState::default(),
            artwork: ArtworkCache::default(),
            hit_map: HitMap::default(),
            toast: None,
        };

        // Resume the last playlist, else the first one.
        let initial = state
            .last_playlist_id
            .as_deref()
            .and_then(|id| app.library.find(id))
            .or_else(|| app.library.playlists.first())
            .cloned();
        if let Some(pl) = initial {
            app.set_selected_playlist(pl);
        }
        app
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.library.playlists
    }

    pub fn find_playlist(&self, id: &str) -> Option<&Playlist> {
        self.library.find(id)
    }

    /// Playlist bound to playback, if any.
    pub fn player_playlist(&self) -> Option<&Playlist> {
        self.player.now_playing().map(|np| &np.playlist)
    }

    pub fn current_song(&self) -> CurrentSong {
        self.player
            .now_playing()
            .map(|np| np.song)
            .unwrap_or_default()
    }

    pub fn set_selected_playlist(&mut self, playlist: Playlist) {
        tracing::debug!(id = %playlist.id, "select playlist");
        self.selected_playlist_songs = self.library.songs_for(&playlist, self.max_playlist_items);
        self.selected_playlist = Some(playlist);
        self.tracks.reset();
    }

    pub fn toggle_picker(&mut self) {
        self.picker.toggle();
    }

    /// Picker choice: becomes the selection and the picker closes.
    pub fn select_playlist(&mut self, option: Playlist) {
        self.set_selected_playlist(option);
        self.picker.close();
    }

    pub fn picker_options(&self) -> Vec<&Playlist> {
        let options = picker::picker_options(self.playlists(), self.selected_playlist.as_ref());
        picker::filter_options(options, self.picker.query())
    }

    /// Choose the highlighted picker option, if there is one.
    pub fn select_highlighted(&mut self) {
        let chosen = self.picker_options().get(self.picker.highlighted).map(|pl| (*pl).clone());
        if let Some(pl) = chosen {
            self.select_playlist(pl);
        }
    }

    pub fn is_current_playlist(&self) -> bool {
        match (self.selected_playlist.as_ref(), self.player_playlist()) {
            (Some(selected), Some(playing)) => selected.id == playing.id,
            _ => false,
        }
    }

    pub fn is_current_song(&self, track: usize) -> bool {
        self.is_current_playlist() && self.current_song().track == track
    }

    /// Start `track` of the playlist identified by `playlist_id`.
    pub fn play_song(&mut self, track: usize, playlist_id: &str) {
        let Some(playlist) = self.library.find(playlist_id).cloned() else {
            tracing::warn!(playlist_id, "play requested for unknown playlist");
            self.show_toast("Playlist not found");
            return;
        };
        if let Err(e) = self.player.play(&playlist, track) {
            tracing::error!(error = %e, playlist_id, track, "play failed");
            self.show_toast(&format!("Cannot play: {}", e));
        }
    }

    /// Row activation: plays `track` from the selected playlist.
    pub fn play_track(&mut self, track: usize) {
        let Some(id) = self.selected_playlist.as_ref().map(|pl| pl.id.clone()) else {
            tracing::debug!(track, "play ignored, no playlist selected");
            return;
        };
        self.play_song(track, &id);
    }

    pub fn play_cursor(&mut self) {
        if let Some(track) = self
            .tracks
            .selected_song(&self.selected_playlist_songs)
            .map(|s| s.track)
        {
            self.play_track(track);
        }
    }

    pub fn stop(&mut self) {
        if let Err(e) = self.player.stop() {
            tracing::error!(error = %e, "stop failed");
            self.show_toast(&format!("Cannot stop: {}", e));
        }
    }

    pub fn handle_page_change(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(?page, "page change");
        }
        self.picker.close();
        self.page = page;
    }

    /// Covers of the selected playlist that still need loading. Each is returned once.
    pub fn pending_artwork(&mut self) -> Vec<String> {
        let uris: Vec<String> = self
            .selected_playlist_songs
            .albums()
            .filter_map(|album| album.cover_art.clone())
            .collect();
        uris.into_iter().filter(|uri| self.artwork.begin(uri)).collect()
    }

    pub fn set_artwork(&mut self, uri: String, state: ArtworkState) {
        self.artwork.insert(uri, state);
    }

    pub fn persistent_state(&self) -> PersistentState {
        PersistentState {
            last_playlist_id: self.selected_playlist.as_ref().map(|pl| pl.id.clone()),
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let deadline = now + Duration::from_millis(2000);

        if let Some(ref mut current) = self.toast {
            // Keep start_time so a rapid update does not replay the entrance.
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.deadline {
                self.toast = None;
            }
        }
    }
}
