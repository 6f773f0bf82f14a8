use crate::library::{CurrentSong, Playlist};
use anyhow::Result;

/// What is bound to playback right now 🎵
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub playlist: Playlist,
    pub song: CurrentSong,
}

/// The seam between the playlist screen and whatever actually produces sound.
pub trait PlayerTrait: Send {
    /// Bind `playlist` to playback and start at `track`.
    fn play(&mut self, playlist: &Playlist, track: usize) -> Result<()>;

    fn now_playing(&self) -> Option<&NowPlaying>;

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }
}

/// In-process player: records the binding and nothing else.
#[derive(Debug, Default)]
pub struct SessionPlayer {
    binding: Option<NowPlaying>,
}

impl SessionPlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerTrait for SessionPlayer {
    fn play(&mut self, playlist: &Playlist, track: usize) -> Result<()> {
        tracing::info!(playlist = %playlist.id, track, "play");
        self.binding = Some(NowPlaying {
            playlist: playlist.clone(),
            song: CurrentSong { track },
        });
        Ok(())
    }

    fn now_playing(&self) -> Option<&NowPlaying> {
        self.binding.as_ref()
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(np) = self.binding.take() {
            tracing::info!(playlist = %np.playlist.id, "stop");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_rebinds() {
        let mut player = SessionPlayer::new();
        assert!(player.now_playing().is_none());

        let a = Playlist::new("a", "A", 3);
        let b = Playlist::new("b", "B", 3);
        player.play(&a, 2).unwrap();
        player.play(&b, 0).unwrap();

        let np = player.now_playing().unwrap();
        assert_eq!(np.playlist.id, "b");
        assert_eq!(np.song.track, 0);

        player.stop().unwrap();
        assert!(player.now_playing().is_none());
    }
}
