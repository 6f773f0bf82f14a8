use crate::app::keys::KeyConfig;
use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};

/// User-editable configuration (ReadOnly by App after load)
/// stored in `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_library_path")]
    pub library_path: String,
    /// Playlists with more entries than this show the "too large" notice instead of songs.
    #[serde(default = "default_max_items")]
    pub max_playlist_items: u32,
    #[serde(default)]
    pub keys: KeyConfig,
    #[serde(default)]
    pub theme: Theme,
}

fn default_library_path() -> String {
    super::AppConfig::get_config_dir()
        .join("library.json")
        .to_string_lossy()
        .to_string()
}

fn default_max_items() -> u32 {
    500
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            library_path: default_library_path(),
            max_playlist_items: default_max_items(),
            keys: KeyConfig::default(),
            theme: Theme::default(),
        }
    }
}
