use std::fs;
use std::path::{Path, PathBuf};

pub mod persistence;
pub mod user;

pub use persistence::PersistentState;
pub use user::UserConfig;

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("setlist");

        if !xdg_dir.exists() {
            if let Err(e) = fs::create_dir_all(&xdg_dir) {
                tracing::warn!(dir = %xdg_dir.display(), error = %e, "cannot create config dir");
            }
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_state_path() -> PathBuf {
        Self::get_config_dir().join("state.toml")
    }

    pub fn get_log_dir() -> PathBuf {
        Self::get_config_dir().join("logs")
    }

    /// Load both files from the standard location.
    /// A missing config.toml is written out with defaults.
    pub fn load() -> (UserConfig, PersistentState) {
        Self::load_from(&Self::get_config_path(), &Self::get_state_path())
    }

    pub fn load_from(config_path: &Path, state_path: &Path) -> (UserConfig, PersistentState) {
        let user_config = if config_path.exists() {
            read_toml(config_path).unwrap_or_default()
        } else {
            let c = UserConfig::default();
            match toml::to_string_pretty(&c) {
                Ok(content) => {
                    if let Err(e) = fs::write(config_path, content) {
                        tracing::warn!(path = %config_path.display(), error = %e, "cannot write default config");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "cannot serialize default config"),
            }
            c
        };

        let state = if state_path.exists() {
            read_toml(state_path).unwrap_or_default()
        } else {
            PersistentState::default()
        };

        (user_config, state)
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read, using defaults");
            return None;
        }
    };
    match toml::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid toml, using defaults");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("setlist-cfg-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_is_created() {
        let dir = scratch("missing");
        let cfg = dir.join("config.toml");
        let (user, state) = AppConfig::load_from(&cfg, &dir.join("state.toml"));

        assert!(cfg.exists());
        assert_eq!(user.max_playlist_items, UserConfig::default().max_playlist_items);
        assert!(state.last_playlist_id.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_broken_files_fall_back() {
        let dir = scratch("broken");
        let cfg = dir.join("config.toml");
        let st = dir.join("state.toml");
        fs::write(&cfg, "max_playlist_items = \"lots\"").unwrap();
        fs::write(&st, "last_playlist_id = [").unwrap();

        let (user, state) = AppConfig::load_from(&cfg, &st);
        assert_eq!(user.max_playlist_items, UserConfig::default().max_playlist_items);
        assert!(state.last_playlist_id.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = scratch("partial");
        let cfg = dir.join("config.toml");
        fs::write(&cfg, "max_playlist_items = 25\n\n[keys]\ntoggle_picker = \"o\"\n").unwrap();

        let (user, _) = AppConfig::load_from(&cfg, &dir.join("state.toml"));
        assert_eq!(user.max_playlist_items, 25);
        assert_eq!(user.keys.toggle_picker, "o");
        assert_eq!(user.keys.quit, "q");
        let _ = fs::remove_dir_all(&dir);
    }
}
