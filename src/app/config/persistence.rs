use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Automatically saved session state
/// stored in `state.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentState {
    #[serde(default)]
    pub last_playlist_id: Option<String>,
}

impl PersistentState {
    pub fn save(&self) {
        self.save_to(&super::AppConfig::get_state_path());
    }

    pub fn save_to(&self, path: &Path) {
        match toml::to_string_pretty(self) {
            Ok(content) => {
                if let Err(e) = fs::write(path, content) {
                    tracing::warn!(path = %path.display(), error = %e, "cannot save state");
                }
            }
            Err(e) => tracing::warn!(error = %e, "cannot serialize state"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_survives_save() {
        let path = std::env::temp_dir().join(format!("setlist-state-{}.toml", std::process::id()));
        let state = PersistentState {
            last_playlist_id: Some("pl-7".to_string()),
        };
        state.save_to(&path);

        let loaded: PersistentState = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, state);
    }
}
