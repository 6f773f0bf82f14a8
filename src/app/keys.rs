use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub view_home: String,
    pub view_playlists: String,
    pub stop: String,

    // Navigation (Shared)
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub select: String,
    pub close: String,

    // Playlists
    pub toggle_picker: String,
    pub filter: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            view_home: "1".to_string(),
            view_playlists: "2".to_string(),
            stop: "x".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            select: "Enter".to_string(),
            close: "Esc".to_string(),

            toggle_picker: "p".to_string(),
            filter: "/".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => match s.chars().next() {
                // Uppercase bindings also fire on shift + lowercase.
                Some(ch) if ch.is_uppercase() => {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                }
                Some(ch) => event.code == KeyCode::Char(ch),
                None => false,
            },
            _ => false,
        }
    }

    pub fn is_up(&self, event: KeyEvent) -> bool {
        self.matches(event, &self.nav_up) || self.matches(event, &self.nav_up_alt)
    }

    pub fn is_down(&self, event: KeyEvent) -> bool {
        self.matches(event, &self.nav_down) || self.matches(event, &self.nav_down_alt)
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_named_and_char_keys() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Enter, KeyModifiers::NONE), &keys.select));
        assert!(keys.matches(key(KeyCode::Char('p'), KeyModifiers::NONE), &keys.toggle_picker));
        assert!(!keys.matches(key(KeyCode::Char('P'), KeyModifiers::NONE), &keys.toggle_picker));
        assert!(keys.is_down(key(KeyCode::Down, KeyModifiers::NONE)));
        assert!(keys.is_up(key(KeyCode::Char('k'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_uppercase_binding_accepts_shift() {
        let keys = KeyConfig::default();
        assert!(keys.matches(key(KeyCode::Char('g'), KeyModifiers::SHIFT), "G"));
        assert!(keys.matches(key(KeyCode::Char('G'), KeyModifiers::SHIFT), "G"));
        assert!(!keys.matches(key(KeyCode::Char('g'), KeyModifiers::NONE), "G"));
    }
}
