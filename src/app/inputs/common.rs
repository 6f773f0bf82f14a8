use crate::app::{App, Page};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = &app.keys;

    if keys.matches(key, &keys.quit)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.is_running = false;
        return true;
    }

    if keys.matches(key, &keys.view_home) {
        app.handle_page_change(Page::Home);
        return true;
    }

    if keys.matches(key, &keys.view_playlists) {
        app.handle_page_change(Page::Playlists);
        return true;
    }

    if keys.matches(key, &keys.stop) {
        app.stop();
        return true;
    }

    false
}
