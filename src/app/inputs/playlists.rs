use crate::app::{App, Page};
use crossterm::event::{KeyCode, KeyEvent};

/// Keys while the picker overlay is open. Always consumes the key.
pub fn handle_picker_events(key: KeyEvent, app: &mut App) {
    let keys = app.keys.clone();

    if app.picker.is_filtering() {
        match key.code {
            KeyCode::Esc => app.picker.filter = None,
            KeyCode::Backspace => app.picker.pop_filter_char(),
            KeyCode::Enter => app.select_highlighted(),
            KeyCode::Up => app.picker.move_up(),
            KeyCode::Down => {
                let n = app.picker_options().len();
                app.picker.move_down(n);
            }
            KeyCode::Char(c) => app.picker.push_filter_char(c),
            _ => {}
        }
        return;
    }

    if keys.matches(key, &keys.toggle_picker) || keys.matches(key, &keys.close) {
        app.toggle_picker();
    } else if keys.matches(key, &keys.select) {
        app.select_highlighted();
    } else if keys.is_up(key) {
        app.picker.move_up();
    } else if keys.is_down(key) {
        let n = app.picker_options().len();
        app.picker.move_down(n);
    } else if keys.matches(key, &keys.filter) {
        app.picker.start_filter();
    } else if keys.matches(key, &keys.quit) {
        app.picker.close();
    }
}

pub fn handle_track_list_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.toggle_picker) {
        app.toggle_picker();
        return true;
    }

    if keys.matches(key, &keys.close) {
        app.handle_page_change(Page::Home);
        return true;
    }

    if keys.is_up(key) {
        app.tracks.move_up();
        return true;
    }

    if keys.is_down(key) {
        let n = app.selected_playlist_songs.song_count();
        app.tracks.move_down(n);
        return true;
    }

    if keys.matches(key, &keys.select) {
        app.play_cursor();
        return true;
    }

    false
}
