use crate::app::{App, Page};
use crossterm::event::{Event, KeyEvent, KeyEventKind};

pub mod common;
pub mod mouse;
pub mod playlists;

pub fn handle_event(event: Event, app: &mut App) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(key, app),
        Event::Mouse(mouse) => mouse::handle_mouse(mouse, app),
        _ => {}
    }
}

pub fn handle_key(key: KeyEvent, app: &mut App) {
    // 1. Priority: the open picker captures everything (it may be typing a filter).
    if app.page == Page::Playlists && app.picker.is_open {
        playlists::handle_picker_events(key, app);
        return;
    }

    // 2. Common/Global Keys (Quit, page switch, stop)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. Page specific
    match app.page {
        Page::Playlists => {
            playlists::handle_track_list_events(key, app);
        }
        Page::Home => {
            if app.keys.matches(key, &app.keys.select) {
                app.handle_page_change(Page::Playlists);
            }
        }
    }
}
