use crate::app::{App, HitTarget, Page};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub fn handle_mouse(event: MouseEvent, app: &mut App) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = app.hit_map.target_at(event.column, event.row) {
                handle_press(target, app);
            }
        }
        MouseEventKind::ScrollDown if !app.picker.is_open => {
            let n = app.selected_playlist_songs.song_count();
            app.tracks.move_down(n);
        }
        MouseEventKind::ScrollUp if !app.picker.is_open => app.tracks.move_up(),
        _ => {}
    }
}

pub fn handle_press(target: HitTarget, app: &mut App) {
    match target {
        HitTarget::Home => app.handle_page_change(Page::Home),
        HitTarget::PickerToggle | HitTarget::PickerBackdrop => app.toggle_picker(),
        HitTarget::PickerOption(index) => {
            let chosen = app.picker_options().get(index).map(|pl| (*pl).clone());
            if let Some(pl) = chosen {
                app.select_playlist(pl);
            }
        }
        HitTarget::Track { position, track } => {
            let n = app.selected_playlist_songs.song_count();
            app.tracks.select(position, n);
            app.play_track(track);
        }
    }
}
