pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::{App, Page};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.hit_map.clear();

    // 1. Layout
    let main_layout = layout::get_main_layout(area);

    // 2. Page body
    match app.page {
        Page::Home => widgets::home::render(f, main_layout.body_area, app),
        Page::Playlists => {
            let screen = layout::get_screen_layout(main_layout.body_area);
            let mut hits = widgets::header::render(f, screen.header, app);
            hits.extend(widgets::tracks::render(f, screen.content, app));
            for (rect, target) in hits {
                app.hit_map.push(rect, target);
            }
        }
    }

    // 3. Footer hints
    render_footer(f, main_layout.footer_area, app);

    // 4. Overlays (picker above the page, toast above everything)
    if app.page == Page::Playlists && app.picker.is_open {
        for (rect, target) in widgets::picker::render(f, app) {
            app.hit_map.push(rect, target);
        }
    }
    widgets::toast::render(f, app);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let theme = &app.theme;
    let keys = &app.keys;

    let pairs: Vec<(String, &str)> = match app.page {
        Page::Playlists if app.picker.is_open => vec![
            (keys.display(&keys.select), "choose"),
            (keys.display(&keys.filter), "filter"),
            (keys.display(&keys.close), "close"),
        ],
        Page::Playlists => vec![
            (keys.display(&keys.toggle_picker), "playlists"),
            (keys.display(&keys.select), "play"),
            (keys.display(&keys.stop), "stop"),
            (keys.display(&keys.view_home), "home"),
            (keys.display(&keys.quit), "quit"),
        ],
        Page::Home => vec![
            (keys.display(&keys.view_playlists), "playlists"),
            (keys.display(&keys.quit), "quit"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in pairs {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(theme.overlay).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(theme.surface)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), area);
}
