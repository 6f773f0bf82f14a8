use crate::app::{App, HitTarget};
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const NO_PLAYLIST: &str = "No playlist selected";
const HOME_ICON: &str = " ⌂ ";
const PICKER_ICON: &str = " 📜 ";

/// Title bar: home button, playlist title, picker toggle.
pub fn render(f: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, HitTarget)> {
    let theme = &app.theme;
    if area.height == 0 {
        return Vec::new();
    }

    let title = app
        .selected_playlist
        .as_ref()
        .map(|pl| pl.title.as_str())
        .unwrap_or(NO_PLAYLIST);

    let home_w = HOME_ICON.width() as u16;
    let picker_w = PICKER_ICON.width() as u16;
    let title_w = area.width.saturating_sub(home_w + picker_w) as usize;

    let picker_style = if app.picker.is_open {
        Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let row = Rect::new(area.x, area.y, area.width, 1);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            HOME_ICON,
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        ))),
        Rect::new(row.x, row.y, home_w.min(row.width), 1),
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate(title, title_w),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        Rect::new(row.x + home_w.min(row.width), row.y, title_w as u16, 1),
    );
    let picker_area = Rect::new(
        row.x + row.width.saturating_sub(picker_w),
        row.y,
        picker_w.min(row.width),
        1,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(PICKER_ICON, picker_style))),
        picker_area,
    );

    if area.height > 1 {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "─".repeat(area.width as usize),
                Style::default().fg(theme.surface),
            ))),
            Rect::new(area.x, area.y + 1, area.width, 1),
        );
    }

    vec![
        (Rect::new(row.x, row.y, home_w.min(row.width), 1), HitTarget::Home),
        (picker_area, HitTarget::PickerToggle),
    ]
}
