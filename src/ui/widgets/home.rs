use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let now_playing = match app.player_playlist() {
        Some(pl) => Line::from(vec![
            Span::styled("🔊 ", Style::default().fg(theme.green)),
            Span::styled(
                pl.title.clone(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  track {}", app.current_song().track),
                Style::default().fg(theme.overlay),
            ),
        ]),
        None => Line::from(Span::styled("Nothing playing", Style::default().fg(theme.overlay))),
    };

    let hint = format!(
        "Press {} or {} to open playlists",
        app.keys.display(&app.keys.view_playlists),
        app.keys.display(&app.keys.select)
    );

    let mut lines: Vec<Line> = (0..area.height.saturating_sub(5) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(
        "S E T L I S T",
        Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(now_playing);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.surface))));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
