use crate::app::{App, HitTarget};
use crate::ui::layout::centered;
use crate::ui::utils::{truncate, visible_start};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Playlist picker overlay. Every press outside an option lands on the backdrop.
pub fn render(f: &mut Frame, app: &App) -> Vec<(Rect, HitTarget)> {
    let theme = &app.theme;
    let screen = f.area();
    let options = app.picker_options();

    let mut hits = vec![(screen, HitTarget::PickerBackdrop)];

    let filter_rows: u16 = if app.picker.is_filtering() { 2 } else { 0 };
    let wanted_h = options.len().max(1) as u16 + filter_rows + 2;
    let area = centered(screen, 52, wanted_h);
    if area.height < 3 {
        return hits;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.magenta))
        .title(Span::styled(
            " Playlists ",
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(query) = app.picker.filter.as_deref() {
        lines.push(Line::from(vec![
            Span::styled(" / ", Style::default().fg(theme.green).add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}▏", query), Style::default().fg(theme.green)),
        ]));
        lines.push(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(theme.surface),
        )));
    }

    let list_h = inner.height.saturating_sub(filter_rows) as usize;
    let list_y = inner.y + filter_rows;
    let width = inner.width as usize;

    if options.is_empty() {
        lines.push(
            Line::from(Span::styled("No other playlists", Style::default().fg(theme.overlay)))
                .alignment(Alignment::Center),
        );
    } else {
        let start = visible_start(app.picker.highlighted, options.len(), list_h);
        for (display_idx, pl) in options.iter().skip(start).take(list_h).enumerate() {
            let actual_idx = start + display_idx;
            let is_sel = actual_idx == app.picker.highlighted;

            let count = format!(" ({} items)", pl.item_count);
            let name_max = width.saturating_sub(count.chars().count() + 3);
            let (marker, m_color, n_style) = if is_sel {
                (
                    "●",
                    theme.yellow,
                    Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", theme.surface, Style::default().fg(theme.text))
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(m_color)),
                Span::styled(truncate(&pl.title, name_max), n_style),
                Span::styled(count, Style::default().fg(theme.overlay)),
            ]));
            hits.push((
                Rect::new(inner.x, list_y + display_idx as u16, inner.width, 1),
                HitTarget::PickerOption(actual_idx),
            ));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
    hits
}
