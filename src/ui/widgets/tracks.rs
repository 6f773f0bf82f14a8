use crate::app::{rows, App, HitTarget, Row};
use crate::artwork::{Thumbnail, THUMB_COLS, THUMB_ROWS};
use crate::library::{Album, Song};
use crate::ui::theme::Theme;
use crate::ui::utils::{truncate, visible_start};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "List is empty or is too large, please pick another";
pub const PLAY_ICON: &str = "▶";
pub const NOW_PLAYING_ICON: &str = "🔊";

/// One rendered line and, for track lines, what a press on it plays.
struct ListLine<'a> {
    line: Line<'a>,
    hit: Option<HitTarget>,
}

pub fn render(f: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, HitTarget)> {
    let theme = &app.theme;
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }

    // ━━━ EMPTY STATE ━━━
    if app.selected_playlist_songs.is_empty() {
        let top_pad = area.height.saturating_sub(2) / 2;
        let mut lines: Vec<Line> = (0..top_pad).map(|_| Line::from("")).collect();
        lines.push(
            Line::from(Span::styled(EMPTY_MESSAGE, Style::default().fg(theme.overlay)))
                .alignment(Alignment::Center),
        );
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
        return Vec::new();
    }

    // ━━━ TRACK LIST ━━━
    let width = area.width as usize;
    let mut list: Vec<ListLine> = Vec::new();
    let mut cursor_line = 0;

    for row in rows(&app.selected_playlist_songs) {
        match row {
            Row::AlbumHeader { artist, album } => {
                album_header(app, theme, artist, album, width, &mut list);
            }
            Row::Track { position, song } => {
                let is_cursor = position == app.tracks.cursor;
                if is_cursor {
                    cursor_line = list.len();
                }
                let is_current = app.is_current_song(song.track);
                list.push(ListLine {
                    line: track_line(theme, song, width, is_cursor, is_current),
                    hit: Some(HitTarget::Track {
                        position,
                        track: song.track,
                    }),
                });
            }
        }
    }

    let height = area.height as usize;
    let start = visible_start(cursor_line, list.len(), height);

    let mut hits = Vec::new();
    let mut lines = Vec::with_capacity(height);
    for (offset, item) in list.into_iter().skip(start).take(height).enumerate() {
        if let Some(target) = item.hit {
            hits.push((
                Rect::new(area.x, area.y + offset as u16, area.width, 1),
                target,
            ));
        }
        lines.push(item.line);
    }

    f.render_widget(Paragraph::new(lines), area);
    hits
}

fn album_header<'a>(
    app: &'a App,
    theme: &Theme,
    artist: &'a str,
    album: &'a Album,
    width: usize,
    list: &mut Vec<ListLine<'a>>,
) {
    let thumb = album
        .cover_art
        .as_deref()
        .and_then(|uri| app.artwork.thumbnail(uri));
    let text_w = width.saturating_sub(THUMB_COLS as usize + 2);

    list.push(ListLine {
        line: Line::from(""),
        hit: None,
    });
    for cover_row in 0..THUMB_ROWS as usize {
        let mut spans = cover_spans(theme, thumb, cover_row);
        spans.push(Span::raw("  "));
        spans.push(if cover_row == 0 {
            Span::styled(truncate(artist, text_w), Style::default().fg(theme.overlay))
        } else {
            Span::styled(
                truncate(&album.display_title(), text_w),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )
        });
        list.push(ListLine {
            line: Line::from(spans),
            hit: None,
        });
    }
    list.push(ListLine {
        line: Line::from(Span::styled("─".repeat(width), Style::default().fg(theme.text))),
        hit: None,
    });
}

/// One row of cover cells, or the placeholder when the cover is absent or not (yet) loaded.
fn cover_spans(theme: &Theme, thumb: Option<&Thumbnail>, cover_row: usize) -> Vec<Span<'static>> {
    match thumb.and_then(|t| t.rows.get(cover_row)) {
        Some(cells) => cells
            .iter()
            .map(|(top, bottom)| Span::styled("▀", Style::default().fg(*top).bg(*bottom)))
            .collect(),
        None => {
            let glyph = if cover_row == 0 { " ♫  " } else { "    " };
            vec![Span::styled(
                glyph,
                Style::default().fg(theme.overlay).bg(theme.surface),
            )]
        }
    }
}

fn track_line(theme: &Theme, song: &Song, width: usize, is_cursor: bool, is_current: bool) -> Line<'static> {
    let icon = if is_current { NOW_PLAYING_ICON } else { PLAY_ICON };
    let marker = if is_cursor { " › " } else { "   " };

    let icon_w = icon.width();
    let label_w = width.saturating_sub(marker.width() + icon_w + 2);
    let label = truncate(&format!("{} - {}", song.number, song.name), label_w);
    let pad = label_w.saturating_sub(label.width());

    let base = if is_current {
        Style::default().bg(theme.surface)
    } else {
        Style::default()
    };
    let label_style = if is_cursor {
        base.fg(theme.magenta).add_modifier(Modifier::BOLD)
    } else {
        base.fg(theme.text)
    };
    let icon_style = if is_current {
        base.fg(theme.green)
    } else {
        base.fg(theme.overlay)
    };

    Line::from(vec![
        Span::styled(marker, base.fg(theme.yellow)),
        Span::styled(label, label_style),
        Span::styled(" ".repeat(pad + 1), base),
        Span::styled(icon, icon_style),
        Span::styled(" ", base),
    ])
}
