use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to `max_width` terminal columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// First visible line so that `selected` stays roughly centred without
/// leaving empty space below the last line.
pub fn visible_start(selected: usize, len: usize, height: usize) -> usize {
    selected
        .saturating_sub(height / 2)
        .min(len.saturating_sub(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_columns() {
        assert_eq!(truncate("Blue Train", 20), "Blue Train");
        assert_eq!(truncate("Blue Train", 6), "Blue …");
        // Wide glyphs count double.
        assert_eq!(truncate("東京事変", 5), "東京…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_scroll_clamping() {
        let list_len: usize = 50;
        let content_h: usize = 22;

        let start = visible_start(49, list_len, content_h);
        assert_eq!(start, 28, "list should stay fully filled at the end");
        assert!(start + content_h > 49, "selected item must be within view");

        assert_eq!(visible_start(3, list_len, content_h), 0);
        assert_eq!(visible_start(30, list_len, content_h), 19);
        // Short lists never scroll.
        assert_eq!(visible_start(4, 5, content_h), 0);
    }
}
