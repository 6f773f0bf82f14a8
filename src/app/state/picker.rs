use crate::library::Playlist;
use fuzzy_matcher::{skim::SkimMatcherV2, FuzzyMatcher};
use std::cmp::Reverse;

/// Playlist picker overlay 📜
///
/// Two states, open and closed. Opening or closing always starts from a clean
/// highlight and no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerState {
    pub is_open: bool,
    pub highlighted: usize,
    /// `Some` while the user is typing a filter query.
    pub filter: Option<String>,
}

impl PickerState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
        self.highlighted = 0;
        self.filter = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.highlighted = 0;
        self.filter = None;
    }

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self, option_count: usize) {
        if self.highlighted + 1 < option_count {
            self.highlighted += 1;
        }
    }

    pub fn is_filtering(&self) -> bool {
        self.filter.is_some()
    }

    pub fn start_filter(&mut self) {
        self.filter = Some(String::new());
        self.highlighted = 0;
    }

    pub fn push_filter_char(&mut self, c: char) {
        if let Some(query) = self.filter.as_mut() {
            query.push(c);
            self.highlighted = 0;
        }
    }

    pub fn pop_filter_char(&mut self) {
        if let Some(query) = self.filter.as_mut() {
            query.pop();
            self.highlighted = 0;
        }
    }

    pub fn query(&self) -> &str {
        self.filter.as_deref().unwrap_or("")
    }
}

/// Every playlist except the selected one, in source order.
pub fn picker_options<'a>(playlists: &'a [Playlist], selected: Option<&Playlist>) -> Vec<&'a Playlist> {
    playlists
        .iter()
        .filter(|pl| selected.map_or(true, |sel| pl.id != sel.id))
        .collect()
}

/// Narrow `options` to fuzzy matches of `query`, best first. Ties keep source order.
pub fn filter_options<'a>(options: Vec<&'a Playlist>, query: &str) -> Vec<&'a Playlist> {
    if query.is_empty() {
        return options;
    }
    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &Playlist)> = options
        .into_iter()
        .filter_map(|pl| matcher.fuzzy_match(&pl.title, query).map(|score| (score, pl)))
        .collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.into_iter().map(|(_, pl)| pl).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlists() -> Vec<Playlist> {
        vec![
            Playlist::new("1", "Morning Jazz", 12),
            Playlist::new("2", "Workout", 40),
            Playlist::new("3", "Late Night Jazz", 8),
        ]
    }

    #[test]
    fn test_selected_playlist_is_excluded() {
        let all = playlists();
        let opts = picker_options(&all, Some(&all[1]));
        let ids: Vec<&str> = opts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_exclusion_is_by_id_not_title() {
        let all = playlists();
        let renamed = Playlist::new("2", "Something Else", 0);
        let opts = picker_options(&all, Some(&renamed));
        assert!(opts.iter().all(|p| p.id != "2"));
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn test_no_selection_lists_everything() {
        let all = playlists();
        assert_eq!(picker_options(&all, None).len(), 3);
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut picker = PickerState::default();
        picker.toggle();
        assert!(picker.is_open);
        picker.toggle();
        assert!(!picker.is_open);
    }

    #[test]
    fn test_highlight_clamps() {
        let mut picker = PickerState::default();
        picker.toggle();
        picker.move_up();
        assert_eq!(picker.highlighted, 0);
        picker.move_down(2);
        picker.move_down(2);
        assert_eq!(picker.highlighted, 1);
    }

    #[test]
    fn test_fuzzy_filter() {
        let all = playlists();
        let opts = filter_options(picker_options(&all, None), "jazz");
        let ids: Vec<&str> = opts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"1") && ids.contains(&"3"));

        assert!(filter_options(picker_options(&all, None), "zzzq").is_empty());
        assert_eq!(filter_options(picker_options(&all, None), "").len(), 3);
    }

    #[test]
    fn test_filter_editing_resets_highlight() {
        let mut picker = PickerState::default();
        picker.toggle();
        picker.start_filter();
        picker.push_filter_char('w');
        picker.highlighted = 3;
        picker.push_filter_char('o');
        assert_eq!(picker.query(), "wo");
        assert_eq!(picker.highlighted, 0);
        picker.pop_filter_char();
        assert_eq!(picker.query(), "w");
    }
}
