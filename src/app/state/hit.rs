use ratatui::layout::{Position, Rect};

/// What a mouse press lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Home,
    PickerToggle,
    /// Index into the picker options as they were drawn.
    PickerOption(usize),
    PickerBackdrop,
    Track { position: usize, track: usize },
}

/// Clickable regions recorded while drawing the last frame.
/// Later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topmost_region_wins() {
        let mut map = HitMap::default();
        map.push(Rect::new(0, 0, 20, 10), HitTarget::PickerBackdrop);
        map.push(Rect::new(2, 3, 10, 1), HitTarget::PickerOption(0));

        assert_eq!(map.target_at(4, 3), Some(HitTarget::PickerOption(0)));
        assert_eq!(map.target_at(4, 4), Some(HitTarget::PickerBackdrop));
        assert_eq!(map.target_at(30, 4), None);

        map.clear();
        assert_eq!(map.target_at(4, 3), None);
    }
}
