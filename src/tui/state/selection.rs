//! Generic selection behaviour and the focus ring

use ratatui::widgets::ListState;

/// Wrapping selection over a list of `count` entries
pub trait Selectable {
    /// Total number of entries
    fn count(&self) -> usize;
    fn list_state(&self) -> &ListState;
    fn list_state_mut(&mut self) -> &mut ListState;

    /// Select the next entry, wrapping to the first
    fn next(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let next = self.list_state().selected().map_or(0, |i| (i + 1) % count);
        self.list_state_mut().select(Some(next));
    }

    /// Select the previous entry, wrapping to the last
    fn prev(&mut self) {
        let count = self.count();
        if count == 0 {
            return;
        }
        let prev = match self.list_state().selected() {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.list_state_mut().select(Some(prev));
    }

    fn select(&mut self, index: usize) {
        let count = self.count();
        if count == 0 {
            self.list_state_mut().select(None);
            return;
        }
        self.list_state_mut().select(Some(index % count));
    }

    fn selected(&self) -> Option<usize> {
        self.list_state().selected()
    }
}

/// Which control of the current view has keyboard focus
#[derive(Debug, Default)]
pub struct FocusState {
    list_state: ListState,
    count: usize,
}

impl FocusState {
    /// Focus the first of `count` controls
    pub fn with_count(count: usize) -> Self {
        let mut focus = Self {
            list_state: ListState::default(),
            count,
        };
        focus.select(0);
        focus
    }
}

impl Selectable for FocusState {
    fn count(&self) -> usize {
        self.count
    }

    fn list_state(&self) -> &ListState {
        &self.list_state
    }

    fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut focus = FocusState::with_count(3);
        assert_eq!(focus.selected(), Some(0));
        focus.prev();
        assert_eq!(focus.selected(), Some(2));
        focus.next();
        assert_eq!(focus.selected(), Some(0));
        focus.next();
        focus.next();
        assert_eq!(focus.selected(), Some(2));
    }

    #[test]
    fn test_empty_focus_selects_nothing() {
        let mut focus = FocusState::with_count(0);
        assert_eq!(focus.selected(), None);
        focus.next();
        focus.prev();
        assert_eq!(focus.selected(), None);
    }
}
