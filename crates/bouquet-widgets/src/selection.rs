//! Cursor and scroll offset for the bouquet's row list.
//!
//! Unlike a wrapping menu, the cursor stops at the first and last rows, and
//! the viewport can be scrolled independently of the cursor (mouse wheel),
//! dragging the cursor along only when it would leave the viewport.

/// Tracks cursor position and scroll offset for a list of rows.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    cursor: usize,
    offset: usize,
    count: usize,
    visible: usize,
}

impl SelectionState {
    /// Create a selection over `count` rows with `visible` rows on screen,
    /// cursor and viewport at the top.
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            visible,
        }
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first row in the viewport.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of rows.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Rows shown at once. Usually set from the list height at show time.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp_offset();
        self.ensure_visible();
    }

    /// Move the cursor up one row, stopping at the first.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_visible();
    }

    /// Move the cursor down one row, stopping at the last.
    pub fn move_down(&mut self) {
        if self.count > 0 {
            self.cursor = (self.cursor + 1).min(self.count - 1);
        }
        self.ensure_visible();
    }

    /// Move the cursor up by one viewport height.
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible.max(1));
        self.ensure_visible();
    }

    /// Move the cursor down by one viewport height.
    pub fn page_down(&mut self) {
        if self.count > 0 {
            self.cursor = (self.cursor + self.visible.max(1)).min(self.count - 1);
        }
        self.ensure_visible();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.ensure_visible();
    }

    pub fn end(&mut self) {
        self.cursor = self.count.saturating_sub(1);
        self.ensure_visible();
    }

    /// Put the cursor on `index` (clamped), scrolling it into view.
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.ensure_visible();
    }

    /// Scroll the viewport by `delta` rows (negative scrolls up).
    pub fn scroll(&mut self, delta: isize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp_offset();
        if self.visible == 0 || self.count == 0 {
            return;
        }
        let last_visible = self.offset + self.visible - 1;
        self.cursor = self.cursor.clamp(self.offset, last_visible.min(self.count - 1));
    }

    /// Index of the row drawn at `line` of the viewport, if any.
    pub fn index_at(&self, line: usize) -> Option<usize> {
        if line >= self.visible {
            return None;
        }
        let index = self.offset + line;
        (index < self.count).then_some(index)
    }

    fn max_offset(&self) -> usize {
        self.count.saturating_sub(self.visible)
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.visible == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_stop_at_edges() {
        let mut s = SelectionState::new(3, 10);
        s.move_up();
        assert_eq!(s.cursor(), 0);
        s.move_down();
        s.move_down();
        s.move_down();
        assert_eq!(s.cursor(), 2);
    }

    #[test]
    fn cursor_drags_offset() {
        let mut s = SelectionState::new(10, 3);
        s.select(5);
        assert_eq!(s.offset(), 3);
        s.move_up();
        s.move_up();
        s.move_up();
        assert_eq!(s.cursor(), 2);
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn page_and_home_end() {
        let mut s = SelectionState::new(20, 5);
        s.page_down();
        assert_eq!(s.cursor(), 5);
        s.end();
        assert_eq!(s.cursor(), 19);
        assert_eq!(s.offset(), 15);
        s.page_up();
        assert_eq!(s.cursor(), 14);
        s.home();
        assert_eq!((s.cursor(), s.offset()), (0, 0));
    }

    #[test]
    fn scroll_moves_viewport_and_clamps() {
        let mut s = SelectionState::new(10, 4);
        s.scroll(3);
        assert_eq!(s.offset(), 3);
        assert_eq!(s.cursor(), 3);
        s.scroll(100);
        assert_eq!(s.offset(), 6);
        s.scroll(-100);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.cursor(), 3);
    }

    #[test]
    fn scroll_is_noop_when_everything_fits() {
        let mut s = SelectionState::new(3, 10);
        s.scroll(2);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn index_at_maps_viewport_lines() {
        let mut s = SelectionState::new(5, 3);
        s.scroll(2);
        assert_eq!(s.index_at(0), Some(2));
        assert_eq!(s.index_at(2), Some(4));
        assert_eq!(s.index_at(3), None);

        let s = SelectionState::new(2, 5);
        assert_eq!(s.index_at(1), Some(1));
        assert_eq!(s.index_at(2), None);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut s = SelectionState::new(0, 5);
        s.move_down();
        s.end();
        s.select(3);
        s.scroll(1);
        assert_eq!((s.cursor(), s.offset()), (0, 0));
        assert_eq!(s.index_at(0), None);
    }
}
