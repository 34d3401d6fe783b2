//! Rect arithmetic for anchoring the overlay to its trigger.

use ratatui::layout::{Position, Rect};

/// Width of the trigger's chevron button and of the dismiss button.
pub const BUTTON_WIDTH: u16 = 2;

/// Rows left empty between the trigger and the top of the list.
pub const ANCHOR_GAP: u16 = 1;

/// The list's anchor: full surface width, starting [`ANCHOR_GAP`] rows below
/// the trigger and running to the bottom of the surface.
///
/// Empty when the trigger sits at or below the bottom of the surface.
pub fn anchor_below(trigger: Rect, surface: Rect) -> Rect {
    let top = trigger
        .bottom()
        .saturating_add(ANCHOR_GAP)
        .max(surface.top());
    let height = surface.bottom().saturating_sub(top);
    Rect::new(surface.x, top.min(surface.bottom()), surface.width, height)
}

/// The trailing [`BUTTON_WIDTH`] cells of the first row of `area`.
pub fn trailing_button(area: Rect) -> Rect {
    let width = BUTTON_WIDTH.min(area.width);
    Rect::new(
        area.right().saturating_sub(width),
        area.y,
        width,
        area.height.min(1),
    )
}

/// Whether the cell at (`column`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_starts_below_trigger() {
        let surface = Rect::new(0, 0, 80, 24);
        let trigger = Rect::new(10, 2, 30, 1);
        assert_eq!(anchor_below(trigger, surface), Rect::new(0, 4, 80, 20));
    }

    #[test]
    fn anchor_collapses_at_bottom() {
        let surface = Rect::new(0, 0, 80, 24);
        let trigger = Rect::new(0, 23, 30, 1);
        let anchor = anchor_below(trigger, surface);
        assert_eq!(anchor.height, 0);
        assert_eq!(anchor.y, 24);
    }

    #[test]
    fn trailing_button_is_last_cells() {
        assert_eq!(trailing_button(Rect::new(5, 3, 20, 1)), Rect::new(23, 3, 2, 1));
        assert_eq!(trailing_button(Rect::new(0, 0, 1, 1)), Rect::new(0, 0, 1, 1));
        assert_eq!(trailing_button(Rect::new(0, 0, 10, 3)).height, 1);
    }

    #[test]
    fn hit_respects_edges() {
        let rect = Rect::new(2, 2, 3, 2);
        assert!(hit(rect, 2, 2));
        assert!(hit(rect, 4, 3));
        assert!(!hit(rect, 5, 3));
        assert!(!hit(rect, 1, 2));
    }
}
