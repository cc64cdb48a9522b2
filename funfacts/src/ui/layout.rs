//! Layout helpers for the fun facts TUI

use ratatui::layout::Rect;

/// A fixed-size rect centered within `area`, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_within_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect_fixed(50, 20, area);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn clamps_to_small_areas() {
        let area = Rect::new(0, 0, 10, 5);
        let popup = centered_rect_fixed(50, 20, area);
        assert_eq!(popup, area);
    }
}
