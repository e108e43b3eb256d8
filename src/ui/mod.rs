pub mod calculator_view;
pub mod footer;
pub mod help;
pub mod info_popup;
pub mod theme;

use ratatui::layout::Rect;

/// Fixed-size rect centered in `r`, shrunk to fit small terminals.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    Rect::new(
        r.x + (r.width.saturating_sub(w)) / 2,
        r.y + (r.height.saturating_sub(h)) / 2,
        w, h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let r = centered_rect(72, 30, Rect::new(0, 0, 100, 40));
        assert_eq!(r, Rect::new(14, 5, 72, 30));
        let small = centered_rect(72, 30, Rect::new(0, 0, 40, 10));
        assert_eq!(small, Rect::new(0, 0, 40, 10));
    }
}
