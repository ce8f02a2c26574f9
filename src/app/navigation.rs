use crate::devices::framebuffer::{Color, Surface};
use crate::ui::widgets::Rect;

/// Previous index in `0..count`, wrapping from the first to the last.
pub fn wrap_prev(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + count - 1) % count
}

/// Next index in `0..count`, wrapping from the last to the first.
pub fn wrap_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

pub fn draw_focus_ring(fb: &mut Surface<'_>, rect: Rect, color: Color) {
    if rect.w == 0 || rect.h == 0 {
        return;
    }
    fb.fill_rect(rect.x, rect.y, rect.w, 1, color);
    fb.fill_rect(rect.x, rect.bottom() - 1, rect.w, 1, color);
    fb.fill_rect(rect.x, rect.y, 1, rect.h, color);
    fb.fill_rect(rect.right() - 1, rect.y, 1, rect.h, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(wrap_prev(0, 5), 4);
        assert_eq!(wrap_next(4, 5), 0);
        assert_eq!(wrap_next(1, 5), 2);
        assert_eq!(wrap_prev(0, 0), 0);
    }
}
