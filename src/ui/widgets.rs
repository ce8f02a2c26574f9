// Minimal widget system on top of the primitive renderer
use crate::devices::framebuffer::{Color, Surface};
use crate::ui::draw;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect { pub x: i32, pub y: i32, pub w: u32, pub h: u32 }

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self { Self { x, y, w, h } }
    pub const fn right(&self) -> i32 { self.x + self.w as i32 }
    pub const fn bottom(&self) -> i32 { self.y + self.h as i32 }

    /// Shrink by `margin` on every side, never below zero size.
    pub fn inset(&self, margin: u32) -> Rect {
        Rect::new(
            self.x + margin as i32,
            self.y + margin as i32,
            self.w.saturating_sub(2 * margin),
            self.h.saturating_sub(2 * margin),
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// A `w x h` rect centered inside `self`.
    pub fn centered(&self, w: u32, h: u32) -> Rect {
        Rect::new(
            self.x + (self.w as i32 - w as i32) / 2,
            self.y + (self.h as i32 - h as i32) / 2,
            w,
            h,
        )
    }
}

pub trait Widget {
    fn layout(&mut self, bounds: Rect) -> Rect;
    fn render(&self, fb: &mut Surface<'_>, theme: &Theme);
}

pub struct Panel { pub rect: Rect, pub bg: Color, pub radius: Option<u32> }
impl Panel {
    pub fn new(bg: Color) -> Self { Self { rect: Rect::default(), bg, radius: None } }
    pub fn rounded(bg: Color, radius: u32) -> Self { Self { rect: Rect::default(), bg, radius: Some(radius) } }
}
impl Widget for Panel {
    fn layout(&mut self, bounds: Rect) -> Rect { self.rect = bounds; self.rect }
    fn render(&self, fb: &mut Surface<'_>, _theme: &Theme) {
        match self.radius {
            Some(r) => draw::fill_rounded_rect(fb, self.rect, r, self.bg),
            None => draw::fill(fb, self.rect, self.bg),
        }
    }
}

pub struct Label<'t> { pub rect: Rect, pub text: &'t str, pub color: Color, pub scale: u32 }
impl<'t> Label<'t> {
    pub fn new(text: &'t str, color: Color, scale: u32) -> Self { Self { rect: Rect::default(), text, color, scale } }
}
impl Widget for Label<'_> {
    fn layout(&mut self, bounds: Rect) -> Rect { self.rect = bounds; self.rect }
    fn render(&self, fb: &mut Surface<'_>, _theme: &Theme) {
        // Vertically centered, left inset
        let glyph_h = (draw::GLYPH_SIZE * self.scale) as i32;
        let y = self.rect.y + (self.rect.h as i32 - glyph_h) / 2;
        draw::draw_text(fb, self.text, self.rect.x + 8, y, self.color, self.scale);
    }
}

/// Rows of fixed height stacked top to bottom.
pub fn vstack(bounds: Rect, row_h: u32, gap: u32, index: usize) -> Rect {
    let y = bounds.y + (index as u32 * (row_h + gap)) as i32;
    Rect::new(bounds.x, y, bounds.w, row_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_inset() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!((r.right(), r.bottom()), (110, 70));
        assert_eq!(r.inset(10), Rect::new(20, 30, 80, 30));
        assert_eq!(r.inset(40).h, 0);
        assert!(r.contains(10, 20));
        assert!(!r.contains(110, 20));
    }

    #[test]
    fn centered_and_stacked() {
        let r = Rect::new(0, 0, 100, 100);
        assert_eq!(r.centered(20, 10), Rect::new(40, 45, 20, 10));
        assert_eq!(vstack(r, 30, 5, 2), Rect::new(0, 70, 100, 30));
    }
}
