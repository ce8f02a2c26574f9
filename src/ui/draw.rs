//! Primitive renderer: shapes and bitmap text on top of `Surface`.
//!
//! Everything here ends in `Surface::set_pixel`, directly or through the
//! embedded-graphics rectangle fill, so clipping is the surface's job.

use crate::devices::framebuffer::{Color, Surface};
use crate::ui::widgets::Rect;
use font8x8::legacy::BASIC_LEGACY;

/// Glyph cell edge at scale 1.
pub const GLYPH_SIZE: u32 = 8;

/// Horizontal distance between glyph origins.
pub const fn glyph_advance(scale: u32) -> u32 {
    GLYPH_SIZE * scale
}

pub fn fill(surface: &mut Surface<'_>, rect: Rect, color: Color) {
    surface.fill_rect(rect.x, rect.y, rect.w, rect.h, color);
}

/// Filled rectangle with quarter-disk corners.
///
/// The body is the rectangle minus its four `r x r` corner squares. Each
/// corner square then gets the pixels with `dx² + dy² <= r²`, where
/// `dx, dy >= 1` count from the square's inner corner.
pub fn fill_rounded_rect(surface: &mut Surface<'_>, rect: Rect, radius: u32, color: Color) {
    let r = radius.min(rect.w / 2).min(rect.h / 2);
    if r == 0 {
        fill(surface, rect, color);
        return;
    }
    let ri = r as i32;

    // Center column, full height
    surface.fill_rect(rect.x + ri, rect.y, rect.w - 2 * r, rect.h, color);
    // Side columns between the corners
    surface.fill_rect(rect.x, rect.y + ri, r, rect.h - 2 * r, color);
    surface.fill_rect(rect.right() - ri, rect.y + ri, r, rect.h - 2 * r, color);

    let r_sq = ri * ri;
    for dy in 1..=ri {
        for dx in 1..=ri {
            if dx * dx + dy * dy > r_sq {
                continue;
            }
            let left = rect.x + ri - dx;
            let right = rect.right() - ri + dx - 1;
            let top = rect.y + ri - dy;
            let bottom = rect.bottom() - ri + dy - 1;
            surface.set_pixel(left, top, color);
            surface.set_pixel(right, top, color);
            surface.set_pixel(left, bottom, color);
            surface.set_pixel(right, bottom, color);
        }
    }
}

/// One-pixel frame just outside `rect`.
///
/// Top and bottom runs cover `x - 1 ..= right`, the side runs only
/// `y ..= bottom - 1`, so corner pixels are written once.
pub fn draw_outline(surface: &mut Surface<'_>, rect: Rect, color: Color) {
    let x0 = rect.x - 1;
    let x1 = rect.right();
    let y0 = rect.y - 1;
    let y1 = rect.bottom();
    for x in x0..=x1 {
        surface.set_pixel(x, y0, color);
        surface.set_pixel(x, y1, color);
    }
    for y in rect.y..rect.bottom() {
        surface.set_pixel(x0, y, color);
        surface.set_pixel(x1, y, color);
    }
}

/// Stamp one 8x8 glyph, each set bit as a `scale x scale` block.
/// Codepoints outside 7-bit ASCII are skipped.
pub fn draw_glyph(surface: &mut Surface<'_>, ch: char, x: i32, y: i32, color: Color, scale: u32) {
    let code = ch as u32;
    if code >= 128 || scale == 0 {
        return;
    }
    let glyph = &BASIC_LEGACY[code as usize];
    let s = scale as i32;
    for (row, &bits) in glyph.iter().enumerate() {
        for col in 0..8i32 {
            if (bits >> col) & 1 == 0 {
                continue;
            }
            let px = x + col * s;
            let py = y + row as i32 * s;
            if s == 1 {
                surface.set_pixel(px, py, color);
            } else {
                surface.fill_rect(px, py, scale, scale, color);
            }
        }
    }
}

/// Draw `text` left to right; returns the x just past the last glyph.
/// A NUL character ends the text early.
pub fn draw_text(surface: &mut Surface<'_>, text: &str, x: i32, y: i32, color: Color, scale: u32) -> i32 {
    let advance = glyph_advance(scale) as i32;
    let mut cx = x;
    for ch in text.chars().take_while(|&c| c != '\0') {
        draw_glyph(surface, ch, cx, y, color, scale);
        cx += advance;
    }
    cx
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    let n = text.chars().take_while(|&c| c != '\0').count() as u32;
    n * glyph_advance(scale)
}

/// Draw `text` centered horizontally inside `area`, top at `y`.
pub fn draw_text_centered(surface: &mut Surface<'_>, text: &str, area: Rect, y: i32, color: Color, scale: u32) {
    let w = text_width(text, scale) as i32;
    let x = area.x + (area.w as i32 - w) / 2;
    draw_text(surface, text, x, y, color, scale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::SurfaceInfo;

    fn with_surface(w: usize, h: usize, f: impl FnOnce(&mut Surface<'_>)) {
        let info = SurfaceInfo::packed(w, h);
        let mut buf = vec![0u8; info.required_len()];
        let mut s = Surface::new(&mut buf, info).unwrap();
        f(&mut s);
    }

    fn count(s: &Surface<'_>, color: Color) -> usize {
        let mut n = 0;
        for y in 0..s.height() as i32 {
            for x in 0..s.width() as i32 {
                if s.get_pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn rounded_rect_zero_radius_is_plain() {
        with_surface(12, 12, |s| {
            fill_rounded_rect(s, Rect::new(1, 1, 10, 6), 0, Color::WHITE);
            assert_eq!(count(s, Color::WHITE), 60);
        });
    }

    #[test]
    fn rounded_rect_cuts_corners() {
        with_surface(20, 20, |s| {
            let rect = Rect::new(2, 2, 12, 10);
            fill_rounded_rect(s, rect, 4, Color::WHITE);
            // Outermost corner pixels are outside the quarter disks
            assert_eq!(s.get_pixel(2, 2), Some(Color::BLACK));
            assert_eq!(s.get_pixel(13, 2), Some(Color::BLACK));
            assert_eq!(s.get_pixel(2, 11), Some(Color::BLACK));
            assert_eq!(s.get_pixel(13, 11), Some(Color::BLACK));
            // Edge midpoints and the pixel diagonal to each inner corner are in
            assert_eq!(s.get_pixel(7, 2), Some(Color::WHITE));
            assert_eq!(s.get_pixel(2, 6), Some(Color::WHITE));
            assert_eq!(s.get_pixel(5, 5), Some(Color::WHITE));
            assert_eq!(s.get_pixel(10, 8), Some(Color::WHITE));
            // Nothing leaks outside
            assert_eq!(s.get_pixel(1, 6), Some(Color::BLACK));
            assert_eq!(s.get_pixel(14, 6), Some(Color::BLACK));

            // Four identical quarter disks: each has the same count, and the
            // total is body + 4 * quarter.
            let body = 12 * 10 - 4 * 16;
            let mut quarter = 0;
            for dy in 1..=4 {
                for dx in 1..=4 {
                    if dx * dx + dy * dy <= 16 {
                        quarter += 1;
                    }
                }
            }
            assert_eq!(count(s, Color::WHITE), body + 4 * quarter);
        });
    }

    #[test]
    fn rounded_rect_radius_is_clamped() {
        with_surface(10, 10, |s| {
            fill_rounded_rect(s, Rect::new(0, 0, 4, 4), 50, Color::WHITE);
            assert_eq!(s.get_pixel(2, 2), Some(Color::WHITE));
            assert_eq!(s.get_pixel(0, 0), Some(Color::BLACK));
        });
    }

    #[test]
    fn outline_tiles_without_gaps() {
        with_surface(10, 10, |s| {
            draw_outline(s, Rect::new(2, 2, 4, 3), Color::WHITE);
            // (w + 2) * 2 horizontal + h * 2 vertical
            assert_eq!(count(s, Color::WHITE), 6 * 2 + 3 * 2);
            for corner in [(1, 1), (6, 1), (1, 5), (6, 5)] {
                assert_eq!(s.get_pixel(corner.0, corner.1), Some(Color::WHITE));
            }
            assert_eq!(s.get_pixel(3, 3), Some(Color::BLACK));
        });
    }

    #[test]
    fn glyph_scale_and_clip() {
        with_surface(32, 16, |s| {
            draw_glyph(s, 'A', 0, 0, Color::WHITE, 1);
            let one = count(s, Color::WHITE);
            assert!(one > 0);
            draw_glyph(s, 'A', 16, 0, Color::RED, 2);
            assert_eq!(count(s, Color::RED), one * 4);
            // Partially off-surface glyph doesn't panic
            draw_glyph(s, 'A', 28, 12, Color::GREEN, 2);
            draw_glyph(s, 'A', -5, -5, Color::GREEN, 1);
        });
    }

    #[test]
    fn non_ascii_is_skipped_but_advances() {
        with_surface(40, 8, |s| {
            let end = draw_text(s, "é", 0, 0, Color::WHITE, 1);
            assert_eq!(count(s, Color::WHITE), 0);
            assert_eq!(end, 8);
        });
    }

    #[test]
    fn text_stops_at_nul() {
        assert_eq!(text_width("ab\0cd", 2), 32);
        with_surface(64, 8, |s| {
            assert_eq!(draw_text(s, "ab\0cd", 0, 0, Color::WHITE, 1), 16);
        });
    }
}
