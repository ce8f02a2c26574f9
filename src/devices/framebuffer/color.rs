//! Color representation and manipulation
use embedded_graphics_core::pixelcolor::{Rgb888, RgbColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::new(0x80, 0x80, 0x80);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xFF);
    pub const GREEN: Color = Color::new(0x00, 0xC0, 0x00);
    pub const RED: Color = Color::new(0xE0, 0x20, 0x20);
    pub const LIGHT_GRAY: Color = Color::new(0xD3, 0xD3, 0xD3);
    pub const DARK_GRAY: Color = Color::new(0x40, 0x40, 0x40);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Add `delta` to every channel, saturating at white.
    pub fn brighten(self, delta: u8) -> Color {
        Color::new(
            self.r.saturating_add(delta),
            self.g.saturating_add(delta),
            self.b.saturating_add(delta),
        )
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<Rgb888> for Color {
    fn from(c: Rgb888) -> Self {
        Color::new(c.r(), c.g(), c.b())
    }
}
