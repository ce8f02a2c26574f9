//! Pixel surface over the boot framebuffer, drawable through embedded-graphics
use crate::devices::framebuffer::color::Color;
use crate::error::SurfaceError;
use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
    Pixel,
};

/// Channel order of one pixel in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Bgr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceInfo {
    pub width: usize,
    pub height: usize,
    /// Bytes from the start of one row to the next.
    pub pitch_bytes: usize,
    pub bytes_per_pixel: usize,
    pub format: PixelFormat,
}

impl SurfaceInfo {
    /// A tightly packed 32-bit BGR surface, the common VESA/GOP layout.
    pub const fn packed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pitch_bytes: width * 4,
            bytes_per_pixel: 4,
            format: PixelFormat::Bgr,
        }
    }

    /// Smallest buffer that holds every addressable pixel.
    pub fn required_len(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        (self.height - 1) * self.pitch_bytes + self.width * self.bytes_per_pixel
    }
}

pub struct Surface<'a> {
    buffer: &'a mut [u8],
    info: SurfaceInfo,
}

impl<'a> Surface<'a> {
    pub fn new(buffer: &'a mut [u8], info: SurfaceInfo) -> Result<Self, SurfaceError> {
        if !matches!(info.bytes_per_pixel, 3 | 4) {
            return Err(SurfaceError::UnsupportedPixelSize(info.bytes_per_pixel));
        }
        let needed = info.required_len();
        if buffer.len() < needed {
            return Err(SurfaceError::BufferTooSmall {
                needed,
                actual: buffer.len(),
            });
        }
        Ok(Self { buffer, info })
    }

    pub fn width(&self) -> usize {
        self.info.width
    }

    pub fn height(&self) -> usize {
        self.info.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.info.width || y as usize >= self.info.height {
            return None;
        }
        Some(y as usize * self.info.pitch_bytes + x as usize * self.info.bytes_per_pixel)
    }

    /// Write one pixel. Coordinates outside the surface are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        let bpp = self.info.bytes_per_pixel;
        let px = &mut self.buffer[offset..offset + bpp];
        match self.info.format {
            PixelFormat::Rgb => {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
            PixelFormat::Bgr => {
                px[0] = color.b;
                px[1] = color.g;
                px[2] = color.r;
            }
        }
        if bpp == 4 {
            px[3] = 0;
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let offset = self.offset(x, y)?;
        let px = &self.buffer[offset..offset + self.info.bytes_per_pixel];
        Some(match self.info.format {
            PixelFormat::Rgb => Color::new(px[0], px[1], px[2]),
            PixelFormat::Bgr => Color::new(px[2], px[1], px[0]),
        })
    }

    /// Fill entire screen with a color
    pub fn clear(&mut self, color: Color) {
        self.fill_rect(0, 0, self.info.width as u32, self.info.height as u32, color);
    }

    /// Fill a rectangular region, clipped to the surface
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        if width == 0 || height == 0 {
            return;
        }
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color.to_rgb888()))
            .draw(self)
            .ok();
    }
}

impl DrawTarget for Surface<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, Color::from(color));
        }
        Ok(())
    }
}

impl OriginDimensions for Surface<'_> {
    fn size(&self) -> Size {
        Size::new(self.info.width as u32, self.info.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let info = SurfaceInfo::packed(4, 3);
        let mut buf = vec![0xAAu8; info.required_len()];
        let before = buf.clone();
        {
            let mut s = Surface::new(&mut buf, info).unwrap();
            for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MAX, i32::MAX), (i32::MIN, 2)] {
                s.set_pixel(x, y, Color::WHITE);
            }
        }
        assert_eq!(buf, before);
    }

    #[test]
    fn pixel_index_follows_pitch() {
        // 2 pixels of padding per row.
        let info = SurfaceInfo {
            width: 3,
            height: 2,
            pitch_bytes: 20,
            bytes_per_pixel: 4,
            format: PixelFormat::Bgr,
        };
        let mut buf = vec![0u8; info.required_len()];
        {
            let mut s = Surface::new(&mut buf, info).unwrap();
            s.set_pixel(2, 1, Color::from_hex(0x11_22_33));
        }
        let word = 1 * (20 / 4) + 2;
        assert_eq!(&buf[word * 4..word * 4 + 3], &[0x33, 0x22, 0x11]);
    }

    #[test]
    fn rgb_and_bgr_round_trip() {
        for format in [PixelFormat::Rgb, PixelFormat::Bgr] {
            let info = SurfaceInfo {
                width: 2,
                height: 2,
                pitch_bytes: 6,
                bytes_per_pixel: 3,
                format,
            };
            let mut buf = vec![0u8; info.required_len()];
            let mut s = Surface::new(&mut buf, info).unwrap();
            s.set_pixel(1, 1, Color::new(1, 2, 3));
            assert_eq!(s.get_pixel(1, 1), Some(Color::new(1, 2, 3)));
            assert_eq!(s.get_pixel(2, 1), None);
        }
    }

    #[test]
    fn fill_rect_clips() {
        let info = SurfaceInfo::packed(4, 4);
        let mut buf = vec![0u8; info.required_len()];
        let mut s = Surface::new(&mut buf, info).unwrap();
        s.fill_rect(-2, 2, 4, 10, Color::RED);
        assert_eq!(s.get_pixel(0, 2), Some(Color::RED));
        assert_eq!(s.get_pixel(1, 3), Some(Color::RED));
        assert_eq!(s.get_pixel(2, 2), Some(Color::BLACK));
        assert_eq!(s.get_pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn rejects_bad_buffers() {
        let info = SurfaceInfo::packed(4, 4);
        let mut small = vec![0u8; 10];
        assert_eq!(
            Surface::new(&mut small, info).err(),
            Some(SurfaceError::BufferTooSmall { needed: 64, actual: 10 })
        );
        let mut buf = vec![0u8; 64];
        let odd = SurfaceInfo { bytes_per_pixel: 2, ..info };
        assert_eq!(
            Surface::new(&mut buf, odd).err(),
            Some(SurfaceError::UnsupportedPixelSize(2))
        );
    }
}
