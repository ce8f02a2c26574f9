//! # Desktop Compositor
//!
//! Paints one complete frame: background, desktop icons, every visible
//! window in back-to-front order, then the taskbar with the start button
//! and the clock.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ [My PC]    ┌───────────────────[x]┐     │
//! │            │ Title                │     │
//! │ [Docs]     ├──────────────────────┤     │
//! │            │  body                │     │
//! │ [Settings] └──────────────────────┘     │
//! ├─────────────────────────────────────────┤
//! │[Start]                           12:34  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! There is no damage tracking; `compose` writes every pixel of the
//! surface each call.

pub mod clock;

pub use clock::{Clock, ClockDisplay, WallTime};

use crate::config::{BackgroundStyle, ShellConfig};
use crate::devices::framebuffer::Surface;
use crate::ui::draw;
use crate::ui::widgets::Rect;
use crate::ui::Theme;
use crate::wm::{WindowRecord, WindowRegistry, TITLE_BAR_HEIGHT};

pub const START_BUTTON_WIDTH: u32 = 60;
const CLOCK_INSET: i32 = 10;
const TITLE_INSET: i32 = 5;
const CLOSE_BOX: u32 = 15;

const ICON_LABELS: [&str; 3] = ["My PC", "Documents", "Settings"];
const ICON_SIZE: u32 = 40;
const ICON_PITCH: i32 = 70;

pub struct Desktop {
    background: BackgroundStyle,
    taskbar_height: u32,
    clock: ClockDisplay,
}

impl Desktop {
    pub fn new<C: Clock + ?Sized>(config: &ShellConfig, clock: &mut C, now_ms: u64) -> Self {
        Self {
            background: config.background,
            taskbar_height: config.taskbar_height,
            clock: ClockDisplay::new(clock, now_ms, config.clock_refresh_ms),
        }
    }

    pub fn clock_text(&self) -> &str {
        self.clock.text()
    }

    pub fn refresh_clock<C: Clock + ?Sized>(&mut self, clock: &mut C, now_ms: u64) -> bool {
        self.clock.refresh(clock, now_ms)
    }

    /// Screen area above the taskbar.
    pub fn work_area(&self, width: u32, height: u32) -> Rect {
        Rect::new(0, 0, width, height.saturating_sub(self.taskbar_height))
    }

    pub fn taskbar(&self, width: u32, height: u32) -> Rect {
        let h = self.taskbar_height.min(height);
        Rect::new(0, (height - h) as i32, width, h)
    }

    pub fn compose(&self, surface: &mut Surface<'_>, registry: &WindowRegistry, theme: &Theme) {
        self.compose_with(surface, registry, theme, |_, _, _| {});
    }

    /// Like `compose`, calling `content` right after each visible window's
    /// chrome so window contents keep the same stacking as the frames.
    pub fn compose_with<F>(&self, surface: &mut Surface<'_>, registry: &WindowRegistry, theme: &Theme, mut content: F)
    where
        F: FnMut(&mut Surface<'_>, usize, &WindowRecord),
    {
        self.draw_background(surface);
        self.draw_icons(surface, theme);
        for (index, window) in registry.back_to_front().enumerate() {
            if !window.visible {
                continue;
            }
            draw_window(surface, window, theme);
            content(surface, index, window);
        }
        self.draw_taskbar(surface, theme);
    }

    pub fn draw_background(&self, surface: &mut Surface<'_>) {
        let (w, h) = (surface.width() as u32, surface.height() as u32);
        match self.background {
            BackgroundStyle::Flat(color) => surface.fill_rect(0, 0, w, h, color),
            BackgroundStyle::Gradient { base, spread } => {
                for y in 0..h {
                    let delta = (spread as u32 * y / h.max(1)) as u8;
                    surface.fill_rect(0, y as i32, w, 1, base.brighten(delta));
                }
            }
        }
    }

    fn draw_icons(&self, surface: &mut Surface<'_>, theme: &Theme) {
        let limit = self.work_area(surface.width() as u32, surface.height() as u32).bottom();
        for (i, label) in ICON_LABELS.iter().enumerate() {
            let y = 20 + i as i32 * ICON_PITCH;
            if y + ICON_PITCH > limit {
                break;
            }
            surface.fill_rect(20, y, ICON_SIZE, ICON_SIZE, theme.icon);
            draw::draw_text(surface, label, 10, y + ICON_SIZE as i32 + 5, theme.icon_text, 1);
        }
    }

    fn draw_taskbar(&self, surface: &mut Surface<'_>, theme: &Theme) {
        let bar = self.taskbar(surface.width() as u32, surface.height() as u32);
        draw::fill(surface, bar, theme.taskbar);

        let start = Rect::new(bar.x, bar.y, START_BUTTON_WIDTH.min(bar.w), bar.h);
        draw::fill(surface, start, theme.start_button);

        let text_y = bar.y + (bar.h as i32 - draw::GLYPH_SIZE as i32) / 2;
        draw::draw_text(surface, "Start", 10, text_y, theme.taskbar_text, 1);

        let clock = self.clock.text();
        let clock_x = bar.right() - CLOCK_INSET - draw::text_width(clock, 1) as i32;
        draw::draw_text(surface, clock, clock_x, text_y, theme.taskbar_text, 1);
    }
}

/// Body, title bar, title, close box and border of one window.
pub fn draw_window(surface: &mut Surface<'_>, window: &WindowRecord, theme: &Theme) {
    let frame = window.frame();
    draw::fill(surface, frame, theme.window_body);

    let bar_color = if window.active { theme.title_active } else { theme.title_inactive };
    draw::fill(surface, window.title_bar(), bar_color);

    let title_y = frame.y + (TITLE_BAR_HEIGHT as i32 - draw::GLYPH_SIZE as i32) / 2;
    draw::draw_text(surface, window.title(), frame.x + TITLE_INSET, title_y, theme.title_text, 1);

    let close = Rect::new(frame.right() - 20, frame.y + 5, CLOSE_BOX, CLOSE_BOX);
    draw::fill(surface, close, theme.close_button);
    let glyph_off = (CLOSE_BOX - draw::GLYPH_SIZE) as i32 / 2;
    draw::draw_glyph(surface, 'x', close.x + glyph_off, close.y + glyph_off, theme.close_glyph, 1);

    draw::draw_outline(surface, frame, theme.border);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::{Color, SurfaceInfo};

    struct Fixed;

    impl Clock for Fixed {
        fn read_time(&mut self) -> WallTime {
            WallTime { hours: 12, minutes: 34, seconds: 56 }
        }
    }

    fn render(config: &ShellConfig, wm: &WindowRegistry, check: impl FnOnce(&Surface<'_>)) {
        let info = SurfaceInfo::packed(320, 240);
        let mut buf = vec![0u8; info.required_len()];
        let mut s = Surface::new(&mut buf, info).unwrap();
        let desktop = Desktop::new(config, &mut Fixed, 0);
        desktop.compose(&mut s, wm, &config.theme);
        check(&s);
    }

    #[test]
    fn clock_text_is_read_at_init() {
        let d = Desktop::new(&ShellConfig::default(), &mut Fixed, 0);
        assert_eq!(d.clock_text(), "12:34");
    }

    #[test]
    fn paints_background_and_taskbar() {
        let config = ShellConfig::default();
        let theme = config.theme;
        render(&config, &WindowRegistry::new(), |s| {
            assert_eq!(s.get_pixel(300, 10), Some(theme.desktop));
            assert_eq!(s.get_pixel(200, 239), Some(theme.taskbar));
            assert_eq!(s.get_pixel(200, 220), Some(theme.taskbar));
            assert_eq!(s.get_pixel(200, 219), Some(theme.desktop));
            assert_eq!(s.get_pixel(1, 221), Some(theme.start_button));
            // Icon box
            assert_eq!(s.get_pixel(30, 30), Some(theme.icon));
        });
    }

    #[test]
    fn clock_is_right_aligned() {
        let config = ShellConfig::default();
        let theme = config.theme;
        render(&config, &WindowRegistry::new(), |s| {
            // "12:34" spans x = 320 - 10 - 40 .. 310; nothing drawn past it
            let y0 = 220;
            let mut drawn = false;
            for y in y0..240 {
                for x in 270..310 {
                    drawn |= s.get_pixel(x, y) == Some(theme.taskbar_text);
                }
                for x in 310..320 {
                    assert_eq!(s.get_pixel(x, y), Some(theme.taskbar));
                }
            }
            assert!(drawn);
        });
    }

    #[test]
    fn gradient_rows_brighten_downwards() {
        let config = ShellConfig {
            background: BackgroundStyle::Gradient { base: Color::new(10, 20, 30), spread: 100 },
            ..ShellConfig::default()
        };
        render(&config, &WindowRegistry::new(), |s| {
            assert_eq!(s.get_pixel(300, 0), Some(Color::new(10, 20, 30)));
            // y = 120 → delta = 100 * 120 / 240 = 50
            assert_eq!(s.get_pixel(300, 120), Some(Color::new(60, 70, 80)));
        });
    }

    #[test]
    fn dark_preset_uses_its_gradient_and_theme() {
        let config = ShellConfig::dark();
        let mut wm = WindowRegistry::new();
        wm.create(100, 40, 120, 80, "w").unwrap();
        render(&config, &wm, |s| {
            // y = 0 is the base color, y = 120 adds 0x30 * 120 / 240 = 0x18
            assert_eq!(s.get_pixel(300, 0), Some(Color::from_hex(0x10202C)));
            assert_eq!(s.get_pixel(300, 120), Some(Color::from_hex(0x283844)));
            assert_eq!(s.get_pixel(102, 42), Some(Theme::dark_modern().title_active));
            assert_eq!(s.get_pixel(200, 239), Some(Theme::dark_modern().taskbar));
        });
    }

    #[test]
    fn windows_paint_back_to_front() {
        let config = ShellConfig::default();
        let theme = config.theme;
        let mut wm = WindowRegistry::new();
        wm.create(100, 40, 120, 80, "Back").unwrap();
        wm.create(150, 60, 120, 80, "Front").unwrap();
        render(&config, &wm, |s| {
            // Overlap region shows the later window's title bar
            assert_eq!(s.get_pixel(160, 62), Some(theme.title_inactive));
            assert_eq!(s.get_pixel(102, 42), Some(theme.title_active));
            // Body below the title bar
            assert_eq!(s.get_pixel(110, 110), Some(theme.window_body));
            // Border corners of the front window
            assert_eq!(s.get_pixel(149, 59), Some(theme.border));
            assert_eq!(s.get_pixel(270, 140), Some(theme.border));
        });
    }

    #[test]
    fn content_hook_runs_in_stacking_order() {
        let config = ShellConfig::default();
        let mut wm = WindowRegistry::new();
        wm.create(10, 10, 100, 100, "a").unwrap();
        wm.create(20, 20, 100, 100, "b").unwrap();
        wm.create(30, 30, 100, 100, "c").unwrap();
        wm.set_visible(1, false);

        let info = SurfaceInfo::packed(320, 240);
        let mut buf = vec![0u8; info.required_len()];
        let mut s = Surface::new(&mut buf, info).unwrap();
        let desktop = Desktop::new(&config, &mut Fixed, 0);
        let mut seen = Vec::new();
        desktop.compose_with(&mut s, &wm, &config.theme, |fb, index, window| {
            draw::fill(fb, window.content(), Color::RED);
            seen.push(index);
        });
        assert_eq!(seen, [0, 2]);
        // Window c's chrome covers a's content where they overlap
        assert_eq!(s.get_pixel(100, 32), Some(config.theme.title_inactive));
        assert_eq!(s.get_pixel(40, 80), Some(Color::RED));
    }

    #[test]
    fn hidden_windows_are_skipped() {
        let config = ShellConfig::default();
        let theme = config.theme;
        let mut wm = WindowRegistry::new();
        wm.create(100, 40, 120, 80, "Hidden").unwrap();
        wm.set_visible(0, false);
        render(&config, &wm, |s| {
            assert_eq!(s.get_pixel(150, 100), Some(theme.desktop));
        });
    }
}
