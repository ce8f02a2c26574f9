//! Shell configuration.
//!
//! Everything tunable lives in one `ShellConfig` value built in code, the
//! same way themes are picked from presets. The kernel boots the `dark`
//! preset and overrides the seed; tests use `default`.

use crate::devices::framebuffer::Color;
use crate::ui::Theme;

/// How the desktop background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundStyle {
    Flat(Color),
    /// Row `y` gets `base + spread * y / height` on every channel.
    Gradient { base: Color, spread: u8 },
}

/// Size and placement of the shell window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Distance from the left screen edge.
    pub x: i32,
    /// Distance from the top screen edge.
    pub y: i32,
    /// Preferred size; clamped to the screen minus margins.
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellConfig {
    pub theme: Theme,
    pub background: BackgroundStyle,
    pub taskbar_height: u32,
    /// Target time between host loop iterations.
    pub frame_interval_ms: u64,
    /// Minimum timer time between two reads of the wall clock.
    pub clock_refresh_ms: u64,
    pub rng_seed: u32,
    pub shell_window: WindowLayout,
    /// Show the notes window behind the shell window.
    pub show_notes: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let theme = Theme::classic();
        Self {
            theme,
            background: BackgroundStyle::Flat(theme.desktop),
            taskbar_height: 20,
            frame_interval_ms: 100,
            clock_refresh_ms: 1000,
            rng_seed: 0x1234_5678,
            shell_window: WindowLayout {
                x: 120,
                y: 40,
                width: 520,
                height: 400,
            },
            show_notes: true,
        }
    }
}

impl ShellConfig {
    /// Dark theme over a blue-gray gradient.
    pub fn dark() -> Self {
        Self {
            theme: Theme::dark_modern(),
            background: BackgroundStyle::Gradient {
                base: Color::from_hex(0x10202C),
                spread: 0x30,
            },
            ..Self::default()
        }
    }
}
