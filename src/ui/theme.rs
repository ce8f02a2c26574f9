use crate::devices::framebuffer::color::Color;

/// Shell color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub desktop: Color,
    pub icon: Color,
    pub icon_text: Color,
    pub window_body: Color,
    pub title_active: Color,
    pub title_inactive: Color,
    pub title_text: Color,
    pub border: Color,
    pub close_button: Color,
    pub close_glyph: Color,
    pub taskbar: Color,
    pub start_button: Color,
    pub taskbar_text: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Gray desktop, blue active title bars
    pub fn classic() -> Self {
        Self {
            desktop: Color::LIGHT_GRAY,
            icon: Color::GRAY,
            icon_text: Color::BLACK,
            window_body: Color::WHITE,
            title_active: Color::BLUE,
            title_inactive: Color::GRAY,
            title_text: Color::WHITE,
            border: Color::GRAY,
            close_button: Color::LIGHT_GRAY,
            close_glyph: Color::BLACK,
            taskbar: Color::DARK_GRAY,
            start_button: Color::GRAY,
            taskbar_text: Color::WHITE,
            text: Color::BLACK,
            text_secondary: Color::GRAY,
            highlight: Color::from_hex(0x3A6EA5),
            highlight_text: Color::WHITE,
            accent: Color::from_hex(0xC0392B),
            error: Color::RED,
            success: Color::GREEN,
        }
    }

    /// Create a dark modern theme
    pub fn dark_modern() -> Self {
        Self {
            desktop: Color::from_hex(0x121212),
            icon: Color::from_hex(0x2C2C2C),
            icon_text: Color::from_hex(0xB0B0B0),
            window_body: Color::from_hex(0x1E1E1E),
            title_active: Color::from_hex(0x2196F3),
            title_inactive: Color::from_hex(0x424242),
            title_text: Color::from_hex(0xFFFFFF),
            border: Color::from_hex(0x424242),
            close_button: Color::from_hex(0x2C2C2C),
            close_glyph: Color::from_hex(0xFF6B6B),
            taskbar: Color::from_hex(0x0A0A0A),
            start_button: Color::from_hex(0x2196F3),
            taskbar_text: Color::from_hex(0xFFFFFF),
            text: Color::from_hex(0xFFFFFF),
            text_secondary: Color::from_hex(0xB0B0B0),
            highlight: Color::from_hex(0x03A9F4),
            highlight_text: Color::from_hex(0x121212),
            accent: Color::from_hex(0xFF6B6B),
            error: Color::from_hex(0xF44336),
            success: Color::from_hex(0x4CAF50),
        }
    }
}
