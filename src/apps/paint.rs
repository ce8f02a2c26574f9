//! Paint placeholder. The canvas shows a notice until `c` clears it to the
//! window background.

use crate::app::App;
use crate::devices::framebuffer::Surface;
use crate::devices::input::Action;
use crate::ui::draw;
use crate::ui::widgets::{Panel, Rect, Widget};
use crate::ui::Theme;

#[derive(Debug, Default)]
pub struct Paint {
    cleared: u32,
}

impl Paint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clears since the app was opened.
    pub fn clears(&self) -> u32 {
        self.cleared
    }

    pub fn status(&self) -> &'static str {
        if self.cleared == 0 {
            "Press C to clear"
        } else {
            "Canvas cleared"
        }
    }

    pub fn canvas(area: Rect) -> Rect {
        let inner = area.inset(10);
        Rect::new(inner.x, inner.y, inner.w, inner.h.saturating_sub(20))
    }
}

impl App for Paint {
    fn title(&self) -> &'static str {
        "Paint"
    }

    fn on_action(&mut self, action: Action) {
        if let Action::Char('c' | 'C') = action {
            self.cleared += 1;
        }
    }

    fn render(&self, fb: &mut Surface<'_>, area: Rect, theme: &Theme) {
        let mut panel = Panel::new(theme.window_body);
        let canvas = panel.layout(Paint::canvas(area));
        panel.render(fb, theme);
        draw::draw_outline(fb, canvas, theme.border);
        if self.cleared == 0 {
            let mid = canvas.y + canvas.h as i32 / 2 - 8;
            draw::draw_text_centered(fb, "Paint", canvas, mid - 12, theme.text, 2);
            draw::draw_text_centered(fb, "Drawing tools are not available yet", canvas, mid + 12, theme.text_secondary, 1);
        }
        draw::draw_text(fb, self.status(), canvas.x, canvas.bottom() + 6, theme.text_secondary, 1);
    }
}
