use crate::ui::widgets::Rect;
use heapless::String;

/// Characters kept from a window title.
pub const TITLE_CAPACITY: usize = 63;

/// Height of the title bar strip.
pub const TITLE_BAR_HEIGHT: u32 = 25;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    title: String<TITLE_CAPACITY>,
    pub visible: bool,
    pub active: bool,
}

impl WindowRecord {
    pub(crate) fn new(x: i32, y: i32, width: u32, height: u32, title: &str) -> Self {
        Self {
            x,
            y,
            width,
            height,
            title: truncate_title(title),
            visible: true,
            active: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn title_bar(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, TITLE_BAR_HEIGHT.min(self.height))
    }

    /// Area below the title bar.
    pub fn content(&self) -> Rect {
        let bar = TITLE_BAR_HEIGHT.min(self.height);
        Rect::new(self.x, self.y + bar as i32, self.width, self.height - bar)
    }
}

fn truncate_title(title: &str) -> String<TITLE_CAPACITY> {
    let mut out = String::new();
    for ch in title.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
