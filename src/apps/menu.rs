//! # Main Menu
//!
//! Vertical list of entries with a wrapping selection. The menu doesn't
//! act on `Confirm` itself; the host reads [`Menu::selected_item`] and
//! decides.

use crate::app::navigation;
use crate::devices::framebuffer::Surface;
use crate::error::CapacityError;
use crate::ui::draw;
use crate::ui::widgets::{vstack, Label, Panel, Rect, Widget};
use crate::ui::Theme;
use heapless::Vec;

pub const MAX_MENU_ITEMS: usize = 10;

const ROW_HEIGHT: u32 = 32;
const ROW_GAP: u32 = 6;

/// Which application a launch entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKind {
    Calculator,
    Snake,
    Paint,
}

/// Read-only text page shown over the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    Settings,
    About,
}

impl InfoPage {
    pub fn heading(self) -> &'static str {
        match self {
            InfoPage::Settings => "Settings",
            InfoPage::About => "About",
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            InfoPage::Settings => &[
                "Theme and background are chosen",
                "at boot and can't be changed here.",
            ],
            InfoPage::About => &[
                concat!("deskshell ", env!("CARGO_PKG_VERSION")),
                "A small desktop for bare metal.",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Launch(AppKind),
    Info(InfoPage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

pub const STANDARD_ITEMS: [MenuItem; 5] = [
    MenuItem { label: "Calculator", action: MenuAction::Launch(AppKind::Calculator) },
    MenuItem { label: "Snake", action: MenuAction::Launch(AppKind::Snake) },
    MenuItem { label: "Paint", action: MenuAction::Launch(AppKind::Paint) },
    MenuItem { label: "Settings", action: MenuAction::Info(InfoPage::Settings) },
    MenuItem { label: "About", action: MenuAction::Info(InfoPage::About) },
];

pub struct Menu {
    items: Vec<MenuItem, MAX_MENU_ITEMS>,
    selected: usize,
}

impl Menu {
    pub fn new(items: &[MenuItem]) -> Result<Self, CapacityError> {
        let items = Vec::from_slice(items).map_err(|_| CapacityError { capacity: MAX_MENU_ITEMS })?;
        Ok(Self { items, selected: 0 })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<MenuItem> {
        self.items.get(self.selected).copied()
    }

    pub fn up(&mut self) {
        self.selected = navigation::wrap_prev(self.selected, self.items.len());
    }

    pub fn down(&mut self) {
        self.selected = navigation::wrap_next(self.selected, self.items.len());
    }

    /// Row rectangle of entry `index` inside `area`.
    pub fn row(area: Rect, index: usize) -> Rect {
        let list = Rect::new(area.x + 20, area.y + 48, area.w.saturating_sub(40), area.h);
        vstack(list, ROW_HEIGHT, ROW_GAP, index)
    }

    pub fn render(&self, fb: &mut Surface<'_>, area: Rect, theme: &Theme) {
        draw::draw_text_centered(fb, "Main Menu", area, area.y + 14, theme.text, 2);

        for (i, item) in self.items.iter().enumerate() {
            let row = Menu::row(area, i);
            let color = if i == self.selected {
                let mut panel = Panel::rounded(theme.highlight, 6);
                panel.layout(row);
                panel.render(fb, theme);
                theme.highlight_text
            } else {
                theme.text
            };
            let mut label = Label::new(item.label, color, 2);
            label.layout(row);
            label.render(fb, theme);
        }

        let hint_y = area.bottom() - 18;
        draw::draw_text(fb, "Up/Down: select  Enter: open  Esc: exit", area.x + 20, hint_y, theme.text_secondary, 1);
    }
}
