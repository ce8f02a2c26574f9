//! The shell window's state machine.
//!
//! ```text
//!            Confirm (launch entry)
//!   ┌──────┐ ─────────────────────▶ ┌──────────────────────────┐
//!   │ Menu │                        │ Calculator / Snake / Paint│
//!   └──────┘ ◀───────────────────── └──────────────────────────┘
//!     │  ▲          Cancel
//!     │  │ any action / n / Esc
//!     ▼  │
//!   Overlay: Info page, ConfirmExit ──(Yes)──▶ Control::Exit
//! ```

use super::{navigation, App, Control};
use crate::apps::{AppKind, Calculator, InfoPage, Menu, MenuAction, Paint, Snake};
use crate::devices::framebuffer::Surface;
use crate::devices::input::Action;
use crate::rng::Lcg;
use crate::ui::draw;
use crate::ui::widgets::{Panel, Rect, Widget};
use crate::ui::Theme;

/// What the shell window is showing. Only the live variant has state.
pub enum Mode {
    Menu,
    Calculator(Calculator),
    Snake(Snake),
    Paint(Paint),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self.app() {
            Some(app) => app.title(),
            None => "Menu",
        }
    }

    fn app(&self) -> Option<&dyn App> {
        match self {
            Mode::Menu => None,
            Mode::Calculator(app) => Some(app),
            Mode::Snake(app) => Some(app),
            Mode::Paint(app) => Some(app),
        }
    }

    fn app_mut(&mut self) -> Option<&mut dyn App> {
        match self {
            Mode::Menu => None,
            Mode::Calculator(app) => Some(app),
            Mode::Snake(app) => Some(app),
            Mode::Paint(app) => Some(app),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Yes,
    No,
}

impl ExitChoice {
    fn toggled(self) -> Self {
        match self {
            ExitChoice::Yes => ExitChoice::No,
            ExitChoice::No => ExitChoice::Yes,
        }
    }
}

/// Modal layer over the menu; it takes all input while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Info(InfoPage),
    ConfirmExit(ExitChoice),
}

pub struct AppHost {
    mode: Mode,
    overlay: Option<Overlay>,
    menu: Menu,
    rng: Lcg,
    area: Rect,
}

impl AppHost {
    /// Starts at the menu. `area` is the shell window's content rect.
    pub fn new(menu: Menu, seed: u32, area: Rect) -> Self {
        Self {
            mode: Mode::Menu,
            overlay: None,
            menu,
            rng: Lcg::new(seed),
            area,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Track the shell window's content rect. Takes effect for apps
    /// launched afterwards.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn handle(&mut self, action: Action) -> Control {
        if let Some(overlay) = self.overlay {
            return self.handle_overlay(overlay, action);
        }

        if let Some(app) = self.mode.app_mut() {
            if action == Action::Cancel {
                log::info!("host: {} -> Menu", app.title());
                self.mode = Mode::Menu;
            } else {
                app.on_action(action);
            }
            return Control::Continue;
        }

        match action {
            Action::Up => self.menu.up(),
            Action::Down => self.menu.down(),
            Action::Confirm => match self.menu.selected_item().map(|item| item.action) {
                Some(MenuAction::Launch(kind)) => self.launch(kind),
                Some(MenuAction::Info(page)) => self.overlay = Some(Overlay::Info(page)),
                None => {}
            },
            Action::Cancel => self.overlay = Some(Overlay::ConfirmExit(ExitChoice::No)),
            _ => {}
        }
        Control::Continue
    }

    fn handle_overlay(&mut self, overlay: Overlay, action: Action) -> Control {
        let choice = match overlay {
            Overlay::Info(_) => {
                self.overlay = None;
                return Control::Continue;
            }
            Overlay::ConfirmExit(choice) => choice,
        };

        match action {
            Action::Left | Action::Right | Action::Up | Action::Down => {
                self.overlay = Some(Overlay::ConfirmExit(choice.toggled()));
            }
            Action::Confirm if choice == ExitChoice::Yes => return Control::Exit,
            Action::Char('y' | 'Y') => return Control::Exit,
            Action::Confirm | Action::Cancel | Action::Char('n' | 'N') => self.overlay = None,
            _ => {}
        }
        Control::Continue
    }

    /// Enter `kind` with a fresh state.
    pub fn launch(&mut self, kind: AppKind) {
        self.mode = match kind {
            AppKind::Calculator => Mode::Calculator(Calculator::new()),
            AppKind::Snake => Mode::Snake(Snake::new(self.area, &mut self.rng)),
            AppKind::Paint => Mode::Paint(Paint::new()),
        };
        self.overlay = None;
        log::info!("host: Menu -> {}", self.mode.name());
    }

    /// Advance the live app's simulation by one frame.
    pub fn tick(&mut self) {
        if self.overlay.is_some() {
            return;
        }
        if let Some(app) = self.mode.app_mut() {
            app.tick(&mut self.rng);
        }
    }

    pub fn render(&self, fb: &mut Surface<'_>, area: Rect, theme: &Theme) {
        match self.mode.app() {
            Some(app) => app.render(fb, area, theme),
            None => self.menu.render(fb, area, theme),
        }
        match self.overlay {
            Some(Overlay::Info(page)) => render_info(fb, area, theme, page),
            Some(Overlay::ConfirmExit(choice)) => render_confirm(fb, area, theme, choice),
            None => {}
        }
    }
}

fn dialog(fb: &mut Surface<'_>, area: Rect, theme: &Theme, w: u32, h: u32) -> Rect {
    let mut panel = Panel::rounded(theme.title_inactive, 8);
    let rect = panel.layout(area.centered(w, h));
    panel.render(fb, theme);
    let body = rect.inset(2);
    draw::fill_rounded_rect(fb, body, 7, theme.window_body);
    body
}

fn render_info(fb: &mut Surface<'_>, area: Rect, theme: &Theme, page: InfoPage) {
    let body = dialog(fb, area, theme, 320, 130);
    draw::draw_text_centered(fb, page.heading(), body, body.y + 12, theme.text, 2);
    for (i, line) in page.lines().iter().enumerate() {
        draw::draw_text_centered(fb, line, body, body.y + 44 + i as i32 * 14, theme.text, 1);
    }
    draw::draw_text_centered(fb, "Press any key", body, body.bottom() - 20, theme.text_secondary, 1);
}

fn render_confirm(fb: &mut Surface<'_>, area: Rect, theme: &Theme, choice: ExitChoice) {
    let body = dialog(fb, area, theme, 280, 120);
    draw::draw_text_centered(fb, "Exit the shell?", body, body.y + 16, theme.text, 2);

    let (bw, bh) = (80u32, 28u32);
    let y = body.bottom() - bh as i32 - 16;
    let mid = body.x + body.w as i32 / 2;
    let buttons = [
        (ExitChoice::Yes, "Yes", Rect::new(mid - bw as i32 - 10, y, bw, bh)),
        (ExitChoice::No, "No", Rect::new(mid + 10, y, bw, bh)),
    ];
    for (value, label, rect) in buttons {
        let (bg, fg) = if value == choice {
            (theme.highlight, theme.highlight_text)
        } else {
            (theme.title_inactive, theme.title_text)
        };
        draw::fill_rounded_rect(fb, rect, 5, bg);
        draw::draw_text_centered(fb, label, rect, rect.y + (bh as i32 - 16) / 2, fg, 2);
        if value == choice {
            navigation::draw_focus_ring(fb, rect, theme.accent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::STANDARD_ITEMS;

    fn host() -> AppHost {
        let menu = Menu::new(&STANDARD_ITEMS).unwrap();
        AppHost::new(menu, 7, Rect::new(0, 0, 400, 300))
    }

    fn select(h: &mut AppHost, index: usize) {
        while h.menu().selected() != index {
            h.handle(Action::Down);
        }
    }

    #[test]
    fn starts_at_menu_without_overlay() {
        let h = host();
        assert!(matches!(h.mode(), Mode::Menu));
        assert_eq!(h.overlay(), None);
    }

    #[test]
    fn menu_wraps_through_the_host() {
        let mut h = host();
        h.handle(Action::Up);
        assert_eq!(h.menu().selected(), 4);
        h.handle(Action::Down);
        assert_eq!(h.menu().selected(), 0);
    }

    #[test]
    fn confirm_launches_and_cancel_returns() {
        let mut h = host();
        h.handle(Action::Confirm);
        assert!(matches!(h.mode(), Mode::Calculator(_)));
        assert_eq!(h.handle(Action::Cancel), Control::Continue);
        assert!(matches!(h.mode(), Mode::Menu));

        select(&mut h, 1);
        h.handle(Action::Confirm);
        assert!(matches!(h.mode(), Mode::Snake(_)));
        select_back(&mut h);

        select(&mut h, 2);
        h.handle(Action::Confirm);
        assert!(matches!(h.mode(), Mode::Paint(_)));
    }

    fn select_back(h: &mut AppHost) {
        h.handle(Action::Cancel);
        assert!(matches!(h.mode(), Mode::Menu));
    }

    #[test]
    fn reentering_starts_fresh() {
        let mut h = host();
        h.handle(Action::Confirm);
        h.handle(Action::Char('4'));
        h.handle(Action::Char('2'));
        match h.mode() {
            Mode::Calculator(c) => assert_eq!(c.display(), "42"),
            _ => panic!("expected calculator"),
        }
        h.handle(Action::Cancel);
        h.handle(Action::Confirm);
        match h.mode() {
            Mode::Calculator(c) => assert_eq!(c.display(), "0"),
            _ => panic!("expected calculator"),
        }
    }

    #[test]
    fn snake_game_over_still_cancels() {
        let mut h = host();
        select(&mut h, 1);
        h.handle(Action::Confirm);
        for _ in 0..100 {
            h.tick();
        }
        match h.mode() {
            Mode::Snake(s) => assert!(s.is_game_over()),
            _ => panic!("expected snake"),
        }
        h.handle(Action::Cancel);
        assert!(matches!(h.mode(), Mode::Menu));
    }

    #[test]
    fn info_pages_dismiss_on_any_action() {
        let mut h = host();
        select(&mut h, 3);
        h.handle(Action::Confirm);
        assert_eq!(h.overlay(), Some(Overlay::Info(InfoPage::Settings)));
        assert!(matches!(h.mode(), Mode::Menu));
        h.handle(Action::Char('q'));
        assert_eq!(h.overlay(), None);
        assert_eq!(h.menu().selected(), 3);

        h.handle(Action::Down);
        h.handle(Action::Confirm);
        assert_eq!(h.overlay(), Some(Overlay::Info(InfoPage::About)));
        // The dismissing action is consumed
        h.handle(Action::Down);
        assert_eq!(h.overlay(), None);
        assert_eq!(h.menu().selected(), 4);
    }

    #[test]
    fn exit_prompt_defaults_to_no() {
        let mut h = host();
        h.handle(Action::Cancel);
        assert_eq!(h.overlay(), Some(Overlay::ConfirmExit(ExitChoice::No)));
        assert_eq!(h.handle(Action::Confirm), Control::Continue);
        assert_eq!(h.overlay(), None);
        assert!(matches!(h.mode(), Mode::Menu));
    }

    #[test]
    fn exit_prompt_toggles_and_exits() {
        let mut h = host();
        h.handle(Action::Cancel);
        h.handle(Action::Left);
        assert_eq!(h.overlay(), Some(Overlay::ConfirmExit(ExitChoice::Yes)));
        h.handle(Action::Right);
        h.handle(Action::Right);
        assert_eq!(h.handle(Action::Confirm), Control::Exit);
    }

    #[test]
    fn exit_prompt_letter_shortcuts() {
        let mut h = host();
        h.handle(Action::Cancel);
        assert_eq!(h.handle(Action::Char('n')), Control::Continue);
        assert_eq!(h.overlay(), None);

        h.handle(Action::Cancel);
        assert_eq!(h.handle(Action::Cancel), Control::Continue);
        assert_eq!(h.overlay(), None);

        h.handle(Action::Cancel);
        assert_eq!(h.handle(Action::Char('x')), Control::Continue);
        assert!(h.overlay().is_some());
        assert_eq!(h.handle(Action::Char('y')), Control::Exit);
    }

    #[test]
    fn ticks_pause_under_overlay() {
        let mut h = host();
        h.handle(Action::Cancel);
        h.tick();
        select_back_from_overlay(&mut h);
        select(&mut h, 1);
        h.handle(Action::Confirm);
        let head = match h.mode() {
            Mode::Snake(s) => s.head(),
            _ => panic!("expected snake"),
        };
        h.tick();
        match h.mode() {
            Mode::Snake(s) => assert_ne!(s.head(), head),
            _ => panic!("expected snake"),
        }
    }

    fn select_back_from_overlay(h: &mut AppHost) {
        h.handle(Action::Char('n'));
        assert_eq!(h.overlay(), None);
    }
}
