//! # Application Framework
//!
//! The shell proper: a window registry, the desktop that paints it, and
//! the application host that lives in the focused shell window.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    Shell                      │
//! │  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │WindowRegistry│  │ Desktop (compositor) │  │
//! │  └──────────────┘  └──────────────────────┘  │
//! │  ┌────────────────────────────────────────┐  │
//! │  │ AppHost: Menu | Calculator | Snake |   │  │
//! │  │          Paint, plus an Overlay        │  │
//! │  └────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Frame
//!
//! 1. Drain the keyboard into actions
//! 2. Dispatch each action to the host (overlay first, then the mode)
//! 3. Tick the live app and refresh the clock
//! 4. Compose the whole screen
//!
//! [`run`] repeats that on a fixed interval until the exit prompt is
//! confirmed.

use crate::apps::{Menu, STANDARD_ITEMS};
use crate::config::ShellConfig;
use crate::desktop::{Clock, Desktop};
use crate::devices::framebuffer::Surface;
use crate::devices::input::{collect_actions, Action, KeyboardState, ScancodeSource};
use crate::error::ShellError;
use crate::rng::Lcg;
use crate::ui::draw;
use crate::ui::widgets::Rect;
use crate::ui::Theme;
use crate::wm::WindowRegistry;
use heapless::Vec;

pub mod host;
pub mod navigation;

pub use host::{AppHost, ExitChoice, Mode, Overlay};

/// Actions buffered per frame; the rest of a burst is dropped.
pub const MAX_ACTIONS_PER_FRAME: usize = 32;

const SHELL_TITLE: &str = "deskshell";
const NOTES_TITLE: &str = "Notes";
const NOTES_SIZE: (u32, u32) = (240, 150);
const WINDOW_MARGIN: u32 = 10;

const NOTES_LINES: [&str; 5] = [
    "Arrows: move",
    "Enter:  select",
    "Esc:    back / exit",
    "Snake:  arrows or WASD",
    "Calc:   digits + - * / =",
];

/// Whether the host loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// A program that can run inside the shell window.
pub trait App {
    fn title(&self) -> &'static str;
    fn on_action(&mut self, action: Action);
    /// Called once per frame while the app is live.
    fn tick(&mut self, _rng: &mut Lcg) {}
    fn render(&self, fb: &mut Surface<'_>, area: Rect, theme: &Theme);
}

/// Monotonic millisecond time plus a way to sleep until a deadline.
pub trait FrameTimer {
    fn now_ms(&self) -> u64;
    fn wait_until(&mut self, deadline_ms: u64);
}

pub struct Shell {
    config: ShellConfig,
    registry: WindowRegistry,
    desktop: Desktop,
    host: AppHost,
    shell_window: usize,
    notes_window: Option<usize>,
}

impl Shell {
    /// Build the desktop for a `width x height` screen: an optional notes
    /// window, then the shell window, which gets focus.
    pub fn new<C: Clock + ?Sized>(
        config: ShellConfig,
        width: u32,
        height: u32,
        clock: &mut C,
        now_ms: u64,
    ) -> Result<Self, ShellError> {
        let desktop = Desktop::new(&config, clock, now_ms);
        let work = desktop.work_area(width, height);
        let shell_rect = shell_window_rect(&config, work);

        let mut registry = WindowRegistry::new();
        let notes_window = if config.show_notes {
            let notes = notes_window_rect(shell_rect, work);
            Some(registry.create(notes.x, notes.y, notes.w, notes.h, NOTES_TITLE)?)
        } else {
            None
        };
        let shell_window = registry.create(shell_rect.x, shell_rect.y, shell_rect.w, shell_rect.h, SHELL_TITLE)?;
        registry.set_active(shell_window);

        let area = registry
            .get(shell_window)
            .map(|w| w.content())
            .unwrap_or(shell_rect);
        let host = AppHost::new(Menu::new(&STANDARD_ITEMS)?, config.rng_seed, area);

        log::info!(
            "shell: {}x{} screen, {} windows, shell window at ({}, {}) {}x{}",
            width,
            height,
            registry.len(),
            shell_rect.x,
            shell_rect.y,
            shell_rect.w,
            shell_rect.h
        );

        Ok(Self {
            config,
            registry,
            desktop,
            host,
            shell_window,
            notes_window,
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn desktop(&self) -> &Desktop {
        &self.desktop
    }

    pub fn host(&self) -> &AppHost {
        &self.host
    }

    pub fn shell_window(&self) -> usize {
        self.shell_window
    }

    pub fn notes_window(&self) -> Option<usize> {
        self.notes_window
    }

    /// Move the shell window; apps started later use the new content area.
    pub fn move_shell_window(&mut self, x: i32, y: i32) {
        self.registry.move_to(self.shell_window, x, y);
        if let Some(window) = self.registry.get(self.shell_window) {
            self.host.set_area(window.content());
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Control {
        self.host.handle(action)
    }

    /// Per-frame simulation: app tick and clock refresh.
    pub fn update<C: Clock + ?Sized>(&mut self, now_ms: u64, clock: &mut C) {
        self.host.tick();
        self.desktop.refresh_clock(clock, now_ms);
    }

    pub fn render(&self, fb: &mut Surface<'_>) {
        let theme = &self.config.theme;
        self.desktop.compose_with(fb, &self.registry, theme, |fb, index, window| {
            if index == self.shell_window {
                self.host.render(fb, window.content(), theme);
            } else if Some(index) == self.notes_window {
                render_notes(fb, window.content(), theme);
            }
        });
    }

    /// One full iteration over already collected actions. Stops at the
    /// first action that exits, without drawing.
    pub fn frame<C: Clock + ?Sized>(
        &mut self,
        fb: &mut Surface<'_>,
        actions: &[Action],
        now_ms: u64,
        clock: &mut C,
    ) -> Control {
        for &action in actions {
            if self.handle_action(action) == Control::Exit {
                log::info!("shell: exit confirmed");
                return Control::Exit;
            }
        }
        self.update(now_ms, clock);
        self.render(fb);
        Control::Continue
    }
}

/// Configured placement, shrunk to leave a margin inside `work`.
fn shell_window_rect(config: &ShellConfig, work: Rect) -> Rect {
    let layout = config.shell_window;
    let x = layout.x.clamp(0, work.w as i32);
    let y = layout.y.clamp(0, work.h as i32);
    let w = layout.width.min(work.w.saturating_sub(x as u32 + WINDOW_MARGIN));
    let h = layout.height.min(work.h.saturating_sub(y as u32 + WINDOW_MARGIN));
    Rect::new(x, y, w, h)
}

/// Right of the shell window when there is room, otherwise tucked
/// behind its lower right corner.
fn notes_window_rect(shell: Rect, work: Rect) -> Rect {
    let (w, h) = NOTES_SIZE;
    let beside = shell.right() + 2 * WINDOW_MARGIN as i32;
    let x = if beside + w as i32 <= work.right() {
        beside
    } else {
        (work.right() - w as i32 - WINDOW_MARGIN as i32).max(0)
    };
    let y = (shell.y + 40).min(work.bottom() - h as i32).max(0);
    Rect::new(x, y, w, h)
}

fn render_notes(fb: &mut Surface<'_>, area: Rect, theme: &Theme) {
    let inner = area.inset(10);
    for (i, line) in NOTES_LINES.iter().enumerate() {
        draw::draw_text(fb, line, inner.x, inner.y + i as i32 * 16, theme.text, 1);
    }
}

/// Drive the shell until the exit prompt is confirmed.
///
/// Each iteration waits for the next frame deadline, drains `source`,
/// and runs [`Shell::frame`]. A loop that falls behind skips ahead
/// rather than running frames back to back.
pub fn run<S, C, T>(shell: &mut Shell, fb: &mut Surface<'_>, source: &mut S, clock: &mut C, timer: &mut T)
where
    S: ScancodeSource + ?Sized,
    C: Clock + ?Sized,
    T: FrameTimer + ?Sized,
{
    let interval = shell.config().frame_interval_ms.max(1);
    let mut keyboard = KeyboardState::new();
    let mut actions: Vec<Action, MAX_ACTIONS_PER_FRAME> = Vec::new();
    let mut deadline = timer.now_ms();
    let mut frames: u64 = 0;

    shell.render(fb);
    loop {
        timer.wait_until(deadline);
        let now = timer.now_ms();

        actions.clear();
        collect_actions(source, &mut keyboard, &mut actions);
        if shell.frame(fb, &actions, now, clock) == Control::Exit {
            log::info!("shell: leaving host loop after {} frames", frames);
            return;
        }
        frames += 1;
        deadline = (deadline + interval).max(now);
    }
}
