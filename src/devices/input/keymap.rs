//! Key events to logical shell actions.

use super::events::{Key, KeyEvent};
use super::scancode::KeyboardState;
use super::ScancodeSource;
use heapless::Vec;

/// Upper bound on scancodes read from the controller in one frame.
pub const MAX_SCANCODES_PER_FRAME: usize = 64;

/// What the shell reacts to, independent of the physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Backspace,
    Char(char),
}

/// Only fresh presses become actions; repeats and releases are dropped.
pub fn action_for(event: &KeyEvent) -> Option<Action> {
    if !event.is_press() {
        return None;
    }
    Some(match event.key {
        Key::Up => Action::Up,
        Key::Down => Action::Down,
        Key::Left => Action::Left,
        Key::Right => Action::Right,
        Key::Enter => Action::Confirm,
        Key::Escape => Action::Cancel,
        Key::Backspace => Action::Backspace,
        Key::Char(c) => Action::Char(c),
        Key::Tab => return None,
    })
}

/// Drain pending scancodes into `out`.
///
/// Every byte is fed to the decoder so the held-key table stays accurate
/// even when `out` is already full; actions that don't fit are dropped.
pub fn collect_actions<S, const N: usize>(
    source: &mut S,
    keyboard: &mut KeyboardState,
    out: &mut Vec<Action, N>,
) -> usize
where
    S: ScancodeSource + ?Sized,
{
    let mut dropped = 0;
    for _ in 0..MAX_SCANCODES_PER_FRAME {
        let Some(scancode) = source.poll_scancode() else {
            break;
        };
        let Some(action) = keyboard.process_scancode(scancode).as_ref().and_then(action_for) else {
            continue;
        };
        if out.push(action).is_err() {
            dropped += 1;
        }
    }
    if dropped > 0 {
        log::warn!("input: dropped {} actions this frame", dropped);
    }
    dropped
}
