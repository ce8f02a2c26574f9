//! # Input Event Types
//!
//! Decoded keyboard events. A key event carries the logical key and whether
//! it was just pressed, auto-repeated while held, or released. Shift is
//! already folded into `Key::Char`.
//!
//! The PS/2 controller reports a held key as a stream of identical make
//! codes. The decoder remembers which keys are down so the second and later
//! make codes of a hold become `KeyState::Repeated` instead of fresh
//! presses. Consumers that only care about "just pressed" filter on
//! `KeyState::Pressed`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Repeated,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
}

impl KeyEvent {
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Pressed
    }
}
