//! # Input Device Module
//!
//! Turns the keyboard controller's byte stream into shell actions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  ScancodeSource  │  (kernel: PS/2 port poll)
//! └────────┬─────────┘
//!          │ u8
//!          ▼
//! ┌──────────────────┐
//! │  KeyboardState   │  make/break, 0xE0, held keys
//! └────────┬─────────┘
//!          │ KeyEvent
//!          ▼
//! ┌──────────────────┐
//! │  keymap          │  Pressed only → Action
//! └──────────────────┘
//! ```
//!
//! The source is still a poll, but the decoder remembers which keys are
//! held, so a key that stays down produces exactly one action.

pub mod events;
pub mod keymap;
pub mod scancode;

pub use events::{Key, KeyEvent, KeyState};
pub use keymap::{action_for, collect_actions, Action};
pub use scancode::KeyboardState;

/// Non-blocking access to the keyboard controller's output buffer.
pub trait ScancodeSource {
    /// Next pending scancode byte, or `None` when the buffer is empty.
    fn poll_scancode(&mut self) -> Option<u8>;
}
