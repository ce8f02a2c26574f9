//! # PS/2 Scancode Decoding
//!
//! Turns raw scancode set 1 bytes into `KeyEvent`s.
//!
//! ```text
//!  port 0x60 ──▶ ScancodeSource ──▶ KeyboardState ──▶ KeyEvent
//!                                   - 0xE0 prefix
//!                                   - make / break (bit 7)
//!                                   - held-key table
//!                                   - shift
//! ```
//!
//! The held-key table is indexed by `extended << 7 | code`, so the keypad
//! `8` (0x48) and the up arrow (0xE0 0x48) are tracked separately.

use super::events::{Key, KeyEvent, KeyState};

const EXTENDED_PREFIX: u8 = 0xE0;
const RELEASE_BIT: u8 = 0x80;

pub struct KeyboardState {
    is_extended: bool,
    shift_pressed: bool,
    held: [bool; 256],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub const fn new() -> Self {
        Self {
            is_extended: false,
            shift_pressed: false,
            held: [false; 256],
        }
    }

    /// Whether the (non-extended) key with make code `scancode` is down.
    pub fn is_down(&self, scancode: u8) -> bool {
        self.held[(scancode & !RELEASE_BIT) as usize]
    }

    /// Whether the extended (0xE0-prefixed) key with make code `scancode` is down.
    pub fn is_extended_down(&self, scancode: u8) -> bool {
        self.held[0x80 | (scancode & !RELEASE_BIT) as usize]
    }

    pub fn process_scancode(&mut self, scancode: u8) -> Option<KeyEvent> {
        if scancode == EXTENDED_PREFIX {
            self.is_extended = true;
            return None;
        }

        let extended = core::mem::replace(&mut self.is_extended, false);
        let is_release = scancode & RELEASE_BIT != 0;
        let key_code = scancode & !RELEASE_BIT;

        let slot = ((extended as usize) << 7) | key_code as usize;
        let was_down = self.held[slot];
        self.held[slot] = !is_release;

        // Left/right variants of Shift, Ctrl and Alt; only Shift changes keys
        match (extended, key_code) {
            (false, 0x2A) | (false, 0x36) => {
                self.shift_pressed = !is_release;
                return None;
            }
            (_, 0x1D) | (_, 0x38) => return None,
            _ => {}
        }

        let key = if extended {
            Self::extended_key(key_code)?
        } else {
            self.base_key(key_code)?
        };

        let state = if is_release {
            KeyState::Released
        } else if was_down {
            KeyState::Repeated
        } else {
            KeyState::Pressed
        };

        Some(KeyEvent { key, state })
    }

    fn extended_key(key_code: u8) -> Option<Key> {
        Some(match key_code {
            0x48 => Key::Up,
            0x50 => Key::Down,
            0x4B => Key::Left,
            0x4D => Key::Right,
            0x1C => Key::Enter,
            0x35 => Key::Char('/'),
            _ => return None,
        })
    }

    fn base_key(&self, key_code: u8) -> Option<Key> {
        Some(match key_code {
            0x01 => Key::Escape,
            0x0E => Key::Backspace,
            0x0F => Key::Tab,
            0x1C => Key::Enter,
            // Keypad, no num-lock tracking: always digits and operators
            0x37 => Key::Char('*'),
            0x4A => Key::Char('-'),
            0x4E => Key::Char('+'),
            0x53 => Key::Char('.'),
            0x47..=0x52 => Key::Char(Self::keypad_digit(key_code)?),
            _ => Key::Char(self.scancode_to_char(key_code)?),
        })
    }

    fn keypad_digit(key_code: u8) -> Option<char> {
        Some(match key_code {
            0x47 => '7',
            0x48 => '8',
            0x49 => '9',
            0x4B => '4',
            0x4C => '5',
            0x4D => '6',
            0x4F => '1',
            0x50 => '2',
            0x51 => '3',
            0x52 => '0',
            _ => return None,
        })
    }

    fn scancode_to_char(&self, scancode: u8) -> Option<char> {
        let shift = self.shift_pressed;
        let letter = |c: char| if shift { c.to_ascii_uppercase() } else { c };
        let ch = match scancode {
            0x02..=0x0B => {
                // Number row: 1-9, 0
                let digit = if scancode == 0x0B { '0' } else { (scancode - 0x02 + b'1') as char };
                if shift {
                    match digit {
                        '1' => '!', '2' => '@', '3' => '#', '4' => '$', '5' => '%',
                        '6' => '^', '7' => '&', '8' => '*', '9' => '(', '0' => ')',
                        _ => digit,
                    }
                } else {
                    digit
                }
            }
            0x10 => letter('q'),
            0x11 => letter('w'),
            0x12 => letter('e'),
            0x13 => letter('r'),
            0x14 => letter('t'),
            0x15 => letter('y'),
            0x16 => letter('u'),
            0x17 => letter('i'),
            0x18 => letter('o'),
            0x19 => letter('p'),
            0x1E => letter('a'),
            0x1F => letter('s'),
            0x20 => letter('d'),
            0x21 => letter('f'),
            0x22 => letter('g'),
            0x23 => letter('h'),
            0x24 => letter('j'),
            0x25 => letter('k'),
            0x26 => letter('l'),
            0x2C => letter('z'),
            0x2D => letter('x'),
            0x2E => letter('c'),
            0x2F => letter('v'),
            0x30 => letter('b'),
            0x31 => letter('n'),
            0x32 => letter('m'),

            0x39 => ' ',

            0x1A => if shift { '{' } else { '[' },
            0x1B => if shift { '}' } else { ']' },
            0x27 => if shift { ':' } else { ';' },
            0x28 => if shift { '"' } else { '\'' },
            0x29 => if shift { '~' } else { '`' },
            0x2B => if shift { '|' } else { '\\' },
            0x33 => if shift { '<' } else { ',' },
            0x34 => if shift { '>' } else { '.' },
            0x35 => if shift { '?' } else { '/' },
            0x0C => if shift { '_' } else { '-' },
            0x0D => if shift { '+' } else { '=' },

            _ => return None,
        };

        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(kb: &mut KeyboardState, bytes: &[u8]) -> Option<KeyEvent> {
        let mut last = None;
        for &b in bytes {
            last = kb.process_scancode(b);
        }
        last
    }

    #[test]
    fn press_repeat_release() {
        let mut kb = KeyboardState::new();
        let first = kb.process_scancode(0x1E).unwrap();
        assert_eq!(first.key, Key::Char('a'));
        assert_eq!(first.state, KeyState::Pressed);
        assert!(kb.is_down(0x1E));

        let again = kb.process_scancode(0x1E).unwrap();
        assert_eq!(again.state, KeyState::Repeated);

        let up = kb.process_scancode(0x9E).unwrap();
        assert_eq!(up.state, KeyState::Released);
        assert!(!kb.is_down(0x1E));

        assert_eq!(kb.process_scancode(0x1E).unwrap().state, KeyState::Pressed);
    }

    #[test]
    fn arrows_are_extended() {
        let mut kb = KeyboardState::new();
        let up = feed(&mut kb, &[0xE0, 0x48]).unwrap();
        assert_eq!(up.key, Key::Up);
        assert!(kb.is_extended_down(0x48));
        assert!(!kb.is_down(0x48));

        // Same code without the prefix is the keypad 8
        let kp = kb.process_scancode(0x48).unwrap();
        assert_eq!(kp.key, Key::Char('8'));
        assert_eq!(kp.state, KeyState::Pressed);

        let released = feed(&mut kb, &[0xE0, 0xC8]).unwrap();
        assert_eq!((released.key, released.state), (Key::Up, KeyState::Released));
    }

    #[test]
    fn shift_maps_operators() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.process_scancode(0x2A), None);
        assert_eq!(kb.process_scancode(0x0D).unwrap().key, Key::Char('+'));
        assert_eq!(kb.process_scancode(0x09).unwrap().key, Key::Char('*'));
        assert_eq!(kb.process_scancode(0x10).unwrap().key, Key::Char('Q'));
        kb.process_scancode(0xAA);
        assert_eq!(kb.process_scancode(0x0C).unwrap().key, Key::Char('-'));
    }

    #[test]
    fn control_keys() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.process_scancode(0x01).unwrap().key, Key::Escape);
        assert_eq!(kb.process_scancode(0x1C).unwrap().key, Key::Enter);
        assert_eq!(feed(&mut kb, &[0xE0, 0x35]).unwrap().key, Key::Char('/'));
        assert_eq!(kb.process_scancode(0x7F), None);
    }
}
