//! # Calculator Application
//!
//! Four-function calculator on fixed-point numbers with two decimal
//! digits: the stored `i64` is the value times 100.
//!
//! ## Keys
//!
//! - `0`-`9`, `.`: edit the display
//! - `+ - * /`: take the display as the first operand
//! - `=` / Enter: take the display as the second operand and evaluate
//! - Backspace: delete the last character
//! - `c`: reset
//!
//! Division by zero evaluates to `0.00`.

use crate::app::App;
use crate::devices::framebuffer::Surface;
use crate::devices::input::Action;
use crate::ui::draw;
use crate::ui::widgets::{Panel, Rect, Widget};
use crate::ui::Theme;
use core::fmt::Write;
use heapless::String;

pub const SCALE: i64 = 100;
pub const DISPLAY_CAPACITY: usize = 24;

pub type DisplayText = String<DISPLAY_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            '+' => Operator::Add,
            '-' => Operator::Sub,
            '*' => Operator::Mul,
            '/' => Operator::Div,
            _ => return None,
        })
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operator::Add => a.saturating_add(b),
            Operator::Sub => a.saturating_sub(b),
            Operator::Mul => clamp_i64(a as i128 * b as i128 / SCALE as i128),
            Operator::Div => {
                if b == 0 {
                    0
                } else {
                    clamp_i64(a as i128 * SCALE as i128 / b as i128)
                }
            }
        }
    }
}

fn clamp_i64(v: i128) -> i64 {
    v.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Parse decimal text into fixed-point.
///
/// Accepts an optional `-`, integer digits, and an optional `.` with
/// fraction digits; fraction digits past the second are dropped. Parsing
/// stops at the first character that doesn't fit and keeps what it has.
pub fn text_to_fixed(text: &str) -> i64 {
    let mut chars = text.chars().peekable();
    let negative = chars.next_if_eq(&'-').is_some();

    let mut int_part: i64 = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        int_part = int_part.saturating_mul(10).saturating_add(d as i64);
        chars.next();
    }

    let mut frac: i64 = 0;
    let mut frac_digits = 0;
    if chars.next_if_eq(&'.').is_some() {
        while let Some(d) = chars.next().and_then(|c| c.to_digit(10)) {
            if frac_digits < 2 {
                frac = frac * 10 + d as i64;
                frac_digits += 1;
            }
        }
    }
    if frac_digits == 1 {
        frac *= 10;
    }

    let value = int_part.saturating_mul(SCALE).saturating_add(frac);
    if negative {
        -value
    } else {
        value
    }
}

/// Format fixed-point as decimal text with exactly two fraction digits.
pub fn fixed_to_text(value: i64) -> DisplayText {
    let mut out = DisplayText::new();
    let sign = if value < 0 { "-" } else { "" };
    let mag = value.unsigned_abs();
    // i64::MIN renders as 21 characters, well under capacity
    let _ = write!(out, "{}{}.{:02}", sign, mag / SCALE as u64, mag % SCALE as u64);
    out
}

pub struct Calculator {
    operand1: i64,
    operand2: i64,
    pending: Option<Operator>,
    display: DisplayText,
    new_number: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        let mut display = DisplayText::new();
        let _ = display.push('0');
        Self {
            operand1: 0,
            operand2: 0,
            pending: None,
            display,
            new_number: true,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Operator> {
        self.pending
    }

    pub fn input(&mut self, c: char) {
        match c {
            '0'..='9' => self.digit(c),
            '.' => self.decimal_point(),
            '=' => self.evaluate(),
            'c' | 'C' => *self = Calculator::new(),
            _ => {
                if let Some(op) = Operator::from_char(c) {
                    self.operator(op);
                }
            }
        }
    }

    fn digit(&mut self, c: char) {
        if self.new_number {
            self.display.clear();
            self.new_number = false;
        }
        // Full display: further digits are dropped
        let _ = self.display.push(c);
    }

    fn decimal_point(&mut self) {
        if self.new_number {
            self.display.clear();
            let _ = self.display.push_str("0.");
            self.new_number = false;
        } else if !self.display.contains('.') {
            let _ = self.display.push('.');
        }
    }

    fn operator(&mut self, op: Operator) {
        self.operand1 = text_to_fixed(&self.display);
        self.pending = Some(op);
        self.new_number = true;
    }

    fn evaluate(&mut self) {
        self.operand2 = text_to_fixed(&self.display);
        let result = match self.pending.take() {
            Some(op) => op.apply(self.operand1, self.operand2),
            None => self.operand2,
        };
        self.display = fixed_to_text(result);
        self.operand1 = result;
        self.new_number = true;
    }

    fn backspace(&mut self) {
        if self.new_number {
            return;
        }
        self.display.pop();
        if self.display.is_empty() {
            let _ = self.display.push('0');
            self.new_number = true;
        }
    }
}

const KEYPAD: [[char; 4]; 4] = [
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', '.', '=', '+'],
];

impl App for Calculator {
    fn title(&self) -> &'static str {
        "Calculator"
    }

    fn on_action(&mut self, action: Action) {
        match action {
            Action::Char(c) => self.input(c),
            Action::Confirm => self.evaluate(),
            Action::Backspace => self.backspace(),
            _ => {}
        }
    }

    fn render(&self, fb: &mut Surface<'_>, area: Rect, theme: &Theme) {
        let inner = area.inset(16);

        let mut screen = Panel::rounded(theme.text, 6);
        let screen_rect = screen.layout(Rect::new(inner.x, inner.y, inner.w, 40));
        screen.render(fb, theme);

        let text_x = screen_rect.right() - 12 - draw::text_width(&self.display, 2) as i32;
        draw::draw_text(fb, &self.display, text_x, screen_rect.y + 12, theme.window_body, 2);
        if let Some(op) = self.pending {
            draw::draw_glyph(fb, op.symbol(), screen_rect.x + 10, screen_rect.y + 16, theme.window_body, 1);
        }

        let pad_top = screen_rect.bottom() + 12;
        let key_w = 48;
        let key_h = 36;
        let gap = 8;
        for (row, keys) in KEYPAD.iter().enumerate() {
            for (col, &key) in keys.iter().enumerate() {
                let x = inner.x + col as i32 * (key_w + gap);
                let y = pad_top + row as i32 * (key_h + gap);
                let color = if Operator::from_char(key).is_some() || key == '=' {
                    theme.highlight
                } else {
                    theme.title_inactive
                };
                draw::fill_rounded_rect(fb, Rect::new(x, y, key_w as u32, key_h as u32), 5, color);
                draw::draw_glyph(fb, key, x + (key_w - 16) / 2, y + (key_h - 16) / 2, theme.highlight_text, 2);
            }
        }

        let help_y = pad_top + 4 * (key_h + gap) + 4;
        draw::draw_text(fb, "C: clear  Bksp: delete  Esc: menu", inner.x, help_y, theme.text_secondary, 1);
    }
}
