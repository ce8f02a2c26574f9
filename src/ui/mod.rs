//! # User Interface Module
//!
//! Drawing primitives, theming and widget helpers for the shell.
//!
//! ## Modules
//!
//! - `draw`: pixel-level primitives (rectangles, rounded rectangles,
//!   outlines, 8x8 bitmap glyphs and text)
//! - `theme`: Color themes (classic, dark/light modern)
//! - `widgets`: `Rect` plus the `Panel` and `Label` widgets
//!
//! ## Text Metrics
//!
//! Glyphs come from the 8x8 `font8x8` bitmaps and are scaled by an integer
//! factor. The advance is always `8 * scale` pixels, so text never
//! overlaps itself at any scale.
//!
//! ## Example
//!
//! ```ignore
//! use deskshell::ui::{Theme, widgets::*};
//!
//! let theme = Theme::classic();
//! let mut panel = Panel::rounded(theme.highlight, 6);
//! panel.layout(Rect::new(0, 0, 200, 30));
//! panel.render(&mut surface, &theme);
//! ```

pub mod draw;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
pub use widgets::Rect;
