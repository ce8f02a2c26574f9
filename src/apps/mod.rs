//! # Applications Module
//!
//! The programs the shell window can show.
//!
//! ## Available Apps
//!
//! - `menu`: launcher list, always present
//! - `calculator`: fixed-point four-function calculator
//! - `snake`: grid snake game
//! - `paint`: placeholder canvas
//!
//! Everything except the menu implements `crate::app::App`; the host owns
//! at most one of them at a time.

pub mod calculator;
pub mod menu;
pub mod paint;
pub mod snake;

pub use calculator::Calculator;
pub use menu::{AppKind, InfoPage, Menu, MenuAction, MenuItem, STANDARD_ITEMS};
pub use paint::Paint;
pub use snake::Snake;
