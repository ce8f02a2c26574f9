//! # deskshell
//!
//! A single-window desktop shell for a bare-metal framebuffer.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              app::run (host loop)            │
//! │   poll input → dispatch → simulate → compose │
//! └──────┬──────────────┬───────────────┬────────┘
//!        ▼              ▼               ▼
//! ┌────────────┐ ┌─────────────┐ ┌──────────────┐
//! │ devices::  │ │  app / apps │ │   desktop    │
//! │ input      │ │ Menu, Calc, │ │ background,  │
//! │ (scancode→ │ │ Snake, Paint│ │ windows (wm),│
//! │  Action)   │ │             │ │ taskbar      │
//! └────────────┘ └──────┬──────┘ └──────┬───────┘
//!                       ▼               ▼
//!                ┌──────────────────────────────┐
//!                │ ui::draw  →  framebuffer     │
//!                └──────────────────────────────┘
//! ```
//!
//! The crate is `no_std`. Hardware lives in the `kernel` binary, which
//! implements [`devices::input::ScancodeSource`], [`desktop::Clock`] and
//! [`app::FrameTimer`] and hands a [`devices::framebuffer::Surface`] to
//! [`app::run`].

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod apps;
pub mod config;
pub mod desktop;
pub mod devices;
pub mod error;
pub mod rng;
pub mod ui;
pub mod wm;

pub use app::{run, Control, Shell};
pub use config::ShellConfig;
pub use error::ShellError;
