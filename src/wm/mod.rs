//! # Window Registry
//!
//! Ordered, bounded collection of top-level windows.
//!
//! Index = creation order = paint order: index 0 is painted first and sits
//! at the back. Windows are never removed, so an index stays valid for the
//! life of the registry.
//!
//! ## Active Window
//!
//! At most one record carries `active = true`, and it is always the record
//! at `active_window`. `create` only takes focus when no window had it yet;
//! `set_active` is the one operation that moves focus afterwards.
//!
//! Out-of-range indices given to `set_active`, `move_to` and `set_visible`
//! are ignored.

pub mod window;

pub use window::{WindowRecord, TITLE_BAR_HEIGHT, TITLE_CAPACITY};

use crate::error::RegistryError;
use heapless::Vec;

pub const MAX_WINDOWS: usize = 16;

#[derive(Debug, Default)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord, MAX_WINDOWS>,
    active_window: Option<usize>,
}

impl WindowRegistry {
    pub const fn new() -> Self {
        Self {
            windows: Vec::new(),
            active_window: None,
        }
    }

    pub fn create(&mut self, x: i32, y: i32, width: u32, height: u32, title: &str) -> Result<usize, RegistryError> {
        let index = self.windows.len();
        let mut record = WindowRecord::new(x, y, width, height, title);
        record.active = self.active_window.is_none();
        if self.windows.push(record).is_err() {
            log::warn!("wm: no slot left for window \"{}\"", title);
            return Err(RegistryError::Full);
        }
        if self.active_window.is_none() {
            self.active_window = Some(index);
        }
        log::debug!("wm: created window {} \"{}\" at ({}, {}) {}x{}", index, title, x, y, width, height);
        Ok(index)
    }

    pub fn set_active(&mut self, index: usize) {
        if index >= self.windows.len() {
            return;
        }
        for w in self.windows.iter_mut() {
            w.active = false;
        }
        self.active_window = Some(index);
        self.windows[index].active = true;
    }

    pub fn move_to(&mut self, index: usize, x: i32, y: i32) {
        if let Some(w) = self.windows.get_mut(index) {
            w.x = x;
            w.y = y;
        }
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) {
        if let Some(w) = self.windows.get_mut(index) {
            w.visible = visible;
        }
    }

    pub fn active_window(&self) -> Option<usize> {
        self.active_window
    }

    pub fn get(&self, index: usize) -> Option<&WindowRecord> {
        self.windows.get(index)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows in paint order, back first.
    pub fn back_to_front(&self) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.windows.iter()
    }
}
