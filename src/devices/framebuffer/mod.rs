//! # Framebuffer Graphics Module
//!
//! Provides framebuffer access for the shell.
//!
//! ## Modules
//!
//! - `surface`: `Surface`, a clipped view over the boot framebuffer that is
//!   also an embedded-graphics `DrawTarget`
//! - `color`: `Color` type with common color constants
//!
//! ## Pixel Addressing
//!
//! Pixel `(x, y)` lives at byte offset `y * pitch_bytes + x * bytes_per_pixel`.
//! For 32-bit pixels that is word `y * (pitch_bytes / 4) + x`. Every write
//! goes through `Surface::set_pixel`, which drops coordinates outside
//! `[0, width) x [0, height)`.
//!
//! There is no back buffer and no dirty tracking: the compositor repaints
//! the whole surface every frame.

pub mod color;
pub mod surface;

pub use color::Color;
pub use surface::{PixelFormat, Surface, SurfaceInfo};
