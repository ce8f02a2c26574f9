//! Device Subsystem
//!
//! Hardware-facing abstractions consumed by the shell:
//! - `framebuffer`: Pixel surface and colors
//! - `input`: Scancode decoding, key edge detection and action mapping

pub mod framebuffer;
pub mod input;
