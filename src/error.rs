//! Error types shared across the shell.
//!
//! Most failure modes in the shell are policy-defined and silent (an
//! out-of-range window index is ignored, a division by zero yields zero).
//! The few that a caller has to look at are collected here.

use core::fmt;

/// The window registry has no free slot left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    Full,
}

/// A bounded container refused an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub capacity: usize,
}

/// The framebuffer handed over at boot can't be drawn to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    BufferTooSmall { needed: usize, actual: usize },
    UnsupportedPixelSize(usize),
}

/// Failure while assembling the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    Registry(RegistryError),
    Menu(CapacityError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::Full => write!(f, "window registry is full"),
        }
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity of {} exceeded", self.capacity)
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::BufferTooSmall { needed, actual } => {
                write!(f, "framebuffer too small: need {} bytes, got {}", needed, actual)
            }
            SurfaceError::UnsupportedPixelSize(bpp) => {
                write!(f, "unsupported pixel size: {} bytes", bpp)
            }
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Registry(e) => write!(f, "shell window: {}", e),
            ShellError::Menu(e) => write!(f, "menu: {}", e),
        }
    }
}

impl From<RegistryError> for ShellError {
    fn from(e: RegistryError) -> Self {
        ShellError::Registry(e)
    }
}

impl From<CapacityError> for ShellError {
    fn from(e: CapacityError) -> Self {
        ShellError::Menu(e)
    }
}
