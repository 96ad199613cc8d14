//! Console geometry.

use crate::error::ConsoleError;

/// The number of characters on one line of the console.
pub const H_CHARS: usize = 80;

/// The configuration of a console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    width: usize,
}

impl ConsoleConfig {
    /// Create a config with `width` characters per line.
    ///
    /// A line must hold at least one character, so `0` is rejected.
    pub fn new(width: usize) -> Result<Self, ConsoleError> {
        if width == 0 {
            return Err(ConsoleError::ZeroWidth);
        }
        Ok(Self { width })
    }

    /// The line width, always greater than 0.
    pub fn width(&self) -> usize {
        self.width
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { width: H_CHARS }
    }
}
