//! Proka Conio - The console I/O library for ProkaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! The horizontal cursor of the console. It only knows the column
//! and the line width; which row we are on is the sink's business.

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

/// The horizontal cursor position.
///
/// The column is always in `0..width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    column: usize,
    width: usize,
}

impl Cursor {
    /// Create a cursor at the start of the line.
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            column: 0,
            width: config.width(),
        }
    }

    /// Create a cursor at `column`, which must be inside the line.
    pub fn at(config: ConsoleConfig, column: usize) -> Result<Self, ConsoleError> {
        let width = config.width();
        if column >= width {
            return Err(ConsoleError::ColumnOutOfRange { column, width });
        }
        Ok(Self { column, width })
    }

    /// The current column (0-indexed).
    pub fn column(&self) -> usize {
        self.column
    }

    /// The line width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Go back to column 0.
    pub fn carriage_return(&mut self) {
        self.column = 0;
    }

    /// Move one column right.
    ///
    /// Returns `true` if the line was full and the cursor wrapped back
    /// to column 0, in which case the caller must advance the line.
    pub fn advance(&mut self) -> bool {
        self.column += 1;
        if self.column >= self.width {
            self.column = 0;
            return true;
        }
        false
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: usize) -> ConsoleConfig {
        ConsoleConfig::new(width).unwrap()
    }

    #[test]
    fn starts_at_column_zero() {
        let cursor = Cursor::new(config(40));
        assert_eq!(cursor.column(), 0);
        assert_eq!(cursor.width(), 40);
    }

    #[test]
    fn at_rejects_columns_past_the_line() {
        assert_eq!(Cursor::at(config(40), 39).map(|c| c.column()), Ok(39));
        assert_eq!(
            Cursor::at(config(40), 40),
            Err(ConsoleError::ColumnOutOfRange {
                column: 40,
                width: 40
            })
        );
    }

    #[test]
    fn advance_wraps_at_the_last_column() {
        let mut cursor = Cursor::at(config(40), 38).unwrap();
        assert!(!cursor.advance());
        assert_eq!(cursor.column(), 39);
        assert!(cursor.advance());
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn single_column_wraps_every_time() {
        let mut cursor = Cursor::new(config(1));
        for _ in 0..5 {
            assert!(cursor.advance());
            assert_eq!(cursor.column(), 0);
        }
    }

    #[test]
    fn carriage_return_resets_the_column() {
        let mut cursor = Cursor::at(config(40), 5).unwrap();
        cursor.carriage_return();
        assert_eq!(cursor.column(), 0);
    }
}
