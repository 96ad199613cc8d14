use core::fmt;

/// The errors of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// A line can't be 0 characters wide.
    ZeroWidth,
    /// The cursor was placed past the end of the line.
    ColumnOutOfRange { column: usize, width: usize },
    /// No sink has been installed into the global console yet.
    NotInstalled,
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::ZeroWidth => write!(f, "console width must be at least 1"),
            ConsoleError::ColumnOutOfRange { column, width } => {
                write!(f, "column {} is outside a line of width {}", column, width)
            }
            ConsoleError::NotInstalled => write!(f, "no console sink installed"),
        }
    }
}
