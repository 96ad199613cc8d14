//! Proka Conio - The console I/O library for ProkaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! This file contains the character writer. It emits one character
//! through a [`CharSink`], and keeps the [`Cursor`] inside the line:
//! a newline or a full line puts it back to column 0 and asks the
//! sink for the next line.

use super::cursor::Cursor;
use super::sink::CharSink;
use crate::config::ConsoleConfig;
use core::convert::Infallible;

/// Write one character to a sink that can't fail.
pub fn write_char<S>(cursor: &mut Cursor, sink: &mut S, ch: u8)
where
    S: CharSink<Error = Infallible> + ?Sized,
{
    match try_write_char(cursor, sink, ch) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Write one character, passing the sink's errors up.
///
/// The cursor is moved before the sink is asked for the next line, so
/// it is back at column 0 even if that request fails. If emitting the
/// character fails, nothing is changed.
pub fn try_write_char<S>(cursor: &mut Cursor, sink: &mut S, ch: u8) -> Result<(), S::Error>
where
    S: CharSink + ?Sized,
{
    // Newline: back to the start and switch to next line.
    if ch == b'\n' {
        cursor.carriage_return();
        return sink.newline();
    }

    sink.put_char(ch)?;

    // End of line, just start at next line
    if cursor.advance() {
        sink.newline()?;
    }
    Ok(())
}

/// A console: the cursor together with the device it writes to.
pub struct Conio<S> {
    cursor: Cursor,
    sink: S,
}

impl<S: CharSink> Conio<S> {
    pub fn new(sink: S, config: ConsoleConfig) -> Self {
        Self {
            cursor: Cursor::new(config),
            sink,
        }
    }

    /// Write one character, see [`try_write_char`].
    pub fn try_write_char(&mut self, ch: u8) -> Result<(), S::Error> {
        try_write_char(&mut self.cursor, &mut self.sink, ch)
    }

    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    pub fn width(&self) -> usize {
        self.cursor.width()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: CharSink<Error = Infallible>> Conio<S> {
    /// Write one character, see [`write_char`].
    pub fn write_char(&mut self, ch: u8) {
        write_char(&mut self.cursor, &mut self.sink, ch)
    }
}
