//! # Proka Conio - The console I/O library for ProkaOS
//! Copyright (C) RainSTR Studio 2025, All rights reserved.
//!
//! This provides the character writer of the text console, which
//! keeps track of the horizontal cursor and wraps lines when they
//! are full.
//!
//! The writer itself never touches the hardware: it drives a
//! [`CharSink`], which knows how to emit one character and how to
//! move to the next line. The serial port is the sink shipped here.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod libs;
pub mod output;

pub use config::{ConsoleConfig, H_CHARS};
pub use error::ConsoleError;
pub use output::conio::{try_write_char, write_char, Conio};
pub use output::cursor::Cursor;
pub use output::sink::CharSink;
