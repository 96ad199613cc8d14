//! The global console, shared by everyone in the kernel.
//!
//! The cursor lives inside [`CONSOLE`] together with its sink, so a
//! character write (read the column, move it, maybe ask for a new
//! line) always happens under the lock.

extern crate alloc;
use super::conio::Conio;
use super::sink::CharSink;
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;
use alloc::boxed::Box;
use core::convert::Infallible;
use lazy_static::lazy_static;
use log::{debug, info};
use spin::Mutex;

/// The sink type the global console can hold.
pub type BoxedSink = Box<dyn CharSink<Error = Infallible> + Send>;

// Some statics which is global
lazy_static! {
    pub static ref CONSOLE: Mutex<Option<Conio<BoxedSink>>> = Mutex::new(None);
}

// Keep interrupts off while the lock is held, or a handler that prints
// would spin on a lock its own CPU holds.
#[cfg(all(target_arch = "x86_64", not(test)))]
fn locked<R>(f: impl FnOnce(&mut Option<Conio<BoxedSink>>) -> R) -> R {
    x86_64::instructions::interrupts::without_interrupts(|| f(&mut CONSOLE.lock()))
}

#[cfg(not(all(target_arch = "x86_64", not(test))))]
fn locked<R>(f: impl FnOnce(&mut Option<Conio<BoxedSink>>) -> R) -> R {
    f(&mut CONSOLE.lock())
}

/// Install `sink` as the console output, replacing the old one.
///
/// The cursor starts at column 0.
pub fn install<S>(sink: S, config: ConsoleConfig)
where
    S: CharSink<Error = Infallible> + Send + 'static,
{
    let boxed: BoxedSink = Box::new(sink);
    locked(|console| *console = Some(Conio::new(boxed, config)));
    info!("Console installed, {} characters per line", config.width());
}

/// Remove the console output. Returns whether there was one.
pub fn uninstall() -> bool {
    let removed = locked(|console| console.take()).is_some();
    if removed {
        debug!("Console uninstalled");
    }
    removed
}

/// Write one character to the console.
pub fn putc(ch: u8) -> Result<(), ConsoleError> {
    locked(|console| {
        let conio = console.as_mut().ok_or(ConsoleError::NotInstalled)?;
        conio.write_char(ch);
        Ok(())
    })
}

/// The column of the console cursor, if a console is installed.
pub fn column() -> Option<usize> {
    locked(|console| console.as_ref().map(|conio| conio.column()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::recorder::{Event, Recorder};

    // One test, since the console is a single global the test threads would share.
    #[test]
    fn global_console_lifecycle() {
        uninstall();
        assert_eq!(putc(b'a'), Err(ConsoleError::NotInstalled));
        assert_eq!(column(), None);

        let recorder = Recorder::default();
        install(recorder.clone(), ConsoleConfig::new(3).unwrap());
        assert_eq!(column(), Some(0));

        for &c in b"ab" {
            assert_eq!(putc(c), Ok(()));
        }
        assert_eq!(column(), Some(2));
        assert_eq!(putc(b'c'), Ok(()));
        assert_eq!(column(), Some(0));
        assert_eq!(putc(b'\n'), Ok(()));
        assert_eq!(
            recorder.events(),
            [
                Event::Char(b'a'),
                Event::Char(b'b'),
                Event::Char(b'c'),
                Event::Newline,
                Event::Newline,
            ]
        );

        // A new sink starts over at column 0.
        let second = Recorder::default();
        putc(b'x').unwrap();
        install(second.clone(), ConsoleConfig::default());
        assert_eq!(column(), Some(0));
        putc(b'y').unwrap();
        assert_eq!(second.emitted(), b"y");
        assert_eq!(recorder.emitted(), b"abcx");

        assert!(uninstall());
        assert!(!uninstall());
        assert_eq!(putc(b'z'), Err(ConsoleError::NotInstalled));
    }
}
