//! A sink for the unit tests, which records what the writer asked for.

use super::sink::CharSink;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::convert::Infallible;
use spin::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Char(u8),
    Newline,
}

/// Clones share the same event log, so a test can keep one handle
/// after boxing the other into the console.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn emitted(&self) -> Vec<u8> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::Char(c) => Some(*c),
                Event::Newline => None,
            })
            .collect()
    }

    pub fn newlines(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| **e == Event::Newline)
            .count()
    }
}

impl CharSink for Recorder {
    type Error = Infallible;

    fn put_char(&mut self, ch: u8) -> Result<(), Infallible> {
        self.events.lock().push(Event::Char(ch));
        Ok(())
    }

    fn newline(&mut self) -> Result<(), Infallible> {
        self.events.lock().push(Event::Newline);
        Ok(())
    }
}
