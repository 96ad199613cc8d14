// src/libs/logger.rs
use crate::serial_println;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// The kernel logger, which writes every record to the serial port.
///
/// It never goes through the console, so logging from inside a
/// console sink can't deadlock on the console lock.
pub struct KernelLogger;

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the kernel logger, showing records up to `level`.
///
/// Fails if a logger was installed before.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: KernelLogger = KernelLogger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
