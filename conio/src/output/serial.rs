//! The serial port output: the `serial_print!` macros used by the
//! logger, and [`SerialSink`] which lets the console write to COM1.

/// The I/O port base of COM1.
pub const COM1_PORT: u16 = 0x3F8;

#[cfg(target_arch = "x86_64")]
pub use self::uart::SerialSink;

#[cfg(target_arch = "x86_64")]
mod uart {
    use super::COM1_PORT;
    use crate::output::sink::CharSink;
    use core::convert::Infallible;
    use uart_16550::SerialPort;

    /// A console sink on a UART 16550 serial port.
    pub struct SerialSink {
        serial_port: SerialPort,
    }

    impl SerialSink {
        /// Open and initialize the port at `base`.
        ///
        /// # Safety
        /// `base` must be the I/O port base of a 16550 UART, and
        /// nothing else may drive that port.
        pub unsafe fn new(base: u16) -> Self {
            let mut serial_port = unsafe { SerialPort::new(base) };
            serial_port.init();
            Self { serial_port }
        }

        /// Open COM1.
        ///
        /// # Safety
        /// Same as [`SerialSink::new`]. The `serial_print!` macros use
        /// their own handle to COM1, so don't interleave the two.
        pub unsafe fn com1() -> Self {
            unsafe { Self::new(COM1_PORT) }
        }
    }

    impl CharSink for SerialSink {
        type Error = Infallible;

        fn put_char(&mut self, ch: u8) -> Result<(), Infallible> {
            self.serial_port.send(ch);
            Ok(())
        }

        // Terminals on the other end want both.
        fn newline(&mut self) -> Result<(), Infallible> {
            self.serial_port.send(b'\r');
            self.serial_port.send(b'\n');
            Ok(())
        }
    }
}

#[cfg(all(target_arch = "x86_64", not(test)))]
lazy_static::lazy_static! {
    pub static ref SERIAL1: spin::Mutex<uart_16550::SerialPort> = {
        let mut serial_port = unsafe { uart_16550::SerialPort::new(COM1_PORT) };
        serial_port.init();
        spin::Mutex::new(serial_port)
    };
}

/* The function behind the macros, per target */
#[doc(hidden)]
#[cfg(all(target_arch = "x86_64", not(test)))]
pub fn _print(args: ::core::fmt::Arguments) {
    use core::fmt::Write;

    x86_64::instructions::interrupts::without_interrupts(|| {
        // A serial port can't refuse a byte, so there is no error to report.
        let _ = SERIAL1.lock().write_fmt(args);
    });
}

// Unit tests run on the host, so send it to stdout instead of port I/O.
#[doc(hidden)]
#[cfg(test)]
pub fn _print(args: ::core::fmt::Arguments) {
    std::print!("{}", args);
}

#[doc(hidden)]
#[cfg(all(not(target_arch = "x86_64"), not(test)))]
pub fn _print(_args: ::core::fmt::Arguments) {}

/// Prints to the host through the serial interface.
#[macro_export]
macro_rules! serial_print {
    ($($arg:tt)*) => {
        $crate::output::serial::_print(format_args!($($arg)*));
    };
}

/// Prints to the host through the serial interface, appending a newline.
#[macro_export]
macro_rules! serial_println {
    () => ($crate::serial_print!("\n"));
    ($fmt:expr) => ($crate::serial_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::serial_print!(
        concat!($fmt, "\n"), $($arg)*));
}
