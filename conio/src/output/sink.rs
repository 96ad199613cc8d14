/// The output device behind the console writer.
///
/// The writer calls [`put_char`](CharSink::put_char) to draw one
/// character at the current position, and [`newline`](CharSink::newline)
/// to move the output to the start of the next line (which may scroll,
/// that is up to the device).
pub trait CharSink {
    /// The error of the device. Use [`core::convert::Infallible`] if
    /// the device can't fail.
    type Error;

    /// Emit one character.
    fn put_char(&mut self, ch: u8) -> Result<(), Self::Error>;

    /// Move to the beginning of the next line.
    fn newline(&mut self) -> Result<(), Self::Error>;
}

impl<S: CharSink + ?Sized> CharSink for &mut S {
    type Error = S::Error;

    fn put_char(&mut self, ch: u8) -> Result<(), Self::Error> {
        (**self).put_char(ch)
    }

    fn newline(&mut self) -> Result<(), Self::Error> {
        (**self).newline()
    }
}

impl<S: CharSink + ?Sized> CharSink for alloc::boxed::Box<S> {
    type Error = S::Error;

    fn put_char(&mut self, ch: u8) -> Result<(), Self::Error> {
        (**self).put_char(ch)
    }

    fn newline(&mut self) -> Result<(), Self::Error> {
        (**self).newline()
    }
}
