pub mod conio;
pub mod console;
pub mod cursor;
pub mod serial;
pub mod sink;

#[cfg(test)]
pub(crate) mod recorder;
