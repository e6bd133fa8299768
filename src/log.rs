//! Text log sink
//!
//! Logging is best-effort: a sink may drop lines, and nothing waits on it.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Append-only line writer
pub trait LogSink {
    /// Write one line
    fn log(&mut self, args: fmt::Arguments<'_>);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLog;

impl LogSink for NoLog {
    fn log(&mut self, _args: fmt::Arguments<'_>) {}
}

/// Prints lines over the ESP32 ROM console
#[cfg(feature = "esp32-log")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EspPrintlnLog;

#[cfg(feature = "esp32-log")]
impl LogSink for EspPrintlnLog {
    fn log(&mut self, args: fmt::Arguments<'_>) {
        println!("{}", args);
    }
}

impl<L: LogSink + ?Sized> LogSink for &mut L {
    fn log(&mut self, args: fmt::Arguments<'_>) {
        (**self).log(args);
    }
}
