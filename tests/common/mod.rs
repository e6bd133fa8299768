#![allow(dead_code)]

use std::cell::Cell;
use std::convert::Infallible;
use std::fmt;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_storage::{ReadStorage, Storage};
use pwm_dimmer::{AnalogInput, LogSink, OutputDriver};

/// Records every duty value written
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub writes: Vec<u8>,
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, duty: u8) {
        self.writes.push(duty);
    }
}

/// Trim channel that always reads the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedTrim(pub u16);

impl AnalogInput for FixedTrim {
    fn read(&mut self) -> u16 {
        self.0
    }
}

/// Analog input that replays a fixed sequence of samples
#[derive(Debug)]
pub struct SampleSequence {
    samples: Vec<u16>,
    next: usize,
}

impl SampleSequence {
    pub fn new(samples: &[u16]) -> Self {
        Self {
            samples: samples.to_vec(),
            next: 0,
        }
    }
}

impl AnalogInput for SampleSequence {
    fn read(&mut self) -> u16 {
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageFault;

/// Byte store backed by an array
#[derive(Debug)]
pub struct MemoryStorage {
    pub bytes: [u8; 16],
    pub writes: usize,
    pub failing: bool,
}

impl MemoryStorage {
    /// Erased flash reads as 0xFF
    pub fn erased() -> Self {
        Self {
            bytes: [0xFF; 16],
            writes: 0,
            failing: false,
        }
    }

    pub fn with_settings(mode: u8, brightness: u8) -> Self {
        let mut storage = Self::erased();
        storage.bytes[0] = mode;
        storage.bytes[1] = brightness;
        storage
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::erased()
        }
    }
}

impl ReadStorage for MemoryStorage {
    type Error = StorageFault;

    fn read(&mut self, offset: u32, bytes: &mut [u8]) -> Result<(), Self::Error> {
        if self.failing {
            return Err(StorageFault);
        }
        let start = offset as usize;
        bytes.copy_from_slice(&self.bytes[start..start + bytes.len()]);
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.bytes.len()
    }
}

impl Storage for MemoryStorage {
    fn write(&mut self, offset: u32, bytes: &[u8]) -> Result<(), Self::Error> {
        if self.failing {
            return Err(StorageFault);
        }
        let start = offset as usize;
        self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
        self.writes += 1;
        Ok(())
    }
}

/// Delay that returns immediately and adds up the requested time
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

/// Keeps every logged line
#[derive(Debug, Default)]
pub struct RecordingLog {
    pub lines: Vec<String>,
}

impl LogSink for RecordingLog {
    fn log(&mut self, args: fmt::Arguments<'_>) {
        self.lines.push(args.to_string());
    }
}

/// Push-button whose level is controlled by the test (pressed = low)
#[derive(Debug, Clone, Default)]
pub struct TestButton(pub Rc<Cell<bool>>);

impl TestButton {
    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl ErrorType for TestButton {
    type Error = Infallible;
}

impl InputPin for TestButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}
