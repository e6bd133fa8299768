//! Controller configuration

use embassy_time::Duration;
use heapless::Vec;

use crate::effect::{MODE_COUNT, Mode};

/// Ordered set of modes that double clicks cycle through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeCycle {
    modes: Vec<Mode, MODE_COUNT>,
}

impl ModeCycle {
    /// Build a cycle; `None` if `modes` is empty or repeats a mode
    pub fn new(modes: &[Mode]) -> Option<Self> {
        if modes.is_empty() {
            return None;
        }
        let mut cycle = Vec::new();
        for &mode in modes {
            if cycle.contains(&mode) {
                return None;
            }
            cycle.push(mode).ok()?;
        }
        Some(Self { modes: cycle })
    }

    /// Every known mode, in id order
    pub fn all() -> Self {
        Self {
            modes: Vec::from_slice(&Mode::ALL).unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Position of `mode` in the cycle
    pub fn position(&self, mode: Mode) -> Option<usize> {
        self.modes.iter().position(|&m| m == mode)
    }

    pub fn contains(&self, mode: Mode) -> bool {
        self.position(mode).is_some()
    }

    /// Mode following `mode`, wrapping after the last one
    ///
    /// A mode outside the cycle is treated as sitting before the first.
    pub fn next(&self, mode: Mode) -> Mode {
        let next = self.position(mode).map_or(0, |i| (i + 1) % self.modes.len());
        self.modes[next]
    }

    /// Mode used when stored settings are unusable
    pub fn fallback(&self) -> Mode {
        if self.contains(Mode::Static) {
            Mode::Static
        } else {
            self.modes[0]
        }
    }

    pub fn as_slice(&self) -> &[Mode] {
        &self.modes
    }
}

impl Default for ModeCycle {
    fn default() -> Self {
        Self::all()
    }
}

/// Mode change acknowledgement blink
#[derive(Debug, Clone, Copy)]
pub struct BlinkConfig {
    /// Duty value while a blink is lit
    pub level: u8,
    pub on: Duration,
    pub off: Duration,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            level: 16,
            on: Duration::from_millis(250),
            off: Duration::from_millis(250),
        }
    }
}

/// Configuration for the light controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub modes: ModeCycle,
    /// Brightness change per trim step
    pub brightness_step: u8,
    /// Minimum time between two trim steps
    pub adjust_interval: Duration,
    /// Cap trimming at the level set by the trim channel instead of 255
    pub trim_ceiling: bool,
    pub blink: BlinkConfig,
    /// Period of the scheduled mode
    pub schedule_period: Duration,
    /// Brightness used when the settings store cannot be read
    pub default_brightness: u8,
    /// Storage offset of the mode byte; brightness follows it
    pub settings_offset: u32,
    /// Effect RNG seed
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            modes: ModeCycle::all(),
            brightness_step: 8,
            adjust_interval: Duration::from_millis(30),
            trim_ceiling: true,
            blink: BlinkConfig::default(),
            schedule_period: Duration::from_secs(60),
            default_brightness: 255,
            settings_offset: 0,
            seed: 0x5EED,
        }
    }
}
