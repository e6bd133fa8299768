//! Duty-cycled on/off schedule
//!
//! The trim channel selects what share of each period the light is on,
//! between 5% and 100%. The phase lengths are recomputed on every pass, so
//! turning the knob takes effect within the current phase.

use embassy_time::{Duration, Instant};
use tinyrand::Rand;

use super::{Effect, EffectInput};
use crate::math8::trim_to_range;

const MIN_DUTY_PERCENT: u32 = 5;
const MAX_DUTY_PERCENT: u32 = 100;

/// On and off phase lengths for one schedule period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTimings {
    pub on: Duration,
    pub off: Duration,
}

impl ScheduleTimings {
    /// Split `period` according to a raw trim reading
    pub fn from_trim(period: Duration, trim: u16) -> Self {
        let percent = u64::from(trim_to_range(trim, MIN_DUTY_PERCENT, MAX_DUTY_PERCENT));
        let period_ms = period.as_millis();
        let on_ms = period_ms * percent / 100;
        Self {
            on: Duration::from_millis(on_ms),
            off: Duration::from_millis(period_ms - on_ms),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduledEffect {
    period: Duration,
    is_on: bool,
    /// Start of the current phase, set on the first render
    phase_start: Option<Instant>,
}

impl ScheduledEffect {
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            is_on: true,
            phase_start: None,
        }
    }

    pub const fn is_on(&self) -> bool {
        self.is_on
    }
}

impl Effect for ScheduledEffect {
    fn render(&mut self, now: Instant, input: EffectInput, _rng: &mut impl Rand) -> Option<u8> {
        let start = *self.phase_start.get_or_insert(now);
        let timings = ScheduleTimings::from_trim(self.period, input.trim);
        let (phase, next) = if self.is_on {
            (timings.on, timings.off)
        } else {
            (timings.off, timings.on)
        };

        if now.saturating_duration_since(start) >= phase {
            // Zero-length phases are skipped
            if next.as_ticks() > 0 {
                self.is_on = !self.is_on;
            }
            self.phase_start = Some(now);
        }

        Some(if self.is_on { input.brightness } else { 0 })
    }
}
