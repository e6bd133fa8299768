//! Breathing fade with a randomized pace
//!
//! A counter ramps 0 -> 255 -> 0 one step per interval. Every time it hits
//! a bound the ramp reverses and the interval is redrawn, so consecutive
//! breaths run at different speeds.

use embassy_time::{Duration, Instant};
use tinyrand::Rand;

use super::{Effect, EffectInput};
use crate::math8::{random_in, scale_to};
use crate::pacer::Pacer;

const INITIAL_INTERVAL_MS: u64 = 10;
const MIN_INTERVAL_MS: u32 = 5;
const MAX_INTERVAL_MS: u32 = 20;

#[derive(Debug, Clone)]
pub struct RandomFadeEffect {
    pacer: Pacer,
    level: u8,
    rising: bool,
}

impl Default for RandomFadeEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomFadeEffect {
    pub const fn new() -> Self {
        Self {
            pacer: Pacer::new(Duration::from_millis(INITIAL_INTERVAL_MS)),
            level: 0,
            rising: true,
        }
    }

    /// Current ramp position before brightness scaling
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Current step interval
    pub const fn interval(&self) -> Duration {
        self.pacer.interval()
    }
}

impl Effect for RandomFadeEffect {
    fn render(&mut self, now: Instant, input: EffectInput, rng: &mut impl Rand) -> Option<u8> {
        if !self.pacer.ready(now) {
            return None;
        }

        if self.rising {
            self.level = self.level.saturating_add(1);
        } else {
            self.level = self.level.saturating_sub(1);
        }

        if self.level == u8::MAX || self.level == 0 {
            self.rising = !self.rising;
            let interval = random_in(rng, MIN_INTERVAL_MS, MAX_INTERVAL_MS);
            self.pacer
                .set_interval(Duration::from_millis(u64::from(interval)));
        }

        Some(scale_to(self.level, input.brightness))
    }
}
