//! Candle-like flicker
//!
//! Glides in ten linear steps toward a random level between a tenth of the
//! brightness and the full brightness, then picks the next level. Output
//! never drops below a visible floor.

use embassy_time::{Duration, Instant};
use tinyrand::Rand;

use super::{Effect, EffectInput};
use crate::math8::{random_in, random_u8};
use crate::pacer::Pacer;

const TRANSITION_STEPS: u8 = 10;
const MIN_INTERVAL_MS: u32 = 30;
const MAX_INTERVAL_MS: u32 = 50;

/// Lowest duty value ever emitted
pub const FIRE_FLOOR: u8 = 32;

#[derive(Debug, Clone)]
pub struct FireFlickerEffect {
    pacer: Pacer,
    /// Level the current glide started from
    from: u8,
    current: u8,
    target: u8,
    steps_left: u8,
}

impl Default for FireFlickerEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl FireFlickerEffect {
    pub const fn new() -> Self {
        Self {
            pacer: Pacer::new(Duration::from_millis(MIN_INTERVAL_MS as u64)),
            from: 0,
            current: 0,
            target: 0,
            steps_left: 0,
        }
    }

    pub const fn target(&self) -> u8 {
        self.target
    }

    pub const fn steps_left(&self) -> u8 {
        self.steps_left
    }

    fn start_glide(&mut self, brightness: u8, rng: &mut impl Rand) {
        self.from = self.current;
        self.target = random_u8(rng, brightness / 10, brightness);
        self.steps_left = TRANSITION_STEPS;
    }
}

impl Effect for FireFlickerEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, now: Instant, input: EffectInput, rng: &mut impl Rand) -> Option<u8> {
        if !self.pacer.ready(now) {
            return None;
        }

        if self.steps_left == 0 {
            self.start_glide(input.brightness, rng);
        }

        self.steps_left -= 1;
        let done = i16::from(TRANSITION_STEPS - self.steps_left);
        let span = i16::from(self.target) - i16::from(self.from);
        self.current = (i16::from(self.from) + span * done / i16::from(TRANSITION_STEPS)) as u8;

        let interval = random_in(rng, MIN_INTERVAL_MS, MAX_INTERVAL_MS);
        self.pacer
            .set_interval(Duration::from_millis(u64::from(interval)));

        Some(self.current.max(FIRE_FLOOR))
    }
}
