//! Failing neon tube
//!
//! Alternates between a sputtering phase, where the tube jumps around the
//! middle of its range for a few seconds, and a steady phase near full
//! output that occasionally relapses into sputtering.

use embassy_time::{Duration, Instant};
use tinyrand::Rand;

use super::{Effect, EffectInput};
use crate::math8::{ease_toward, random_in, random_u8, scale_to};
use crate::pacer::Pacer;

const FLICKER_MIN_INTERVAL_MS: u32 = 30;
const FLICKER_MAX_INTERVAL_MS: u32 = 80;
const FLICKER_MIN_DURATION_MS: u32 = 4_000;
const FLICKER_MAX_DURATION_MS: u32 = 7_000;
const FLICKER_LOW: u8 = 50;
const FLICKER_HIGH: u8 = 200;
const FLICKER_EASE: i16 = 5;

const STEADY_INTERVAL_MS: u64 = 20;
const STEADY_LOW: u8 = 200;
const STEADY_HIGH: u8 = 255;
const STEADY_EASE: i16 = 10;
/// Relapse chance per steady tick, in percent
const RELAPSE_PERCENT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeonPhase {
    /// Sputtering until the deadline; `None` until the first render
    Flicker { until: Option<Instant> },
    Steady,
}

#[derive(Debug, Clone)]
pub struct NeonFlickerEffect {
    pacer: Pacer,
    phase: NeonPhase,
    current: u8,
}

impl Default for NeonFlickerEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl NeonFlickerEffect {
    pub const fn new() -> Self {
        Self {
            pacer: Pacer::new(Duration::from_millis(FLICKER_MIN_INTERVAL_MS as u64)),
            phase: NeonPhase::Flicker { until: None },
            current: FLICKER_LOW,
        }
    }

    pub const fn phase(&self) -> NeonPhase {
        self.phase
    }

    /// Unscaled tube level
    pub const fn level(&self) -> u8 {
        self.current
    }

    /// Current pacing interval
    pub const fn interval(&self) -> Duration {
        self.pacer.interval()
    }

    fn enter_flicker(&mut self, now: Instant, rng: &mut impl Rand) {
        let duration = random_in(rng, FLICKER_MIN_DURATION_MS, FLICKER_MAX_DURATION_MS);
        self.phase = NeonPhase::Flicker {
            until: Some(now + Duration::from_millis(u64::from(duration))),
        };
        self.draw_flicker_interval(rng);
    }

    fn draw_flicker_interval(&mut self, rng: &mut impl Rand) {
        let interval = random_in(rng, FLICKER_MIN_INTERVAL_MS, FLICKER_MAX_INTERVAL_MS);
        self.pacer
            .set_interval(Duration::from_millis(u64::from(interval)));
    }

    fn flicker_step(&mut self, rng: &mut impl Rand) {
        let target = random_u8(rng, FLICKER_LOW, FLICKER_HIGH);
        self.current = ease_toward(self.current, target, FLICKER_EASE);
        self.draw_flicker_interval(rng);
    }

    fn enter_steady(&mut self) {
        self.phase = NeonPhase::Steady;
        self.current = STEADY_HIGH;
        self.pacer
            .set_interval(Duration::from_millis(STEADY_INTERVAL_MS));
    }
}

impl Effect for NeonFlickerEffect {
    fn render(&mut self, now: Instant, input: EffectInput, rng: &mut impl Rand) -> Option<u8> {
        if !self.pacer.ready(now) {
            return None;
        }

        match self.phase {
            NeonPhase::Flicker { until: None } => {
                self.enter_flicker(now, rng);
                self.flicker_step(rng);
            }
            NeonPhase::Flicker { until: Some(until) } => {
                if now >= until {
                    self.enter_steady();
                } else {
                    self.flicker_step(rng);
                }
            }
            NeonPhase::Steady => {
                let target = random_u8(rng, STEADY_LOW, STEADY_HIGH);
                self.current = ease_toward(self.current, target, STEADY_EASE);
                if random_in(rng, 0, 99) < RELAPSE_PERCENT {
                    self.enter_flicker(now, rng);
                }
            }
        }

        Some(scale_to(self.current, input.brightness))
    }
}
