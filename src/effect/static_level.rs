//! Steady output at the user brightness

use embassy_time::Instant;
use tinyrand::Rand;

use super::{Effect, EffectInput};

/// Emits the brightness ceiling unchanged on every pass
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEffect;

impl Effect for StaticEffect {
    fn render(&mut self, _now: Instant, input: EffectInput, _rng: &mut impl Rand) -> Option<u8> {
        Some(input.brightness)
    }
}
