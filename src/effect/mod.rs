//! Effect system with compile-time known effect variants
//!
//! Every visual mode owns its own animation state, stored in an enum so no
//! heap is needed. Each effect rate-limits itself: it is called on every
//! loop pass and only produces a duty value when its interval is due.

mod fire_flicker;
mod neon_flicker;
mod random_fade;
mod scheduled;
mod static_level;

use embassy_time::Instant;
use tinyrand::Rand;

pub use fire_flicker::{FIRE_FLOOR, FireFlickerEffect};
pub use neon_flicker::{NeonFlickerEffect, NeonPhase};
pub use random_fade::RandomFadeEffect;
pub use scheduled::{ScheduleTimings, ScheduledEffect};
pub use static_level::StaticEffect;

use crate::config::ControllerConfig;

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_SCHEDULED: &str = "scheduled";
const MODE_NAME_RANDOM_FADE: &str = "random_fade";
const MODE_NAME_NEON_FLICKER: &str = "neon_flicker";
const MODE_NAME_FIRE_FLICKER: &str = "fire_flicker";

const MODE_ID_STATIC: u8 = 0;
const MODE_ID_SCHEDULED: u8 = 1;
const MODE_ID_RANDOM_FADE: u8 = 2;
const MODE_ID_NEON_FLICKER: u8 = 3;
const MODE_ID_FIRE_FLICKER: u8 = 4;

/// Number of known modes
pub const MODE_COUNT: usize = 5;

/// Per-pass inputs an effect may read
#[derive(Debug, Clone, Copy)]
pub struct EffectInput {
    /// User brightness ceiling (0-255)
    pub brightness: u8,
    /// Raw trim reading (0-1023), only sampled for modes that need it
    pub trim: u16,
}

pub trait Effect {
    /// Advance the animation; returns a duty value when one is due
    fn render(&mut self, now: Instant, input: EffectInput, rng: &mut impl Rand) -> Option<u8>;
}

/// Lighting mode, stored as its raw id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Static = MODE_ID_STATIC,
    Scheduled = MODE_ID_SCHEDULED,
    RandomFade = MODE_ID_RANDOM_FADE,
    NeonFlicker = MODE_ID_NEON_FLICKER,
    FireFlicker = MODE_ID_FIRE_FLICKER,
}

impl Mode {
    /// All modes in id order
    pub const ALL: [Mode; MODE_COUNT] = [
        Self::Static,
        Self::Scheduled,
        Self::RandomFade,
        Self::NeonFlicker,
        Self::FireFlicker,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC => Self::Static,
            MODE_ID_SCHEDULED => Self::Scheduled,
            MODE_ID_RANDOM_FADE => Self::RandomFade,
            MODE_ID_NEON_FLICKER => Self::NeonFlicker,
            MODE_ID_FIRE_FLICKER => Self::FireFlicker,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => MODE_NAME_STATIC,
            Self::Scheduled => MODE_NAME_SCHEDULED,
            Self::RandomFade => MODE_NAME_RANDOM_FADE,
            Self::NeonFlicker => MODE_NAME_NEON_FLICKER,
            Self::FireFlicker => MODE_NAME_FIRE_FLICKER,
        }
    }

    /// Whether the effect reads the trim channel on every pass
    pub const fn uses_trim(self) -> bool {
        matches!(self, Self::Scheduled)
    }

    fn to_slot(self, config: &ControllerConfig) -> EffectSlot {
        match self {
            Self::Static => EffectSlot::Static(StaticEffect),
            Self::Scheduled => {
                EffectSlot::Scheduled(ScheduledEffect::new(config.schedule_period))
            }
            Self::RandomFade => EffectSlot::RandomFade(RandomFadeEffect::new()),
            Self::NeonFlicker => EffectSlot::NeonFlicker(NeonFlickerEffect::new()),
            Self::FireFlicker => EffectSlot::FireFlicker(FireFlickerEffect::new()),
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    Static(StaticEffect),
    Scheduled(ScheduledEffect),
    RandomFade(RandomFadeEffect),
    NeonFlicker(NeonFlickerEffect),
    FireFlicker(FireFlickerEffect),
}

impl EffectSlot {
    pub fn render(&mut self, now: Instant, input: EffectInput, rng: &mut impl Rand) -> Option<u8> {
        match self {
            Self::Static(effect) => effect.render(now, input, rng),
            Self::Scheduled(effect) => effect.render(now, input, rng),
            Self::RandomFade(effect) => effect.render(now, input, rng),
            Self::NeonFlicker(effect) => effect.render(now, input, rng),
            Self::FireFlicker(effect) => effect.render(now, input, rng),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Static(_) => Mode::Static,
            Self::Scheduled(_) => Mode::Scheduled,
            Self::RandomFade(_) => Mode::RandomFade,
            Self::NeonFlicker(_) => Mode::NeonFlicker,
            Self::FireFlicker(_) => Mode::FireFlicker,
        }
    }
}

/// One lazily created slot per mode
///
/// A slot is built the first time its mode renders and is kept when the
/// mode is switched away, so coming back resumes the old animation.
#[derive(Debug, Clone, Default)]
pub struct EffectBank {
    slots: [Option<EffectSlot>; MODE_COUNT],
}

impl EffectBank {
    pub const fn new() -> Self {
        Self {
            slots: [None, None, None, None, None],
        }
    }

    /// Render `mode`, creating its state on first use
    pub fn render(
        &mut self,
        mode: Mode,
        config: &ControllerConfig,
        now: Instant,
        input: EffectInput,
        rng: &mut impl Rand,
    ) -> Option<u8> {
        self.slots[usize::from(mode.as_raw())]
            .get_or_insert_with(|| mode.to_slot(config))
            .render(now, input, rng)
    }

    /// Existing state for `mode`, if it has rendered before
    pub fn slot(&self, mode: Mode) -> Option<&EffectSlot> {
        self.slots[usize::from(mode.as_raw())].as_ref()
    }
}
