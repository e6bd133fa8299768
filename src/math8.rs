//! 8-bit duty arithmetic shared by the effects and the controller.
//!
//! Everything here is integer-only and saturating.

use tinyrand::Rand;

/// Largest raw value produced by the trim channel
pub const TRIM_MAX: u16 = 1023;

/// Scale a 0-255 value into `0..=ceiling`
///
/// `scale_to(255, c) == c` and `scale_to(0, c) == 0` for every ceiling.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_to(value: u8, ceiling: u8) -> u8 {
    ((value as u16 * ceiling as u16) / 255) as u8
}

/// Map a raw trim reading (0-1023) linearly onto 0-255
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn trim_to_u8(raw: u16) -> u8 {
    let raw = if raw > TRIM_MAX { TRIM_MAX } else { raw };
    ((raw as u32 * 255) / TRIM_MAX as u32) as u8
}

/// Map a raw trim reading onto `low..=high`
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn trim_to_range(raw: u16, low: u32, high: u32) -> u32 {
    let raw = if raw > TRIM_MAX { TRIM_MAX } else { raw };
    low + (raw as u32 * (high - low)) / TRIM_MAX as u32
}

/// Move `current` a `1/divisor` fraction of the way toward `target`
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn ease_toward(current: u8, target: u8, divisor: i16) -> u8 {
    let delta = (target as i16 - current as i16) / divisor;
    (current as i16 + delta) as u8
}

/// Draw a uniformly distributed value in `low..=high`
pub fn random_in(rng: &mut impl Rand, low: u32, high: u32) -> u32 {
    if high <= low {
        return low;
    }
    let span = high - low + 1;
    low + rng.next_u32() % span
}

/// Draw a uniformly distributed byte in `low..=high`
#[allow(clippy::cast_possible_truncation)]
pub fn random_u8(rng: &mut impl Rand, low: u8, high: u8) -> u8 {
    random_in(rng, u32::from(low), u32::from(high)) as u8
}
