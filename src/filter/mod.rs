//! Trim channel smoothing
//!
//! Ambient-light sensors are noisy; these wrap any [`AnalogInput`] and
//! return a steadier reading.

use crate::AnalogInput;
use crate::math8::TRIM_MAX;

/// Median of `N` consecutive raw samples
///
/// Rejects single-sample spikes completely.
pub struct MedianFilter<A: AnalogInput, const N: usize> {
    input: A,
}

impl<A: AnalogInput, const N: usize> MedianFilter<A, N> {
    pub const fn new(input: A) -> Self {
        Self { input }
    }

    pub fn into_inner(self) -> A {
        self.input
    }
}

impl<A: AnalogInput, const N: usize> AnalogInput for MedianFilter<A, N> {
    fn read(&mut self) -> u16 {
        if N == 0 {
            return self.input.read().min(TRIM_MAX);
        }
        let mut samples = [0u16; N];
        for sample in &mut samples {
            *sample = self.input.read().min(TRIM_MAX);
        }
        samples.sort_unstable();
        samples[N / 2]
    }
}

/// Largest accepted smoothing shift
pub const MAX_SHIFT: u8 = 15;

/// Exponential smoothing with a power-of-two weight
///
/// Each reading moves the output `1 / 2^shift` of the way toward the new
/// sample, rounded away from the current value so the output always
/// settles on a constant input. The first reading is passed through.
pub struct SmoothedInput<A: AnalogInput> {
    input: A,
    shift: u8,
    value: Option<u16>,
}

impl<A: AnalogInput> SmoothedInput<A> {
    /// `shift` is clamped to [`MAX_SHIFT`]
    pub const fn new(input: A, shift: u8) -> Self {
        Self {
            input,
            shift: if shift > MAX_SHIFT { MAX_SHIFT } else { shift },
            value: None,
        }
    }

    /// Last smoothed value, if any reading was taken
    pub const fn value(&self) -> Option<u16> {
        self.value
    }
}

impl<A: AnalogInput> AnalogInput for SmoothedInput<A> {
    #[allow(clippy::cast_possible_truncation)]
    fn read(&mut self) -> u16 {
        let sample = self.input.read().min(TRIM_MAX);
        let next = match self.value {
            None => sample,
            Some(current) => {
                let distance = u32::from(sample.abs_diff(current));
                let step = ((distance + (1 << self.shift) - 1) >> self.shift) as u16;
                if sample >= current {
                    current + step
                } else {
                    current - step
                }
            }
        };
        self.value = Some(next);
        next
    }
}
