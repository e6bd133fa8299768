#![no_std]

pub mod channel;
pub mod config;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod gesture;
pub mod log;
pub mod math8;
pub mod pacer;
pub mod settings;

pub use config::{BlinkConfig, ControllerConfig, ModeCycle};
pub use controller::{BrightnessDirection, ControllerState, LightController};
pub use effect::{EffectBank, EffectInput, EffectSlot, Mode};
pub use filter::{MedianFilter, SmoothedInput};
pub use gesture::{
    ButtonGestures, GestureChannel, GestureEvent, GestureReceiver, GestureSender, GestureSource,
    GestureTimings,
};
pub use log::{LogSink, NoLog};
pub use settings::{PersistedSettings, SettingsError, SettingsStore};

pub use embassy_time::{Duration, Instant};

use embedded_hal::pwm::SetDutyCycle;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Set the PWM duty (0 = off, 255 = full on)
    fn write(&mut self, duty: u8);
}

/// Analog channel sampled for the trim knob or ambient-light sensor
pub trait AnalogInput {
    /// Raw reading in `0..=1023`
    fn read(&mut self) -> u16;
}

/// Monotonic millisecond clock
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// [`OutputDriver`] for any embedded-hal PWM channel
pub struct PwmOutput<P: SetDutyCycle> {
    pwm: P,
}

impl<P: SetDutyCycle> PwmOutput<P> {
    pub const fn new(pwm: P) -> Self {
        Self { pwm }
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> OutputDriver for PwmOutput<P> {
    fn write(&mut self, duty: u8) {
        // Fire-and-forget: a rejected duty is simply not shown
        let _ = self.pwm.set_duty_cycle_fraction(u16::from(duty), 255);
    }
}
