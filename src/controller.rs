use embassy_time::Instant;
use embedded_hal::delay::DelayNs;
use embedded_storage::Storage;
use tinyrand::{Seeded, StdRand};

use crate::config::ControllerConfig;
use crate::effect::{EffectBank, EffectInput, Mode};
use crate::gesture::{GestureEvent, GestureSource};
use crate::log::LogSink;
use crate::math8::trim_to_u8;
use crate::pacer::Pacer;
use crate::settings::{PersistedSettings, SettingsStore};
use crate::{AnalogInput, Clock, OutputDriver};

/// Which way long-press ticks move the brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessDirection {
    Increasing,
    Decreasing,
}

impl BrightnessDirection {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }
}

/// User-facing controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub mode: Mode,
    /// Maximum LED intensity chosen by the user
    pub brightness: u8,
    pub direction: BrightnessDirection,
}

impl ControllerState {
    pub const fn new(mode: Mode, brightness: u8) -> Self {
        Self {
            mode,
            brightness,
            direction: BrightnessDirection::Increasing,
        }
    }
}

/// Light Controller - owns mode and brightness and drives the LED
///
/// Call [`LightController::start`] once, then [`LightController::tick`] on
/// every loop pass. Nothing on the tick path blocks except the
/// acknowledgement blink after a mode change.
pub struct LightController<O, A, S, D, L>
where
    O: OutputDriver,
    A: AnalogInput,
    S: Storage,
    D: DelayNs,
    L: LogSink,
{
    // External dependencies and configuration
    config: ControllerConfig,
    output: O,
    trim: A,
    settings: SettingsStore<S>,
    delay: D,
    log: L,

    // Internal state
    state: ControllerState,
    effects: EffectBank,
    adjust: Pacer,
    rng: StdRand,
}

impl<O, A, S, D, L> LightController<O, A, S, D, L>
where
    O: OutputDriver,
    A: AnalogInput,
    S: Storage,
    D: DelayNs,
    L: LogSink,
{
    pub fn new(config: ControllerConfig, output: O, trim: A, storage: S, delay: D, log: L) -> Self {
        Self {
            state: ControllerState::new(config.modes.fallback(), config.default_brightness),
            settings: SettingsStore::new(storage, config.settings_offset),
            adjust: Pacer::new(config.adjust_interval),
            rng: StdRand::seed(config.seed),
            effects: EffectBank::new(),
            config,
            output,
            trim,
            delay,
            log,
        }
    }

    /// Restore persisted settings and blink the restored mode
    pub fn start(&mut self) {
        match self.settings.load() {
            Ok(stored) => {
                let mode = stored.mode_in(&self.config.modes);
                if mode.as_raw() != stored.mode {
                    self.log.log(format_args!(
                        "stored mode {} is not available, using {}",
                        stored.mode,
                        mode.as_str()
                    ));
                }
                self.state.mode = mode;
                self.state.brightness = stored.brightness;
            }
            Err(err) => {
                self.log
                    .log(format_args!("failed to load settings: {:?}", err));
            }
        }

        self.log.log(format_args!(
            "started: mode={} brightness={}",
            self.state.mode.as_str(),
            self.state.brightness
        ));
        self.acknowledge(self.state.mode);
    }

    /// Poll one gesture, apply it, then render
    pub fn tick<G: GestureSource>(&mut self, gestures: &mut G, now: Instant) {
        if let Some(event) = gestures.poll(now) {
            self.handle(event, now);
        }
        self.render(now);
    }

    /// [`Self::tick`] at the clock's current time
    pub fn poll<G: GestureSource, C: Clock>(&mut self, gestures: &mut G, clock: &C) {
        self.tick(gestures, clock.now());
    }

    /// Apply a gesture to the mode and brightness state
    pub fn handle(&mut self, event: GestureEvent, now: Instant) {
        match event {
            GestureEvent::Click => {}
            GestureEvent::DoubleClick => self.next_mode(),
            GestureEvent::LongPressStart => {
                self.state.direction = self.state.direction.flipped();
            }
            GestureEvent::LongPressTick => self.adjust_brightness(now),
            GestureEvent::LongPressEnd => {
                self.adjust_brightness(now);
                self.persist();
                self.log.log(format_args!(
                    "brightness set to {}",
                    self.state.brightness
                ));
            }
        }
    }

    /// Render the active effect, writing at most one duty value
    pub fn render(&mut self, now: Instant) {
        let mode = self.state.mode;
        let input = EffectInput {
            brightness: self.state.brightness,
            trim: if mode.uses_trim() { self.trim.read() } else { 0 },
        };

        if let Some(duty) = self
            .effects
            .render(mode, &self.config, now, input, &mut self.rng)
        {
            self.output.write(duty);
        }
    }

    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    pub const fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub const fn effects(&self) -> &EffectBank {
        &self.effects
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub const fn log(&self) -> &L {
        &self.log
    }

    pub const fn storage(&self) -> &S {
        self.settings.storage()
    }

    fn next_mode(&mut self) {
        self.state.mode = self.config.modes.next(self.state.mode);
        self.persist();
        self.log
            .log(format_args!("mode changed to {}", self.state.mode.as_str()));
        self.acknowledge(self.state.mode);
    }

    /// Move brightness one step, at most once per adjust interval
    fn adjust_brightness(&mut self, now: Instant) {
        if !self.adjust.ready(now) {
            return;
        }

        let ceiling = if self.config.trim_ceiling {
            trim_to_u8(self.trim.read())
        } else {
            u8::MAX
        };
        let step = self.config.brightness_step;
        let brightness = match self.state.direction {
            BrightnessDirection::Increasing => self.state.brightness.saturating_add(step),
            BrightnessDirection::Decreasing => self.state.brightness.saturating_sub(step),
        };
        self.state.brightness = brightness.min(ceiling);
    }

    fn persist(&mut self) {
        let settings = PersistedSettings::new(self.state.mode, self.state.brightness);
        if let Err(err) = self.settings.save(&settings) {
            self.log
                .log(format_args!("failed to save settings: {:?}", err));
        }
    }

    /// Blink `position + 1` times so the mode can be counted
    ///
    /// This is the only blocking routine; it runs at startup and after a
    /// mode change.
    #[allow(clippy::cast_possible_truncation)]
    fn acknowledge(&mut self, mode: Mode) {
        let count = self.config.modes.position(mode).map_or(1, |i| i + 1);
        let blink = self.config.blink;
        for _ in 0..count {
            self.output.write(blink.level);
            self.delay.delay_ms(blink.on.as_millis() as u32);
            self.output.write(0);
            self.delay.delay_ms(blink.off.as_millis() as u32);
        }
    }
}
