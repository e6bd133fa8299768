//! Button gestures
//!
//! The controller only depends on [`GestureSource`]. Two sources are
//! provided: [`ButtonGestures`], which decodes a raw push-button, and
//! [`GestureReceiver`], which drains events queued by another context.
//!
//! | Gesture         | Condition                                   | Event            |
//! |-----------------|---------------------------------------------|------------------|
//! | Click           | Released, no second press within the window | `Click`          |
//! | Double click    | Second release within the window            | `DoubleClick`    |
//! | Long press      | Held past the threshold                     | `LongPressStart` |
//! | Long press tick | Still held, every tick interval             | `LongPressTick`  |
//! | Release         | Released after a long press                 | `LongPressEnd`   |

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::channel::{Channel, Receiver, Sender};

/// Decoded button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// Single short click. The controller ignores it.
    Click,
    DoubleClick,
    LongPressStart,
    /// Repeats while the button stays held past the threshold
    LongPressTick,
    LongPressEnd,
}

/// Anything that yields at most one gesture per loop pass
pub trait GestureSource {
    fn poll(&mut self, now: Instant) -> Option<GestureEvent>;
}

/// Queue capacity for [`GestureChannel`]
pub const GESTURE_QUEUE_SIZE: usize = 8;

pub type GestureChannel = Channel<GestureEvent, GESTURE_QUEUE_SIZE>;
pub type GestureSender<'a> = Sender<'a, GestureEvent, GESTURE_QUEUE_SIZE>;
pub type GestureReceiver<'a> = Receiver<'a, GestureEvent, GESTURE_QUEUE_SIZE>;

impl GestureSource for GestureReceiver<'_> {
    fn poll(&mut self, _now: Instant) -> Option<GestureEvent> {
        self.try_receive()
    }
}

/// Gesture timing thresholds
#[derive(Debug, Clone, Copy)]
pub struct GestureTimings {
    /// Presses shorter than this are contact bounce
    pub debounce: Duration,
    /// Maximum gap between the first release and the second press
    pub double_click_window: Duration,
    /// Hold time before a press becomes a long press
    pub long_press: Duration,
    /// Repeat interval of `LongPressTick`
    pub tick_interval: Duration,
}

impl Default for GestureTimings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(50),
            double_click_window: Duration::from_millis(400),
            long_press: Duration::from_millis(800),
            tick_interval: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Idle,
    Pressed { since: Instant, clicks: u8 },
    Released { since: Instant, clicks: u8 },
    Held { last_tick: Instant },
}

/// Debounced push-button decoder
pub struct ButtonGestures<P: InputPin> {
    pin: P,
    active_low: bool,
    timings: GestureTimings,
    state: ButtonState,
}

impl<P: InputPin> ButtonGestures<P> {
    /// Decoder for a button wired to ground with a pull-up
    pub fn new(pin: P, timings: GestureTimings) -> Self {
        Self {
            pin,
            active_low: true,
            timings,
            state: ButtonState::Idle,
        }
    }

    /// Treat a high level as pressed
    #[must_use]
    pub fn with_active_high(mut self) -> Self {
        self.active_low = false;
        self
    }

    fn is_pressed(&mut self) -> bool {
        let level = if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        };
        level.unwrap_or(false)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> GestureSource for ButtonGestures<P> {
    fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        let pressed = self.is_pressed();
        let t = self.timings;

        match self.state {
            ButtonState::Idle => {
                if pressed {
                    self.state = ButtonState::Pressed {
                        since: now,
                        clicks: 0,
                    };
                }
                None
            }
            ButtonState::Pressed { since, clicks } => {
                let held = now.saturating_duration_since(since);
                if pressed {
                    if held >= t.long_press {
                        self.state = ButtonState::Held { last_tick: now };
                        return Some(GestureEvent::LongPressStart);
                    }
                    return None;
                }
                if held < t.debounce {
                    self.state = if clicks == 0 {
                        ButtonState::Idle
                    } else {
                        ButtonState::Released { since: now, clicks }
                    };
                    return None;
                }
                if clicks >= 1 {
                    self.state = ButtonState::Idle;
                    return Some(GestureEvent::DoubleClick);
                }
                self.state = ButtonState::Released {
                    since: now,
                    clicks: 1,
                };
                None
            }
            ButtonState::Released { since, clicks } => {
                if pressed {
                    self.state = ButtonState::Pressed { since: now, clicks };
                    return None;
                }
                if now.saturating_duration_since(since) >= t.double_click_window {
                    self.state = ButtonState::Idle;
                    return Some(GestureEvent::Click);
                }
                None
            }
            ButtonState::Held { last_tick } => {
                if !pressed {
                    self.state = ButtonState::Idle;
                    return Some(GestureEvent::LongPressEnd);
                }
                if now.saturating_duration_since(last_tick) >= t.tick_interval {
                    self.state = ButtonState::Held { last_tick: now };
                    return Some(GestureEvent::LongPressTick);
                }
                None
            }
        }
    }
}
